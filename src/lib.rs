pub mod cli;
pub mod config;
pub mod error;
pub mod ocr;
pub mod picker;
pub mod pipeline;
pub mod workbook;
