//! OCR Sheet Common Library
//!
//! UIや外部プロセスに依存しない純粋なロジック:
//! 行の正規化、シート名の採番、ワークブックのメモリ表現とxlsx書き出し

pub mod error;
pub mod export;
pub mod lines;
pub mod sheet_name;
pub mod types;

pub use error::{Error, Result};
pub use lines::normalize_lines;
pub use sheet_name::{next_sheet_name, sheet_base_name};
pub use types::{
    CellValue, MergedRange, SheetData, SheetVisibility, WorkbookData, FIRST_DATA_COLUMN, HEADER_ROW,
    MAX_COLUMNS,
};

#[cfg(feature = "excel")]
pub use export::excel_core::generate_workbook_buffer;
