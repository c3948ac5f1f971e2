use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrSheetError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("OCR実行エラー: {0}")]
    OcrEngine(String),

    #[error("Excel読み込みエラー: {0}")]
    WorkbookLoad(String),

    #[error("Excel保存エラー: {0}")]
    WorkbookSave(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] ocr_sheet_common::Error),
}

pub type Result<T> = std::result::Result<T, OcrSheetError>;
