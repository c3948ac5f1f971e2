//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use ocr_sheet::error::OcrSheetError;
use ocr_sheet::ocr;
use std::path::Path;

/// 存在しない画像を読み込んだ場合
#[test]
fn test_load_nonexistent_image() {
    let result = ocr::load_image(Path::new("/nonexistent/path/12345.png"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, OcrSheetError::FileNotFound(_)));
}

/// OcrSheetErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        OcrSheetError::Config("テスト設定エラー".to_string()),
        OcrSheetError::FileNotFound("test.jpg".to_string()),
        OcrSheetError::ImageLoad("decode failed".to_string()),
        OcrSheetError::OcrEngine("tesseract not found".to_string()),
        OcrSheetError::WorkbookLoad("invalid zip".to_string()),
        OcrSheetError::WorkbookSave("permission denied".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 原因がメッセージに含まれる
#[test]
fn test_error_display_includes_cause() {
    let err = OcrSheetError::WorkbookSave("ocr_results.xlsx: file is locked".to_string());
    let display = format!("{}", err);

    assert!(display.contains("Excel保存エラー"));
    assert!(display.contains("file is locked"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: OcrSheetError = io_err.into();

    assert!(matches!(err, OcrSheetError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: OcrSheetError = json_err.into();

    assert!(matches!(err, OcrSheetError::JsonParse(_)));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = ocr_sheet_common::Error::DuplicateSheet("0830(1)".to_string());
    let err: OcrSheetError = common_err.into();

    assert!(matches!(err, OcrSheetError::Common(_)));
}

/// エラーチェーン（透過的エラー）
#[test]
fn test_error_chain_transparent() {
    let common_err = ocr_sheet_common::Error::Excel("シート名設定エラー".to_string());
    let err: OcrSheetError = common_err.into();

    // 透過的エラーなのでメッセージがそのまま表示される
    let display = format!("{}", err);
    assert!(display.contains("シート名設定エラー"));
}
