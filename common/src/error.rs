//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Duplicate sheet name: {0}")]
    DuplicateSheet(String),

    #[error("Too many columns: {0} lines do not fit in one row")]
    TooManyColumns(usize),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_excel() {
        let error = Error::Excel("シート名設定エラー".to_string());
        assert_eq!(format!("{}", error), "Excel error: シート名設定エラー");
    }

    #[test]
    fn test_error_display_duplicate_sheet() {
        let error = Error::DuplicateSheet("0830(1)".to_string());
        assert!(format!("{}", error).contains("0830(1)"));
    }

    #[test]
    fn test_error_display_too_many_columns() {
        let error = Error::TooManyColumns(20000);
        assert!(format!("{}", error).contains("20000"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Excel("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Excel"));
        assert!(debug.contains("テスト"));
    }
}
