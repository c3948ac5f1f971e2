//! OCRモジュール
//!
//! 画像の読み込みと文字認識。認識エンジンは `TextRecognizer` で差し替え可能
//! （本番はTesseract、テストではスタブ）。

pub mod tesseract;

pub use tesseract::TesseractCli;

use crate::error::{OcrSheetError, Result};
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// 画像から文字列を認識するエンジン
pub trait TextRecognizer {
    /// 認識結果の生テキスト（複数行・空文字列もありうる）
    fn recognize(&self, image: &DynamicImage) -> Result<String>;
}

/// 画像ファイルをメモリに読み込む
///
/// 形式は拡張子ではなく内容から判定する。
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.is_file() {
        return Err(OcrSheetError::FileNotFound(path.display().to_string()));
    }

    ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| OcrSheetError::ImageLoad(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn test_load_image_png() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("white.png");
        RgbImage::from_pixel(8, 4, Rgb([255, 255, 255])).save(&path).unwrap();

        let image = load_image(&path).unwrap();
        assert_eq!((image.width(), image.height()), (8, 4));
    }

    #[test]
    fn test_load_image_detects_format_from_content() {
        // 拡張子と中身が違っても読める
        let dir = tempdir().expect("Failed to create temp dir");
        let bmp = dir.path().join("photo.bmp");
        RgbImage::new(3, 3).save(&bmp).unwrap();
        let renamed = dir.path().join("photo.jpg");
        std::fs::rename(&bmp, &renamed).unwrap();

        assert!(load_image(&renamed).is_ok());
    }

    #[test]
    fn test_load_image_missing_file() {
        let err = load_image(Path::new("/nonexistent/scan_12345.png")).unwrap_err();
        assert!(matches!(err, OcrSheetError::FileNotFound(_)));
    }

    #[test]
    fn test_load_image_not_an_image() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"this is not an image").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, OcrSheetError::ImageLoad(_)));
    }

    #[test]
    fn test_load_image_gif() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("scan.gif");
        image::RgbaImage::new(5, 2).save(&path).unwrap();

        let image = load_image(&path).unwrap();
        assert_eq!((image.width(), image.height()), (5, 2));
    }
}
