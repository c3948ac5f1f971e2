//! Tesseract CLI連携
//!
//! 画像をPNGに変換して標準入力に渡し、標準出力から認識結果を受け取る:
//! `tesseract stdin stdout -l jpn+eng`

use super::TextRecognizer;
use crate::config::Config;
use crate::error::{OcrSheetError, Result};
use image::{DynamicImage, ImageFormat};
use std::io::{Cursor, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub struct TesseractCli {
    program: PathBuf,
    languages: String,
    verbose: bool,
}

impl TesseractCli {
    pub fn new(program: impl Into<PathBuf>, languages: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            languages: languages.into(),
            verbose: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tesseract_path.clone(), config.languages.clone())
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn args(&self) -> Vec<&str> {
        vec!["stdin", "stdout", "-l", self.languages.as_str()]
    }

    fn run(&self, png: &[u8]) -> Result<String> {
        if self.verbose {
            println!("  [OCR] {} {}", self.program.display(), self.args().join(" "));
        }

        let mut child = Command::new(&self.program)
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                OcrSheetError::OcrEngine(format!(
                    "Tesseractを起動できません ({}): {}",
                    self.program.display(),
                    e
                ))
            })?;

        // 書き込み失敗（早期終了）の場合も、終了コードとstderrを優先して報告する
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(png),
            None => Ok(()),
        };

        let output = child
            .wait_with_output()
            .map_err(|e| OcrSheetError::OcrEngine(format!("Tesseract実行エラー: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrSheetError::OcrEngine(format!(
                "Tesseract failed (code {:?}): {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        write_result
            .map_err(|e| OcrSheetError::OcrEngine(format!("画像の受け渡しに失敗: {}", e)))?;

        let text = String::from_utf8_lossy(&output.stdout).to_string();

        if self.verbose {
            let preview: String = text.chars().take(200).collect();
            println!("  [OCR] 認識結果: {} chars", text.chars().count());
            println!("  [OCR] プレビュー: {:?}", preview);
        }

        Ok(text)
    }
}

impl TextRecognizer for TesseractCli {
    fn recognize(&self, image: &DynamicImage) -> Result<String> {
        let png = encode_png(image)?;
        self.run(&png)
    }
}

/// PNGへエンコード。浮動小数点の画像は8bitに変換する
fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let result = match image {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba8(image.to_rgba8())
                .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        }
        _ => image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png),
    };
    result.map_err(|e| OcrSheetError::ImageLoad(format!("PNG変換エラー: {}", e)))?;
    Ok(buffer)
}
