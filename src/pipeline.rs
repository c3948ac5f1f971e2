//! 画像1枚をExcelの新しいシートに追記するまでの一連の処理
//!
//! 選択 → 画像読み込み → OCR → 行の正規化 → Excelを開く → シート作成・書き込み → 保存
//!
//! キャンセルと文字なしはエラーではなく `RunOutcome` で返す。

use crate::error::Result;
use crate::ocr::{self, TextRecognizer};
use crate::picker::ImagePicker;
use crate::workbook;
use chrono::NaiveDate;
use indicatif::ProgressBar;
use ocr_sheet_common::{next_sheet_name, normalize_lines};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 実行結果
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// ファイルが選択されなかった
    Cancelled,
    /// 画像から文字が認識されなかった（Excelには触れない）
    NoText,
    /// 新しいシートに書き込んで保存した
    Saved {
        path: PathBuf,
        sheet_name: String,
        lines: usize,
    },
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// 書き込み先のExcelファイル
    pub output_file: PathBuf,
    /// シート名に使う日付
    pub today: NaiveDate,
    /// OCR中にスピナーを表示
    pub show_progress: bool,
}

/// 画像を選択してから保存まで
pub fn run(
    picker: &dyn ImagePicker,
    recognizer: &dyn TextRecognizer,
    options: &RunOptions,
) -> Result<RunOutcome> {
    let Some(image_path) = picker.pick_image_file() else {
        return Ok(RunOutcome::Cancelled);
    };

    process_image(&image_path, recognizer, options)
}

/// 選択済みの画像を処理（UIなし）
pub fn process_image(
    image_path: &Path,
    recognizer: &dyn TextRecognizer,
    options: &RunOptions,
) -> Result<RunOutcome> {
    println!("[1/4] 画像ファイルを読み込み中: {}", image_path.display());
    let image = ocr::load_image(image_path)?;

    println!("[2/4] OCR処理を実行中...");
    let raw_text = with_spinner(options.show_progress, "文字を認識しています...", || {
        recognizer.recognize(&image)
    })?;
    drop(image);

    let lines = normalize_lines(&raw_text);
    if lines.is_empty() {
        return Ok(RunOutcome::NoText);
    }
    println!("✔ {}行を認識", lines.len());

    println!("[3/4] Excelファイルを準備中: {}", options.output_file.display());
    let mut book = workbook::open_or_create(&options.output_file)?;

    let sheet_name = next_sheet_name(options.today, &book.sheet_names());
    println!("[4/4] Excelシート「{}」にデータを書き込み中...", sheet_name);
    book.add_sheet(&sheet_name)?.write_header_row(&lines)?;

    workbook::save_workbook(&book, &options.output_file)?;

    Ok(RunOutcome::Saved {
        path: options.output_file.clone(),
        sheet_name,
        lines: lines.len(),
    })
}

fn with_spinner<T>(enabled: bool, message: &'static str, f: impl FnOnce() -> T) -> T {
    if !enabled {
        return f();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = f();
    spinner.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OcrSheetError;
    use crate::picker::FixedPicker;
    use image::DynamicImage;
    use tempfile::tempdir;

    struct Fails;

    impl TextRecognizer for Fails {
        fn recognize(&self, _image: &DynamicImage) -> Result<String> {
            Err(OcrSheetError::OcrEngine("engine unavailable".into()))
        }
    }

    fn options(output_file: PathBuf) -> RunOptions {
        RunOptions {
            output_file,
            today: NaiveDate::from_ymd_opt(2025, 8, 30).unwrap(),
            show_progress: false,
        }
    }

    #[test]
    fn test_run_cancelled_touches_nothing() {
        let dir = tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("ocr_results.xlsx");

        let outcome = run(&FixedPicker(None), &Fails, &options(output.clone())).unwrap();
        assert_eq!(outcome, RunOutcome::Cancelled);
        assert!(!output.exists());
    }

    #[test]
    fn test_engine_failure_propagates() {
        let dir = tempdir().expect("Failed to create temp dir");
        let image_path = dir.path().join("scan.png");
        image::RgbImage::new(4, 4).save(&image_path).unwrap();
        let output = dir.path().join("ocr_results.xlsx");

        let err = process_image(&image_path, &Fails, &options(output.clone())).unwrap_err();
        assert!(matches!(err, OcrSheetError::OcrEngine(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_with_spinner_returns_value() {
        assert_eq!(with_spinner(false, "x", || 1 + 1), 2);
        assert_eq!(with_spinner(true, "x", || "done"), "done");
    }
}
