use clap::Parser;
use ocr_sheet::{cli, config, error, ocr, picker, pipeline};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use picker::{DialogPicker, FixedPicker, ImagePicker, PromptPicker};
use pipeline::{RunOptions, RunOutcome};

fn main() {
    let cli = Cli::parse();

    // エラーは表示するだけで終了コードには反映しない
    if let Err(e) = run(cli) {
        let _ = report_error(&mut std::io::stdout(), &e);
    }
}

/// 進捗と同じく標準出力にエラーを表示
fn report_error(out: &mut impl std::io::Write, e: &error::OcrSheetError) -> std::io::Result<()> {
    writeln!(out, "エラーが発生しました: {}", e)
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    if let Some(Commands::Config { set_tesseract, set_lang, set_output, show }) = cli.command {
        return run_config(config, set_tesseract, set_lang, set_output, show);
    }

    let config = config
        .with_env()
        .with_overrides(cli.tesseract, cli.lang, cli.output);

    println!("📷 ocr-sheet - 画像OCR → Excel\n");

    let picker: Box<dyn ImagePicker> = if let Some(image) = cli.image {
        Box::new(FixedPicker(Some(image)))
    } else if cli.prompt {
        Box::new(PromptPicker)
    } else {
        Box::new(DialogPicker::default())
    };

    let recognizer = ocr::TesseractCli::from_config(&config).verbose(cli.verbose);
    let options = RunOptions {
        output_file: config.output_file.clone(),
        today: chrono::Local::now().date_naive(),
        show_progress: true,
    };

    match pipeline::run(picker.as_ref(), &recognizer, &options)? {
        RunOutcome::Cancelled => println!("ファイルが選択されませんでした。"),
        RunOutcome::NoText => println!("画像から文字が認識されませんでした。"),
        RunOutcome::Saved { path, sheet_name, lines } => {
            println!("✔ シート「{}」に{}件を書き込み: {}", sheet_name, lines, path.display());
            println!("\n✅ Excelファイルへの書き込みが完了しました。");
        }
    }

    Ok(())
}

fn run_config(
    mut config: Config,
    set_tesseract: Option<std::path::PathBuf>,
    set_lang: Option<String>,
    set_output: Option<std::path::PathBuf>,
    show: bool,
) -> Result<()> {
    let changed = set_tesseract.is_some() || set_lang.is_some() || set_output.is_some();
    if changed {
        config = config.with_overrides(set_tesseract, set_lang, set_output);
        config.save()?;
        println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
    }

    if show || !changed {
        println!("設定:");
        println!("  Tesseract: {}", config.tesseract_path.display());
        println!("  認識言語: {}", config.languages);
        println!("  出力ファイル: {}", config.output_file.display());
    }

    Ok(())
}
