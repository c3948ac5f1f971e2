use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ocr-sheet")]
#[command(about = "画像の文字をOCRで読み取り、Excelに新しいシートとして追記", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 画像ファイル（指定時はダイアログを開かない）
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// ダイアログの代わりにターミナルでパスを入力
    #[arg(long, conflicts_with = "image")]
    pub prompt: bool,

    /// 書き込み先Excelファイル
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tesseract実行ファイルのパス
    #[arg(long)]
    pub tesseract: Option<PathBuf>,

    /// 認識言語（例: jpn+eng）
    #[arg(short, long)]
    pub lang: Option<String>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 設定を表示/編集
    Config {
        /// Tesseractのパスを設定
        #[arg(long)]
        set_tesseract: Option<PathBuf>,

        /// 認識言語を設定
        #[arg(long)]
        set_lang: Option<String>,

        /// 書き込み先Excelファイルを設定
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
