//! 画像ファイル選択
//!
//! パイプライン本体はUIに依存しないよう、選択方法を `ImagePicker` で差し替える:
//! - DialogPicker: OSのファイル選択ダイアログ
//! - PromptPicker: ターミナルでパスを入力
//! - FixedPicker: コマンドライン引数などで決まったパス

use dialoguer::Input;
use std::path::{Path, PathBuf};

/// 選択可能な画像の拡張子
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// 画像ファイルを1つ選ぶ。キャンセル時は `None`
pub trait ImagePicker {
    fn pick_image_file(&self) -> Option<PathBuf>;
}

/// 拡張子が対応画像か（大文字小文字を区別しない）
pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| is_image_extension(&ext.to_string_lossy()))
        .unwrap_or(false)
}

/// ネイティブのファイル選択ダイアログ
pub struct DialogPicker {
    title: String,
}

impl Default for DialogPicker {
    fn default() -> Self {
        Self {
            title: "画像ファイルを選択してください".into(),
        }
    }
}

impl ImagePicker for DialogPicker {
    fn pick_image_file(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(&self.title)
            .add_filter("Image files", IMAGE_EXTENSIONS)
            .pick_file()
    }
}

/// ターミナルでパスを入力（空入力でキャンセル）
#[derive(Default)]
pub struct PromptPicker;

impl ImagePicker for PromptPicker {
    fn pick_image_file(&self) -> Option<PathBuf> {
        let input: String = match Input::new()
            .with_prompt("画像ファイルのパス（空でキャンセル）")
            .allow_empty(true)
            .validate_with(|s: &String| validate_prompt_path(s))
            .interact_text()
        {
            Ok(input) => input,
            Err(e) => {
                println!("入力エラー: {}", e);
                return None;
            }
        };

        parse_prompt_path(&input)
    }
}

/// 入力値の検証（空はキャンセルとして許可）
fn validate_prompt_path(input: &str) -> std::result::Result<(), String> {
    let Some(path) = parse_prompt_path(input) else {
        return Ok(());
    };
    if !path.is_file() {
        return Err(format!("ファイルが見つかりません: {}", path.display()));
    }
    if !is_image_path(&path) {
        return Err(format!("対応していない形式です（{}）", IMAGE_EXTENSIONS.join(", ")));
    }
    Ok(())
}

/// 前後の空白と引用符を除去。ドラッグ&ドロップで付く `"..."` に対応
fn parse_prompt_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim().trim_matches(|c| c == '"' || c == '\'');
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

/// あらかじめ決まったパスを返す
pub struct FixedPicker(pub Option<PathBuf>);

impl ImagePicker for FixedPicker {
    fn pick_image_file(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}
