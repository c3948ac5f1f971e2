use crate::error::{OcrSheetError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// OCRエンジンのパスを上書きする環境変数
pub const TESSERACT_ENV: &str = "TESSERACT_CMD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tesseract実行ファイル
    pub tesseract_path: PathBuf,
    /// 認識言語（`+`区切り）
    pub languages: String,
    /// 書き込み先のExcelファイル
    pub output_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    /// 環境変数 `TESSERACT_CMD` があればTesseractのパスを上書き（保存はしない）
    pub fn with_env(self) -> Self {
        let tesseract = std::env::var_os(TESSERACT_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.with_overrides(tesseract, None, None)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| OcrSheetError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ocr-sheet").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            tesseract_path: default_tesseract_path(),
            languages: "jpn+eng".into(),
            output_file: PathBuf::from("ocr_results.xlsx"),
        }
    }

    /// コマンドライン引数で上書き
    pub fn with_overrides(
        mut self,
        tesseract: Option<PathBuf>,
        languages: Option<String>,
        output_file: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = tesseract {
            self.tesseract_path = path;
        }
        if let Some(lang) = languages {
            self.languages = lang;
        }
        if let Some(output) = output_file {
            self.output_file = output;
        }
        self
    }
}

#[cfg(windows)]
fn default_tesseract_path() -> PathBuf {
    PathBuf::from(r"C:\Program Files\Tesseract-OCR\tesseract.exe")
}

#[cfg(not(windows))]
fn default_tesseract_path() -> PathBuf {
    PathBuf::from("tesseract")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.languages, "jpn+eng");
        assert_eq!(config.output_file, PathBuf::from("ocr_results.xlsx"));
        assert!(config.tesseract_path.to_string_lossy().contains("tesseract"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"languages": "eng"}"#).unwrap();
        assert_eq!(config.languages, "eng");
        assert_eq!(config.output_file, PathBuf::from("ocr_results.xlsx"));
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::default().with_overrides(
            Some(PathBuf::from("/opt/tesseract/bin/tesseract")),
            None,
            Some(PathBuf::from("out/result.xlsx")),
        );
        assert_eq!(config.tesseract_path, PathBuf::from("/opt/tesseract/bin/tesseract"));
        assert_eq!(config.languages, "jpn+eng");
        assert_eq!(config.output_file, PathBuf::from("out/result.xlsx"));
    }

    #[test]
    fn test_json_roundtrip_shape() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("tesseract_path"));
        assert!(json.contains("languages"));
        assert!(json.contains("output_file"));
    }
}
