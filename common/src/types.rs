//! ワークブックのメモリ表現
//!
//! - WorkbookData: シートの並び（保存順 = 表示順）
//! - SheetData: 名前付きのセルグリッド
//! - CellValue: セルの値
//!
//! 座標はすべて0始まり（行0 = Excelの1行目、列1 = B列）。

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// OCR結果を書き込む行（1行目）
pub const HEADER_ROW: u32 = 0;

/// OCR結果を書き込む最初の列（B列）。A列は空けておく
pub const FIRST_DATA_COLUMN: u16 = 1;

/// xlsxの最大列数（XFD列まで）
pub const MAX_COLUMNS: u16 = 16_384;

/// セルの値
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// 日時（Excelのシリアル値）
    DateTime(f64),
    /// 経過時間（日単位のシリアル値）
    Duration(f64),
    /// 数式（先頭の`=`なし）
    Formula(String),
}

impl CellValue {
    /// 文字列セルなら中身を返す
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// シートの表示状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SheetVisibility {
    #[default]
    Visible,
    Hidden,
    /// VBAからしか再表示できない非表示
    VeryHidden,
}

/// 結合セル範囲（両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

impl MergedRange {
    pub fn new(first_row: u32, first_col: u16, last_row: u32, last_col: u16) -> Self {
        Self { first_row, first_col, last_row, last_col }
    }

    /// 1セルだけの範囲（結合として意味がない）
    pub fn is_single_cell(&self) -> bool {
        self.first_row == self.last_row && self.first_col == self.last_col
    }
}

/// 名前付きシート
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetData {
    name: String,
    cells: BTreeMap<(u32, u16), CellValue>,
    merged: Vec<MergedRange>,
    visibility: SheetVisibility,
}

impl SheetData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> SheetVisibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: SheetVisibility) {
        self.visibility = visibility;
    }

    pub fn merged_ranges(&self) -> &[MergedRange] {
        &self.merged
    }

    pub fn add_merged_range(&mut self, range: MergedRange) {
        self.merged.push(range);
    }

    pub fn set_cell(&mut self, row: u32, col: u16, value: CellValue) {
        self.cells.insert((row, col), value);
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    /// 値のあるセルを行優先の順で返す
    pub fn cells(&self) -> impl Iterator<Item = (u32, u16, &CellValue)> {
        self.cells.iter().map(|(&(row, col), value)| (row, col, value))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 1行目のB列から横方向に行を書き込む
    ///
    /// 何行あっても折り返さない。最終列を超える場合はシートを変更せずにエラー。
    pub fn write_header_row<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        let last_col = FIRST_DATA_COLUMN as usize + lines.len();
        if last_col > MAX_COLUMNS as usize {
            return Err(Error::TooManyColumns(lines.len()));
        }

        for (col, line) in (FIRST_DATA_COLUMN..).zip(lines) {
            self.set_cell(HEADER_ROW, col, CellValue::Text(line.as_ref().to_string()));
        }
        Ok(())
    }

    /// 1行目の値をB列から順に返す（A列は含まない）
    pub fn header_row_values(&self) -> Vec<&CellValue> {
        self.cells
            .range((HEADER_ROW, FIRST_DATA_COLUMN)..(HEADER_ROW + 1, 0))
            .map(|(_, value)| value)
            .collect()
    }
}

/// ワークブック（シートの並び）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbookData {
    sheets: Vec<SheetData>,
}

impl WorkbookData {
    /// シートを持たない新規ワークブック
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sheets(sheets: Vec<SheetData>) -> Self {
        Self { sheets }
    }

    pub fn sheets(&self) -> &[SheetData] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name()).collect()
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetData> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Excelと同じく大文字小文字を区別せずに判定
    pub fn contains_sheet(&self, name: &str) -> bool {
        self.sheets
            .iter()
            .any(|s| s.name().to_lowercase() == name.to_lowercase())
    }

    /// 末尾に空のシートを追加
    pub fn add_sheet(&mut self, name: &str) -> Result<&mut SheetData> {
        if self.contains_sheet(name) {
            return Err(Error::DuplicateSheet(name.to_string()));
        }
        self.sheets.push(SheetData::new(name));
        let index = self.sheets.len() - 1;
        Ok(&mut self.sheets[index])
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
