//! Excelファイルの読み込みと保存
//!
//! 既存ファイルはcalamineで全シートを読み込み（値・数式・日時・結合セル・
//! 非表示状態）、保存時にrust_xlsxwriterで全シートを書き戻す。
//! 日時以外のセル書式は引き継がない。

use crate::error::{OcrSheetError, Result};
use calamine::{open_workbook, Data, Reader, SheetVisible, Xlsx};
use ocr_sheet_common::{
    generate_workbook_buffer, CellValue, MergedRange, SheetData, SheetVisibility, WorkbookData,
};
use std::path::Path;

/// 既存のExcelを開く。なければシートのない新規ワークブックを返す
pub fn open_or_create(path: &Path) -> Result<WorkbookData> {
    if path.exists() {
        load_workbook(path)
    } else {
        Ok(WorkbookData::new())
    }
}

/// 既存のExcelを全シート読み込む
pub fn load_workbook(path: &Path) -> Result<WorkbookData> {
    let mut xlsx: Xlsx<_> = open_workbook(path)
        .map_err(|e| OcrSheetError::WorkbookLoad(format!("{}: {}", path.display(), e)))?;

    xlsx.load_merged_regions()
        .map_err(|e| OcrSheetError::WorkbookLoad(format!("{}: {}", path.display(), e)))?;

    let metadata: Vec<(String, SheetVisible)> = xlsx
        .sheets_metadata()
        .iter()
        .map(|s| (s.name.clone(), s.visible))
        .collect();

    let mut sheets = Vec::new();
    for name in xlsx.sheet_names() {
        let mut sheet = read_sheet(&mut xlsx, &name)
            .map_err(|e| OcrSheetError::WorkbookLoad(format!("シート「{}」: {}", name, e)))?;
        if let Some((_, visible)) = metadata.iter().find(|(n, _)| *n == name) {
            sheet.set_visibility(to_visibility(*visible));
        }
        sheets.push(sheet);
    }

    Ok(WorkbookData::from_sheets(sheets))
}

fn read_sheet<R>(xlsx: &mut Xlsx<R>, name: &str) -> std::result::Result<SheetData, calamine::XlsxError>
where
    R: std::io::Read + std::io::Seek,
{
    let mut sheet = SheetData::new(name);

    let range = xlsx.worksheet_range(name)?;
    if let Some((row0, col0)) = range.start() {
        for (r, c, data) in range.used_cells() {
            if let Some(value) = to_cell_value(data) {
                sheet.set_cell(row0 + r as u32, (col0 as usize + c) as u16, value);
            }
        }
    }

    // 数式は値より優先（Excelが開いた時に再計算される）
    let formulas = xlsx.worksheet_formula(name)?;
    if let Some((row0, col0)) = formulas.start() {
        for (r, c, formula) in formulas.used_cells() {
            if !formula.is_empty() {
                sheet.set_cell(
                    row0 + r as u32,
                    (col0 as usize + c) as u16,
                    CellValue::Formula(formula.clone()),
                );
            }
        }
    }

    if let Some(merges) = xlsx.worksheet_merge_cells(name) {
        for dims in merges? {
            sheet.add_merged_range(MergedRange::new(
                dims.start.0,
                dims.start.1 as u16,
                dims.end.0,
                dims.end.1 as u16,
            ));
        }
    }

    Ok(sheet)
}

fn to_visibility(visible: SheetVisible) -> SheetVisibility {
    match visible {
        SheetVisible::Visible => SheetVisibility::Visible,
        SheetVisible::Hidden => SheetVisibility::Hidden,
        SheetVisible::VeryHidden => SheetVisibility::VeryHidden,
    }
}

fn to_cell_value(data: &Data) -> Option<CellValue> {
    match data {
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) if dt.is_duration() => Some(CellValue::Duration(dt.as_f64())),
        Data::DateTime(dt) => Some(CellValue::DateTime(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => Some(CellValue::Text(e.to_string())),
        Data::Empty => None,
    }
}

/// ワークブック全体をファイルに保存（上書き）
pub fn save_workbook(workbook: &WorkbookData, path: &Path) -> Result<()> {
    let buffer = generate_workbook_buffer(workbook)?;
    std::fs::write(path, buffer)
        .map_err(|e| OcrSheetError::WorkbookSave(format!("{}: {}", path.display(), e)))
}
