//! Excel生成（共通ライブラリ）
//!
//! WorkbookData をそのままxlsxのバイト列に変換する。
//! 書式は日時セルの表示形式のみ付ける。結合セルとシートの非表示状態も書き戻す。

use crate::error::{Error, Result};
use crate::types::{CellValue, SheetVisibility, WorkbookData};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

const DATE_FORMAT: &str = "yyyy-mm-dd";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";
const DURATION_FORMAT: &str = "[h]:mm:ss";

fn excel_err(context: &str, e: XlsxError) -> Error {
    Error::Excel(format!("{}: {}", context, e))
}

/// 日時・経過時間セル用の表示形式
struct DateFormats {
    date: Format,
    datetime: Format,
    duration: Format,
}

impl DateFormats {
    fn new() -> Self {
        Self {
            date: Format::new().set_num_format(DATE_FORMAT),
            datetime: Format::new().set_num_format(DATETIME_FORMAT),
            duration: Format::new().set_num_format(DURATION_FORMAT),
        }
    }

    /// 時刻部分がなければ日付のみの形式
    fn for_datetime(&self, serial: f64) -> &Format {
        if serial.fract() == 0.0 {
            &self.date
        } else {
            &self.datetime
        }
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    formats: &DateFormats,
) -> Result<()> {
    let result = match value {
        CellValue::Text(s) => worksheet.write_string(row, col, s.as_str()),
        CellValue::Number(n) => worksheet.write_number(row, col, *n),
        CellValue::Bool(b) => worksheet.write_boolean(row, col, *b),
        CellValue::DateTime(serial) => {
            worksheet.write_number_with_format(row, col, *serial, formats.for_datetime(*serial))
        }
        CellValue::Duration(serial) => {
            worksheet.write_number_with_format(row, col, *serial, &formats.duration)
        }
        CellValue::Formula(f) => worksheet.write_formula(row, col, f.as_str()),
    };
    result.map_err(|e| excel_err("セル書き込みエラー", e))?;
    Ok(())
}

/// ワークブックをバッファに生成
///
/// シートの順序はWorkbookDataの並び順のまま。シートが1枚もない場合は
/// 既定シートが勝手に作られないようエラーにする。表示中のシートが1枚も
/// ない場合もExcelで開けないのでエラー。
pub fn generate_workbook_buffer(data: &WorkbookData) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(Error::Excel("シートがありません".into()));
    }
    let Some(first_visible) = data
        .sheets()
        .iter()
        .position(|s| s.visibility() == SheetVisibility::Visible)
    else {
        return Err(Error::Excel("表示されているシートがありません".into()));
    };

    let formats = DateFormats::new();
    let blank = Format::new();
    let mut workbook = Workbook::new();

    for (index, sheet) in data.sheets().iter().enumerate() {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(sheet.name())
            .map_err(|e| excel_err("シート名設定エラー", e))?;

        // 非表示のシートはアクティブにできない
        if first_visible > 0 && index == first_visible {
            worksheet.set_active(true);
        }
        // VeryHiddenはrust_xlsxwriterでは通常の非表示として書く
        if sheet.visibility() != SheetVisibility::Visible {
            worksheet.set_hidden(true);
        }

        // 結合を先に設定し、左上セルの値は後から書き込む
        for range in sheet.merged_ranges().iter().filter(|r| !r.is_single_cell()) {
            worksheet
                .merge_range(range.first_row, range.first_col, range.last_row, range.last_col, "", &blank)
                .map_err(|e| excel_err("セル結合エラー", e))?;
        }

        for (row, col, value) in sheet.cells() {
            write_cell(worksheet, row, col, value, &formats)?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| excel_err("Excel保存エラー", e))
}
