//! シート名の自動生成
//!
//! `MMDD(n)` 形式。nは1から始め、既存シート名と重複しなくなるまで増やす。

use chrono::NaiveDate;

/// 日付から基本名（MMDD）を生成
pub fn sheet_base_name(date: NaiveDate) -> String {
    date.format("%m%d").to_string()
}

/// 既存シートと重複しないシート名を生成
///
/// 例: 既存が `["0830(1)", "0830(2)"]` で日付が8/30なら `"0830(3)"`
pub fn next_sheet_name<S: AsRef<str>>(date: NaiveDate, existing: &[S]) -> String {
    let base = sheet_base_name(date);
    let mut counter: u32 = 1;
    loop {
        let candidate = format!("{}({})", base, counter);
        if !existing.iter().any(|name| name.as_ref() == candidate) {
            return candidate;
        }
        counter += 1;
    }
}
