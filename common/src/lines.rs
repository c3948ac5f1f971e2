//! OCR結果テキストの行正規化
//!
//! 行単位に分割し、前後の空白を除去し、空行を捨てる。
//! OCRエンジンが出力する改ページ(\x0c)なども行区切りとして扱う。

/// 行区切りとして扱う文字
///
/// `\r\n` は `\r` と `\n` に分かれるが、間にできる空行は捨てられるので問題ない。
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// 生テキストを空でない行のリストに変換
///
/// 元の上から下への順序を保持する。結果に空文字列・空白のみの文字列は含まれない。
pub fn normalize_lines(raw: &str) -> Vec<String> {
    raw.split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
