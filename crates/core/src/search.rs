//! Keyword search helpers.

/// Build an `ILIKE` pattern that matches `keyword` as a literal substring.
///
/// `\`, `%` and `_` are escaped so user input cannot inject wildcards. The
/// pattern is meant for PostgreSQL's default `ESCAPE '\'`.
pub fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Trim a search keyword, returning `None` when nothing is left.
pub fn normalize_keyword(keyword: Option<&str>) -> Option<&str> {
    keyword.map(str::trim).filter(|k| !k.is_empty())
}
