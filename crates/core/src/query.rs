//! Parsing helpers for list-endpoint query parameters.

use crate::types::DbId;

/// Parse a comma-separated id list such as `"3,7,12"`.
///
/// Whitespace around each id is ignored. An empty segment or a non-integer
/// value is an error naming the offending segment.
pub fn parse_id_list(raw: &str) -> Result<Vec<DbId>, String> {
    raw.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<DbId>()
                .map_err(|_| format!("'{part}' is not a valid id"))
        })
        .collect()
}

/// Escape `%`, `_` and `\` so `term` matches literally inside a SQL `LIKE`
/// pattern (PostgreSQL's default escape character is `\`).
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
