//! Leading token extraction.

/// Returns the bytes of `line` up to its first space.
///
/// Only the space character delimits the token; a line without any space is a token by itself.
pub fn leading_token(line: &[u8]) -> &[u8] {
    match line.iter().position(|&b| b == b' ') {
        Some(end) => &line[..end],
        None => line,
    }
}

/// Ordinal, locale-independent lower-casing.
///
/// Invalid UTF-8 sequences are replaced, so such a token never matches a dictionary word.
pub fn fold_case(token: &[u8]) -> String {
    String::from_utf8_lossy(token).to_lowercase()
}
