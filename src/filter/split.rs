/// Marker that turns the following delimiter into a literal character
pub const ESCAPE: &str = "\\";

/// Split `text` on every `delimiter` that is not immediately preceded by `escape`.
///
/// An escaped delimiter is kept in the resulting piece as a literal delimiter,
/// with the escape marker removed. Escape markers in front of anything else are
/// left untouched so that a later, nested split can still see them.
///
/// Splitting an empty string yields a single empty piece. An empty delimiter
/// never matches, so the whole text comes back as one piece.
pub fn split_unescaped(text: &str, delimiter: &str, escape: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![text.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut rest = text;

    while let Some(pos) = rest.find(delimiter) {
        let before = &rest[..pos];
        match before.strip_suffix(escape).filter(|_| !escape.is_empty()) {
            Some(literal) => {
                current.push_str(literal);
                current.push_str(delimiter);
            }
            None => {
                current.push_str(before);
                pieces.push(std::mem::take(&mut current));
            }
        }
        rest = &rest[pos + delimiter.len()..];
    }

    current.push_str(rest);
    pieces.push(current);
    pieces
}

/// Split a filter string into raw clauses on `separator`, honoring `\` escapes
pub fn split_clauses(input: &str, separator: &str) -> Vec<String> {
    split_unescaped(input, separator, ESCAPE)
}
