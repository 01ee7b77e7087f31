//! LIKE pattern escaping.

/// Escape SQL LIKE meta-characters so user input is matched literally.
///
/// The escape character is `\`, which the generated predicates declare with
/// `ESCAPE E'\\'`.
pub(crate) fn escape_like_pattern(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// `%value%` pattern for substring matching.
pub(crate) fn contains_pattern(s: &str) -> String {
    format!("%{}%", escape_like_pattern(s))
}
