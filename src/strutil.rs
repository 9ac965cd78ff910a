//! Pure string utilities used throughout the lexer.
//!
//! Ported from the original implementation's `split`/`split_first`/
//! `strip_left`/`strip_right`/`strip`/`remove_duplicate` helpers. These are
//! hot paths for parsing, kept allocation-light and free of panics.

/// Splits `input` on any character in `delim_set`. Consecutive delimiters
/// collapse and empty pieces are dropped.
pub fn split(input: &str, delim_set: &str) -> Vec<String> {
    input
        .split(|c| delim_set.contains(c))
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Returns at most two pieces: the first non-empty run before any
/// delimiter, and the remainder of the string verbatim from the character
/// after that delimiter. Leading delimiters are skipped without producing
/// an empty first piece.
pub fn split_first(input: &str, delim_set: &str) -> Vec<String> {
    let mut result = Vec::with_capacity(2);
    let mut first_word = String::new();
    let mut chars = input.char_indices();
    while let Some((idx, c)) = chars.next() {
        if delim_set.contains(c) {
            if !first_word.is_empty() {
                result.push(first_word);
                let rest_start = idx + c.len_utf8();
                let rest = &input[rest_start..];
                if !rest.is_empty() {
                    result.push(rest.to_string());
                }
                return result;
            }
            // leading delimiter with nothing accumulated yet: skip it
        } else {
            first_word.push(c);
        }
    }
    if !first_word.is_empty() {
        result.push(first_word);
    }
    result
}

/// Removes leading and trailing characters belonging to `delim_set`.
pub fn strip(input: &str, delim_set: &str) -> String {
    input
        .trim_matches(|c| delim_set.contains(c))
        .to_string()
}

/// Replaces any run of `c` with a single `c`. As a side effect of how the
/// original implementation derives this from `split`/`join`, leading and
/// trailing runs of `c` are dropped entirely rather than collapsed to one.
pub fn collapse(input: &str, c: char) -> String {
    let delim = c.to_string();
    split(input, &delim).join(&delim)
}
