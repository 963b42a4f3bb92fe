//! `LIKE`-style word patterns shared by every lexicon backing.

/// Returns true if `text` matches `pattern`, where `_` matches exactly one
/// character and `%` matches any run, ignoring ASCII case.
pub fn matches_pattern(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().map(|c| c.to_ascii_lowercase()).collect();
    let text: Vec<char> = text.chars().map(|c| c.to_ascii_lowercase()).collect();
    matches_from(&pattern, &text)
}

fn matches_from(pattern: &[char], text: &[char]) -> bool {
    match pattern.split_first() {
        None => text.is_empty(),
        Some(('%', rest)) => (0..=text.len()).any(|skip| matches_from(rest, &text[skip..])),
        Some(('_', rest)) => !text.is_empty() && matches_from(rest, &text[1..]),
        Some((c, rest)) => text.first() == Some(c) && matches_from(rest, &text[1..]),
    }
}
