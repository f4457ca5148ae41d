//! Utility functions for hexlog.

/// Converts an entry title to a filesystem-safe slug.
///
/// Lowercases, maps anything non-alphanumeric to hyphens, and collapses
/// runs so "The Big Refactor!" becomes "the-big-refactor". An all-symbol
/// title yields "entry" rather than an empty name.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        "entry".to_string()
    } else {
        slug
    }
}

/// Extracts up to two uppercase initials from a name.
///
/// Takes the first letter of the first and last whitespace-separated words;
/// a single word yields one initial. Non-alphabetic leading characters are
/// skipped.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();

    let first_letter = |word: &str| {
        word.chars()
            .find(|c| c.is_alphabetic())
            .map(|c| c.to_ascii_uppercase())
    };

    match words.as_slice() {
        [] => String::from("?"),
        [only] => first_letter(only).map(String::from).unwrap_or_else(|| "?".into()),
        [first, .., last] => {
            let mut out = String::new();
            if let Some(c) = first_letter(first) {
                out.push(c);
            }
            if let Some(c) = first_letter(last) {
                out.push(c);
            }
            if out.is_empty() { "?".into() } else { out }
        }
    }
}
