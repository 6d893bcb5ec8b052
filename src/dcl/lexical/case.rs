//! Case conversions.

/// Words kept lower case inside a title.
const MINOR_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "in", "nor", "of", "on", "or", "the", "to",
    "up",
];

pub fn upcase(s: &str) -> String {
    s.to_uppercase()
}

pub fn locase(s: &str) -> String {
    s.to_lowercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Capitalizes every space-separated word; spacing is kept as is.
pub fn capcase(s: &str) -> String {
    s.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Like [`capcase`], but minor words stay lower case unless they open or
/// close the title.
pub fn titlecase(s: &str) -> String {
    let words: Vec<&str> = s.split(' ').collect();
    let first = words.iter().position(|w| !w.is_empty());
    let last = words.iter().rposition(|w| !w.is_empty());

    words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let lower = w.to_lowercase();
            let edge = Some(i) == first || Some(i) == last;
            if !edge && MINOR_WORDS.contains(&lower.as_str()) {
                lower
            } else {
                capitalize(w)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
