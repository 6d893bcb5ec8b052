//! Field and substring extraction, plus pluralization.

/// Field `index` of `s` split on `sep`; out of range yields `sep` itself,
/// as `F$ELEMENT` does.
pub fn element(s: &str, index: usize, sep: &str) -> String {
    s.split(sep).nth(index).unwrap_or(sep).to_string()
}

/// Character-based substring. A negative `start` counts back from the end.
pub fn substr(s: &str, start: i64, len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    let total = chars.len() as i64;
    let start = if start < 0 { total + start } else { start };
    if start < 0 || start > total {
        return String::new();
    }
    chars.iter().skip(start as usize).take(len).collect()
}

/// `word` for a count of one, otherwise `irregular` or a regular English plural.
pub fn pluralize(word: &str, count: i64, irregular: Option<&str>) -> String {
    if matches!(count, 1 | -1) {
        return word.to_string();
    }
    if let Some(form) = irregular {
        return form.to_string();
    }

    let lower = word.to_lowercase();
    let shout = word.chars().any(char::is_alphabetic) && word == word.to_uppercase();
    let (stem, suffix) = if ["s", "x", "z", "ch", "sh"].iter().any(|e| lower.ends_with(e)) {
        (word, "es")
    } else if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
        (&word[..word.len() - 1], "ies")
    } else {
        (word, "s")
    };
    let suffix = if shout {
        suffix.to_uppercase()
    } else {
        suffix.to_string()
    };
    format!("{}{}", stem, suffix)
}

fn ends_with_vowel_y(lower: &str) -> bool {
    let mut rev = lower.chars().rev();
    rev.next();
    matches!(rev.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}
