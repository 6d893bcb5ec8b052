//! Whitespace and comment editing, after the DCL `F$EDIT` keywords.

const COMMENT_CHAR: char = '#';

/// Removes every whitespace character.
pub fn collapse(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Trims, and squeezes each internal whitespace run to a single space.
pub fn compress(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn trim(s: &str) -> String {
    s.trim().to_string()
}

pub fn trim_leading(s: &str) -> String {
    s.trim_start().to_string()
}

pub fn trim_trailing(s: &str) -> String {
    s.trim_end().to_string()
}

/// Drops everything from the first comment character on.
pub fn uncomment(s: &str) -> String {
    let code = match s.find(COMMENT_CHAR) {
        Some(idx) => &s[..idx],
        None => s,
    };
    code.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_and_compress() {
        assert_eq!(collapse(" a b\tc "), "abc");
        assert_eq!(compress("  this   is a test   "), "this is a test");
    }

    #[test]
    fn trims() {
        assert_eq!(trim("  x  "), "x");
        assert_eq!(trim_leading("  x  "), "x  ");
        assert_eq!(trim_trailing("  x  "), "  x");
    }

    #[test]
    fn uncomment_strips_trailing_comment() {
        assert_eq!(uncomment("ls -la   # list all"), "ls -la");
        assert_eq!(uncomment("# only a comment"), "");
        assert_eq!(uncomment("no comment "), "no comment");
    }
}
