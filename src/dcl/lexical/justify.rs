//! Padding to a display width. Wide characters count as two columns;
//! text already wider than the field is returned unchanged.

use unicode_width::UnicodeWidthStr;

fn padding(s: &str, width: usize) -> usize {
    width.saturating_sub(s.width())
}

pub fn ljust(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(padding(s, width)))
}

pub fn rjust(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(padding(s, width)), s)
}

/// Centres `s`; an odd leftover column goes on the right.
pub fn cjust(s: &str, width: usize) -> String {
    let pad = padding(s, width);
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_width() {
        assert_eq!(ljust("ab", 5), "ab   ");
        assert_eq!(rjust("ab", 5), "   ab");
        assert_eq!(cjust("ab", 5), " ab  ");
        assert_eq!(cjust("ab", 6), "  ab  ");
    }

    #[test]
    fn never_truncates() {
        assert_eq!(ljust("abcdef", 3), "abcdef");
        assert_eq!(cjust("abcdef", 0), "abcdef");
    }

    #[test]
    fn counts_display_columns() {
        // two wide characters fill four columns
        assert_eq!(rjust("日本", 6), "  日本");
    }
}
