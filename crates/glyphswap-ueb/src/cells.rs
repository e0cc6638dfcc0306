// Cellification: tagged text to Unicode braille

use crate::tables::{
    CAPITAL_INDICATOR, LETTER_INDICATOR, NUMERIC_INDICATOR, digit_cell, letter_cell, lookup_tag,
    punctuation_cell,
};

/// Convert tagged text into braille cells.
///
/// Each `{tag}` is replaced by its contraction cells (unknown tags are
/// spelled out letter by letter). Plain letters use the alphabet, with the
/// capital indicator before upper-case letters. A number starts with the
/// numeric indicator; `.` or `-` between two digits continues it. A letter
/// from a to j directly after a digit gets the letter indicator. Characters
/// with no braille form are copied unchanged.
pub fn cellify(tagged: &str) -> String {
    let mut out = String::with_capacity(tagged.len() * 3);
    // Last two plain characters seen; a tag counts as a non-digit.
    let mut prev: Option<char> = None;
    let mut prev2: Option<char> = None;
    let mut rest = tagged;

    while let Some(c) = rest.chars().next() {
        if c == '{' {
            if let Some(close) = rest.find('}') {
                let tag = &rest[1..close];
                push_tag(tag, &mut out);
                prev2 = prev;
                prev = Some('}');
                rest = &rest[close + 1..];
                continue;
            }
        }

        if c.is_ascii_digit() {
            let continues_number = prev.is_some_and(|p| p.is_ascii_digit())
                || (matches!(prev, Some('.' | '-')) && prev2.is_some_and(|p| p.is_ascii_digit()));
            if !continues_number {
                out.push(NUMERIC_INDICATOR);
            }
            out.extend(digit_cell(c));
        } else if let Some(cell) = letter_cell(c) {
            if prev.is_some_and(|p| p.is_ascii_digit()) && ('a'..='j').contains(&c) {
                out.push(LETTER_INDICATOR);
            }
            if c.is_ascii_uppercase() {
                out.push(CAPITAL_INDICATOR);
            }
            out.push(cell);
        } else {
            out.push(punctuation_cell(c).unwrap_or(c));
        }

        prev2 = prev;
        prev = Some(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn push_tag(tag: &str, out: &mut String) {
    match lookup_tag(tag) {
        Some(cells) => out.push_str(cells),
        None => {
            for c in tag.chars() {
                out.push(letter_cell(c).unwrap_or(c));
            }
        }
    }
}

/// Uncontracted (grade 1) braille: every ASCII letter becomes its cell,
/// regardless of case. Everything else is left as is.
pub fn uncontracted(text: &str) -> String {
    text.chars().map(|c| letter_cell(c).unwrap_or(c)).collect()
}

/// Render a digit string as a braille number with one numeric indicator.
pub fn number(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() * 3 + 3);
    out.push(NUMERIC_INDICATOR);
    out.extend(digits.chars().map(|c| digit_cell(c).unwrap_or(c)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncontracted_letters() {
        assert_eq!(uncontracted("and"), "⠁⠝⠙");
        assert_eq!(uncontracted("AB CD-EF"), "⠁⠃ ⠉⠙-⠑⠋");
        assert_eq!(
            uncontracted("ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
            "⠁⠃⠉⠙⠑⠋⠛⠓⠊⠚⠅⠇⠍⠝⠕⠏⠟⠗⠎⠞⠥⠧⠺⠭⠽⠵"
        );
    }

    #[test]
    fn number_digits() {
        assert_eq!(number("1234567890"), "⠼⠁⠃⠉⠙⠑⠋⠛⠓⠊⠚");
    }

    #[test]
    fn tags_and_letters() {
        assert_eq!(cellify("{sh}{ou}t{ed}"), "⠩⠳⠞⠫");
        assert_eq!(cellify("ra{tion}ally"), "⠗⠁⠰⠝⠁⠇⠇⠽");
    }

    #[test]
    fn tags_are_case_insensitive() {
        assert_eq!(cellify("{SH}"), "⠩");
    }

    #[test]
    fn unknown_tag_is_spelled_out() {
        assert_eq!(cellify("{zq}"), "⠵⠟");
    }

    #[test]
    fn capitals() {
        assert_eq!(cellify("Ra"), "⠠⠗⠁");
        assert_eq!(cellify("{Upper}{out}"), "⠠⠠⠳");
        assert_eq!(cellify("{Capital}{the}"), "⠠⠮");
    }

    #[test]
    fn numbers_get_one_indicator() {
        assert_eq!(cellify("42"), "⠼⠙⠃");
        assert_eq!(cellify("3.5"), "⠼⠉⠲⠑");
        assert_eq!(cellify("1-2"), "⠼⠁⠤⠃");
        assert_eq!(cellify("1 2"), "⠼⠁ ⠼⠃");
    }

    #[test]
    fn letter_after_digit() {
        assert_eq!(cellify("2a"), "⠼⠃⠰⠁");
        assert_eq!(cellify("2z"), "⠼⠃⠵");
    }

    #[test]
    fn punctuation_and_other_characters() {
        assert_eq!(cellify("a, b."), "⠁⠂ ⠃⠲");
        assert_eq!(cellify("#"), "#");
    }

    #[test]
    fn unterminated_brace_is_kept() {
        assert_eq!(cellify("{ab"), "{⠁⠃");
    }
}
