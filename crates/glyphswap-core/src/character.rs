// Character classes shared by the scheduler and the encoders

// ---------------------------------------------------------------------------
// Trailing punctuation
// ---------------------------------------------------------------------------

/// Check whether a character may be stripped from the end of a word before
/// it is handed to an encoder (and reattached after the replacement).
pub fn is_trailing_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | '!'
            | '?'
            | ';'
            | ':'
            | ')'
            | ']'
            | '}'
            | '\''
            | '"'
            | '\u{2026}' // HORIZONTAL ELLIPSIS
    )
}

/// Split a word into its clean part and its trailing punctuation run.
///
/// The clean part is never empty: a token made only of punctuation keeps its
/// first character as the clean word, so `"?!"` splits into `("?", "!")`.
pub fn split_trailing_punctuation(word: &str) -> (&str, &str) {
    let Some(first) = word.chars().next() else {
        return (word, "");
    };

    let mut split = word.len();
    for (idx, c) in word.char_indices().rev() {
        if idx < first.len_utf8() || !is_trailing_punctuation(c) {
            break;
        }
        split = idx;
    }

    word.split_at(split)
}

// ---------------------------------------------------------------------------
// Numeral delimiters
// ---------------------------------------------------------------------------

/// Characters that separate the numeric parts of a delimited number such as
/// `192.168.1.1` or `10/20/30`.
pub const NUMERAL_DELIMITERS: &[char] = &[
    '/',
    '-',
    '.',
    '\u{00B7}', // MIDDLE DOT
    '\u{2022}', // BULLET
    '\u{2013}', // EN DASH
    '\u{2014}', // EM DASH
    '_',
    ':',
    ';',
    ',',
    ' ',
    '\u{00A0}', // NO-BREAK SPACE
    '\u{2027}', // HYPHENATION POINT
];

/// Check whether a character is a numeral delimiter.
pub fn is_numeral_delimiter(c: char) -> bool {
    NUMERAL_DELIMITERS.contains(&c)
}

/// Check whether a word consists only of ASCII letters (and is non-empty).
pub fn is_ascii_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_plain_word() {
        assert_eq!(split_trailing_punctuation("hello"), ("hello", ""));
    }

    #[test]
    fn split_single_trailing_mark() {
        assert_eq!(split_trailing_punctuation("hello,"), ("hello", ","));
        assert_eq!(split_trailing_punctuation("end."), ("end", "."));
    }

    #[test]
    fn split_trailing_run() {
        assert_eq!(split_trailing_punctuation("really?!\""), ("really", "?!\""));
        assert_eq!(split_trailing_punctuation("(see)."), ("(see", ")."));
    }

    #[test]
    fn split_keeps_leading_punctuation() {
        assert_eq!(split_trailing_punctuation("\"quoted"), ("\"quoted", ""));
    }

    #[test]
    fn split_punctuation_only_keeps_first_char() {
        assert_eq!(split_trailing_punctuation("?!"), ("?", "!"));
        assert_eq!(split_trailing_punctuation("."), (".", ""));
    }

    #[test]
    fn split_empty() {
        assert_eq!(split_trailing_punctuation(""), ("", ""));
    }

    #[test]
    fn split_multibyte_ellipsis() {
        assert_eq!(split_trailing_punctuation("wait\u{2026}"), ("wait", "\u{2026}"));
    }

    #[test]
    fn numeral_delimiters() {
        assert!(is_numeral_delimiter('.'));
        assert!(is_numeral_delimiter('-'));
        assert!(is_numeral_delimiter('\u{2013}'));
        assert!(!is_numeral_delimiter('x'));
        assert!(!is_numeral_delimiter('5'));
    }

    #[test]
    fn ascii_alphabetic_words() {
        assert!(is_ascii_alphabetic_word("Hello"));
        assert!(!is_ascii_alphabetic_word(""));
        assert!(!is_ascii_alphabetic_word("hello1"));
        assert!(!is_ascii_alphabetic_word("caf\u{00E9}"));
    }
}
