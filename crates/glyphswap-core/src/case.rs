// Case type detection for words handed to encoders

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "braille".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Braille".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "McDonald".
    Complex,
    /// All letters are uppercase: "BRAILLE".
    AllUpper,
}

/// Detect the case pattern of a character slice.
///
/// Non-letter characters (digits, punctuation) are ignored when
/// determining the case pattern.
pub fn detect_case(word: &[char]) -> CaseType {
    if word.is_empty() {
        return CaseType::NoLetters;
    }

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if word[0].is_uppercase() {
        first_uc = true;
        no_letters = false;
    }
    if word[0].is_lowercase() {
        all_uc = false;
        no_letters = false;
    }

    for &c in &word[1..] {
        if c.is_uppercase() {
            no_letters = false;
            rest_lc = false;
        }
        if c.is_lowercase() {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Case-fold a word for dictionary lookups.
///
/// Dictionaries are keyed by the lowercase form with surrounding whitespace
/// removed, so "Hello", "HELLO" and " hello " all share one key.
pub fn fold_case(word: &str) -> String {
    word.trim().to_lowercase()
}
