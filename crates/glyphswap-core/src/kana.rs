// Hiragana/katakana conversion by code-point offset

const HIRAGANA_FIRST: u32 = 0x3041;
const HIRAGANA_LAST: u32 = 0x3096;
const KATAKANA_FIRST: u32 = 0x30A1;
const KATAKANA_LAST: u32 = 0x30F6;
const SCRIPT_OFFSET: u32 = KATAKANA_FIRST - HIRAGANA_FIRST;

/// Convert every hiragana character to its katakana counterpart.
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| shift(c, HIRAGANA_FIRST..=HIRAGANA_LAST, |cp| cp + SCRIPT_OFFSET))
        .collect()
}

/// Convert every katakana character to its hiragana counterpart.
///
/// The prolonged sound mark (U+30FC) and the middle dot (U+30FB) have no
/// hiragana form and are kept.
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| shift(c, KATAKANA_FIRST..=KATAKANA_LAST, |cp| cp - SCRIPT_OFFSET))
        .collect()
}

/// Check whether a character is in the hiragana block used for conversion.
pub fn is_hiragana(c: char) -> bool {
    (HIRAGANA_FIRST..=HIRAGANA_LAST).contains(&(c as u32))
}

/// Check whether a character is in the katakana block used for conversion.
pub fn is_katakana(c: char) -> bool {
    (KATAKANA_FIRST..=KATAKANA_LAST).contains(&(c as u32))
}

fn shift(c: char, range: std::ops::RangeInclusive<u32>, f: impl Fn(u32) -> u32) -> char {
    let cp = c as u32;
    if range.contains(&cp) {
        char::from_u32(f(cp)).unwrap_or(c)
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiragana_to_katakana_basic() {
        assert_eq!(hiragana_to_katakana("こんにちは"), "コンニチハ");
        assert_eq!(hiragana_to_katakana("ぁ"), "ァ");
        assert_eq!(hiragana_to_katakana("ゖ"), "ヶ");
    }

    #[test]
    fn katakana_to_hiragana_basic() {
        assert_eq!(katakana_to_hiragana("テスト"), "てすと");
    }

    #[test]
    fn prolonged_mark_and_middle_dot_are_kept() {
        assert_eq!(katakana_to_hiragana("コーヒー"), "こーひー");
        assert_eq!(katakana_to_hiragana("ア・イ"), "あ・い");
    }

    #[test]
    fn other_characters_pass_through() {
        assert_eq!(hiragana_to_katakana("abc 123"), "abc 123");
        assert_eq!(katakana_to_hiragana("漢字"), "漢字");
    }

    #[test]
    fn classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(!is_katakana('ー'));
    }
}
