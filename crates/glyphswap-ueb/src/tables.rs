// Contraction pattern lists and braille cell tables
//
// The pattern lists drive the tagging passes and their order within each
// list is significant. The cell tables map tags and plain characters to
// Unicode braille (U+2800 block).

use std::sync::LazyLock;

use hashbrown::HashMap;

// ---------------------------------------------------------------------------
// Tagging pattern lists
// ---------------------------------------------------------------------------

/// Groupsigns substituted anywhere in a word (last pass).
pub const PART_OF_WORD: &[&str] = &[
    "and", "for", "of", "the", "with", "ch", "sh", "th", "wh", "ou", "st", "ar", "er", "ed", "gh",
    "ow", "en", "in",
];

/// Groupsigns tagged only at the start of a word.
pub const BEGINNING_OF_WORD: &[&str] = &["be", "con", "dis"];

/// Groupsigns tagged only with a letter on both sides.
pub const MIDDLE_OF_WORD: &[&str] = &["bb", "cc", "ea", "ff", "gg", "ing"];

/// Groupsigns tagged only at the end of a word.
pub const END_OF_WORD: &[&str] = &["ing"];

/// Final-letter contractions, tagged inside or at the end of a word.
pub const FINAL_LETTER: &[&str] = &[
    "ound", "ance", "sion", "less", "ount", "ence", "ong", "ful", "tion", "ness", "ment", "ity",
];

/// Initial-letter contractions, tagged anywhere in a word.
pub const INITIAL_LETTER: &[&str] = &[
    "these", "those", "upon", "whose", "word", "cannot", "had", "many", "spirit", "their", "world",
    "character", "day", "ever", "father", "here", "know", "lord", "mother", "name", "one",
    "ought", "part", "question", "right", "some", "there", "through", "time", "under", "where",
    "work", "young",
];

/// Words that are contracted as a whole and never split into parts.
pub const WHOLE_WORD: &[&str] = &[
    "and", "for", "of", "the", "with",
    "child", "shall", "this", "which", "out", "still",
    "but", "can", "do", "every", "from", "go", "have", "just", "knowledge", "like", "more", "not",
    "people", "quite", "rather", "so", "that", "us", "very", "will", "it", "you", "as",
    "be", "enough", "his", "in", "was", "were",
    "about", "above", "according", "across", "after", "afternoon", "afterward", "again",
    "against", "almost", "already", "also", "although", "altogether", "always", "because",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "blind", "braille",
    "children", "conceive", "conceiving", "could", "deceive", "deceiving", "declare",
    "declaring", "either", "first", "friend", "good", "great", "herself", "him", "himself",
    "immediate", "its", "itself", "letter", "little", "much", "must", "myself", "necessary",
    "neither", "oneself", "ourselves", "paid", "perceive", "perceiving", "perhaps", "quick",
    "receive", "receiving", "rejoice", "rejoicing", "said", "should", "such", "themselves",
    "thyself", "today", "together", "tomorrow", "tonight", "would", "your", "yourself",
    "yourselves",
];

/// Whole-word tags that revert to plain letters next to punctuation, with
/// the form they revert to.
pub const PUNCTUATION_SENSITIVE: &[(&str, &str)] = &[
    ("{in}", "in"),
    ("{be}", "be"),
    ("{enough}", "{en}{ou}{gh}"),
    ("{his}", "his"),
    ("{was}", "was"),
    ("{were}", "w{er}e"),
];

// ---------------------------------------------------------------------------
// Indicators
// ---------------------------------------------------------------------------

pub const CAPITAL_INDICATOR: char = '\u{2820}'; // ⠠
pub const NUMERIC_INDICATOR: char = '\u{283C}'; // ⠼
pub const LETTER_INDICATOR: char = '\u{2830}'; // ⠰

/// Indicator tags, matched case-sensitively before any other tag.
pub fn lookup_indicator(tag: &str) -> Option<&'static str> {
    match tag {
        "Upper" => Some("⠠⠠"),
        "Capital" => Some("⠠"),
        "Number" => Some("⠼"),
        "Letter" => Some("⠰"),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Single characters
// ---------------------------------------------------------------------------

const ALPHABET: [char; 26] = [
    '⠁', '⠃', '⠉', '⠙', '⠑', '⠋', '⠛', '⠓', '⠊', '⠚', '⠅', '⠇', '⠍', '⠝', '⠕', '⠏', '⠟', '⠗', '⠎',
    '⠞', '⠥', '⠧', '⠺', '⠭', '⠽', '⠵',
];

/// Cell of an ASCII letter, ignoring case.
pub fn letter_cell(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        Some(ALPHABET[(c.to_ascii_lowercase() as u8 - b'a') as usize])
    } else {
        None
    }
}

/// Cell of an ASCII digit (digits 1-9 and 0 reuse the cells of a-j).
pub fn digit_cell(c: char) -> Option<char> {
    match c {
        '0' => Some(ALPHABET[9]),
        '1'..='9' => Some(ALPHABET[(c as u8 - b'1') as usize]),
        _ => None,
    }
}

/// Cell of a common punctuation mark.
pub fn punctuation_cell(c: char) -> Option<char> {
    match c {
        ',' => Some('⠂'),
        '.' => Some('⠲'),
        '?' => Some('⠦'),
        '!' => Some('⠖'),
        '\'' => Some('⠄'),
        '-' => Some('⠤'),
        ':' => Some('⠒'),
        ';' => Some('⠆'),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Contraction cells
// ---------------------------------------------------------------------------

/// Groupsigns (one cell standing for a letter group).
fn lookup_groupsign(tag: &str) -> Option<&'static str> {
    match tag {
        "and" => Some("⠯"),
        "for" => Some("⠿"),
        "of" => Some("⠷"),
        "the" => Some("⠮"),
        "with" => Some("⠾"),
        "ch" => Some("⠡"),
        "sh" => Some("⠩"),
        "th" => Some("⠹"),
        "wh" => Some("⠱"),
        "ou" => Some("⠳"),
        "st" => Some("⠌"),
        "ar" => Some("⠜"),
        "er" => Some("⠻"),
        "ed" => Some("⠫"),
        "gh" => Some("⠣"),
        "ow" => Some("⠪"),
        "en" => Some("⠢"),
        "in" => Some("⠔"),
        "ing" => Some("⠬"),
        "be" => Some("⠆"),
        "con" => Some("⠒"),
        "dis" => Some("⠲"),
        "bb" => Some("⠆"),
        "cc" => Some("⠒"),
        "ea" => Some("⠂"),
        "ff" => Some("⠖"),
        "gg" => Some("⠶"),
        _ => None,
    }
}

/// Alphabetic, strong and lower wordsigns.
fn lookup_wordsign(tag: &str) -> Option<&'static str> {
    match tag {
        "but" => Some("⠃"),
        "can" => Some("⠉"),
        "do" => Some("⠙"),
        "every" => Some("⠑"),
        "from" => Some("⠋"),
        "go" => Some("⠛"),
        "have" => Some("⠓"),
        "just" => Some("⠚"),
        "knowledge" => Some("⠅"),
        "like" => Some("⠇"),
        "more" => Some("⠍"),
        "not" => Some("⠝"),
        "people" => Some("⠏"),
        "quite" => Some("⠟"),
        "rather" => Some("⠗"),
        "so" => Some("⠎"),
        "that" => Some("⠞"),
        "us" => Some("⠥"),
        "very" => Some("⠧"),
        "will" => Some("⠺"),
        "it" => Some("⠭"),
        "you" => Some("⠽"),
        "as" => Some("⠵"),
        "child" => Some("⠡"),
        "shall" => Some("⠩"),
        "this" => Some("⠹"),
        "which" => Some("⠱"),
        "out" => Some("⠳"),
        "still" => Some("⠌"),
        "enough" => Some("⠢"),
        "his" => Some("⠦"),
        "was" => Some("⠴"),
        "were" => Some("⠶"),
        _ => None,
    }
}

/// Initial-letter contractions: a dots 4-5, 4-5-6 or 5 prefix plus a letter.
fn lookup_initial_letter(tag: &str) -> Option<&'static str> {
    match tag {
        "upon" => Some("⠘⠥"),
        "these" => Some("⠘⠮"),
        "those" => Some("⠘⠹"),
        "whose" => Some("⠘⠱"),
        "word" => Some("⠘⠺"),
        "cannot" => Some("⠸⠉"),
        "had" => Some("⠸⠓"),
        "many" => Some("⠸⠍"),
        "spirit" => Some("⠸⠎"),
        "their" => Some("⠸⠮"),
        "world" => Some("⠸⠺"),
        "character" => Some("⠐⠡"),
        "day" => Some("⠐⠙"),
        "ever" => Some("⠐⠑"),
        "father" => Some("⠐⠋"),
        "here" => Some("⠐⠓"),
        "know" => Some("⠐⠅"),
        "lord" => Some("⠐⠇"),
        "mother" => Some("⠐⠍"),
        "name" => Some("⠐⠝"),
        "one" => Some("⠐⠕"),
        "ought" => Some("⠐⠳"),
        "part" => Some("⠐⠏"),
        "question" => Some("⠐⠟"),
        "right" => Some("⠐⠗"),
        "some" => Some("⠐⠎"),
        "there" => Some("⠐⠮"),
        "through" => Some("⠐⠹"),
        "time" => Some("⠐⠞"),
        "under" => Some("⠐⠥"),
        "where" => Some("⠐⠱"),
        "work" => Some("⠐⠺"),
        "young" => Some("⠐⠽"),
        _ => None,
    }
}

/// Final-letter contractions: a dots 4-6 or 5-6 prefix plus a letter.
fn lookup_final_letter(tag: &str) -> Option<&'static str> {
    match tag {
        "ound" => Some("⠨⠙"),
        "ance" => Some("⠨⠑"),
        "sion" => Some("⠨⠝"),
        "less" => Some("⠨⠎"),
        "ount" => Some("⠨⠞"),
        "ence" => Some("⠰⠑"),
        "ong" => Some("⠰⠛"),
        "ful" => Some("⠰⠇"),
        "tion" => Some("⠰⠝"),
        "ness" => Some("⠰⠎"),
        "ment" => Some("⠰⠞"),
        "ity" => Some("⠰⠽"),
        _ => None,
    }
}

/// Short forms, written as abbreviations in tag notation.
pub const SHORT_FORMS: &[(&str, &str)] = &[
    ("about", "ab"),
    ("above", "abv"),
    ("according", "ac"),
    ("across", "acr"),
    ("after", "af"),
    ("afternoon", "afn"),
    ("afterward", "afw"),
    ("again", "ag"),
    ("against", "ag{st}"),
    ("almost", "alm"),
    ("already", "alr"),
    ("also", "al"),
    ("although", "al{th}"),
    ("altogether", "alt"),
    ("always", "alw"),
    ("because", "{be}c"),
    ("before", "{be}f"),
    ("behind", "{be}h"),
    ("below", "{be}l"),
    ("beneath", "{be}n"),
    ("beside", "{be}s"),
    ("between", "{be}t"),
    ("beyond", "{be}y"),
    ("blind", "bl"),
    ("braille", "brl"),
    ("children", "{ch}n"),
    ("conceive", "{con}cv"),
    ("conceiving", "{con}cvg"),
    ("could", "cd"),
    ("deceive", "dcv"),
    ("deceiving", "dcvg"),
    ("declare", "dcl"),
    ("declaring", "dclg"),
    ("either", "ei"),
    ("first", "f{st}"),
    ("friend", "fr"),
    ("good", "gd"),
    ("great", "grt"),
    ("herself", "h{er}f"),
    ("him", "hm"),
    ("himself", "hmf"),
    ("immediate", "imm"),
    ("its", "xs"),
    ("itself", "xf"),
    ("letter", "lr"),
    ("little", "ll"),
    ("much", "m{ch}"),
    ("must", "m{st}"),
    ("myself", "myf"),
    ("necessary", "nec"),
    ("neither", "nei"),
    ("oneself", "{one}f"),
    ("ourselves", "{ou}rvs"),
    ("paid", "pd"),
    ("perceive", "p{er}cv"),
    ("perceiving", "p{er}cvg"),
    ("perhaps", "p{er}h"),
    ("quick", "qk"),
    ("receive", "rcv"),
    ("receiving", "rcvg"),
    ("rejoice", "rjc"),
    ("rejoicing", "rjcg"),
    ("said", "sd"),
    ("should", "{sh}d"),
    ("such", "s{ch}"),
    ("themselves", "{the}mvs"),
    ("thyself", "{th}yf"),
    ("today", "td"),
    ("together", "tgr"),
    ("tomorrow", "tm"),
    ("tonight", "tn"),
    ("would", "wd"),
    ("your", "yr"),
    ("yourself", "yrf"),
    ("yourselves", "yrvs"),
];

/// Cells of a tag from the fixed contraction tables (no short forms).
fn lookup_fixed(tag: &str) -> Option<&'static str> {
    lookup_groupsign(tag)
        .or_else(|| lookup_wordsign(tag))
        .or_else(|| lookup_initial_letter(tag))
        .or_else(|| lookup_final_letter(tag))
}

/// Short-form cells, built once from their abbreviations.
static SHORT_FORM_CELLS: LazyLock<HashMap<&'static str, String>> = LazyLock::new(|| {
    SHORT_FORMS
        .iter()
        .map(|&(word, abbreviation)| (word, abbreviation_cells(abbreviation)))
        .collect()
});

/// Render an abbreviation: `{tag}` groups through the fixed tables, other
/// letters through the alphabet.
fn abbreviation_cells(abbreviation: &str) -> String {
    let mut out = String::new();
    let mut rest = abbreviation;
    while let Some(c) = rest.chars().next() {
        if c == '{' {
            if let Some(close) = rest.find('}') {
                let tag = &rest[1..close];
                match lookup_fixed(tag) {
                    Some(cells) => out.push_str(cells),
                    None => out.extend(tag.chars().filter_map(letter_cell)),
                }
                rest = &rest[close + 1..];
                continue;
            }
        }
        out.push(letter_cell(c).unwrap_or(c));
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Look up the cells for the content of a `{tag}`.
///
/// Indicators match exactly; every other tag is matched case-insensitively
/// against the groupsign, wordsign, initial-letter, final-letter and
/// short-form tables.
pub fn lookup_tag(tag: &str) -> Option<&'static str> {
    if let Some(cells) = lookup_indicator(tag) {
        return Some(cells);
    }
    let lower = tag.to_ascii_lowercase();
    lookup_fixed(&lower).or_else(|| SHORT_FORM_CELLS.get(lower.as_str()).map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits() {
        assert_eq!(letter_cell('a'), Some('⠁'));
        assert_eq!(letter_cell('Z'), Some('⠵'));
        assert_eq!(letter_cell('1'), None);
        assert_eq!(digit_cell('1'), Some('⠁'));
        assert_eq!(digit_cell('0'), Some('⠚'));
        assert_eq!(digit_cell('x'), None);
    }

    #[test]
    fn every_whole_word_has_cells() {
        for word in WHOLE_WORD {
            assert!(lookup_tag(word).is_some(), "no cells for whole word {word}");
        }
    }

    #[test]
    fn every_pattern_has_cells() {
        let lists = [
            PART_OF_WORD,
            BEGINNING_OF_WORD,
            MIDDLE_OF_WORD,
            END_OF_WORD,
            FINAL_LETTER,
            INITIAL_LETTER,
        ];
        for list in lists {
            for pattern in list {
                assert!(lookup_tag(pattern).is_some(), "no cells for {pattern}");
            }
        }
    }

    #[test]
    fn short_forms_use_nested_groupsigns() {
        assert_eq!(lookup_tag("about"), Some("⠁⠃"));
        assert_eq!(lookup_tag("against"), Some("⠁⠛⠌"));
        assert_eq!(lookup_tag("because"), Some("⠆⠉"));
        assert_eq!(lookup_tag("oneself"), Some("⠐⠕⠋"));
        assert_eq!(lookup_tag("little"), Some("⠇⠇"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup_tag("THE"), Some("⠮"));
        assert_eq!(lookup_tag("Tion"), Some("⠰⠝"));
    }

    #[test]
    fn indicators_match_exactly() {
        assert_eq!(lookup_tag("Upper"), Some("⠠⠠"));
        assert_eq!(lookup_tag("Letter"), Some("⠰"));
        // lower-case "letter" is the short form, not the indicator
        assert_eq!(lookup_tag("letter"), Some("⠇⠗"));
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(lookup_tag("xyz"), None);
    }
}
