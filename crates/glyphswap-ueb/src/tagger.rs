// Multi-pass contraction tagging
//
// A word is tagged by running the pattern lists in a fixed order. Every
// accepted match marks its characters as protected, and later passes reject
// any candidate that touches a protected character, so tagged spans never
// overlap or nest.

use glyphswap_core::case::{CaseType, detect_case};

use crate::tables::{
    BEGINNING_OF_WORD, END_OF_WORD, FINAL_LETTER, INITIAL_LETTER, MIDDLE_OF_WORD, PART_OF_WORD,
    PUNCTUATION_SENSITIVE, WHOLE_WORD,
};

// ---------------------------------------------------------------------------
// Protected-span tagging of a single word
// ---------------------------------------------------------------------------

/// A word being tagged: its characters plus the accepted tag spans.
struct Tagging {
    chars: Vec<char>,
    protected: Vec<bool>,
    /// Accepted spans as `(start, end)` character ranges, end exclusive.
    spans: Vec<(usize, usize)>,
}

impl Tagging {
    fn new(word: &str) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let protected = vec![false; chars.len()];
        Self {
            chars,
            protected,
            spans: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check whether `pattern` occurs at `start` and none of its characters
    /// are already tagged.
    fn is_free_match(&self, pattern: &[char], start: usize) -> bool {
        let end = start + pattern.len();
        end <= self.len()
            && self.chars[start..end] == *pattern
            && !self.protected[start..end].iter().any(|&p| p)
    }

    fn accept(&mut self, start: usize, end: usize) {
        for flag in &mut self.protected[start..end] {
            *flag = true;
        }
        self.spans.push((start, end));
    }

    /// Tag every non-overlapping occurrence, scanning left to right.
    fn tag_anywhere(&mut self, pattern: &str) {
        let pattern: Vec<char> = pattern.chars().collect();
        let mut i = 0;
        while i + pattern.len() <= self.len() {
            if self.is_free_match(&pattern, i) {
                self.accept(i, i + pattern.len());
                i += pattern.len();
            } else {
                i += 1;
            }
        }
    }

    /// Tag occurrences with at least one character on each side.
    ///
    /// A match uses up its two neighbours, so the leading neighbour of the
    /// next match must come after the trailing neighbour of the previous one.
    fn tag_middle(&mut self, pattern: &str) {
        let pattern: Vec<char> = pattern.chars().collect();
        let mut i = 1;
        while i + pattern.len() < self.len() {
            if self.is_free_match(&pattern, i) {
                let end = i + pattern.len();
                self.accept(i, end);
                i = end + 2;
            } else {
                i += 1;
            }
        }
    }

    /// Tag the pattern when it starts the word and is followed by more.
    fn tag_begin(&mut self, pattern: &str) {
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.len() < self.len() && self.is_free_match(&pattern, 0) {
            self.accept(0, pattern.len());
        }
    }

    /// Tag the pattern when it ends the word and is preceded by more.
    fn tag_end(&mut self, pattern: &str) {
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.len() >= self.len() {
            return;
        }
        let start = self.len() - pattern.len();
        if self.is_free_match(&pattern, start) {
            self.accept(start, self.len());
        }
    }

    fn render(mut self) -> String {
        self.spans.sort_unstable();
        let mut out = String::with_capacity(self.len() + 2 * self.spans.len());
        let mut spans = self.spans.iter().peekable();
        let mut i = 0;
        while i < self.len() {
            match spans.peek() {
                Some(&&(start, end)) if start == i => {
                    out.push('{');
                    out.extend(&self.chars[start..end]);
                    out.push('}');
                    i = end;
                    spans.next();
                }
                _ => {
                    out.push(self.chars[i]);
                    i += 1;
                }
            }
        }
        out
    }
}

/// Tag a single word (letters only) with braille contractions.
///
/// Passes run in this order: whole word, initial-letter contractions,
/// final-letter contractions, beginning-of-word, end-of-word,
/// middle-of-word, then part-of-word groupsigns.
pub fn tag_word(word: &str) -> String {
    if WHOLE_WORD.contains(&word) || INITIAL_LETTER.contains(&word) {
        return format!("{{{word}}}");
    }

    let mut tagging = Tagging::new(word);

    for pattern in INITIAL_LETTER {
        tagging.tag_anywhere(pattern);
    }
    for pattern in FINAL_LETTER {
        tagging.tag_middle(pattern);
        tagging.tag_end(pattern);
    }
    for pattern in BEGINNING_OF_WORD {
        tagging.tag_begin(pattern);
    }
    for pattern in END_OF_WORD {
        tagging.tag_end(pattern);
    }
    for pattern in MIDDLE_OF_WORD {
        tagging.tag_middle(pattern);
    }
    for pattern in PART_OF_WORD {
        tagging.tag_anywhere(pattern);
    }

    flatten_nested_tags(&tagging.render())
}

// ---------------------------------------------------------------------------
// Text-level tagging
// ---------------------------------------------------------------------------

/// Tag every word of a text.
///
/// The text is split into maximal runs of ASCII letters; runs shorter than
/// two letters and all other characters are copied unchanged. Literal braces
/// in the input are dropped so they cannot be mistaken for tags.
pub fn tag(text: &str) -> String {
    let chars: Vec<char> = text.chars().filter(|&c| c != '{' && c != '}').collect();
    let mut out = String::with_capacity(text.len() + 8);

    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_alphabetic() {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i].is_ascii_alphabetic() {
            i += 1;
        }
        tag_run(&chars[start..i], &mut out);
    }

    flatten_nested_tags(&revert_punctuation_sensitive(&out))
}

fn tag_run(run: &[char], out: &mut String) {
    if run.len() <= 1 {
        out.extend(run);
        return;
    }

    let written: String = run.iter().collect();
    match detect_case(run) {
        CaseType::AllUpper => {
            out.push_str("{Upper}");
            out.push_str(&tag_word(&written.to_ascii_lowercase()));
        }
        CaseType::FirstUpper => {
            let tagged = tag_word(&written.to_ascii_lowercase());
            if tagged.starts_with(|c: char| c.is_ascii_lowercase()) {
                // keep the capital letter itself
                out.push(run[0]);
                out.push_str(&tagged[1..]);
            } else {
                out.push_str("{Capital}");
                out.push_str(&tagged);
            }
        }
        CaseType::AllLower | CaseType::Complex | CaseType::NoLetters => {
            out.push_str(&tag_word(&written));
        }
    }
}

// ---------------------------------------------------------------------------
// Punctuation adjacency
// ---------------------------------------------------------------------------

/// A character that counts as punctuation next to a whole-word tag.
fn is_adjacent_punctuation(c: char) -> bool {
    !c.is_whitespace() && !c.is_alphanumeric() && c != '_' && c != '{' && c != '}'
}

fn is_space_or_punctuation(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => c.is_whitespace() || is_adjacent_punctuation(c),
    }
}

/// Revert the short whole-word forms that touch punctuation.
///
/// A form reverts when one neighbour is punctuation and the other is
/// punctuation, whitespace or the edge of the text.
fn revert_punctuation_sensitive(text: &str) -> String {
    let mut current = text.to_string();
    for &(form, plain) in PUNCTUATION_SENSITIVE {
        let mut out = String::with_capacity(current.len());
        let mut rest = current.as_str();
        let mut before: Option<char> = None;
        while let Some(at) = rest.find(form) {
            let head = &rest[..at];
            out.push_str(head);
            if let Some(c) = head.chars().next_back() {
                before = Some(c);
            }
            let tail = &rest[at + form.len()..];
            let after = tail.chars().next();

            let before_punct = before.is_some_and(is_adjacent_punctuation);
            let after_punct = after.is_some_and(is_adjacent_punctuation);
            let reverts = (before_punct && is_space_or_punctuation(after))
                || (after_punct && is_space_or_punctuation(before));

            out.push_str(if reverts { plain } else { form });
            before = form.chars().next_back();
            rest = tail;
        }
        out.push_str(rest);
        current = out;
    }
    current
}

// ---------------------------------------------------------------------------
// Brace flattening
// ---------------------------------------------------------------------------

/// Collapse nested tag braces, keeping only the outermost pair.
///
/// `"{h{er}e}"` becomes `"{here}"`. Unbalanced closing braces are dropped.
pub fn flatten_nested_tags(tagged: &str) -> String {
    let mut out = String::with_capacity(tagged.len());
    let mut depth = 0usize;
    for c in tagged.chars() {
        match c {
            '{' => {
                depth += 1;
                if depth == 1 {
                    out.push(c);
                }
            }
            '}' => {
                if depth == 1 {
                    out.push(c);
                }
                depth = depth.saturating_sub(1);
            }
            _ => out.push(c),
        }
    }
    out
}
