// Pronunciation and phoneme tables

use hashbrown::HashMap;
use serde::Deserialize;

use glyphswap_core::case::fold_case;

use crate::document::{Dictionary, OrderedEntries, fold_entries, parse_document};
use crate::encoder::EncoderError;
use crate::loader::Document;

/// Stress marks removed from transcriptions before segmentation.
const STRESS_MARKS: &[char] = &['\u{02C8}', '\u{02CC}']; // ˈ ˌ

// ---------------------------------------------------------------------------
// PronunciationTable
// ---------------------------------------------------------------------------

/// Case-folded word -> phonemic transcriptions, in dictionary order.
#[derive(Debug, Clone, Default)]
pub struct PronunciationTable {
    entries: Dictionary<String>,
}

impl PronunciationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a `word-to-ipa` document: `[[word, [ipa, ...]], ...]` or
    /// `{word: [ipa, ...]}`.
    pub fn from_document(document: Document) -> Result<Self, EncoderError> {
        let entries: OrderedEntries<Vec<String>> = parse_document("word-to-ipa", document)?;
        Ok(Self {
            entries: fold_entries(entries),
        })
    }

    /// Append a transcription for a word.
    pub fn insert(&mut self, word: &str, transcription: impl Into<String>) {
        self.entries
            .entry(fold_case(word))
            .or_default()
            .push(transcription.into());
    }

    /// Transcriptions of a word, in any case.
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(&fold_case(word)).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&fold_case(word))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// PhonemeTable
// ---------------------------------------------------------------------------

/// Target glyph and weight of one phoneme.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhonemeMapping {
    #[serde(alias = "hiragana")]
    pub glyph: String,
    #[serde(alias = "score")]
    pub weight: f64,
}

impl PhonemeMapping {
    pub fn new(glyph: impl Into<String>, weight: f64) -> Self {
        Self {
            glyph: glyph.into(),
            weight,
        }
    }
}

/// Phoneme -> glyph mapping plus the segmentation inventory.
///
/// The inventory holds every phoneme key, longest first (by character
/// count, ties by key), so segmentation always tries the longest match.
#[derive(Debug, Clone, Default)]
pub struct PhonemeTable {
    mappings: HashMap<String, PhonemeMapping>,
    inventory: Vec<String>,
}

impl PhonemeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an `ipa-to-kana` document:
    /// `{phoneme: {glyph|hiragana, weight|score}}`.
    pub fn from_document(document: Document) -> Result<Self, EncoderError> {
        let entries: OrderedEntries<PhonemeMapping> = parse_document("ipa-to-kana", document)?;
        Ok(entries.0.into_iter().collect())
    }

    /// Add or replace a mapping. Empty phonemes are ignored.
    pub fn insert(&mut self, phoneme: impl Into<String>, mapping: PhonemeMapping) {
        let phoneme = phoneme.into();
        if phoneme.is_empty() {
            return;
        }
        if self.mappings.insert(phoneme.clone(), mapping).is_none() {
            self.inventory.push(phoneme);
            sort_inventory(&mut self.inventory);
        }
    }

    pub fn get(&self, phoneme: &str) -> Option<&PhonemeMapping> {
        self.mappings.get(phoneme)
    }

    /// Phoneme keys, longest first.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Split a transcription into phonemes.
    ///
    /// Stress marks are dropped first. At each position the longest
    /// inventory entry that matches is taken; a character that starts no
    /// entry is skipped.
    pub fn segment(&self, transcription: &str) -> Vec<&str> {
        let cleaned: String = transcription
            .chars()
            .filter(|c| !STRESS_MARKS.contains(c))
            .collect();

        let mut phonemes = Vec::new();
        let mut rest = cleaned.as_str();
        while let Some(c) = rest.chars().next() {
            match self.inventory.iter().find(|p| rest.starts_with(p.as_str())) {
                Some(phoneme) => {
                    phonemes.push(phoneme.as_str());
                    rest = &rest[phoneme.len()..];
                }
                None => rest = &rest[c.len_utf8()..],
            }
        }
        phonemes
    }
}

impl FromIterator<(String, PhonemeMapping)> for PhonemeTable {
    fn from_iter<I: IntoIterator<Item = (String, PhonemeMapping)>>(iter: I) -> Self {
        let mut mappings = HashMap::new();
        for (phoneme, mapping) in iter {
            if !phoneme.is_empty() {
                mappings.insert(phoneme, mapping);
            }
        }
        let mut inventory: Vec<String> = mappings.keys().cloned().collect();
        sort_inventory(&mut inventory);
        Self {
            mappings,
            inventory,
        }
    }
}

fn sort_inventory(inventory: &mut [String]) {
    inventory.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
}
