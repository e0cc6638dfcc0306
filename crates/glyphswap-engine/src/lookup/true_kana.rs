// True katakana: established loan words

use serde::Deserialize;

use glyphswap_core::case::fold_case;
use glyphswap_core::options::{TrueKanaMode, TrueKanaOptions};
use glyphswap_core::{EncoderKey, EncoderOptions};

use crate::document::{Dictionary, next_document, parse_dictionary};
use crate::encoder::{Encoder, EncoderError};
use crate::loader::Document;

pub const TRUE_KANA: &str = "true-kana";

/// One katakana loan word for an English word.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrueKanaEntry {
    /// The loan word is a direct transliteration rather than a word whose
    /// meaning drifted in Japanese.
    #[serde(default)]
    pub is_transliteration: bool,
    pub katakana: String,
}

impl TrueKanaEntry {
    fn allowed(&self, mode: TrueKanaMode) -> bool {
        match mode {
            TrueKanaMode::AllWords => true,
            TrueKanaMode::OnlyTransliterations => self.is_transliteration,
        }
    }
}

fn mode_of(options: &EncoderOptions) -> TrueKanaMode {
    match options {
        EncoderOptions::TrueKana(TrueKanaOptions { mode }) => *mode,
        _ => TrueKanaMode::default(),
    }
}

/// Replaces a word with its established katakana loan word.
///
/// Unlike the dictionary katakana encoder this one is deterministic: the
/// first entry allowed by the mode always wins.
#[derive(Debug, Default)]
pub struct TrueKanaEncoder {
    words: Dictionary<TrueKanaEntry>,
}

impl TrueKanaEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    fn first_entry(&self, word: &str, mode: TrueKanaMode) -> Option<&TrueKanaEntry> {
        self.words
            .get(&fold_case(word))?
            .iter()
            .find(|entry| entry.allowed(mode))
    }
}

impl Encoder for TrueKanaEncoder {
    fn key(&self) -> EncoderKey {
        EncoderKey::TrueKana
    }

    fn title(&self) -> &'static str {
        "True Katakana"
    }

    fn description(&self) -> &'static str {
        "Converts English words to authentic Katakana loan words"
    }

    fn is_neglectable(&self) -> bool {
        true
    }

    fn data_sources(&self) -> &'static [&'static str] {
        &[TRUE_KANA]
    }

    fn install(&mut self, documents: Vec<Document>) -> Result<(), EncoderError> {
        let mut documents = documents.into_iter();
        self.words = parse_dictionary(TRUE_KANA, next_document(&mut documents, TRUE_KANA)?)?;
        Ok(())
    }

    fn can_handle(&self, word: &str, options: &EncoderOptions) -> bool {
        word.chars().count() >= 2 && self.first_entry(word, mode_of(options)).is_some()
    }

    fn transform(&mut self, word: &str, options: &EncoderOptions) -> Option<String> {
        let mode = mode_of(options);
        match self.first_entry(word, mode) {
            Some(entry) => Some(entry.katakana.clone()),
            None => {
                log::debug!("{TRUE_KANA}: no {mode:?} entry for {word:?}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encoder() -> TrueKanaEncoder {
        let mut e = TrueKanaEncoder::new();
        e.install(vec![json!({
            "computer": [{"isTransliteration": true, "katakana": "コンピューター"}],
            "mansion": [
                {"isTransliteration": false, "katakana": "マンション"}
            ],
            "smart": [
                {"isTransliteration": false, "katakana": "スマート"},
                {"isTransliteration": true, "katakana": "スマート2"}
            ],
            "a": [{"isTransliteration": true, "katakana": "ア"}]
        })])
        .unwrap();
        e
    }

    fn mode(mode: TrueKanaMode) -> EncoderOptions {
        EncoderOptions::TrueKana(TrueKanaOptions { mode })
    }

    #[test]
    fn transliterations_only_by_default() {
        let mut e = encoder();
        assert!(e.can_handle("Computer", &EncoderOptions::None));
        assert!(!e.can_handle("mansion", &EncoderOptions::None));
        assert_eq!(e.transform("mansion", &EncoderOptions::None), None);
        assert_eq!(
            e.transform("COMPUTER", &EncoderOptions::None),
            Some("コンピューター".to_string())
        );
    }

    #[test]
    fn all_words_mode() {
        let mut e = encoder();
        let all = mode(TrueKanaMode::AllWords);
        assert!(e.can_handle("mansion", &all));
        assert_eq!(e.transform("mansion", &all), Some("マンション".to_string()));
    }

    #[test]
    fn first_valid_entry_wins() {
        let mut e = encoder();
        assert_eq!(
            e.transform("smart", &mode(TrueKanaMode::OnlyTransliterations)),
            Some("スマート2".to_string())
        );
        assert_eq!(
            e.transform("smart", &mode(TrueKanaMode::AllWords)),
            Some("スマート".to_string())
        );
    }

    #[test]
    fn single_letter_words_are_refused() {
        let e = encoder();
        assert!(!e.can_handle("a", &mode(TrueKanaMode::AllWords)));
        assert!(!e.can_handle("", &mode(TrueKanaMode::AllWords)));
    }

    #[test]
    fn transliteration_flag_defaults_to_false() {
        let mut e = TrueKanaEncoder::new();
        e.install(vec![json!({"bread": [{"katakana": "パン"}]})])
            .unwrap();
        assert!(!e.can_handle("bread", &EncoderOptions::None));
        assert!(e.can_handle("bread", &mode(TrueKanaMode::AllWords)));
    }
}
