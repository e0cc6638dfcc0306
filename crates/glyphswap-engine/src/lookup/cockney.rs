// Cockney rhyming slang

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use glyphswap_core::case::fold_case;
use glyphswap_core::options::CockneyOptions;
use glyphswap_core::{EncoderKey, EncoderOptions};

use crate::document::{Dictionary, next_document, parse_dictionary};
use crate::encoder::{Encoder, EncoderError};
use crate::loader::Document;
use crate::lookup::choose;

pub const COCKNEY: &str = "cockney";

/// A rhyming slang entry, e.g. stairs -> "apples and pears" / "apples".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CockneyEntry {
    pub english: String,
    /// The full rhyme.
    pub rhyme: String,
    /// The shortened slang actually spoken.
    pub cockney: String,
    pub notes: String,
    pub synonyms: Vec<String>,
}

impl CockneyEntry {
    fn rendering(&self, full_rhyme: bool) -> &str {
        if full_rhyme {
            self.rhyme.as_str()
        } else {
            self.cockney.as_str()
        }
    }
}

#[derive(Debug)]
pub struct CockneyEncoder {
    words: Dictionary<CockneyEntry>,
    rng: ChaCha8Rng,
}

impl CockneyEncoder {
    pub fn new(seed: u64) -> Self {
        Self {
            words: Dictionary::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Encoder for CockneyEncoder {
    fn key(&self) -> EncoderKey {
        EncoderKey::Cockney
    }

    fn title(&self) -> &'static str {
        "Cockney"
    }

    fn description(&self) -> &'static str {
        "Converts English words to Cockney rhyming slang"
    }

    fn is_neglectable(&self) -> bool {
        true
    }

    fn data_sources(&self) -> &'static [&'static str] {
        &[COCKNEY]
    }

    fn install(&mut self, documents: Vec<Document>) -> Result<(), EncoderError> {
        let mut documents = documents.into_iter();
        self.words = parse_dictionary(COCKNEY, next_document(&mut documents, COCKNEY)?)?;
        Ok(())
    }

    fn can_handle(&self, word: &str, _options: &EncoderOptions) -> bool {
        !word.is_empty() && self.words.contains_key(&fold_case(word))
    }

    fn transform(&mut self, word: &str, options: &EncoderOptions) -> Option<String> {
        let full_rhyme = match options {
            EncoderOptions::Cockney(CockneyOptions { full_rhyme }) => *full_rhyme,
            _ => false,
        };
        let entries = self.words.get(&fold_case(word))?;
        let entry = choose(&mut self.rng, entries)?;
        let text = entry.rendering(full_rhyme);
        if text.is_empty() {
            log::debug!("{COCKNEY}: entry for {word:?} has no rendering");
            return None;
        }
        Some(text.to_string())
    }
}
