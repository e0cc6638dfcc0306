// Katakana and hiragana from the English-to-katakana dictionary

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use glyphswap_core::case::fold_case;
use glyphswap_core::kana::katakana_to_hiragana;
use glyphswap_core::{EncoderKey, EncoderOptions};

use crate::document::{Dictionary, next_document, parse_dictionary};
use crate::encoder::{Encoder, EncoderError};
use crate::loader::Document;
use crate::lookup::choose;

pub const ENG_KANA: &str = "eng-kana";

/// Case-folded English word -> katakana spellings.
#[derive(Debug, Default)]
struct KanaDictionary {
    words: Dictionary<String>,
}

impl KanaDictionary {
    fn install(&mut self, documents: Vec<Document>) -> Result<(), EncoderError> {
        let mut documents = documents.into_iter();
        self.words = parse_dictionary(ENG_KANA, next_document(&mut documents, ENG_KANA)?)?;
        Ok(())
    }

    fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&fold_case(word))
    }

    fn pick(&self, word: &str, rng: &mut ChaCha8Rng) -> Option<String> {
        let entries = self.words.get(&fold_case(word))?;
        let picked = choose(rng, entries).cloned();
        if picked.is_none() {
            log::debug!("{ENG_KANA}: no spellings for {word:?}");
        }
        picked
    }
}

// ---------------------------------------------------------------------------
// Katakana
// ---------------------------------------------------------------------------

/// Picks a random katakana spelling of a word longer than two characters.
#[derive(Debug)]
pub struct KatakanaEncoder {
    dictionary: KanaDictionary,
    rng: ChaCha8Rng,
}

impl KatakanaEncoder {
    pub fn new(seed: u64) -> Self {
        Self {
            dictionary: KanaDictionary::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Encoder for KatakanaEncoder {
    fn key(&self) -> EncoderKey {
        EncoderKey::Katakana
    }

    fn title(&self) -> &'static str {
        "Katakana"
    }

    fn description(&self) -> &'static str {
        "Converts English words to Katakana"
    }

    fn is_neglectable(&self) -> bool {
        true
    }

    fn data_sources(&self) -> &'static [&'static str] {
        &[ENG_KANA]
    }

    fn install(&mut self, documents: Vec<Document>) -> Result<(), EncoderError> {
        self.dictionary.install(documents)
    }

    fn can_handle(&self, word: &str, _options: &EncoderOptions) -> bool {
        word.chars().count() > 2 && self.dictionary.contains(word)
    }

    fn transform(&mut self, word: &str, _options: &EncoderOptions) -> Option<String> {
        self.dictionary.pick(word, &mut self.rng)
    }
}

// ---------------------------------------------------------------------------
// Hiragana
// ---------------------------------------------------------------------------

/// Picks a random katakana spelling of a word and writes it in hiragana.
#[derive(Debug)]
pub struct HiraganaEncoder {
    dictionary: KanaDictionary,
    rng: ChaCha8Rng,
}

impl HiraganaEncoder {
    pub fn new(seed: u64) -> Self {
        Self {
            dictionary: KanaDictionary::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Encoder for HiraganaEncoder {
    fn key(&self) -> EncoderKey {
        EncoderKey::Hiragana
    }

    fn title(&self) -> &'static str {
        "Hiragana"
    }

    fn description(&self) -> &'static str {
        "Converts English words to Hiragana"
    }

    fn is_neglectable(&self) -> bool {
        true
    }

    fn data_sources(&self) -> &'static [&'static str] {
        &[ENG_KANA]
    }

    fn install(&mut self, documents: Vec<Document>) -> Result<(), EncoderError> {
        self.dictionary.install(documents)
    }

    fn can_handle(&self, word: &str, _options: &EncoderOptions) -> bool {
        self.dictionary.contains(word)
    }

    fn transform(&mut self, word: &str, _options: &EncoderOptions) -> Option<String> {
        self.dictionary
            .pick(word, &mut self.rng)
            .map(|katakana| katakana_to_hiragana(&katakana))
    }
}
