// Encoder registry
//
// One slot per encoder key, built on first request and kept for the life of
// the registry. The registry is an explicit object owned by the caller and
// shared with the scheduler by reference.

use std::cell::RefCell;
use std::rc::Rc;

use hashbrown::HashMap;

use glyphswap_core::EncoderKey;
use glyphswap_core::config::DEFAULT_SEED;

use crate::braille::BrailleEncoder;
use crate::encoder::Encoder;
use crate::lifecycle::EncoderSlot;
use crate::loader::DataLoader;
use crate::lookup::{CockneyEncoder, HiraganaEncoder, KatakanaEncoder, TrueKanaEncoder};
use crate::morse::MorseEncoder;
use crate::numeral::{DelimitedNumberEncoder, Hexadecimal, RomanNumerals};
use crate::phonetic::PhoneticEncoder;

/// Derive the seed of one encoder's generator from the registry seed.
pub fn encoder_seed(seed: u64, key: EncoderKey) -> u64 {
    seed.wrapping_add((key as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Construct the encoder for a key.
pub fn create_encoder(key: EncoderKey, seed: u64) -> Box<dyn Encoder> {
    let seed = encoder_seed(seed, key);
    match key {
        EncoderKey::Braille => Box::new(BrailleEncoder::new()),
        EncoderKey::Morse => Box::new(MorseEncoder::new()),
        EncoderKey::Katakana => Box::new(KatakanaEncoder::new(seed)),
        EncoderKey::TrueKana => Box::new(TrueKanaEncoder::new()),
        EncoderKey::Hiragana => Box::new(HiraganaEncoder::new(seed)),
        EncoderKey::Phonetic => Box::new(PhoneticEncoder::new()),
        EncoderKey::Roman => Box::new(DelimitedNumberEncoder::new(RomanNumerals)),
        EncoderKey::Hex => Box::new(DelimitedNumberEncoder::new(Hexadecimal)),
        EncoderKey::Cockney => Box::new(CockneyEncoder::new(seed)),
    }
}

/// Lazily built, memoized encoder slots.
pub struct Registry {
    loader: Rc<dyn DataLoader>,
    seed: u64,
    slots: RefCell<HashMap<EncoderKey, Rc<EncoderSlot>>>,
}

impl Registry {
    pub fn new(loader: Rc<dyn DataLoader>) -> Self {
        Self::with_seed(loader, DEFAULT_SEED)
    }

    /// Registry whose randomized encoders are seeded from `seed`.
    pub fn with_seed(loader: Rc<dyn DataLoader>, seed: u64) -> Self {
        Self {
            loader,
            seed,
            slots: RefCell::new(HashMap::new()),
        }
    }

    pub fn loader(&self) -> &Rc<dyn DataLoader> {
        &self.loader
    }

    /// Install a specific encoder under its own key, replacing any slot
    /// built earlier.
    pub fn register(&self, encoder: Box<dyn Encoder>) -> Rc<EncoderSlot> {
        let slot = Rc::new(EncoderSlot::new(encoder, Rc::clone(&self.loader)));
        self.slots.borrow_mut().insert(slot.key(), Rc::clone(&slot));
        slot
    }

    /// The slot for a key, constructing it on first request. The encoder is
    /// not initialized.
    pub fn slot(&self, key: EncoderKey) -> Rc<EncoderSlot> {
        if let Some(slot) = self.peek(key) {
            return slot;
        }
        log::debug!("registry: constructing {key}");
        let slot = Rc::new(EncoderSlot::new(
            create_encoder(key, self.seed),
            Rc::clone(&self.loader),
        ));
        self.slots.borrow_mut().insert(key, Rc::clone(&slot));
        slot
    }

    /// The slot for a key if it was already constructed.
    pub fn peek(&self, key: EncoderKey) -> Option<Rc<EncoderSlot>> {
        self.slots.borrow().get(&key).cloned()
    }

    /// The slot for a key, constructed and initialized on first request.
    ///
    /// Initialization failure is not an error here: the slot is returned in
    /// its `Failed` state and answers `false`/`None` from then on.
    pub async fn get(&self, key: EncoderKey) -> Rc<EncoderSlot> {
        let slot = self.slot(key);
        slot.initialize().await;
        slot
    }

    /// Number of constructed slots.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots = self.slots.borrow();
        let mut keys: Vec<&EncoderKey> = slots.keys().collect();
        keys.sort();
        f.debug_struct("Registry")
            .field("seed", &self.seed)
            .field("slots", &keys)
            .finish_non_exhaustive()
    }
}
