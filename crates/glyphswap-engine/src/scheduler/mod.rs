// Per-word selection scheduler
//
// For every word token: roll the swap-frequency gate, strip trailing
// punctuation, offer the word to the neglected queue, then to every enabled
// encoder in canonical order, and pick one viable encoder at random. Tokens
// are processed one at a time; `&mut self` keeps two passes from
// interleaving on the same queue.

pub mod neglect;

use std::cell::Cell;
use std::rc::Rc;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use glyphswap_core::character::split_trailing_punctuation;
use glyphswap_core::token::tokenize;
use glyphswap_core::{EncoderKey, Swap, SwapConfig};

use crate::registry::Registry;

pub use neglect::NeglectedQueue;

/// Error returned by a processing pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    #[error("processing cancelled")]
    Cancelled,
}

/// Shared teardown flag for a page or session.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// What happened to one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapAttempt {
    /// The token as it appeared in the text.
    pub token: String,
    /// The token without its trailing punctuation.
    pub word: String,
    pub punctuation: String,
    /// The encoder that was chosen, if any.
    pub encoder: Option<EncoderKey>,
    pub swap: Option<Swap>,
}

impl SwapAttempt {
    /// A token left as it is.
    pub fn unchanged(token: &str) -> Self {
        Self {
            token: token.to_string(),
            word: token.to_string(),
            punctuation: String::new(),
            encoder: None,
            swap: None,
        }
    }

    pub fn is_swapped(&self) -> bool {
        self.swap.is_some()
    }

    /// Markup of the swap followed by the stripped punctuation.
    pub fn replacement(&self) -> Option<String> {
        self.swap
            .as_ref()
            .map(|swap| format!("{}{}", swap.markup(), self.punctuation))
    }

    /// Text that takes the token's place in the output.
    pub fn output(&self) -> String {
        self.replacement().unwrap_or_else(|| self.token.clone())
    }
}

/// Decides which encoder, if any, replaces each word.
pub struct Scheduler<'r> {
    registry: &'r Registry,
    config: SwapConfig,
    neglected: NeglectedQueue,
    rng: ChaCha8Rng,
    cancel: CancelToken,
}

impl<'r> Scheduler<'r> {
    pub fn new(registry: &'r Registry, mut config: SwapConfig) -> Self {
        config.normalize();
        let rng = ChaCha8Rng::seed_from_u64(config.seed());
        Self {
            registry,
            config,
            neglected: NeglectedQueue::new(),
            rng,
            cancel: CancelToken::new(),
        }
    }

    pub fn config(&self) -> &SwapConfig {
        &self.config
    }

    pub fn neglected(&self) -> &NeglectedQueue {
        &self.neglected
    }

    /// A handle that cancels this scheduler's passes.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Process one word token.
    ///
    /// Never fails: anything that goes wrong leaves the token unchanged.
    pub async fn process_word(&mut self, token: &str) -> SwapAttempt {
        if !self.config.enabled || token.trim().is_empty() {
            return SwapAttempt::unchanged(token);
        }
        if self.rng.gen_range(0.0..100.0) >= self.config.swap_frequency {
            return SwapAttempt::unchanged(token);
        }

        let (word, punctuation) = split_trailing_punctuation(token);
        let mut attempt = SwapAttempt {
            token: token.to_string(),
            word: word.to_string(),
            punctuation: punctuation.to_string(),
            encoder: None,
            swap: None,
        };

        let Some(key) = self.select_encoder(word).await else {
            return attempt;
        };
        attempt.encoder = Some(key);

        let slot = self.registry.get(key).await;
        attempt.swap = slot.transform(word, &self.config.options_for(key)).await;
        if attempt.swap.is_none() {
            log::debug!("scheduler: {key} accepted {word:?} but produced nothing");
        }
        attempt
    }

    /// Pick the encoder for a clean word.
    ///
    /// Queued encoders are tried first, oldest first; the first that
    /// accepts the word leaves the queue and wins. Otherwise every enabled
    /// encoder is asked, neglectable refusers are queued, and one of the
    /// accepting encoders is chosen uniformly.
    pub async fn select_encoder(&mut self, word: &str) -> Option<EncoderKey> {
        for key in self.neglected.keys() {
            if !self.config.is_enabled(key) {
                continue;
            }
            let slot = self.registry.get(key).await;
            if slot.can_handle(word, &self.config.options_for(key)).await {
                self.neglected.remove(key);
                log::info!("scheduler: neglected encoder {key} handles {word:?}");
                return Some(key);
            }
        }

        let mut viable = Vec::new();
        for &key in &self.config.encoders {
            let slot = self.registry.get(key).await;
            if slot.can_handle(word, &self.config.options_for(key)).await {
                viable.push(key);
            } else if slot.is_neglectable() && self.neglected.push(key) {
                log::info!("scheduler: {key} cannot handle {word:?}; neglecting it");
            }
        }

        let chosen = viable.choose(&mut self.rng).copied();
        log::debug!("scheduler: {word:?} viable {viable:?}, chose {chosen:?}");
        chosen
    }

    /// Process every token of a text, in order.
    ///
    /// Cancellation is checked before and after each token; a cancelled pass
    /// returns [`SchedulerError::Cancelled`] and its partial output is
    /// dropped.
    pub async fn process_tokens(&mut self, text: &str) -> Result<Vec<SwapAttempt>, SchedulerError> {
        let mut attempts = Vec::new();
        for token in tokenize(text) {
            self.check_cancelled()?;
            let attempt = if token.is_word() {
                self.process_word(token.text).await
            } else {
                SwapAttempt::unchanged(token.text)
            };
            self.check_cancelled()?;
            attempts.push(attempt);
        }
        Ok(attempts)
    }

    /// Process a text and reassemble it, whitespace preserved.
    pub async fn process_text(&mut self, text: &str) -> Result<String, SchedulerError> {
        let attempts = self.process_tokens(text).await?;
        Ok(attempts.iter().map(SwapAttempt::output).collect())
    }

    fn check_cancelled(&self) -> Result<(), SchedulerError> {
        if self.cancel.is_cancelled() {
            return Err(SchedulerError::Cancelled);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Scheduler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("config", &self.config)
            .field("neglected", &self.neglected)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glyphswap_core::EncoderOptions;

    use crate::encoder::Encoder;
    use crate::loader::InMemoryLoader;

    fn registry() -> Registry {
        Registry::new(Rc::new(InMemoryLoader::new()))
    }

    fn always(keys: &[EncoderKey]) -> SwapConfig {
        SwapConfig::default()
            .with_encoders(keys)
            .with_frequency(100.0)
    }

    #[tokio::test]
    async fn selection_is_roughly_uniform() {
        let registry = registry();
        let mut scheduler = Scheduler::new(&registry, always(&[EncoderKey::Braille, EncoderKey::Morse]));
        let trials = 2000;
        let mut braille = 0;
        for _ in 0..trials {
            match scheduler.process_word("hello").await.encoder {
                Some(EncoderKey::Braille) => braille += 1,
                Some(EncoderKey::Morse) => {}
                other => panic!("unexpected encoder {other:?}"),
            }
        }
        let share = braille as f64 / trials as f64;
        assert!((0.4..=0.6).contains(&share), "braille share {share}");
    }

    #[tokio::test]
    async fn neglected_encoder_gets_next_fitting_word() {
        let registry = registry();
        let mut scheduler = Scheduler::new(
            &registry,
            always(&[EncoderKey::Braille, EncoderKey::Roman, EncoderKey::Hex]),
        );

        let attempt = scheduler.process_word("hello").await;
        assert_eq!(attempt.encoder, Some(EncoderKey::Braille));
        assert_eq!(
            scheduler.neglected().keys(),
            vec![EncoderKey::Roman, EncoderKey::Hex]
        );

        let attempt = scheduler.process_word("200").await;
        assert_eq!(attempt.encoder, Some(EncoderKey::Roman));
        assert_eq!(attempt.swap.map(|s| s.text), Some("CC".to_string()));
        assert_eq!(scheduler.neglected().keys(), vec![EncoderKey::Hex]);
    }

    #[tokio::test]
    async fn non_neglectable_encoders_are_not_queued() {
        let registry = registry();
        let mut scheduler = Scheduler::new(&registry, always(&[EncoderKey::Braille]));
        let attempt = scheduler.process_word("42").await;
        assert_eq!(attempt.encoder, None);
        assert!(scheduler.neglected().is_empty());
        assert_eq!(attempt.output(), "42");
    }

    #[tokio::test]
    async fn punctuation_is_reattached() {
        let registry = registry();
        let mut scheduler = Scheduler::new(&registry, always(&[EncoderKey::Morse]));
        let attempt = scheduler.process_word("sos!?").await;
        assert_eq!(attempt.word, "sos");
        assert_eq!(attempt.punctuation, "!?");
        let output = attempt.output();
        assert!(output.ends_with("</span>!?"), "{output}");
        assert!(output.contains(">... --- ...<"));
    }

    #[tokio::test]
    async fn zero_frequency_leaves_text_alone() {
        let registry = registry();
        let config = SwapConfig::default()
            .with_encoders(&[EncoderKey::Morse])
            .with_frequency(0.0);
        let mut scheduler = Scheduler::new(&registry, config);
        let text = "  hello\tworld \n";
        assert_eq!(scheduler.process_text(text).await.unwrap(), text);
    }

    #[tokio::test]
    async fn disabled_config_touches_no_encoder() {
        let registry = registry();
        let mut config = always(&[EncoderKey::Morse]);
        config.enabled = false;
        let mut scheduler = Scheduler::new(&registry, config);
        assert_eq!(scheduler.process_text("sos sos").await.unwrap(), "sos sos");
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn whitespace_is_preserved() {
        let registry = registry();
        let mut scheduler = Scheduler::new(&registry, always(&[EncoderKey::Morse]));
        let out = scheduler.process_text("hi  there\n").await.unwrap();
        assert!(out.starts_with("<span"));
        assert!(out.contains("</span>  <span"));
        assert!(out.ends_with("</span>\n"));
    }

    #[tokio::test]
    async fn unhandled_word_passes_through() {
        let registry = registry();
        let mut scheduler = Scheduler::new(&registry, always(&[EncoderKey::Morse]));
        assert_eq!(scheduler.process_text("café 42").await.unwrap(), "café 42");
    }

    #[tokio::test]
    async fn cancelled_pass_is_discarded() {
        let registry = registry();
        let mut scheduler = Scheduler::new(&registry, always(&[EncoderKey::Morse]));
        scheduler.cancel_token().cancel();
        assert_eq!(
            scheduler.process_text("sos").await,
            Err(SchedulerError::Cancelled)
        );
    }

    #[tokio::test]
    async fn empty_transform_leaves_token() {
        struct Fickle;
        impl Encoder for Fickle {
            fn key(&self) -> EncoderKey {
                EncoderKey::Cockney
            }
            fn title(&self) -> &'static str {
                "Fickle"
            }
            fn description(&self) -> &'static str {
                "Accepts everything, renders nothing"
            }
            fn can_handle(&self, _word: &str, _options: &EncoderOptions) -> bool {
                true
            }
            fn transform(&mut self, _word: &str, _options: &EncoderOptions) -> Option<String> {
                None
            }
        }

        let registry = registry();
        registry.register(Box::new(Fickle));
        let mut scheduler = Scheduler::new(&registry, always(&[EncoderKey::Cockney]));
        let attempt = scheduler.process_word("stairs.").await;
        assert_eq!(attempt.encoder, Some(EncoderKey::Cockney));
        assert!(!attempt.is_swapped());
        assert_eq!(attempt.output(), "stairs.");
    }

    #[tokio::test]
    async fn same_seed_same_choices() {
        let registry = registry();
        let config = always(&[EncoderKey::Braille, EncoderKey::Morse]).with_frequency(50.0);
        let text = "one two three four five six seven eight nine ten";
        let first = Scheduler::new(&registry, config.clone())
            .process_text(text)
            .await
            .unwrap();
        let second = Scheduler::new(&registry, config)
            .process_text(text)
            .await
            .unwrap();
        assert_eq!(first, second);
    }
}
