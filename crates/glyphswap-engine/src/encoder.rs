// The encoder contract

use glyphswap_core::{EncoderKey, EncoderOptions};

use crate::loader::Document;

/// Error produced while installing loaded documents into an encoder.
#[derive(Debug, thiserror::Error)]
pub enum EncoderError {
    #[error("missing data document: {0}")]
    MissingDocument(&'static str),

    #[error("invalid {name} document: {message}")]
    InvalidDocument { name: &'static str, message: String },
}

/// A word encoder.
///
/// Encoders are synchronous. Data loading is driven from outside by
/// [`EncoderSlot`](crate::lifecycle::EncoderSlot): it loads every source
/// named by [`data_sources`](Encoder::data_sources), in order, and hands the
/// documents to [`install`](Encoder::install) exactly once. `can_handle` and
/// `transform` are only called after a successful install.
pub trait Encoder {
    fn key(&self) -> EncoderKey;

    fn title(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Whether a failure to handle a word may be deferred to the scheduler's
    /// neglected queue.
    fn is_neglectable(&self) -> bool {
        false
    }

    /// Names of the data documents this encoder needs.
    fn data_sources(&self) -> &'static [&'static str] {
        &[]
    }

    /// Build the encoder's tables from its loaded documents (one per data
    /// source, same order).
    fn install(&mut self, documents: Vec<Document>) -> Result<(), EncoderError> {
        let _ = documents;
        Ok(())
    }

    fn can_handle(&self, word: &str, options: &EncoderOptions) -> bool;

    /// Produce the replacement text for a word, or `None` when the encoder
    /// cannot render it.
    fn transform(&mut self, word: &str, options: &EncoderOptions) -> Option<String>;
}
