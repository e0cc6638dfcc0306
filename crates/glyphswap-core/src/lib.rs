//! Shared types for the glyphswap word encoders.
//!
//! This crate holds everything the encoder engine, the braille contraction
//! engine and the command-line tools agree on. It performs no I/O.
//!
//! # Modules
//!
//! - [`key`] -- Encoder identities in canonical order
//! - [`options`] -- Per-encoder option records, keyed by encoder identity
//! - [`config`] -- User-facing swap configuration
//! - [`token`] -- Whitespace tokenization of page text
//! - [`case`] -- Case classification of words
//! - [`character`] -- Character classes (trailing punctuation, numeral delimiters)
//! - [`kana`] -- Hiragana/katakana conversion
//! - [`swap`] -- Transform results and their presentation markup

pub mod case;
pub mod character;
pub mod config;
pub mod kana;
pub mod key;
pub mod options;
pub mod swap;
pub mod token;

pub use config::SwapConfig;
pub use key::EncoderKey;
pub use options::EncoderOptions;
pub use swap::Swap;
