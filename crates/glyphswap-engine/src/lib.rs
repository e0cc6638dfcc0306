//! Encoder framework for glyphswap.
//!
//! Words on a page are replaced, now and then, by the same word written in
//! another script. This crate holds the pluggable encoders that produce the
//! replacements, the registry that builds and loads them, and the scheduler
//! that decides which encoder (if any) takes each word.
//!
//! # Architecture
//!
//! - [`loader`] -- Data loader capability (in-memory and file-backed)
//! - [`document`] -- Typed views of loaded data documents
//! - [`encoder`] -- The encoder contract
//! - [`lifecycle`] -- One-shot data loading per encoder instance
//! - [`registry`] -- Lazily built, memoized encoder slots
//! - [`dispatch`] -- Request/response boundary for external transports
//! - [`scheduler`] -- Per-word encoder selection with the neglected queue
//! - [`phonetic`] -- Pronunciation dictionary + phoneme segmentation
//! - [`braille`] -- Grade 1 and grade 2 braille
//! - [`morse`] -- Morse code
//! - [`numeral`] -- Roman numerals and hexadecimal over delimited numbers
//! - [`lookup`] -- Dictionary lookups: katakana, hiragana, loan words, rhyming slang
//!
//! Everything runs on one thread. Shared state lives in `Rc`/`RefCell`, and
//! the only suspension points are data loads.

pub mod braille;
pub mod dispatch;
pub mod document;
pub mod encoder;
pub mod lifecycle;
pub mod loader;
pub mod lookup;
pub mod morse;
pub mod numeral;
pub mod phonetic;
pub mod registry;
pub mod scheduler;

pub use dispatch::{DispatchRequest, DispatchResponse};
pub use encoder::{Encoder, EncoderError};
pub use lifecycle::{EncoderSlot, EncoderState, LifecycleStatus};
pub use loader::{DataLoader, Document, FileLoader, InMemoryLoader, LoadError};
pub use registry::Registry;
pub use scheduler::{CancelToken, NeglectedQueue, Scheduler, SchedulerError, SwapAttempt};
