// Encoder lifecycle: one data load per encoder instance
//
// Uninitialized -> Loading -> Ready | Failed
//
// The first caller of `initialize` drives the load. Callers arriving while
// it is in flight wait on the watch channel stored in `Loading` instead of
// starting their own load. `Failed` is final. A load whose driver is
// dropped before it finishes puts the slot back to `Uninitialized`, and the
// next caller drives a fresh load.

use std::cell::RefCell;
use std::rc::Rc;

use tokio::sync::watch;

use glyphswap_core::{EncoderKey, EncoderOptions, Swap};

use crate::encoder::Encoder;
use crate::loader::{DataLoader, Document, LoadError};

/// Load state of an encoder slot.
#[derive(Debug)]
pub enum EncoderState {
    Uninitialized,
    /// A load is in flight; the receiver yields `Some(ready)` once it ends.
    Loading(watch::Receiver<Option<bool>>),
    Ready,
    Failed,
}

/// Copyable summary of [`EncoderState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleStatus {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

enum InitStep {
    Done(bool),
    Wait(watch::Receiver<Option<bool>>),
    Drive(watch::Sender<Option<bool>>),
}

/// Resets an abandoned load. Disarmed once the driver records the outcome.
struct LoadGuard<'a> {
    key: EncoderKey,
    state: &'a RefCell<EncoderState>,
    armed: bool,
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            log::warn!("{}: data load abandoned", self.key);
            *self.state.borrow_mut() = EncoderState::Uninitialized;
        }
    }
}

/// An encoder instance together with its load state.
pub struct EncoderSlot {
    key: EncoderKey,
    title: &'static str,
    description: &'static str,
    neglectable: bool,
    sources: &'static [&'static str],
    encoder: RefCell<Box<dyn Encoder>>,
    state: RefCell<EncoderState>,
    loader: Rc<dyn DataLoader>,
}

impl EncoderSlot {
    pub fn new(encoder: Box<dyn Encoder>, loader: Rc<dyn DataLoader>) -> Self {
        Self {
            key: encoder.key(),
            title: encoder.title(),
            description: encoder.description(),
            neglectable: encoder.is_neglectable(),
            sources: encoder.data_sources(),
            encoder: RefCell::new(encoder),
            state: RefCell::new(EncoderState::Uninitialized),
            loader,
        }
    }

    pub fn key(&self) -> EncoderKey {
        self.key
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn is_neglectable(&self) -> bool {
        self.neglectable
    }

    pub fn status(&self) -> LifecycleStatus {
        match &*self.state.borrow() {
            EncoderState::Uninitialized => LifecycleStatus::Uninitialized,
            EncoderState::Loading(_) => LifecycleStatus::Loading,
            EncoderState::Ready => LifecycleStatus::Ready,
            EncoderState::Failed => LifecycleStatus::Failed,
        }
    }

    /// Load and install the encoder's data, at most once.
    ///
    /// Returns whether the encoder is ready. Concurrent callers share the
    /// in-flight load. If the driving caller is dropped mid-load, the slot
    /// returns to `Uninitialized` and a waiting caller takes over the load.
    pub async fn initialize(&self) -> bool {
        loop {
            let step = {
                let mut state = self.state.borrow_mut();
                match &*state {
                    EncoderState::Ready => InitStep::Done(true),
                    EncoderState::Failed => InitStep::Done(false),
                    EncoderState::Loading(rx) => InitStep::Wait(rx.clone()),
                    EncoderState::Uninitialized => {
                        let (tx, rx) = watch::channel(None);
                        *state = EncoderState::Loading(rx);
                        InitStep::Drive(tx)
                    }
                }
            };

            match step {
                InitStep::Done(ready) => return ready,
                InitStep::Wait(mut rx) => {
                    if let Ok(outcome) = rx.wait_for(Option::is_some).await {
                        return *outcome == Some(true);
                    }
                    // driver dropped without an outcome
                }
                InitStep::Drive(tx) => {
                    let mut guard = LoadGuard {
                        key: self.key,
                        state: &self.state,
                        armed: true,
                    };
                    let ready = self.load_and_install().await;
                    guard.armed = false;
                    *self.state.borrow_mut() = if ready {
                        EncoderState::Ready
                    } else {
                        EncoderState::Failed
                    };
                    tx.send_replace(Some(ready));
                    return ready;
                }
            }
        }
    }

    async fn load_and_install(&self) -> bool {
        let documents = match self.load_documents().await {
            Ok(documents) => documents,
            Err(e) => {
                log::error!("{}: failed to load data: {e}", self.key);
                return false;
            }
        };

        match self.encoder.borrow_mut().install(documents) {
            Ok(()) => {
                log::debug!("{}: ready", self.key);
                true
            }
            Err(e) => {
                log::error!("{}: failed to install data: {e}", self.key);
                false
            }
        }
    }

    async fn load_documents(&self) -> Result<Vec<Document>, LoadError> {
        let mut documents = Vec::with_capacity(self.sources.len());
        for source in self.sources {
            documents.push(self.loader.load(source).await?);
        }
        Ok(documents)
    }

    /// Whether the encoder can handle a word. `false` when the encoder
    /// failed to load.
    pub async fn can_handle(&self, word: &str, options: &EncoderOptions) -> bool {
        if !self.initialize().await {
            return false;
        }
        self.encoder.borrow().can_handle(word, options)
    }

    /// Transform a word. `None` when the encoder failed to load or cannot
    /// render the word.
    pub async fn transform(&self, word: &str, options: &EncoderOptions) -> Option<Swap> {
        if !self.initialize().await {
            return None;
        }
        let text = self.encoder.borrow_mut().transform(word, options)?;
        if text.is_empty() {
            log::debug!("{}: empty result for {word:?}", self.key);
            return None;
        }
        Some(Swap::new(self.key, word, text))
    }
}

impl std::fmt::Debug for EncoderSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncoderSlot")
            .field("key", &self.key)
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}
