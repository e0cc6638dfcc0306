// The neglected-encoder queue

use std::collections::VecDeque;

use glyphswap_core::EncoderKey;

/// FIFO of neglectable encoders that recently failed to handle a word.
///
/// An encoder is queued at most once. Queued encoders are offered each new
/// word before the full scan, and leave the queue on their first success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeglectedQueue {
    keys: VecDeque<EncoderKey>,
}

impl NeglectedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key unless it is already queued. Returns whether it was added.
    pub fn push(&mut self, key: EncoderKey) -> bool {
        if self.contains(key) {
            return false;
        }
        self.keys.push_back(key);
        true
    }

    /// Remove a key wherever it sits. Returns whether it was queued.
    pub fn remove(&mut self, key: EncoderKey) -> bool {
        match self.keys.iter().position(|&k| k == key) {
            Some(idx) => {
                self.keys.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, key: EncoderKey) -> bool {
        self.keys.contains(&key)
    }

    /// Queued keys, oldest first.
    pub fn keys(&self) -> Vec<EncoderKey> {
        self.keys.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_is_unique() {
        let mut queue = NeglectedQueue::new();
        assert!(queue.push(EncoderKey::Roman));
        assert!(queue.push(EncoderKey::Hex));
        assert!(!queue.push(EncoderKey::Roman));
        assert_eq!(queue.keys(), vec![EncoderKey::Roman, EncoderKey::Hex]);
    }

    #[test]
    fn remove_keeps_order() {
        let mut queue = NeglectedQueue::new();
        queue.push(EncoderKey::Katakana);
        queue.push(EncoderKey::Roman);
        queue.push(EncoderKey::Hex);
        assert!(queue.remove(EncoderKey::Roman));
        assert!(!queue.remove(EncoderKey::Roman));
        assert_eq!(queue.keys(), vec![EncoderKey::Katakana, EncoderKey::Hex]);
        queue.clear();
        assert!(queue.is_empty());
    }
}
