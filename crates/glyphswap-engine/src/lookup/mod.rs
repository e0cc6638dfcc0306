// Dictionary lookup encoders
//
// Each of these encoders loads one `{word: [entry, ...]}` document, folds the
// words to lower case, and renders a word by picking one of its entries.

pub mod cockney;
pub mod kana;
pub mod true_kana;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

pub use cockney::{CockneyEncoder, CockneyEntry};
pub use kana::{HiraganaEncoder, KatakanaEncoder};
pub use true_kana::{TrueKanaEncoder, TrueKanaEntry};

/// Choose one entry uniformly at random.
pub(crate) fn choose<'a, T>(rng: &mut ChaCha8Rng, entries: &'a [T]) -> Option<&'a T> {
    entries.choose(rng)
}
