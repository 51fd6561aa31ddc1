//! # Uniform Tip Selection
//!
//! The baseline tip selection algorithm: two distinct tips drawn uniformly
//! at random without replacement.
//!
//! | Tips | Result |
//! |------|--------|
//! | 0 | `(EMPTY_ID, EMPTY_ID)` |
//! | 1 | `(x, x)` |
//! | n ≥ 2 | two distinct members, each pair equally likely |

use super::value_objects::TipPair;
use rand::Rng;
use shared_types::MessageId;

/// Selects a trunk/branch pair from `tips` using `rng`.
///
/// `tips` must not contain duplicates; a pool snapshot never does.
pub fn select_uniform<R: Rng + ?Sized>(tips: &[MessageId], rng: &mut R) -> TipPair {
    match tips {
        [] => TipPair::genesis(),
        [only] => TipPair::single(*only),
        _ => {
            let first = rng.gen_range(0..tips.len());
            // Draw from the remaining n-1 slots and skip over `first`.
            let mut second = rng.gen_range(0..tips.len() - 1);
            if second >= first {
                second += 1;
            }
            TipPair::new(tips[first], tips[second])
        }
    }
}
