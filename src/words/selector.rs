use rand::Rng;

use super::types::WordEntry;
use crate::error::PracticeError;

/// Pick a word uniformly at random from `pool`, with replacement.
pub fn select_word(pool: &[WordEntry]) -> Result<WordEntry, PracticeError> {
    select_word_with(pool, &mut rand::thread_rng())
}

/// Same as [`select_word`] but with a caller-supplied RNG.
pub fn select_word_with<R: Rng + ?Sized>(
    pool: &[WordEntry],
    rng: &mut R,
) -> Result<WordEntry, PracticeError> {
    if pool.is_empty() {
        return Err(PracticeError::EmptyPool);
    }
    let index = rng.gen_range(0..pool.len());
    Ok(pool[index])
}
