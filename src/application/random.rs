//! # Random Utility
//!
//! Pure in-process random generation. No I/O, no persisted state.
//! Range validation belongs to the caller.

use rand::Rng;

/// Uniform integer in `[min, max]`, both ends inclusive. Callers must
/// reject `min >= max` before calling.
pub fn uniform_int(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

/// Uniform pick from `options`. Callers guarantee at least two entries.
pub fn choice(options: &[String]) -> &str {
    let idx = rand::thread_rng().gen_range(0..options.len());
    &options[idx]
}
