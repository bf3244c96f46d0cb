// src/rng.rs
// Random range generation for ball draws and card numbers.

use std::collections::HashSet;

use crate::defs::{DrawError, Number};

/// Uniformly random index into a collection of `len` elements.
pub fn random_index(len: usize) -> usize {
    rand::random_range(0..len)
}

/// Uniformly random number in `[min, max]` that is not yet in `exclusions`.
/// The chosen number is inserted into `exclusions` before returning, so one
/// set can be threaded through a whole generation pass.
///
/// The live candidates are materialized up front instead of resampling on
/// collision, so the call terminates even when the exclusion set covers
/// almost the entire range.
pub fn random_excluding(
    min: Number,
    max: Number,
    exclusions: &mut HashSet<Number>,
) -> Result<Number, DrawError> {
    let candidates: Vec<Number> = (min..=max)
        .filter(|number| !exclusions.contains(number))
        .collect();

    if candidates.is_empty() {
        return Err(DrawError::RangeExhausted { min, max });
    }

    let chosen = candidates[random_index(candidates.len())];
    exclusions.insert(chosen);
    Ok(chosen)
}
