//! SplitMix64 seed derivation for trials and sweep points.
//!
//! Every trial seeds its own `SmallRng` from the batch seed and its index, so
//! the graph a trial sees does not depend on execution order or thread count.

const SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Derives the seed for child `index` of `base`.
#[inline]
pub(crate) fn mix_seed(base: u64, index: usize) -> u64 {
    splitmix64(base ^ (index as u64).wrapping_add(1).wrapping_mul(SEED_SPACING))
}

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}
