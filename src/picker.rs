// src/picker.rs
//! Unbiased random draws over the film table.
//!
//! A draw shuffles the whole index range with Fisher–Yates and takes the head.
//! Draws are independent: the previous pick is not excluded.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// In-place Fisher–Yates shuffle. Every permutation is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// First `k` indexes of a shuffled `[0, n)`; `k` is clamped to `n`.
pub fn pick_indexes<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..n).collect();
    shuffle(&mut idx, rng);
    idx.truncate(k.min(n));
    idx
}

/// A uniform index into `[0, n)`, or `None` when there is nothing to pick.
pub fn pick_index<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Option<usize> {
    pick_indexes(n, 1, rng).first().copied()
}

/// RNG for a session: seeded when reproducibility is asked for.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}
