//! Seedable randomness and the 7-bag piece generator.
//!
//! Every bag holds one of each of the seven kinds, shuffled by
//! Fisher-Yates over a small LCG. Draws empty the bag in order and an
//! empty bag refills itself, so any window of seven draws from one bag
//! is a permutation of the seven kinds. The same seed always produces
//! the same piece sequence.

use blockfall_types::{PieceKind, ALL_KINDS};

/// Linear congruential generator with the Numerical Recipes constants.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed. A zero seed is bumped to 1
    /// so the stream never degenerates.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Next raw value in the stream.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform-ish value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator.
#[derive(Debug, Clone)]
pub struct SevenBag {
    bag: [PieceKind; 7],
    /// Next position to draw from; 7 means the bag is spent.
    cursor: usize,
    rng: SimpleRng,
}

impl SevenBag {
    /// New generator with a freshly shuffled first bag.
    pub fn new(seed: u32) -> Self {
        let mut gen = Self {
            bag: ALL_KINDS,
            cursor: 0,
            rng: SimpleRng::new(seed),
        };
        gen.refill();
        gen
    }

    fn refill(&mut self) {
        self.bag = ALL_KINDS;
        self.rng.shuffle(&mut self.bag);
        self.cursor = 0;
    }

    /// Take the next piece, refilling the bag when it runs out.
    pub fn draw(&mut self) -> PieceKind {
        if self.cursor >= self.bag.len() {
            self.refill();
        }
        let piece = self.bag[self.cursor];
        self.cursor += 1;
        piece
    }

    /// Throw away whatever is left and shuffle a fresh bag from the
    /// live RNG stream. Used when a new game starts, so a restart
    /// continues the seeded sequence instead of replaying it.
    pub fn restart(&mut self) {
        self.refill();
    }

    /// Pieces remaining in the current bag (test hook).
    #[cfg(test)]
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.cursor..]
    }
}
