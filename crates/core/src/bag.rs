//! Bag module - replenishing shuffled piece sequence
//!
//! The bag holds three copies of every catalog kind. Pieces are drawn from the end
//! until it is empty, and only then is a fresh batch generated and shuffled. This bounds
//! how long any kind can go missing: within each window of `3 * N` draws starting at a
//! refill, every kind appears exactly three times.
//!
//! The bag owns no randomness of its own; the caller passes the generator in, so a game
//! (or a test) decides how pieces are seeded.

use rand::Rng;

use crate::types::{PieceKind, BAG_COPIES};

/// Shuffle a slice using Fisher-Yates
///
/// Walks from the last index down, swapping each element with a uniformly chosen
/// index in `[0, i]`, which yields an unbiased permutation.
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

/// Replenishing piece bag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceBag {
    /// Pending kinds; the next draw is the last element
    pending: Vec<PieceKind>,
}

impl PieceBag {
    /// Number of kinds added by one refill
    pub const BATCH: usize = PieceKind::ALL.len() * BAG_COPIES;

    /// Create an empty bag (the first draw refills it)
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(Self::BATCH),
        }
    }

    /// Append `BAG_COPIES` of every kind, then shuffle the whole bag
    pub fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..BAG_COPIES {
            self.pending.extend_from_slice(&PieceKind::ALL);
        }
        shuffle(rng, &mut self.pending);
        log::trace!("bag refilled with {} pieces", self.pending.len());
    }

    /// Draw the next kind, refilling first if (and only if) the bag is empty
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PieceKind {
        if self.pending.is_empty() {
            self.refill(rng);
        }

        match self.pending.pop() {
            Some(kind) => kind,
            // refill always adds a full batch
            None => unreachable!("bag empty after refill"),
        }
    }

    /// Peek at the next kind without removing it
    ///
    /// Returns `None` when the next draw would trigger a refill.
    pub fn peek(&self) -> Option<PieceKind> {
        self.pending.last().copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending kinds in draw order
    pub fn pending(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.pending.iter().rev().copied()
    }
}
