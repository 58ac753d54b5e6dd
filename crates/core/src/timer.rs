//! Gravity timer - the single scheduled task that drives falling pieces
//!
//! The engine owns exactly one `GravityTimer`. Scheduling always replaces whatever was
//! pending, so at most one gravity fire can ever be outstanding. Time is fed in
//! explicitly through [`GravityTimer::advance`], which keeps the engine deterministic
//! and lets tests step time without sleeping.

use crate::types::GRAVITY_MS;

/// Identifies one arming of the timer; a fresh id is handed out on every schedule.
pub type TimerGeneration = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    generation: TimerGeneration,
    remaining_ms: u32,
}

/// Cancellable one-shot gravity timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityTimer {
    interval_ms: u32,
    pending: Option<Pending>,
    generation: TimerGeneration,
}

impl GravityTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            pending: None,
            generation: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Cancel any pending fire and arm a new one a full interval from now
    pub fn schedule(&mut self) -> TimerGeneration {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(Pending {
            generation: self.generation,
            remaining_ms: self.interval_ms,
        });
        self.generation
    }

    /// Drop the pending fire, if any
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of outstanding fires; never more than one
    pub fn pending_count(&self) -> usize {
        usize::from(self.pending.is_some())
    }

    /// Generation of the pending fire
    pub fn pending_generation(&self) -> Option<TimerGeneration> {
        self.pending.map(|p| p.generation)
    }

    /// Milliseconds until the pending fire
    pub fn remaining_ms(&self) -> Option<u32> {
        self.pending.map(|p| p.remaining_ms)
    }

    /// Let `elapsed_ms` pass
    ///
    /// If the pending fire comes due within that time, it is consumed and the unused
    /// remainder is returned as `Some(leftover_ms)`; the caller runs the gravity step
    /// and may call `advance` again with the leftover. Returns `None` when nothing
    /// fired (including when nothing is pending).
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<u32> {
        let pending = self.pending.as_mut()?;

        if elapsed_ms < pending.remaining_ms {
            pending.remaining_ms -= elapsed_ms;
            return None;
        }

        let leftover = elapsed_ms - pending.remaining_ms;
        self.pending = None;
        Some(leftover)
    }
}

impl Default for GravityTimer {
    fn default() -> Self {
        Self::new(GRAVITY_MS)
    }
}
