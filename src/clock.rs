//! Wall clock for the frame loop.
//!
//! Converts real time into the whole milliseconds `GameState::advance` takes. The
//! sub-millisecond part of each frame stays on the clock and is paid out later, so
//! gravity keeps pace with wall time however short the frames are.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    /// Instant up to which time has been handed out
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    pub fn start() -> Self {
        Self::new(Instant::now())
    }

    /// Time not yet handed out
    pub fn pending(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last)
    }

    /// Whole milliseconds elapsed up to `now`; the fraction carries to the next call
    pub fn take_ms(&mut self, now: Instant) -> u32 {
        let ms = self.pending(now).as_millis().min(u32::MAX as u128) as u32;
        self.last += Duration::from_millis(ms as u64);
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractions_carry_over() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);

        assert_eq!(clock.take_ms(t0 + Duration::from_micros(1600)), 1);
        assert_eq!(clock.take_ms(t0 + Duration::from_micros(3200)), 2);
        assert_eq!(clock.pending(t0 + Duration::from_micros(3200)), Duration::from_micros(200));
    }

    #[test]
    fn test_short_frames_add_up_to_wall_time() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);

        // 100 frames of 16.6ms
        let total: u32 = (1..=100)
            .map(|i| clock.take_ms(t0 + Duration::from_micros(16_600 * i)))
            .sum();
        assert_eq!(total, 1660);
    }

    #[test]
    fn test_nothing_elapsed() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);

        assert_eq!(clock.take_ms(t0 + Duration::from_micros(400)), 0);
        assert_eq!(clock.take_ms(t0), 0);
        assert_eq!(clock.pending(t0 + Duration::from_micros(900)), Duration::from_micros(900));
    }
}
