//! Monotonic time sources
//!
//! Power-shot timers are scheduled against a [`Clock`] instead of wall-clock
//! time so tests and headless runs can step time by hand.

use std::cell::Cell;
use std::time::Instant;

/// Milliseconds on a monotonic timeline
pub type Millis = u64;

/// A monotonic, non-decreasing millisecond source
pub trait Clock {
    fn now(&self) -> Millis;
}

/// Real time, measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

/// Hand-driven clock for tests and fixed-step runs
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move time forward
    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get() + ms);
    }

    /// Jump to an absolute time (must not go backwards)
    pub fn set(&self, at: Millis) {
        debug_assert!(at >= self.now.get(), "clock moved backwards");
        self.now.set(at);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Millis {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now(), 100);
        clock.advance(16);
        clock.advance(16);
        assert_eq!(clock.now(), 132);
        clock.set(500);
        assert_eq!(clock.now(), 500);
    }

    #[test]
    fn test_system_clock_non_decreasing() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = ManualClock::new(7);
        let by_ref: &ManualClock = &clock;
        assert_eq!(Clock::now(&by_ref), 7);
    }
}
