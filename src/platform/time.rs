//! Clock implementations

use std::time::Instant;

use super::Clock;

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to (headless runs, tests)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, seconds: f64) {
        self.now += seconds.max(0.0);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.now(), 0.0);
        clock.advance(0.25);
        clock.advance(0.25);
        assert_eq!(clock.now(), 0.5);
    }

    #[test]
    fn test_manual_clock_never_goes_backwards() {
        let mut clock = ManualClock::new();
        clock.advance(1.0);
        clock.advance(-5.0);
        assert_eq!(clock.now(), 1.0);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
