//! Compliment picking and display-state service.
//!
//! # Responsibility
//! - Select catalog entries uniformly at random.
//! - Own the displayed-compliment state and its auto-hide timer.
//!
//! # Invariants
//! - A displayed compliment is always an element of the fixed catalog.
//! - Re-activation replaces the pending hide timer; a scheduled hide fires
//!   at most once.

use crate::model::catalog::COMPLIMENTS;
use log::debug;
use rand::Rng;
use std::time::{Duration, Instant};

/// How long a shown compliment stays visible.
pub const VISIBLE_DURATION: Duration = Duration::from_millis(3000);

/// Monotonic time source for the hide timer.
///
/// Production uses [`SystemClock`]; tests substitute a manually advanced
/// implementation so timer expiry and supersede behavior are deterministic.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

// Pending auto-hide deadline for the currently shown compliment.
#[derive(Debug, Clone, Copy)]
struct HideTimer {
    deadline: Instant,
}

/// Display-state holder for the compliment picker.
pub struct ComplimentService<C: Clock> {
    clock: C,
    visible_for: Duration,
    current: Option<&'static str>,
    visible: bool,
    timer: Option<HideTimer>,
}

impl ComplimentService<SystemClock> {
    /// Creates a service on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ComplimentService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ComplimentService<C> {
    /// Creates a service over the provided time source.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            visible_for: VISIBLE_DURATION,
            current: None,
            visible: false,
            timer: None,
        }
    }

    /// Selects one catalog entry uniformly at random.
    ///
    /// Repeats across successive calls are allowed; every entry is
    /// reachable.
    pub fn pick(&self, rng: &mut impl Rng) -> &'static str {
        let index = rng.gen_range(0..COMPLIMENTS.len());
        debug!("event=compliment_pick module=compliment status=ok index={index}");
        COMPLIMENTS[index]
    }

    /// Picks and shows a compliment in one step; returns the shown entry.
    pub fn activate(&mut self, rng: &mut impl Rng) -> &'static str {
        let compliment = self.pick(rng);
        self.show(compliment);
        compliment
    }

    /// Shows `compliment` and (re)schedules the auto-hide timer.
    ///
    /// A pending timer is cancelled first, so a second activation inside the
    /// visibility window replaces the text immediately and restarts the full
    /// window.
    pub fn show(&mut self, compliment: &'static str) {
        let deadline = self.clock.now() + self.visible_for;
        self.current = Some(compliment);
        self.visible = true;
        self.timer = Some(HideTimer { deadline });
        debug!(
            "event=compliment_show module=compliment status=ok visible_ms={}",
            self.visible_for.as_millis()
        );
    }

    /// Expires the pending hide timer against the clock.
    ///
    /// Returns `true` exactly once per scheduled timer, at the first call at
    /// or past the deadline; visibility reverts to false at that moment.
    pub fn tick(&mut self) -> bool {
        match self.timer {
            Some(timer) if self.clock.now() >= timer.deadline => {
                self.timer = None;
                self.visible = false;
                debug!("event=compliment_hide module=compliment status=ok");
                true
            }
            _ => false,
        }
    }

    /// Currently displayed compliment while visible.
    pub fn visible_compliment(&self) -> Option<&'static str> {
        if self.visible {
            self.current
        } else {
            None
        }
    }

    /// Whether a compliment is currently visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::{ComplimentService, VISIBLE_DURATION};
    use crate::model::catalog::COMPLIMENTS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn visibility_window_is_three_seconds() {
        assert_eq!(VISIBLE_DURATION.as_millis(), 3000);
    }

    #[test]
    fn pick_returns_catalog_entries_only() {
        let service = ComplimentService::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let picked = service.pick(&mut rng);
            assert!(COMPLIMENTS.contains(&picked));
        }
    }

    #[test]
    fn nothing_is_visible_before_first_activation() {
        let service = ComplimentService::new();
        assert!(!service.is_visible());
        assert!(service.visible_compliment().is_none());
    }
}
