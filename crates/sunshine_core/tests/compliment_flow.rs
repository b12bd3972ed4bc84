use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::{Duration, Instant};
use sunshine_core::{Clock, ComplimentService, COMPLIMENTS, VISIBLE_DURATION};

/// Manually advanced time source; drives timer expiry deterministically.
#[derive(Clone)]
struct ManualClock(Rc<Cell<Instant>>);

impl ManualClock {
    fn start() -> Self {
        Self(Rc::new(Cell::new(Instant::now())))
    }

    fn advance(&self, delta: Duration) {
        self.0.set(self.0.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.0.get()
    }
}

#[test]
fn pick_only_returns_catalog_entries() {
    let service = ComplimentService::new();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1000 {
        assert!(COMPLIMENTS.contains(&service.pick(&mut rng)));
    }
}

#[test]
fn pick_reaches_every_catalog_entry() {
    let service = ComplimentService::new();
    let mut rng = StdRng::seed_from_u64(1);

    let seen: HashSet<&str> = (0..1000).map(|_| service.pick(&mut rng)).collect();
    assert_eq!(seen.len(), COMPLIMENTS.len());
}

#[test]
fn activate_shows_the_picked_entry() {
    let clock = ManualClock::start();
    let mut service = ComplimentService::with_clock(clock);
    let mut rng = StdRng::seed_from_u64(9);

    let shown = service.activate(&mut rng);
    assert!(service.is_visible());
    assert_eq!(service.visible_compliment(), Some(shown));
}

#[test]
fn shown_compliment_hides_after_visible_duration() {
    let clock = ManualClock::start();
    let mut service = ComplimentService::with_clock(clock.clone());

    service.show(COMPLIMENTS[0]);
    assert!(!service.tick(), "timer must not fire before the deadline");
    assert!(service.is_visible());

    clock.advance(VISIBLE_DURATION - Duration::from_millis(1));
    assert!(!service.tick());
    assert_eq!(service.visible_compliment(), Some(COMPLIMENTS[0]));

    clock.advance(Duration::from_millis(1));
    assert!(service.tick(), "timer must fire at the deadline");
    assert!(!service.is_visible());
    assert!(service.visible_compliment().is_none());

    assert!(!service.tick(), "a hide fires exactly once");
}

#[test]
fn reactivation_replaces_text_and_restarts_the_window() {
    let clock = ManualClock::start();
    let mut service = ComplimentService::with_clock(clock.clone());

    service.show(COMPLIMENTS[0]);
    clock.advance(Duration::from_secs(2));
    assert!(!service.tick());

    // Second activation inside the first window: text is replaced
    // immediately and the full window restarts.
    service.show(COMPLIMENTS[3]);
    assert_eq!(service.visible_compliment(), Some(COMPLIMENTS[3]));

    clock.advance(Duration::from_secs(2));
    assert!(
        !service.tick(),
        "first activation's deadline must not hide the second"
    );
    assert!(service.is_visible());

    let mut hides = 0;
    clock.advance(Duration::from_millis(1100));
    for _ in 0..5 {
        if service.tick() {
            hides += 1;
        }
    }
    assert_eq!(hides, 1, "visibility reverts exactly once");
    assert!(service.visible_compliment().is_none());
}
