use gloo_timers::callback::Interval;
use yew::Callback;

/// Host timer seam. `arm` replaces whatever was armed before; every expiry
/// reports the generation it was armed with until `disarm` is called.
pub trait Scheduler {
    fn arm(&mut self, generation: u64, interval_ms: u32);
    fn disarm(&mut self);
}

/// Restartable countdown. Restarting always cancels first so there is never
/// more than one live countdown, and generations let late expiries from a
/// cancelled countdown be recognised and dropped.
pub struct AutoplayTimer<S> {
    scheduler: S,
    interval_ms: u32,
    generation: u64,
    running: bool,
}

impl<S: Scheduler> AutoplayTimer<S> {
    pub fn new(scheduler: S, interval_ms: u32) -> Self {
        Self {
            scheduler,
            interval_ms,
            generation: 0,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts a full countdown, cancelling any countdown in flight.
    pub fn start(&mut self) {
        self.scheduler.disarm();
        self.generation += 1;
        self.scheduler.arm(self.generation, self.interval_ms);
        self.running = true;
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.scheduler.disarm();
        self.generation += 1;
        self.running = false;
    }

    /// Whether an expiry tagged `generation` belongs to the live countdown.
    pub fn accepts(&self, generation: u64) -> bool {
        self.running && generation == self.generation
    }
}

/// Browser scheduler backed by a repeating `setInterval`. Dropping the
/// handle clears the interval.
pub struct IntervalScheduler {
    on_expire: Callback<u64>,
    handle: Option<Interval>,
}

impl IntervalScheduler {
    pub fn new(on_expire: Callback<u64>) -> Self {
        Self {
            on_expire,
            handle: None,
        }
    }
}

impl Scheduler for IntervalScheduler {
    fn arm(&mut self, generation: u64, interval_ms: u32) {
        let on_expire = self.on_expire.clone();
        self.handle = Some(Interval::new(interval_ms, move || {
            on_expire.emit(generation);
        }));
    }

    fn disarm(&mut self) {
        if let Some(interval) = self.handle.take() {
            drop(interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::test_support::VirtualClock;

    #[test]
    fn restart_replaces_the_live_countdown() {
        let clock = VirtualClock::default();
        let mut timer = AutoplayTimer::new(clock.clone(), 4000);
        timer.start();
        let first = clock.armed_generation().unwrap();
        clock.set_now(1000);
        timer.start();
        let second = clock.armed_generation().unwrap();

        assert_ne!(first, second);
        assert!(!timer.accepts(first));
        assert!(timer.accepts(second));
        assert_eq!(clock.deadline(), Some(5000));
    }

    #[test]
    fn stop_invalidates_pending_expiries() {
        let clock = VirtualClock::default();
        let mut timer = AutoplayTimer::new(clock.clone(), 3000);
        timer.start();
        let generation = clock.armed_generation().unwrap();
        timer.stop();

        assert!(!timer.is_running());
        assert!(!timer.accepts(generation));
        assert_eq!(clock.armed_generation(), None);
    }

    #[test]
    fn stop_when_idle_does_not_touch_scheduler() {
        let clock = VirtualClock::default();
        let mut timer = AutoplayTimer::new(clock.clone(), 3000);
        timer.stop();
        assert_eq!(clock.disarm_count(), 0);
    }
}
