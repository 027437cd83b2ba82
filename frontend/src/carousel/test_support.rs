use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use super::timer::Scheduler;
use crate::analytics::sink::{Attributes, NotificationSink};

#[derive(Debug, Clone, Copy)]
struct Armed {
    generation: u64,
    interval_ms: u64,
    next_fire: u64,
}

#[derive(Debug, Default)]
struct ClockState {
    now: u64,
    armed: Option<Armed>,
    arm_count: usize,
    disarm_count: usize,
}

/// In-memory repeating scheduler with a manually advanced clock.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
}

impl VirtualClock {
    pub fn set_now(&self, now: u64) {
        self.state.borrow_mut().now = now;
    }

    pub fn armed_generation(&self) -> Option<u64> {
        self.state.borrow().armed.map(|armed| armed.generation)
    }

    pub fn deadline(&self) -> Option<u64> {
        self.state.borrow().armed.map(|armed| armed.next_fire)
    }

    pub fn arm_count(&self) -> usize {
        self.state.borrow().arm_count
    }

    pub fn disarm_count(&self) -> usize {
        self.state.borrow().disarm_count
    }

    /// Pops the next expiry at or before `until`, moving the clock to it.
    pub fn next_expiry(&self, until: u64) -> Option<u64> {
        let mut state = self.state.borrow_mut();
        let armed = state.armed.as_mut()?;
        if armed.next_fire > until {
            return None;
        }
        let fired_at = armed.next_fire;
        let generation = armed.generation;
        armed.next_fire += armed.interval_ms;
        state.now = fired_at;
        Some(generation)
    }
}

impl Scheduler for VirtualClock {
    fn arm(&mut self, generation: u64, interval_ms: u32) {
        let mut state = self.state.borrow_mut();
        let now = state.now;
        state.armed = Some(Armed {
            generation,
            interval_ms: u64::from(interval_ms),
            next_fire: now + u64::from(interval_ms),
        });
        state.arm_count += 1;
    }

    fn disarm(&mut self) {
        let mut state = self.state.borrow_mut();
        if state.armed.take().is_some() {
            state.disarm_count += 1;
        }
    }
}

/// Sink that keeps every event it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<(String, Attributes)>>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<(String, Attributes)> {
        self.events.borrow().clone()
    }

    pub fn values(&self) -> Vec<Value> {
        self.events
            .borrow()
            .iter()
            .filter_map(|(_, attributes)| attributes.get("value").cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, event: &str, attributes: &Attributes) {
        self.events
            .borrow_mut()
            .push((event.to_string(), attributes.clone()));
    }
}
