use log::debug;

use super::gate::{LifecycleGate, SuspendReason};
use super::slide_set::{ConfigError, SlideSet};
use super::timer::{AutoplayTimer, Scheduler};
use crate::analytics::sink::{engagement, NotificationSink};

/// Everything that differs between the page's carousels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatorConfig {
    pub interval_ms: u32,
    pub bidirectional: bool,
    pub has_indicators: bool,
    pub supports_swipe: bool,
    pub supports_keyboard: bool,
    /// Suspend while less than half of the carousel is on screen.
    pub pause_offscreen: bool,
    pub event: &'static str,
    pub label_prefix: &'static str,
    /// Report slides counting from one instead of zero.
    pub one_based: bool,
    /// Report the first slide as viewed when the carousel mounts.
    pub announce_initial: bool,
}

impl RotatorConfig {
    fn attributes_for(&self, index: usize) -> (String, usize) {
        let reported = if self.one_based { index + 1 } else { index };
        (format!("{}{}", self.label_prefix, reported), reported)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayState {
    Idle,
    Running,
}

/// Who asked for a transition. Manual navigation restarts the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Auto,
    Manual,
}

pub struct Rotator<T, S, N> {
    config: RotatorConfig,
    slides: SlideSet<T>,
    timer: AutoplayTimer<S>,
    gate: LifecycleGate,
    sink: N,
    released: bool,
}

impl<T, S: Scheduler, N: NotificationSink> Rotator<T, S, N> {
    pub fn new(
        config: RotatorConfig,
        slides: Vec<T>,
        scheduler: S,
        sink: N,
        reduced_motion: bool,
    ) -> Result<Self, ConfigError> {
        let indicators = if config.has_indicators { slides.len() } else { 0 };
        let slides = SlideSet::new(slides, indicators)?;
        let mut rotator = Self {
            timer: AutoplayTimer::new(scheduler, config.interval_ms),
            gate: LifecycleGate::new(reduced_motion),
            config,
            slides,
            sink,
            released: false,
        };
        rotator.reevaluate();
        if config.announce_initial {
            rotator.announce(rotator.active_index());
        }
        Ok(rotator)
    }

    pub fn config(&self) -> &RotatorConfig {
        &self.config
    }

    pub fn active_index(&self) -> usize {
        self.slides.active_index()
    }

    pub fn state(&self) -> AutoplayState {
        if self.timer.is_running() {
            AutoplayState::Running
        } else {
            AutoplayState::Idle
        }
    }

    pub fn next(&mut self, trigger: Trigger) -> Option<usize> {
        let target = self.slides.offset(1);
        self.transition(target, trigger)
    }

    /// Steps back one slide. Forward-only carousels ignore it.
    pub fn previous(&mut self, trigger: Trigger) -> Option<usize> {
        if !self.config.bidirectional {
            return None;
        }
        let target = self.slides.offset(-1);
        self.transition(target, trigger)
    }

    /// Jumps straight to `index`; out of range indexes are ignored.
    pub fn go_to(&mut self, index: usize, trigger: Trigger) -> Option<usize> {
        if index >= self.slides.len() {
            return None;
        }
        if index == self.slides.active_index() {
            if trigger == Trigger::Manual {
                self.restart();
            }
            return None;
        }
        self.transition(index, trigger)
    }

    /// Timer expiry. Expiries from a cancelled countdown are dropped.
    pub fn tick(&mut self, generation: u64) -> Option<usize> {
        if !self.timer.accepts(generation) {
            debug!("dropping stale tick {generation}");
            return None;
        }
        self.next(Trigger::Auto)
    }

    pub fn suspend(&mut self, reason: SuspendReason) {
        if self.gate.suspend(reason) {
            debug!("{} suspended by {reason:?}", self.config.event);
            self.reevaluate();
        }
    }

    pub fn resume(&mut self, reason: SuspendReason) {
        if self.gate.resume(reason) {
            debug!("{} resumed from {reason:?}", self.config.event);
            self.reevaluate();
        }
    }

    /// Cancels the countdown while the page is hidden away or unmounted.
    pub fn shutdown(&mut self) {
        self.released = true;
        self.timer.stop();
    }

    /// Undoes [`Rotator::shutdown`] when a page comes back from the
    /// back-forward cache. Autoplay resumes only if the gate allows it.
    pub fn revive(&mut self) {
        if self.released {
            self.released = false;
            self.reevaluate();
        }
    }

    fn transition(&mut self, target: usize, trigger: Trigger) -> Option<usize> {
        if self.slides.len() <= 1 || !self.slides.set_active(target) {
            return None;
        }
        if trigger == Trigger::Manual {
            self.restart();
        }
        self.announce(target);
        Some(target)
    }

    fn announce(&self, index: usize) {
        let (label, value) = self.config.attributes_for(index);
        self.sink.notify(self.config.event, &engagement(label, value));
    }

    fn restart(&mut self) {
        if self.timer.is_running() {
            self.timer.start();
        }
    }

    fn reevaluate(&mut self) {
        let allowed = !self.released && self.gate.allows(self.slides.len());
        match (self.state(), allowed) {
            (AutoplayState::Idle, true) => {
                debug!("{} autoplay running", self.config.event);
                self.timer.start();
            }
            (AutoplayState::Running, false) => {
                debug!("{} autoplay idle", self.config.event);
                self.timer.stop();
            }
            _ => {}
        }
    }
}
