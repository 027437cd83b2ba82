use super::rotator::{Rotator, Trigger};
use super::timer::Scheduler;
use crate::analytics::sink::NotificationSink;
use crate::config::SWIPE_THRESHOLD_PX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Previous,
    Next,
}

/// A drag past the threshold is a swipe. Content follows the finger, so a
/// rightward drag brings in the previous slide.
pub fn swipe_gesture(delta_x: f64) -> Option<Gesture> {
    if delta_x.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    if delta_x > 0.0 {
        Some(Gesture::Previous)
    } else {
        Some(Gesture::Next)
    }
}

pub fn key_gesture(key: &str) -> Option<Gesture> {
    match key {
        "ArrowLeft" => Some(Gesture::Previous),
        "ArrowRight" => Some(Gesture::Next),
        _ => None,
    }
}

/// Remembers where a touch began.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Net horizontal travel since `begin`, if a touch was in progress.
    pub fn end(&mut self, x: f64) -> Option<f64> {
        self.start_x.take().map(|start| x - start)
    }
}

impl<T, S: Scheduler, N: NotificationSink> Rotator<T, S, N> {
    pub fn apply(&mut self, gesture: Gesture) -> Option<usize> {
        match gesture {
            Gesture::Previous => self.previous(Trigger::Manual),
            Gesture::Next => self.next(Trigger::Manual),
        }
    }

    pub fn swipe(&mut self, delta_x: f64) -> Option<usize> {
        if !self.config().supports_swipe {
            return None;
        }
        swipe_gesture(delta_x).and_then(|gesture| self.apply(gesture))
    }

    /// Returns true when the key was consumed and its default should be
    /// prevented.
    pub fn key(&mut self, key: &str) -> bool {
        if !self.config().supports_keyboard {
            return false;
        }
        match key_gesture(key) {
            Some(gesture) => {
                self.apply(gesture);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::test_support::{RecordingSink, VirtualClock};
    use crate::config::{GALLERY_CAROUSEL, HERO_CAROUSEL};

    fn gallery(count: usize) -> (Rotator<usize, VirtualClock, RecordingSink>, RecordingSink) {
        let sink = RecordingSink::default();
        let rotator = Rotator::new(
            GALLERY_CAROUSEL,
            (0..count).collect(),
            VirtualClock::default(),
            sink.clone(),
            false,
        )
        .unwrap();
        (rotator, sink)
    }

    #[test]
    fn left_swipe_past_threshold_advances() {
        let (mut rotator, sink) = gallery(3);
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0);
        let delta = tracker.end(140.0).unwrap();
        assert_eq!(rotator.swipe(delta), Some(1));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn short_swipe_does_nothing() {
        let (mut rotator, sink) = gallery(3);
        assert_eq!(rotator.swipe(-30.0), None);
        assert_eq!(rotator.swipe(50.0), None);
        assert_eq!(rotator.active_index(), 0);
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn right_swipe_goes_back() {
        let (mut rotator, _) = gallery(3);
        assert_eq!(rotator.swipe(75.0), Some(2));
    }

    #[test]
    fn arrow_keys_navigate() {
        let (mut rotator, _) = gallery(3);
        assert!(rotator.key("ArrowRight"));
        assert!(rotator.key("ArrowRight"));
        assert!(rotator.key("ArrowLeft"));
        assert_eq!(rotator.active_index(), 1);
        assert!(!rotator.key("Enter"));
    }

    #[test]
    fn hero_ignores_swipes_and_keys() {
        let mut hero = Rotator::new(
            HERO_CAROUSEL,
            vec![1, 2, 3],
            VirtualClock::default(),
            RecordingSink::default(),
            false,
        )
        .unwrap();
        assert_eq!(hero.swipe(-120.0), None);
        assert!(!hero.key("ArrowRight"));
        assert_eq!(hero.active_index(), 0);
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.end(10.0), None);
        tracker.begin(10.0);
        assert_eq!(tracker.end(-50.0), Some(-60.0));
        assert_eq!(tracker.end(0.0), None);
    }
}
