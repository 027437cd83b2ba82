use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SuspendReason {
    Hover,
    Focus,
    HiddenDocument,
    OutOfViewport,
}

/// Decides whether autoplay may run, purely from the current set of
/// suspend reasons plus the fixed reduced-motion preference.
#[derive(Debug, Clone, Default)]
pub struct LifecycleGate {
    reasons: BTreeSet<SuspendReason>,
    reduced_motion: bool,
}

impl LifecycleGate {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            reasons: BTreeSet::new(),
            reduced_motion,
        }
    }

    /// Returns true when the reason was not already active.
    pub fn suspend(&mut self, reason: SuspendReason) -> bool {
        self.reasons.insert(reason)
    }

    /// Returns true when the reason was active.
    pub fn resume(&mut self, reason: SuspendReason) -> bool {
        self.reasons.remove(&reason)
    }

    pub fn allows(&self, slide_count: usize) -> bool {
        self.reasons.is_empty() && !self.reduced_motion && slide_count > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_only_without_reasons() {
        let mut gate = LifecycleGate::new(false);
        assert!(gate.allows(3));
        assert!(gate.suspend(SuspendReason::Hover));
        assert!(gate.suspend(SuspendReason::HiddenDocument));
        assert!(!gate.allows(3));
        assert!(gate.resume(SuspendReason::Hover));
        assert!(!gate.allows(3));
        assert!(gate.resume(SuspendReason::HiddenDocument));
        assert!(gate.allows(3));
    }

    #[test]
    fn repeated_signals_are_idempotent() {
        let mut gate = LifecycleGate::new(false);
        assert!(gate.suspend(SuspendReason::Focus));
        assert!(!gate.suspend(SuspendReason::Focus));
        assert!(gate.resume(SuspendReason::Focus));
        assert!(!gate.resume(SuspendReason::Focus));
        assert!(gate.allows(2));
    }

    #[test]
    fn reduced_motion_and_single_slide_never_run() {
        assert!(!LifecycleGate::new(true).allows(5));
        assert!(!LifecycleGate::new(false).allows(1));
    }
}
