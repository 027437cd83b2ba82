use std::collections::BTreeSet;

use serde_json::{json, Value};

use super::sink::{engagement, Attributes};
use crate::config::APPLY_ANCHOR;

/// Reports each scroll-depth milestone once, the first time the reader
/// scrolls past it.
#[derive(Debug, Clone)]
pub struct ScrollDepthTracker {
    milestones: &'static [u32],
    reported: BTreeSet<u32>,
    max_percent: u32,
}

impl ScrollDepthTracker {
    pub fn new(milestones: &'static [u32]) -> Self {
        Self {
            milestones,
            reported: BTreeSet::new(),
            max_percent: 0,
        }
    }

    pub fn max_percent(&self) -> u32 {
        self.max_percent
    }

    /// Milestones newly passed at this scroll position.
    pub fn record(&mut self, scroll_top: f64, document_height: f64, viewport_height: f64) -> Vec<u32> {
        let percent = scroll_percent(scroll_top, document_height, viewport_height);
        if percent <= self.max_percent {
            return Vec::new();
        }
        self.max_percent = percent;
        let milestones = self.milestones;
        milestones
            .iter()
            .copied()
            .filter(|milestone| percent >= *milestone && self.reported.insert(*milestone))
            .collect()
    }
}

pub fn scroll_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> u32 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 100;
    }
    ((scroll_top / scrollable) * 100.0).round().clamp(0.0, 100.0) as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkEvent {
    pub name: &'static str,
    pub attributes: Attributes,
}

impl LinkEvent {
    fn new(name: &'static str, label: &str) -> Self {
        Self {
            name,
            attributes: engagement(label, 1),
        }
    }
}

const DOWNLOAD_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".zip"];

/// Events a click on a link with `href` should produce. `text` is the
/// link's visible label, `host` the page's own hostname.
pub fn link_events(href: &str, text: &str, host: &str) -> Vec<LinkEvent> {
    let mut events = Vec::new();
    if href == APPLY_ANCHOR {
        events.push(LinkEvent::new("apply_click", text.trim()));
    }
    if href.contains("wa.me") || href.contains("whatsapp") {
        events.push(LinkEvent::new("whatsapp_click", "whatsapp_contact"));
    }
    if DOWNLOAD_EXTENSIONS.iter().any(|ext| href.contains(ext)) {
        events.push(LinkEvent::new("file_download", href));
    }
    if href.starts_with("http") && (host.is_empty() || !href.contains(host)) {
        events.push(LinkEvent::new("external_link_click", href));
    }
    events
}

/// Running totals sent as one summary when the reader leaves.
#[derive(Debug, Clone, Default)]
pub struct EngagementStats {
    started_at_ms: f64,
    interactions: u32,
}

impl EngagementStats {
    pub fn new(started_at_ms: f64) -> Self {
        Self {
            started_at_ms,
            interactions: 0,
        }
    }

    pub fn interaction(&mut self) {
        self.interactions = self.interactions.saturating_add(1);
    }

    pub fn summary(&self, now_ms: f64, max_scroll_depth: u32) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("event_category".into(), Value::from("engagement"));
        attributes.insert(
            "custom_parameters".into(),
            json!({
                "time_on_page": seconds_between(self.started_at_ms, now_ms),
                "max_scroll_depth": max_scroll_depth,
                "interactions_count": self.interactions,
            }),
        );
        attributes
    }
}

pub fn seconds_between(start_ms: f64, end_ms: f64) -> u64 {
    ((end_ms - start_ms).max(0.0) / 1000.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCROLL_MILESTONES;

    #[test]
    fn milestones_fire_once_in_order() {
        let mut tracker = ScrollDepthTracker::new(SCROLL_MILESTONES);
        assert_eq!(tracker.record(600.0, 2000.0, 1000.0), vec![25, 50]);
        assert_eq!(tracker.record(100.0, 2000.0, 1000.0), Vec::<u32>::new());
        assert_eq!(tracker.record(700.0, 2000.0, 1000.0), Vec::<u32>::new());
        assert_eq!(tracker.record(1000.0, 2000.0, 1000.0), vec![75, 100]);
        assert_eq!(tracker.max_percent(), 100);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(scroll_percent(5000.0, 2000.0, 1000.0), 100);
        assert_eq!(scroll_percent(-20.0, 2000.0, 1000.0), 0);
        assert_eq!(scroll_percent(0.0, 800.0, 1000.0), 100);
    }

    #[test]
    fn classifies_links() {
        let names = |href: &str| -> Vec<&'static str> {
            link_events(href, " Aplica ya ", "empleos.example.mx")
                .into_iter()
                .map(|event| event.name)
                .collect()
        };
        assert_eq!(names("#aplicar"), vec!["apply_click"]);
        assert_eq!(names("https://wa.me/5218112345678"), vec!["whatsapp_click", "external_link_click"]);
        assert_eq!(names("/docs/vacante.pdf"), vec!["file_download"]);
        assert_eq!(names("https://empleos.example.mx/aviso"), Vec::<&str>::new());
        assert_eq!(names("#faq"), Vec::<&str>::new());
    }

    #[test]
    fn apply_label_is_trimmed_link_text() {
        let events = link_events("#aplicar", "  Aplica ya\n", "");
        assert_eq!(events[0].attributes["event_label"], "Aplica ya");
    }

    #[test]
    fn summary_reports_seconds_depth_and_interactions() {
        let mut stats = EngagementStats::new(1_000.0);
        stats.interaction();
        stats.interaction();
        let summary = stats.summary(46_400.0, 75);
        assert_eq!(summary["custom_parameters"]["time_on_page"], 45);
        assert_eq!(summary["custom_parameters"]["max_scroll_depth"], 75);
        assert_eq!(summary["custom_parameters"]["interactions_count"], 2);
    }
}
