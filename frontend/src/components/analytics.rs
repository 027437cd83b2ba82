use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{window, ErrorEvent, Event};
use yew::prelude::*;

use crate::analytics::sink::{engagement, Attributes};
use crate::analytics::tracking::{link_events, seconds_between, EngagementStats, ScrollDepthTracker};
use crate::analytics::{GtagSink, NotificationSink, NullSink};
use crate::config::{SCROLL_MILESTONES, SCROLL_THROTTLE_MS};
use crate::dom::{closest, document, document_hidden, now_ms, page_host, Listener};

/// The sink every component reports to. Swapped for a [`NullSink`] while
/// analytics consent is withheld.
#[derive(Clone)]
pub struct AnalyticsContext {
    pub sink: Rc<dyn NotificationSink>,
    pub enabled: bool,
}

impl AnalyticsContext {
    pub fn new(enabled: bool) -> Self {
        let sink: Rc<dyn NotificationSink> = if enabled {
            Rc::new(GtagSink)
        } else {
            Rc::new(NullSink)
        };
        Self { sink, enabled }
    }
}

impl PartialEq for AnalyticsContext {
    fn eq(&self, other: &Self) -> bool {
        self.enabled == other.enabled && Rc::ptr_eq(&self.sink, &other.sink)
    }
}

#[hook]
pub fn use_sink() -> Rc<dyn NotificationSink> {
    use_context::<AnalyticsContext>()
        .map(|context| context.sink)
        .unwrap_or_else(|| Rc::new(NullSink))
}

/// Sink that always forwards to whatever the analytics context currently
/// holds, for long-lived owners that outlive a consent change.
#[derive(Clone)]
pub struct CurrentSink(Rc<RefCell<Rc<dyn NotificationSink>>>);

impl NotificationSink for CurrentSink {
    fn notify(&self, event: &str, attributes: &Attributes) {
        let sink = self.0.borrow().clone();
        sink.notify(event, attributes);
    }
}

#[hook]
pub fn use_current_sink() -> CurrentSink {
    let sink = use_sink();
    let current = use_mut_ref(|| sink.clone());
    *current.borrow_mut() = sink;
    CurrentSink(current)
}

/// Page-wide engagement tracking: link clicks, scroll depth, exits,
/// interaction counts and uncaught errors. Installed once analytics is
/// enabled and torn down if it is switched off.
#[hook]
pub fn use_page_tracking(enabled: bool) {
    let sink = use_sink();
    use_effect_with_deps(
        move |enabled| {
            let listeners = if *enabled {
                install(sink)
            } else {
                Vec::new()
            };
            move || drop(listeners)
        },
        enabled,
    );
}

fn install(sink: Rc<dyn NotificationSink>) -> Vec<Listener> {
    info!("installing page tracking");
    let stats = Rc::new(RefCell::new(EngagementStats::new(now_ms())));
    let depth = Rc::new(RefCell::new(ScrollDepthTracker::new(SCROLL_MILESTONES)));
    let pending_scroll: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let host = page_host();
    let mut listeners = Vec::new();

    listeners.extend(Listener::on_document("click", {
        let sink = sink.clone();
        move |event: Event| {
            let Some(link) = closest(&event, "a") else {
                return;
            };
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let text = link.text_content().unwrap_or_default();
            for link_event in link_events(&href, &text, &host) {
                sink.notify(link_event.name, &link_event.attributes);
            }
        }
    }));

    for kind in ["click", "scroll", "keydown"] {
        let stats = stats.clone();
        listeners.extend(Listener::on_document(kind, move |_| {
            stats.borrow_mut().interaction();
        }));
    }

    listeners.extend(Listener::on_window("scroll", {
        let sink = sink.clone();
        let depth = depth.clone();
        move |_| {
            let sink = sink.clone();
            let depth = depth.clone();
            // replacing the handle cancels the previous timeout
            *pending_scroll.borrow_mut() = Some(Timeout::new(SCROLL_THROTTLE_MS, move || {
                let Some((top, height, viewport)) = scroll_metrics() else {
                    return;
                };
                for milestone in depth.borrow_mut().record(top, height, viewport) {
                    sink.notify("scroll_depth", &engagement(format!("{milestone}%"), milestone));
                }
            }));
        }
    }));

    let send_exit = {
        let sink = sink.clone();
        let stats = stats.clone();
        let depth = depth.clone();
        move || {
            let now = now_ms();
            let summary = stats.borrow().summary(now, depth.borrow().max_percent());
            sink.notify("engagement_summary", &summary);
        }
    };

    listeners.extend(Listener::on_document("visibilitychange", {
        let sink = sink.clone();
        let send_exit = send_exit.clone();
        move |_| {
            if document_hidden() {
                let mut exit = Attributes::new();
                exit.insert("event_category".into(), "engagement".into());
                exit.insert("value".into(), seconds_between(0.0, now_ms()).into());
                sink.notify("page_exit", &exit);
                send_exit();
            }
        }
    }));

    listeners.extend(Listener::on_window("beforeunload", move |_| send_exit()));

    listeners.extend(Listener::on_window("error", move |event: Event| {
        let description = event
            .dyn_ref::<ErrorEvent>()
            .map(|error| error.message())
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());
        let mut attributes = Attributes::new();
        attributes.insert("description".into(), description.into());
        attributes.insert("fatal".into(), false.into());
        sink.notify("exception", &attributes);
    }));

    listeners
}

fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let window = window()?;
    let top = window.page_y_offset().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let height = f64::from(document()?.document_element()?.scroll_height());
    Some((top, height, viewport))
}
