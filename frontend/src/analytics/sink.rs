use std::rc::Rc;

use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

pub type Attributes = Map<String, Value>;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("no browser window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("`{0}` is not loaded")]
    NotLoaded(&'static str),
    #[error("`{0}` is not callable")]
    NotCallable(&'static str),
    #[error("javascript call failed: {0}")]
    Js(String),
    #[error("could not serialize event attributes: {0}")]
    Serialize(String),
}

impl From<JsValue> for AnalyticsError {
    fn from(value: JsValue) -> Self {
        AnalyticsError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Consumer of engagement events. Implementations are best effort and must
/// never fail into the caller.
pub trait NotificationSink {
    fn notify(&self, event: &str, attributes: &Attributes);
}

impl<N: NotificationSink + ?Sized> NotificationSink for Rc<N> {
    fn notify(&self, event: &str, attributes: &Attributes) {
        (**self).notify(event, attributes)
    }
}

/// Sink that drops everything, used when analytics is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _event: &str, _attributes: &Attributes) {}
}

/// The attribute shape every page event uses.
pub fn engagement(label: impl Into<String>, value: impl Into<Value>) -> Attributes {
    let mut attributes = Map::new();
    attributes.insert("event_category".into(), Value::from("engagement"));
    attributes.insert("event_label".into(), Value::from(label.into()));
    attributes.insert("value".into(), value.into());
    attributes
}

/// Forwards events to the global `gtag` function when the GA4 loader has
/// installed it.
#[derive(Debug, Clone, Copy, Default)]
pub struct GtagSink;

impl GtagSink {
    fn send(&self, event: &str, attributes: &Attributes) -> Result<(), AnalyticsError> {
        let gtag = global_function("gtag")?;
        let payload = attributes
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| AnalyticsError::Serialize(e.to_string()))?;
        gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(event),
            &payload,
        )?;
        Ok(())
    }
}

impl NotificationSink for GtagSink {
    fn notify(&self, event: &str, attributes: &Attributes) {
        #[cfg(debug_assertions)]
        debug!("analytics event {event}: {attributes:?}");

        match self.send(event, attributes) {
            Ok(()) => {}
            Err(AnalyticsError::NotLoaded(name)) => {
                debug!("{name} missing, skipping {event}");
            }
            Err(e) => warn!("dropping analytics event {event}: {e}"),
        }
    }
}

/// Looks up `window[name]` as a callable.
pub fn global_function(name: &'static str) -> Result<Function, AnalyticsError> {
    let window = web_sys::window().ok_or(AnalyticsError::NoWindow)?;
    let value = Reflect::get(&window, &JsValue::from_str(name))?;
    if value.is_undefined() || value.is_null() {
        return Err(AnalyticsError::NotLoaded(name));
    }
    value
        .dyn_into::<Function>()
        .map_err(|_| AnalyticsError::NotCallable(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engagement_attributes_have_category_label_and_value() {
        let attributes = engagement("slide_2", 2);
        assert_eq!(attributes["event_category"], "engagement");
        assert_eq!(attributes["event_label"], "slide_2");
        assert_eq!(attributes["value"], 2);
    }

    #[test]
    fn shared_sinks_forward_to_the_inner_sink() {
        use crate::carousel::test_support::RecordingSink;

        let inner = RecordingSink::default();
        let shared: Rc<dyn NotificationSink> = Rc::new(inner.clone());
        shared.notify("faq_open", &engagement("¿Qué horario?", 1));
        assert_eq!(inner.events()[0].0, "faq_open");
    }
}
