use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use crate::nav::{anchor_id, scroll_offset};

/// Event listener that unregisters itself when dropped, so effect cleanups
/// only need to drop it.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn on_window<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::new(window()?.as_ref(), event, handler)
    }

    pub fn on_document<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::new(document()?.as_ref(), event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// `IntersectionObserver` that disconnects when dropped.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut handler: F) -> Option<Self>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(&entry, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold.into());
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Read once per component; later changes to the OS setting are not
/// followed.
pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn document_hidden() -> bool {
    document().map(|d| d.hidden()).unwrap_or(false)
}

pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

pub fn page_host() -> String {
    window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

/// Closest ancestor-or-self of the event target matching `selector`.
pub fn closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(selector).ok().flatten())
}

pub fn focus(element: &Element) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.focus();
    }
}

/// Smoothly scrolls to the element an in-page `href` names, keeping it
/// clear of the fixed header. Returns false when there is nothing to
/// scroll to.
pub fn smooth_scroll_to(href: &str) -> bool {
    let Some(id) = anchor_id(href) else {
        return false;
    };
    let Some(document) = document() else {
        return false;
    };
    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        debug!("no scroll target for {href}");
        return false;
    };
    let header_height = document
        .query_selector(".site-header")
        .ok()
        .flatten()
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()));

    let options = ScrollToOptions::new();
    options.set_top(scroll_offset(f64::from(target.offset_top()), header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    if let Some(window) = window() {
        window.scroll_to_with_scroll_to_options(&options);
    }
    true
}
