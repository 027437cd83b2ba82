use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_STAGGER_MS, REVEAL_THRESHOLD};
use crate::dom::{prefers_reduced_motion, ViewportObserver};

const REVEALED: &str = "animate-in";

/// Delay before revealing an element tagged `data-reveal-index`.
pub fn stagger_delay(index: Option<&str>) -> u32 {
    index
        .and_then(|index| index.trim().parse::<u32>().ok())
        .map(|index| index.saturating_mul(REVEAL_STAGGER_MS))
        .unwrap_or(0)
}

/// Fades in every `.reveal` element under `root` the first time it scrolls
/// into view. Under reduced motion everything is shown straight away.
#[hook]
pub fn use_reveal(root: NodeRef) {
    use_effect_with_deps(
        move |_| {
            let pending: Rc<RefCell<Vec<Timeout>>> = Rc::default();
            let observer = root
                .cast::<Element>()
                .and_then(|root| reveal_within(&root, pending.clone()));
            move || {
                drop(observer);
                pending.borrow_mut().clear();
            }
        },
        (),
    );
}

fn reveal_within(root: &Element, pending: Rc<RefCell<Vec<Timeout>>>) -> Option<ViewportObserver> {
    let targets = root.query_selector_all(".reveal").ok()?;
    let elements = (0..targets.length())
        .filter_map(|i| targets.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok());

    if prefers_reduced_motion() {
        for element in elements {
            let _ = element.class_list().add_1(REVEALED);
        }
        return None;
    }

    let observer = ViewportObserver::new(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let element = entry.target();
        observer.unobserve(&element);
        let delay = stagger_delay(element.get_attribute("data-reveal-index").as_deref());
        if delay == 0 {
            let _ = element.class_list().add_1(REVEALED);
        } else {
            pending.borrow_mut().push(Timeout::new(delay, move || {
                let _ = element.class_list().add_1(REVEALED);
            }));
        }
    })?;
    for element in elements {
        observer.observe(&element);
    }
    Some(observer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_delay(Some("0")), 0);
        assert_eq!(stagger_delay(Some("1")), 100);
        assert_eq!(stagger_delay(Some("3")), 300);
    }

    #[test]
    fn missing_or_bad_index_reveals_immediately() {
        assert_eq!(stagger_delay(None), 0);
        assert_eq!(stagger_delay(Some("first")), 0);
        assert_eq!(stagger_delay(Some("")), 0);
    }
}
