//! Fades in marked sections once they scroll into view.

use std::{cell::RefCell, rc::Rc};

use leptos::logging;
use storefront_core::{IntersectionSample, RevealKey, RevealRegistry};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::{
    dom::{elements, set_class, DomError},
    markup::{REVEAL_KEY_ATTR, REVEAL_SELECTOR, VISIBLE_CLASS},
};

fn reveal_key(element: &Element) -> Option<RevealKey> {
    element
        .get_attribute(REVEAL_KEY_ATTR)
        .and_then(|raw| raw.parse().ok())
        .map(RevealKey)
}

fn build_observer(registry: Rc<RefCell<RevealRegistry>>) -> Result<IntersectionObserver, DomError> {
    let threshold = registry.borrow().threshold();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = reveal_key(&target) else {
                    continue;
                };
                let sample = IntersectionSample {
                    key,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if registry.borrow_mut().observe(sample) {
                    set_class(&target, VISIBLE_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    ));

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| DomError::js("failed to create intersection observer", err))?;
    callback.forget();
    Ok(observer)
}

/// Observes every `.reveal` element present now. Returns how many are observed.
///
/// Without `IntersectionObserver` support the elements are shown immediately.
pub(crate) fn attach_scroll_reveal(document: &Document, threshold: f64) -> Result<usize, DomError> {
    let targets = elements(document.query_selector_all(REVEAL_SELECTOR));
    if targets.is_empty() {
        return Ok(0);
    }

    let registry = Rc::new(RefCell::new(RevealRegistry::new(threshold)));
    let observer = match build_observer(registry.clone()) {
        Ok(observer) => observer,
        Err(err) => {
            logging::warn!("scroll reveal disabled, showing all targets: {err}");
            for target in &targets {
                set_class(target, VISIBLE_CLASS, true);
            }
            return Ok(0);
        }
    };

    for target in &targets {
        let key = registry.borrow_mut().register();
        let _ = target.set_attribute(REVEAL_KEY_ATTR, &key.0.to_string());
        observer.observe(target);
    }
    Ok(targets.len())
}
