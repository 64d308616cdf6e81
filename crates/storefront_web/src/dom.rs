//! Small DOM helpers shared by the component bindings.

use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, Node, NodeList};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Browser API failures while attaching page behaviors.
pub enum DomError {
    /// No global `window` (not running in a browser).
    #[error("window unavailable")]
    MissingWindow,
    /// The window has no document.
    #[error("document unavailable")]
    MissingDocument,
    /// `addEventListener` threw.
    #[error("failed to register `{event}` listener: {detail}")]
    Listener {
        /// Event name.
        event: &'static str,
        /// Stringified JS error.
        detail: String,
    },
    /// Any other JS exception.
    #[error("{context}: {detail}")]
    Js {
        /// What was being attempted.
        context: &'static str,
        /// Stringified JS error.
        detail: String,
    },
}

impl DomError {
    pub(crate) fn js(context: &'static str, err: JsValue) -> Self {
        Self::Js {
            context,
            detail: format!("{err:?}"),
        }
    }
}

pub(crate) fn document() -> Result<Document, DomError> {
    let window = web_sys::window().ok_or(DomError::MissingWindow)?;
    window.document().ok_or(DomError::MissingDocument)
}

/// Collects the element nodes of a `querySelectorAll` result. Query errors yield no elements.
pub(crate) fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub(crate) fn event_target_element(ev: &Event) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()
}

/// Whether `target` is `container` or one of its descendants.
pub(crate) fn contains_target(container: &Element, target: Option<&EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_ref::<Node>())
        .is_some_and(|node| container.contains(Some(node)))
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen<E>(
    target: &EventTarget,
    event: &'static str,
    mut handler: impl FnMut(E) + 'static,
) -> Result<(), DomError>
where
    E: JsCast + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |ev: Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }));
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|err| DomError::Listener {
            event,
            detail: format!("{err:?}"),
        })?;
    callback.forget();
    Ok(())
}
