//! Shared lightbox binding.
//!
//! Triggers are resolved through one page-wide click listener, so quick-view buttons rendered
//! after attach (product cards) open the modal without further wiring.

use std::rc::Rc;

use leptos::*;
use storefront_core::{
    load_with, resolve_source, ImageLoadService, ModalBody, ModalState, TriggerKind, TriggerSource,
};
use web_sys::{Document, Element, MouseEvent};

use crate::{
    dom::{contains_target, event_target_element, listen, query, set_class, DomError},
    markup::{
        DATA_SRC_ATTR, GALLERY_ITEM_SELECTOR, MODAL_BODY_SELECTOR, MODAL_CLOSE_SELECTOR,
        MODAL_CONTENT_SELECTOR, MODAL_ID, MODAL_OPEN_CLASS, MODAL_SRC_ATTR,
        MODAL_TRIGGER_SELECTOR, QUICK_VIEW_SELECTOR,
    },
};

const MODAL_IMAGE_STYLE: &str = "max-width:100%;max-height:80vh;display:block;margin:0 auto;";

#[derive(Clone)]
struct ModalView {
    root: Element,
    content: Option<Element>,
    body: Element,
}

impl ModalView {
    fn set_visible(&self, visible: bool) {
        set_class(&self.root, MODAL_OPEN_CLASS, visible);
        let _ = self
            .root
            .set_attribute("aria-hidden", if visible { "false" } else { "true" });
    }

    fn render(&self, body: &ModalBody) {
        self.body.set_inner_html("");
        match body {
            ModalBody::Empty => {}
            ModalBody::Loading => {
                let placeholder = view! { <p class="modal-loading">"Loading…"</p> };
                let node: &web_sys::Node = &placeholder;
                let _ = self.body.append_child(node);
            }
            ModalBody::Image(image) => {
                let img = view! {
                    <img src=image.src.clone() alt="" style=MODAL_IMAGE_STYLE />
                };
                let node: &web_sys::Node = &img;
                let _ = self.body.append_child(node);
            }
        }
    }

    fn is_backdrop_click(&self, ev: &MouseEvent) -> bool {
        let target = ev.target();
        match &self.content {
            Some(content) => !contains_target(content, target.as_ref()),
            None => event_target_element(ev).is_some_and(|element| element == self.root),
        }
    }
}

fn trigger_kind(trigger: &Element) -> TriggerKind {
    TriggerKind::classify(
        trigger.matches(QUICK_VIEW_SELECTOR).unwrap_or(false),
        trigger.matches(GALLERY_ITEM_SELECTOR).unwrap_or(false),
    )
}

fn trigger_source(trigger: &Element) -> TriggerSource {
    TriggerSource {
        modal_src: trigger.get_attribute(MODAL_SRC_ATTR),
        data_src: trigger.get_attribute(DATA_SRC_ATTR),
        href: trigger.get_attribute("href"),
    }
}

/// Whether the stored modal is shown. A disposed store reads as hidden.
fn modal_visible(modal: StoredValue<ModalState>) -> bool {
    modal.try_with_value(ModalState::is_visible).unwrap_or(false)
}

fn close(modal: StoredValue<ModalState>, ui: &ModalView) {
    if modal.try_update_value(ModalState::close).is_none() {
        return;
    }
    ui.set_visible(false);
    ui.render(&ModalBody::Empty);
}

/// Wires `#modal` and its triggers. Returns `false` when the page has no modal.
pub(crate) fn attach_modal(
    document: &Document,
    loader: Rc<dyn ImageLoadService>,
) -> Result<bool, DomError> {
    let Some(root) = document.get_element_by_id(MODAL_ID) else {
        return Ok(false);
    };
    let Some(body) = query(&root, MODAL_BODY_SELECTOR) else {
        return Ok(false);
    };
    let ui = ModalView {
        content: query(&root, MODAL_CONTENT_SELECTOR),
        root,
        body,
    };
    let modal = store_value(ModalState::default());
    ui.set_visible(false);

    let open_listener = window_event_listener(ev::click, {
        let ui = ui.clone();
        move |ev| {
            let Some(trigger) = event_target_element(&ev)
                .and_then(|target| target.closest(MODAL_TRIGGER_SELECTOR).ok().flatten())
            else {
                return;
            };
            if !trigger_kind(&trigger).opens_modal() {
                return;
            }
            ev.prevent_default();
            let Some(src) = resolve_source(&trigger_source(&trigger)) else {
                return;
            };
            let Some(ticket) = modal.try_update_value(|modal| modal.open(src)) else {
                return;
            };
            ui.set_visible(true);
            ui.render(&ModalBody::Loading);

            let loader = loader.clone();
            let ui = ui.clone();
            spawn_local(async move {
                let completion = load_with(&*loader, ticket).await;
                if let Err(err) = &completion.result {
                    logging::warn!("modal image load failed: {err}");
                }
                let applied = modal
                    .try_update_value(|modal| modal.apply(completion))
                    .unwrap_or(false);
                if applied {
                    modal.try_with_value(|modal| ui.render(modal.body()));
                }
            });
        }
    });
    on_cleanup(move || open_listener.remove());

    if let Some(close_button) = query(&ui.root, MODAL_CLOSE_SELECTOR) {
        let ui = ui.clone();
        listen::<MouseEvent>(&close_button, "click", move |ev| {
            ev.prevent_default();
            close(modal, &ui);
        })?;
    }

    listen::<MouseEvent>(&ui.root, "click", {
        let ui = ui.clone();
        move |ev| {
            if modal_visible(modal) && ui.is_backdrop_click(&ev) {
                close(modal, &ui);
            }
        }
    })?;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" || !modal_visible(modal) {
            return;
        }
        close(modal, &ui);
    });
    on_cleanup(move || escape_listener.remove());

    Ok(true)
}
