//! Leptos entry component that attaches every page behavior once.

use std::rc::Rc;

use leptos::*;
use storefront_core::ImageLoadService;

use crate::{
    adapters::{host_strategy_name, image_load_service},
    config::load_config,
    contact::attach_contact_form,
    dom::{self, DomError},
    modal::attach_modal,
    nav::attach_nav_toggles,
    products::attach_product_listing,
    reveal::attach_scroll_reveal,
    slider::attach_slider,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// What [`attach_storefront`] found on the page.
pub struct AttachSummary {
    /// Navigation toggles wired to a panel.
    pub nav_toggles: usize,
    /// Slides in the slider (0 when absent).
    pub slides: usize,
    /// The shared modal was found.
    pub modal: bool,
    /// The contact form was found.
    pub contact_form: bool,
    /// A product container was found.
    pub product_listing: bool,
    /// Elements observed for scroll reveal.
    pub reveal_targets: usize,
}

fn attach_or_warn<T: Default>(component: &str, result: Result<T, DomError>) -> T {
    result.unwrap_or_else(|err| {
        logging::warn!("{component} not attached: {err}");
        T::default()
    })
}

/// Attaches all components to the current document. Components fail independently.
///
/// Must run inside a reactive owner so timers and window listeners are released on cleanup.
///
/// # Errors
///
/// Returns [`DomError`] only when there is no window or document at all.
pub fn attach_storefront(image_loader: Rc<dyn ImageLoadService>) -> Result<AttachSummary, DomError> {
    let document = dom::document()?;
    let config = load_config(&document);

    let summary = AttachSummary {
        nav_toggles: attach_or_warn("navigation", attach_nav_toggles(&document)),
        slides: attach_or_warn(
            "slider",
            attach_slider(&document, config.autoplay_interval()),
        ),
        modal: attach_or_warn("modal", attach_modal(&document, image_loader)),
        contact_form: attach_or_warn("contact form", attach_contact_form(&document)),
        product_listing: attach_or_warn(
            "product listing",
            attach_product_listing(&document, &config),
        ),
        reveal_targets: attach_or_warn(
            "scroll reveal",
            attach_scroll_reveal(&document, config.reveal_threshold),
        ),
    };
    Ok(summary)
}

#[component]
/// Attaches the storefront behaviors to the server-rendered markup. Renders nothing itself.
pub fn StorefrontShell() -> impl IntoView {
    let image_loader: Rc<dyn ImageLoadService> = Rc::new(image_load_service());
    match attach_storefront(image_loader) {
        Ok(summary) => logging::log!(
            "storefront attached ({} host): {summary:?}",
            host_strategy_name()
        ),
        Err(err) => logging::warn!("storefront behaviors unavailable: {err}"),
    }
}
