//! Selectors, ids, and class names the page markup provides.

pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_OPEN_CLASS: &str = "open";

pub const SLIDER_SELECTOR: &str = ".slider";
pub const SLIDE_SELECTOR: &str = ".slide";
pub const SLIDER_PREV_SELECTOR: &str = ".slider-prev";
pub const SLIDER_NEXT_SELECTOR: &str = ".slider-next";
pub const SLIDE_ACTIVE_CLASS: &str = "active";

pub const MODAL_ID: &str = "modal";
pub const MODAL_CONTENT_SELECTOR: &str = ".modal-content";
pub const MODAL_BODY_SELECTOR: &str = ".modal-body";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal-close";
pub const MODAL_OPEN_CLASS: &str = "open";
pub const QUICK_VIEW_SELECTOR: &str = ".open-modal";
pub const GALLERY_ITEM_SELECTOR: &str = ".gallery-item";
pub const MODAL_TRIGGER_SELECTOR: &str = ".open-modal, .gallery-item";
pub const MODAL_SRC_ATTR: &str = "data-modal-src";
pub const DATA_SRC_ATTR: &str = "data-src";

pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_FEEDBACK_ID: &str = "form-feedback";

pub const ALL_PRODUCTS_ID: &str = "all-products";
pub const PRODUCT_GRID_ID: &str = "product-grid";
pub const LOAD_MORE_ID: &str = "load-more";
pub const LOAD_MORE_EXHAUSTED_LABEL: &str = "No more products";

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";
pub const VISIBLE_CLASS: &str = "visible";

pub const CONFIG_ELEMENT_ID: &str = "storefront-config";
