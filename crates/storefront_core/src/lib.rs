//! Headless state machines and host-service contracts for the storefront page.
//!
//! Every interactive behavior on the page is modelled here without touching the DOM, so the
//! transitions can be exercised natively. Browser bindings live in `storefront_web`, which owns
//! one instance of each state machine per attached component.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod config;
pub mod contact;
pub mod image;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod slider;

pub use catalog::{
    default_catalog, quick_view_image_url, DisplayMode, LoadMoreOutcome, Product, ProductLoader,
    QUICK_VIEW_IMAGE_WIDTH,
};
pub use config::{ConfigError, StorefrontConfig};
pub use contact::{
    ContactFieldError, ContactSubmission, FeedbackTone, FormFeedback, CONTACT_SUCCESS_MESSAGE,
};
pub use image::{ImageLoadFuture, ImageLoadService, LoadedImage, NoopImageLoadService};
pub use modal::{
    load_with, resolve_source, LoadCompletion, LoadTicket, ModalBody, ModalState, TriggerKind,
    TriggerSource,
};
pub use nav::{ClickTarget, NavToggleState};
pub use reveal::{IntersectionSample, RevealKey, RevealRegistry};
pub use slider::{Autoplay, SliderState, TimerHandle};
