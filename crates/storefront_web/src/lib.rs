//! Browser bindings for the storefront page.
//!
//! Each module attaches one [`storefront_core`] state machine to the server-rendered markup:
//! - `nav`: mobile navigation toggles
//! - `slider`: home-page slider with autoplay
//! - `modal`: shared lightbox and its triggers
//! - `contact`: contact form validation
//! - `products`: product listing and "load more"
//! - `reveal`: scroll reveal observer
//!
//! [`StorefrontShell`] runs all of them once under a Leptos owner.

/// Compile-time host-strategy selection and concrete adapter factories.
pub mod adapters;
pub mod config;
mod contact;
mod dom;
pub mod image_loader;
pub mod markup;
mod modal;
mod nav;
mod products;
mod reveal;
mod shell;
mod slider;

pub use adapters::{
    host_strategy_name, image_load_service, selected_host_strategy, HostStrategy,
    ImageLoadServiceAdapter,
};
pub use config::load_config;
pub use dom::DomError;
pub use image_loader::WebImageLoadService;
pub use shell::{attach_storefront, AttachSummary, StorefrontShell};
