//! Compile-time host-strategy selection and concrete adapter factories.

use storefront_core::{ImageLoadFuture, ImageLoadService, LoadedImage, NoopImageLoadService};

use crate::WebImageLoadService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `storefront_web` adapters.
pub enum HostStrategy {
    /// Real browser APIs.
    Browser,
    /// Headless placeholders for prerendering and native test harnesses.
    Headless,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Headless => "headless",
    }
}

/// Adapter enum that erases the concrete image backend behind [`ImageLoadService`].
#[derive(Debug, Clone, Copy)]
pub enum ImageLoadServiceAdapter {
    /// `HtmlImageElement`-backed loading.
    Browser(WebImageLoadService),
    /// Immediate results without intrinsic size.
    Headless(NoopImageLoadService),
}

impl ImageLoadService for ImageLoadServiceAdapter {
    fn load<'a>(&'a self, src: &'a str) -> ImageLoadFuture<'a, Result<LoadedImage, String>> {
        match self {
            Self::Browser(service) => service.load(src),
            Self::Headless(service) => service.load(src),
        }
    }
}

/// Builds the image loading adapter for the compile-time selected host strategy.
pub fn image_load_service() -> ImageLoadServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ImageLoadServiceAdapter::Browser(WebImageLoadService),
        HostStrategy::Headless => ImageLoadServiceAdapter::Headless(NoopImageLoadService),
    }
}
