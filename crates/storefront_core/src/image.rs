//! Image loading host-service contracts.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`ImageLoadService`].
pub type ImageLoadFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// An image the host finished decoding.
pub struct LoadedImage {
    /// Source URL the image was loaded from.
    pub src: String,
    /// Intrinsic width in pixels (0 when unknown).
    pub natural_width: u32,
    /// Intrinsic height in pixels (0 when unknown).
    pub natural_height: u32,
}

impl LoadedImage {
    /// Image with unknown intrinsic size.
    pub fn without_size(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            natural_width: 0,
            natural_height: 0,
        }
    }
}

/// Host service that fetches and decodes an image off the UI path.
///
/// No timeout or retry is applied; a load that never settles never resolves.
pub trait ImageLoadService {
    /// Starts loading `src` and resolves once the image is decoded or has failed.
    fn load<'a>(&'a self, src: &'a str) -> ImageLoadFuture<'a, Result<LoadedImage, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Image service for targets without a decoder; resolves immediately with an image of unknown size.
pub struct NoopImageLoadService;

impl ImageLoadService for NoopImageLoadService {
    fn load<'a>(&'a self, src: &'a str) -> ImageLoadFuture<'a, Result<LoadedImage, String>> {
        Box::pin(async move { Ok(LoadedImage::without_size(src)) })
    }
}
