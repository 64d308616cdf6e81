//! Browser image loading backed by `HtmlImageElement`.

use storefront_core::{ImageLoadFuture, ImageLoadService, LoadedImage};

#[derive(Debug, Clone, Copy, Default)]
/// Image loading adapter that decodes through a detached `<img>` element.
pub struct WebImageLoadService;

impl ImageLoadService for WebImageLoadService {
    fn load<'a>(&'a self, src: &'a str) -> ImageLoadFuture<'a, Result<LoadedImage, String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                return load_image(src).await;
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Ok(LoadedImage::without_size(src))
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_image(src: &str) -> Result<LoadedImage, String> {
    use std::{cell::RefCell, rc::Rc};

    use futures::channel::oneshot;
    use wasm_bindgen::{closure::Closure, JsCast};

    let image = web_sys::HtmlImageElement::new()
        .map_err(|err| format!("failed to create image element: {err:?}"))?;
    let (tx, rx) = oneshot::channel::<Result<(), String>>();
    let sender = Rc::new(RefCell::new(Some(tx)));

    let load_sender = sender.clone();
    let on_load = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
        if let Some(tx) = load_sender.borrow_mut().take() {
            let _ = tx.send(Ok(()));
        }
    }));
    image.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let error_sender = sender.clone();
    let error_src = src.to_string();
    let on_error = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
        if let Some(tx) = error_sender.borrow_mut().take() {
            let _ = tx.send(Err(format!("failed to load image `{error_src}`")));
        }
    }));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    image.set_src(src);

    let settled = rx
        .await
        .map_err(|_| format!("image load for `{src}` was interrupted"));
    image.set_onload(None);
    image.set_onerror(None);
    drop(on_load);
    drop(on_error);
    settled??;

    Ok(LoadedImage {
        src: src.to_string(),
        natural_width: image.natural_width(),
        natural_height: image.natural_height(),
    })
}
