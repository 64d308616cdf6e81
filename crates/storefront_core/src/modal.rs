//! Shared lightbox state, trigger classification, and stale-load protection.
//!
//! Every open hands out a [`LoadTicket`] stamped with the modal's current generation. A load
//! completion is applied only while its ticket is still current, so an image that finishes after
//! a newer open (or after a close) never overwrites what the user is looking at.

use crate::image::{ImageLoadService, LoadedImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What kind of modal trigger a clicked element is.
pub enum TriggerKind {
    /// Explicit quick-view / "open modal" control.
    QuickView,
    /// Gallery thumbnail.
    GalleryItem,
    /// Not a modal trigger.
    None,
}

impl TriggerKind {
    /// Classifies a click target from its capability flags. Quick-view wins when both match.
    pub fn classify(is_quick_view: bool, is_gallery_item: bool) -> Self {
        match (is_quick_view, is_gallery_item) {
            (true, _) => Self::QuickView,
            (false, true) => Self::GalleryItem,
            (false, false) => Self::None,
        }
    }

    /// Whether clicks on this kind open the modal.
    pub fn opens_modal(self) -> bool {
        !matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Attribute values read from a trigger element.
pub struct TriggerSource {
    /// Explicit modal image (`data-modal-src`).
    pub modal_src: Option<String>,
    /// Generic image source (`data-src`).
    pub data_src: Option<String>,
    /// Link target (`href`).
    pub href: Option<String>,
}

/// Picks the image to show: explicit modal source, then `data-src`, then `href`.
///
/// Blank values are skipped.
pub fn resolve_source(source: &TriggerSource) -> Option<String> {
    [&source.modal_src, &source.data_src, &source.href]
        .into_iter()
        .flatten()
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Content of the modal body.
pub enum ModalBody {
    /// Nothing rendered (modal closed).
    #[default]
    Empty,
    /// Loading placeholder while the image is in flight.
    Loading,
    /// Decoded image.
    Image(LoadedImage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Identifies one image load started by [`ModalState::open`].
pub struct LoadTicket {
    generation: u64,
    src: String,
}

impl LoadTicket {
    /// Generation the ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Image source to load.
    pub fn src(&self) -> &str {
        &self.src
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a ticketed image load.
pub struct LoadCompletion {
    /// Ticket the load was started with.
    pub ticket: LoadTicket,
    /// Decoded image or the host's failure reason.
    pub result: Result<LoadedImage, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Visibility, body, and load generation of the shared modal.
pub struct ModalState {
    visible: bool,
    body: ModalBody,
    generation: u64,
}

impl ModalState {
    /// Whether the overlay is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current body content.
    pub fn body(&self) -> &ModalBody {
        &self.body
    }

    /// Current load generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Shows the modal with a loading placeholder and issues a ticket for `src`.
    ///
    /// Any ticket issued before this call becomes stale.
    pub fn open(&mut self, src: impl Into<String>) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.body = ModalBody::Loading;
        LoadTicket {
            generation: self.generation,
            src: src.into(),
        }
    }

    /// Hides the modal and clears the body. Pending loads become stale.
    pub fn close(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.visible = false;
        self.body = ModalBody::Empty;
    }

    /// Whether a completion for `ticket` would still be shown.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.visible && ticket.generation == self.generation
    }

    /// Applies a finished load. Returns `true` when the body changed to the loaded image.
    ///
    /// Stale tickets and failed loads leave the state untouched; a failed load therefore keeps
    /// the loading placeholder until the modal is closed.
    pub fn apply(&mut self, completion: LoadCompletion) -> bool {
        if !self.is_current(&completion.ticket) {
            return false;
        }
        match completion.result {
            Ok(image) => {
                self.body = ModalBody::Image(image);
                true
            }
            Err(_) => false,
        }
    }
}

/// Runs the load described by `ticket` and pairs the result with it.
pub async fn load_with<L>(loader: &L, ticket: LoadTicket) -> LoadCompletion
where
    L: ImageLoadService + ?Sized,
{
    let result = loader.load(&ticket.src).await;
    LoadCompletion { ticket, result }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    use futures::{
        channel::oneshot,
        executor::{block_on, LocalPool},
        task::LocalSpawnExt,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::image::{ImageLoadFuture, NoopImageLoadService};

    #[derive(Default)]
    struct GatedLoader {
        gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    }

    impl GatedLoader {
        fn gate(&self, src: &str) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().insert(src.to_string(), rx);
            tx
        }
    }

    impl ImageLoadService for GatedLoader {
        fn load<'a>(&'a self, src: &'a str) -> ImageLoadFuture<'a, Result<LoadedImage, String>> {
            let gate = self.gates.borrow_mut().remove(src);
            Box::pin(async move {
                let gate = gate.ok_or_else(|| format!("no gate for {src}"))?;
                gate.await
                    .map(|()| LoadedImage::without_size(src))
                    .map_err(|_| format!("load of {src} was dropped"))
            })
        }
    }

    fn source(modal_src: Option<&str>, data_src: Option<&str>, href: Option<&str>) -> TriggerSource {
        TriggerSource {
            modal_src: modal_src.map(str::to_string),
            data_src: data_src.map(str::to_string),
            href: href.map(str::to_string),
        }
    }

    #[test]
    fn classification_prefers_quick_view() {
        assert_eq!(TriggerKind::classify(true, true), TriggerKind::QuickView);
        assert_eq!(TriggerKind::classify(false, true), TriggerKind::GalleryItem);
        assert_eq!(TriggerKind::classify(false, false), TriggerKind::None);
        assert!(!TriggerKind::None.opens_modal());
    }

    #[test]
    fn source_resolution_follows_priority_and_skips_blanks() {
        assert_eq!(
            resolve_source(&source(Some("a.jpg"), Some("b.jpg"), Some("c.jpg"))),
            Some("a.jpg".to_string())
        );
        assert_eq!(
            resolve_source(&source(None, Some("b.jpg"), Some("c.jpg"))),
            Some("b.jpg".to_string())
        );
        assert_eq!(
            resolve_source(&source(Some("  "), Some(""), Some(" c.jpg "))),
            Some("c.jpg".to_string())
        );
        assert_eq!(resolve_source(&source(None, None, None)), None);
    }

    #[test]
    fn open_shows_loading_and_close_resets() {
        let mut modal = ModalState::default();
        let ticket = modal.open("a.jpg");
        assert!(modal.is_visible());
        assert_eq!(modal.body(), &ModalBody::Loading);
        assert!(modal.is_current(&ticket));

        modal.close();
        assert!(!modal.is_visible());
        assert_eq!(modal.body(), &ModalBody::Empty);
        assert!(!modal.is_current(&ticket));
    }

    #[test]
    fn completion_after_close_is_discarded() {
        let mut modal = ModalState::default();
        let ticket = modal.open("a.jpg");
        modal.close();

        let done = block_on(load_with(&NoopImageLoadService, ticket));
        assert!(!modal.apply(done));
        assert_eq!(modal.body(), &ModalBody::Empty);
    }

    #[test]
    fn failed_load_keeps_placeholder() {
        let mut modal = ModalState::default();
        let ticket = modal.open("missing.jpg");
        let applied = modal.apply(LoadCompletion {
            ticket,
            result: Err("decode failed".to_string()),
        });
        assert!(!applied);
        assert!(modal.is_visible());
        assert_eq!(modal.body(), &ModalBody::Loading);
    }

    #[test]
    fn older_load_finishing_last_does_not_clobber_newer_image() {
        let modal = Rc::new(RefCell::new(ModalState::default()));
        let loader = Rc::new(GatedLoader::default());
        let release_a = loader.gate("a.jpg");
        let release_b = loader.gate("b.jpg");

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for src in ["a.jpg", "b.jpg"] {
            let ticket = modal.borrow_mut().open(src);
            let modal = modal.clone();
            let loader = loader.clone();
            spawner
                .spawn_local(async move {
                    let done = load_with(&*loader, ticket).await;
                    modal.borrow_mut().apply(done);
                })
                .expect("spawn load");
        }
        pool.run_until_stalled();
        assert_eq!(modal.borrow().body(), &ModalBody::Loading);

        release_b.send(()).expect("release b");
        pool.run_until_stalled();
        assert_eq!(
            modal.borrow().body(),
            &ModalBody::Image(LoadedImage::without_size("b.jpg"))
        );

        release_a.send(()).expect("release a");
        pool.run_until_stalled();
        assert_eq!(
            modal.borrow().body(),
            &ModalBody::Image(LoadedImage::without_size("b.jpg"))
        );
    }
}
