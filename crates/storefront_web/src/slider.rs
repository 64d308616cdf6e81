//! Drives the home-page slider: active-slide classes, arrow controls, and autoplay.

use std::time::Duration;

use leptos::{leptos_dom::helpers::IntervalHandle, *};
use storefront_core::{Autoplay, SliderState, TimerHandle};
use web_sys::{Document, MouseEvent, PointerEvent};

use crate::{
    dom::{elements, listen, query, set_class, DomError},
    markup::{
        SLIDER_NEXT_SELECTOR, SLIDER_PREV_SELECTOR, SLIDER_SELECTOR, SLIDE_ACTIVE_CLASS,
        SLIDE_SELECTOR,
    },
};

struct AutoplayInterval(IntervalHandle);

impl TimerHandle for AutoplayInterval {
    fn clear(self) {
        self.0.clear();
    }
}

fn schedule(slider: RwSignal<SliderState>, period: Duration) -> Option<AutoplayInterval> {
    match set_interval_with_handle(
        move || {
            slider.try_update(|slider| {
                slider.next();
            });
        },
        period,
    ) {
        Ok(handle) => Some(AutoplayInterval(handle)),
        Err(err) => {
            logging::warn!("slider autoplay timer could not be scheduled: {err:?}");
            None
        }
    }
}

/// Wires the home-page slider. Returns the number of slides, or 0 when there is no slider.
pub(crate) fn attach_slider(document: &Document, period: Duration) -> Result<usize, DomError> {
    let Some(root) = document.query_selector(SLIDER_SELECTOR).ok().flatten() else {
        return Ok(0);
    };
    let slides = elements(root.query_selector_all(SLIDE_SELECTOR));
    let Some(initial) = SliderState::new(slides.len()) else {
        return Ok(0);
    };
    let count = slides.len();

    let slider = create_rw_signal(initial);
    create_effect(move |_| {
        let state = slider.get();
        for (idx, slide) in slides.iter().enumerate() {
            set_class(slide, SLIDE_ACTIVE_CLASS, state.is_active(idx));
        }
    });

    let autoplay = store_value(Autoplay::<AutoplayInterval>::default());
    let start = move || {
        autoplay.try_update_value(|autoplay| autoplay.start(|| schedule(slider, period)));
    };
    let stop = move || {
        autoplay.try_update_value(Autoplay::stop);
    };

    if let Some(prev) = query(&root, SLIDER_PREV_SELECTOR) {
        listen::<MouseEvent>(&prev, "click", move |_| {
            slider.try_update(|slider| {
                slider.prev();
            });
            start();
        })?;
    }
    if let Some(next) = query(&root, SLIDER_NEXT_SELECTOR) {
        listen::<MouseEvent>(&next, "click", move |_| {
            slider.try_update(|slider| {
                slider.next();
            });
            start();
        })?;
    }
    listen::<PointerEvent>(&root, "pointerenter", move |_| stop())?;
    listen::<PointerEvent>(&root, "pointerleave", move |_| start())?;

    start();
    on_cleanup(stop);
    Ok(count)
}
