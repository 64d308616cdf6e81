//! Binds navigation toggles to their panels and closes them on outside clicks.

use leptos::*;
use storefront_core::{ClickTarget, NavToggleState};
use web_sys::{Document, Element, MouseEvent};

use crate::{
    dom::{contains_target, elements, listen, set_class, DomError},
    markup::{NAV_OPEN_CLASS, NAV_TOGGLE_SELECTOR},
};

fn sync(toggle: &Element, panel: &Element, state: NavToggleState) {
    set_class(panel, NAV_OPEN_CLASS, state.is_open());
    let _ = toggle.set_attribute("aria-expanded", state.aria_expanded());
}

/// Flips the stored state. `None` once the owning scope is gone.
fn toggle_stored(state: StoredValue<NavToggleState>) -> Option<NavToggleState> {
    state.try_update_value(|nav| {
        nav.toggle();
        *nav
    })
}

/// Applies a document click; yields the new state only when it closed the panel.
fn close_stored(state: StoredValue<NavToggleState>, click: ClickTarget) -> Option<NavToggleState> {
    state
        .try_update_value(|nav| nav.on_document_click(click).then_some(*nav))
        .flatten()
}

/// Wires every `.nav-toggle` to the panel that follows it.
pub(crate) fn attach_nav_toggles(document: &Document) -> Result<usize, DomError> {
    let mut attached = 0;
    for toggle in elements(document.query_selector_all(NAV_TOGGLE_SELECTOR)) {
        let Some(panel) = toggle.next_element_sibling() else {
            continue;
        };
        let state = store_value(NavToggleState::default());
        sync(&toggle, &panel, NavToggleState::default());

        listen::<MouseEvent>(&toggle, "click", {
            let toggle = toggle.clone();
            let panel = panel.clone();
            move |_| {
                if let Some(nav) = toggle_stored(state) {
                    sync(&toggle, &panel, nav);
                }
            }
        })?;

        let outside_click = window_event_listener(ev::click, move |ev| {
            let target = ev.target();
            let click = ClickTarget {
                inside_toggle: contains_target(&toggle, target.as_ref()),
                inside_panel: contains_target(&panel, target.as_ref()),
            };
            if let Some(nav) = close_stored(state, click) {
                sync(&toggle, &panel, nav);
            }
        });
        on_cleanup(move || outside_click.remove());
        attached += 1;
    }
    Ok(attached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stored_toggle_flips_and_outside_click_closes() {
        let runtime = create_runtime();
        let state = store_value(NavToggleState::default());
        assert_eq!(toggle_stored(state).map(NavToggleState::is_open), Some(true));
        assert_eq!(
            close_stored(state, ClickTarget::default()).map(NavToggleState::is_open),
            Some(false)
        );
        assert_eq!(close_stored(state, ClickTarget::default()), None);
        runtime.dispose();
    }

    #[test]
    fn disposed_state_is_ignored_by_late_listeners() {
        let runtime = create_runtime();
        let state = store_value(NavToggleState::default());
        state.dispose();
        assert_eq!(toggle_stored(state), None);
        assert_eq!(close_stored(state, ClickTarget::default()), None);
        runtime.dispose();
    }
}
