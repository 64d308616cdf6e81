//! Mobile navigation panel open/close state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Where a document-level click landed relative to one toggle and its panel.
pub struct ClickTarget {
    /// The click target is the toggle control or one of its descendants.
    pub inside_toggle: bool,
    /// The click target is the panel or one of its descendants.
    pub inside_panel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Open state of one navigation panel.
pub struct NavToggleState {
    open: bool,
}

impl NavToggleState {
    /// Whether the panel is currently open.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Value mirrored into the toggle control's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Flips the panel and returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Handles a page-wide click. Returns `true` when the click closed the panel.
    ///
    /// Clicks on the toggle itself are left to [`Self::toggle`] so the panel is not closed and
    /// immediately reopened by the same event.
    pub fn on_document_click(&mut self, target: ClickTarget) -> bool {
        if !self.open || target.inside_toggle || target.inside_panel {
            return false;
        }
        self.open = false;
        true
    }
}
