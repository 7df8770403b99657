//! Overlay menu open/closed flag

use tracing::debug;

/// Binary open/closed state of the overlay menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip open/closed. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(open = self.open, "menu toggled");
        self.open
    }

    /// Force closed. Returns `true` only if the menu was open.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        debug!("menu closed");
        true
    }
}
