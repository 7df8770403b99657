//! Header state owned by the coordinator

use super::route::RouteId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete mutable state of one mounted header
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderState {
    /// Latest scroll offset is past the threshold
    pub scrolled: bool,
    /// Overlay menu is open
    pub menu_open: bool,
    /// Current route
    pub route: RouteId,
}

impl HeaderState {
    /// Visible phase of the state machine
    pub fn phase(&self) -> HeaderPhase {
        match (self.menu_open, self.scrolled) {
            (true, _) => HeaderPhase::MenuOpen,
            (false, true) => HeaderPhase::Scrolled,
            (false, false) => HeaderPhase::Hero,
        }
    }
}

/// Named states of the header state machine
///
/// `MenuOpen` retains the scroll flag internally; it only stops mattering visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderPhase {
    Hero,
    Scrolled,
    MenuOpen,
}

impl HeaderPhase {
    pub fn name(&self) -> &'static str {
        match self {
            HeaderPhase::Hero => "hero",
            HeaderPhase::Scrolled => "scrolled",
            HeaderPhase::MenuOpen => "menu_open",
        }
    }
}

impl fmt::Display for HeaderPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
