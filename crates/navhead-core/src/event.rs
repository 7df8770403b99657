//! Header change events
//!
//! The presentation layer subscribes here to learn when to re-render. One
//! event is published per actual state change; calls that change nothing
//! publish nothing.

use crate::host::HostChannel;
use navhead_types::{HeaderState, VisualTheme};

/// What caused a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// Scroll offset crossed the threshold
    Scroll,
    /// Menu toggled by the user
    Toggle,
    /// Menu explicitly closed
    Close,
    /// Route changed (menu forced closed)
    Route,
}

/// Events emitted by a header coordinator
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderEvent {
    /// State changed; `theme` is freshly resolved from `state`
    StateChanged {
        state: HeaderState,
        theme: VisualTheme,
        cause: ChangeCause,
        revision: u64,
    },
    /// Navigation was requested from a header link or the call-to-action
    NavigationRequested(String),
    /// Header torn down, listeners released
    Unmounted,
}

/// Channel the coordinator publishes [`HeaderEvent`]s on
pub type HeaderEventBus = HostChannel<HeaderEvent>;
