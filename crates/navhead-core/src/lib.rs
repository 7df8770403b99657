//! navhead-core - Core library for navhead
//!
//! Visual-state resolution for a responsive navigation header: scroll and
//! route signals, the overlay menu flag, pure theme resolution, and the
//! coordinator that serializes them into one consistent state.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod event;
pub mod host;
pub mod menu;
pub mod navigation;
pub mod route;
pub mod script;
pub mod scroll;
pub mod subscription;
pub mod theme;

pub use config::HeaderConfig;
pub use coordinator::HeaderCoordinator;
pub use error::CoreError;
pub use event::{ChangeCause, HeaderEvent, HeaderEventBus};
pub use host::{HostChannel, RouteSource, ScrollOffset, ScrollSurface};
pub use menu::MenuState;
pub use navigation::{NavigationLog, Navigator};
pub use route::{RouteSignal, RouteSubscription};
pub use script::{parse_script, HostStep};
pub use scroll::{ScrollSignal, ScrollSubscription, DEFAULT_THRESHOLD_PX};
pub use subscription::Subscription;

pub use navhead_types as types;
