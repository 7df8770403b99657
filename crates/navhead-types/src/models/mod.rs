//! Data models for the navigation header

pub mod link;
pub mod route;
pub mod state;
pub mod theme;

pub use link::{Brand, LinkView, NavLink};
pub use route::RouteId;
pub use state::{HeaderPhase, HeaderState};
pub use theme::{AccentTheme, AccentTone, Background, CtaStyle, TextTone, VisualTheme};
