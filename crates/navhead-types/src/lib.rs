//! navhead-types - Shared data types for navhead
//!
//! This crate contains pure data structures without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types.
//!
//! Used by:
//! - navhead-core (signals, coordinator)
//! - navhead (CLI harness)
//! - any presentation layer rendering the resolved header

pub mod models;

pub use models::{
    AccentTheme, AccentTone, Background, Brand, CtaStyle, HeaderPhase, HeaderState, LinkView,
    NavLink, RouteId, TextTone, VisualTheme,
};
