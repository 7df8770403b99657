//! Theme resolution
//!
//! Pure functions from header flags to visual treatment. Called after every
//! state change; results are never stored.
//!
//! | menu open | scrolled | background  | text  | overlay |
//! |-----------|----------|-------------|-------|---------|
//! | yes       | any      | Solid       | Dark  | yes     |
//! | no        | yes      | Solid       | Dark  | no      |
//! | no        | no       | Transparent | Light | no      |

use navhead_types::{
    AccentTheme, AccentTone, Background, CtaStyle, HeaderState, TextTone, VisualTheme,
};

/// Resolve the header theme. The open menu always wins over scroll position.
pub const fn resolve(scrolled: bool, menu_open: bool) -> VisualTheme {
    if menu_open {
        return VisualTheme {
            background: Background::Solid,
            text_tone: TextTone::Dark,
            show_overlay: true,
        };
    }

    if scrolled {
        VisualTheme {
            background: Background::Solid,
            text_tone: TextTone::Dark,
            show_overlay: false,
        }
    } else {
        VisualTheme {
            background: Background::Transparent,
            text_tone: TextTone::Light,
            show_overlay: false,
        }
    }
}

pub fn resolve_state(state: &HeaderState) -> VisualTheme {
    resolve(state.scrolled, state.menu_open)
}

/// Accents that follow scroll position only, regardless of the menu
pub const fn resolve_accents(scrolled: bool) -> AccentTheme {
    if scrolled {
        AccentTheme {
            tagline_tone: AccentTone::Muted,
            cta_style: CtaStyle::Filled,
            elevated: true,
            compact: true,
        }
    } else {
        AccentTheme {
            tagline_tone: AccentTone::Light,
            cta_style: CtaStyle::Inverted,
            elevated: false,
            compact: false,
        }
    }
}
