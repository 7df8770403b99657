//! Visual theme models
//!
//! These are always derived from [`HeaderState`](super::HeaderState) and never
//! stored alongside it.

use serde::{Deserialize, Serialize};

/// Header background fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// Opaque surface (scrolled or menu open)
    Solid,
    /// Content shows through (hero)
    Transparent,
}

/// Foreground tone for brand, links and toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTone {
    /// Dark text over a light solid surface
    Dark,
    /// Light text over the hero imagery
    Light,
}

/// Resolved header theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualTheme {
    pub background: Background,
    pub text_tone: TextTone,
    /// Full-viewport overlay menu visible
    pub show_overlay: bool,
}

/// Tone of secondary text such as the brand tagline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentTone {
    Muted,
    Light,
}

/// Call-to-action button treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaStyle {
    /// Dark fill with light label
    Filled,
    /// Light fill with dark label
    Inverted,
}

/// Scroll-only accents: these follow the page position, not the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccentTheme {
    pub tagline_tone: AccentTone,
    pub cta_style: CtaStyle,
    /// Drop shadow under the bar
    pub elevated: bool,
    /// Reduced vertical padding
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_theme_json_shape() {
        let theme = VisualTheme {
            background: Background::Solid,
            text_tone: TextTone::Dark,
            show_overlay: true,
        };
        let json = serde_json::to_value(theme).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"background": "solid", "textTone": "dark", "showOverlay": true})
        );
    }
}
