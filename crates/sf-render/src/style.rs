//! Accent-derived card styling.
//!
//! The opacity suffixes are fixed: `15`/`08` expanded background gradient,
//! `60` expanded border, `20` shadow, `18`/`40` detail panel, `aa` icon
//! gradient tail. Collapsed cards get the neutral style regardless of
//! accent.

use serde::Serialize;

use sf_types::{ColorToken, Step};

use crate::tree::DetailPanel;

const NEUTRAL_BACKGROUND: &str = "rgba(255,255,255,0.03)";
const NEUTRAL_BORDER: &str = "rgba(255,255,255,0.06)";

/// A flat or two-stop gradient fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Fill {
    Flat(String),
    Gradient { from: String, to: String },
}

/// Everything about a card's box that depends on its disclosure state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardStyle {
    pub background: Fill,
    pub border: String,
    /// 102 while expanded, 100 otherwise.
    pub scale_pct: u8,
    pub shadow: Option<String>,
    pub icon_gradient: Fill,
}

/// Card box style for the given disclosure state.
pub fn card_style(expanded: bool, accent: &ColorToken) -> CardStyle {
    if expanded {
        CardStyle {
            background: Fill::Gradient {
                from: accent.alpha("15"),
                to: accent.alpha("08"),
            },
            border: accent.alpha("60"),
            scale_pct: 102,
            shadow: Some(accent.alpha("20")),
            icon_gradient: icon_gradient(accent),
        }
    } else {
        CardStyle {
            background: Fill::Flat(NEUTRAL_BACKGROUND.into()),
            border: NEUTRAL_BORDER.into(),
            scale_pct: 100,
            shadow: None,
            icon_gradient: icon_gradient(accent),
        }
    }
}

/// Icon-box gradient: full accent down to its `aa` tint. Independent of
/// disclosure state.
pub fn icon_gradient(accent: &ColorToken) -> Fill {
    Fill::Gradient {
        from: accent.as_str().to_string(),
        to: accent.alpha("aa"),
    }
}

/// Detail sub-panel styling for an expanded card.
pub fn detail_panel(step: &Step) -> DetailPanel {
    DetailPanel {
        text: step.detail.clone(),
        background: step.accent.alpha("18"),
        border: step.accent.alpha("40"),
        text_color: step.accent.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accent() -> ColorToken {
        ColorToken::new("#a855f7")
    }

    #[test]
    fn expanded_style_uses_accent_suffixes() {
        let style = card_style(true, &accent());
        assert_eq!(
            style.background,
            Fill::Gradient {
                from: "#a855f715".into(),
                to: "#a855f708".into()
            }
        );
        assert_eq!(style.border, "#a855f760");
        assert_eq!(style.scale_pct, 102);
        assert_eq!(style.shadow.as_deref(), Some("#a855f720"));
    }

    #[test]
    fn collapsed_style_is_neutral() {
        let style = card_style(false, &accent());
        assert_eq!(style.background, Fill::Flat(NEUTRAL_BACKGROUND.into()));
        assert_eq!(style.border, NEUTRAL_BORDER);
        assert_eq!(style.scale_pct, 100);
        assert_eq!(style.shadow, None);
        // Icon keeps its accent either way.
        assert_eq!(
            style.icon_gradient,
            Fill::Gradient {
                from: "#a855f7".into(),
                to: "#a855f7aa".into()
            }
        );
    }
}
