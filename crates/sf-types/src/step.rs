//! Step records — the ordered cards of the flow diagram.

use serde::{Deserialize, Serialize};

/// Unique step identifier.
///
/// Doubles as the list key and the toggle target. Ids are positive,
/// unique within a [`FlowContent`](crate::FlowContent), and fixed for the
/// process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(pub u32);

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque color token (e.g. `#6366f1`).
///
/// Carried through to derived backgrounds, borders, and shadows by
/// appending a fixed two-hex-digit opacity suffix — the renderer never
/// interprets the color itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(pub String);

impl ColorToken {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// The bare token, e.g. for text colored in the step's accent.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Token with a fixed opacity suffix appended (`alpha("60")` on
    /// `#6366f1` yields `#6366f160`).
    pub fn alpha(&self, suffix: &str) -> String {
        format!("{}{}", self.0, suffix)
    }
}

/// One stage of the optimization workflow.
///
/// Immutable once constructed; the sequence is never inserted into,
/// removed from, or reordered at runtime. `code` and `description` may
/// contain embedded line breaks which are significant and must survive
/// into the rendered output verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub title: String,
    /// Example code shown inside the card, possibly multi-line.
    pub code: String,
    /// Explanatory copy, possibly multi-line.
    pub description: String,
    /// Extra explanation shown only while this card is expanded.
    pub detail: String,
    /// Short glyph rendered in the card's icon box.
    pub icon: String,
    /// Presentation accent for this step.
    pub accent: ColorToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_appends_suffix() {
        let accent = ColorToken::new("#6366f1");
        assert_eq!(accent.alpha("60"), "#6366f160");
        assert_eq!(accent.alpha("15"), "#6366f115");
        assert_eq!(accent.as_str(), "#6366f1");
    }

    #[test]
    fn step_id_display() {
        assert_eq!(StepId(3).to_string(), "3");
    }

    #[test]
    fn step_serializes_with_transparent_id() {
        let step = Step {
            id: StepId(1),
            title: "t".into(),
            code: "c".into(),
            description: "d".into(),
            detail: "x".into(),
            icon: "i".into(),
            accent: ColorToken::new("#ffffff"),
        };
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["accent"], "#ffffff");
    }
}
