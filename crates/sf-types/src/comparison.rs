//! Comparison-panel content — two search strategies side by side.
//!
//! One column depicts an exhaustive strategy working through a fixed
//! candidate list in order; the other an adaptive strategy whose every
//! candidate is chosen from prior results, each annotated with a short
//! rationale. Pure display data — there is no search happening here.

use serde::{Deserialize, Serialize};

use crate::step::ColorToken;

/// The full two-column comparison table plus its toggle-header label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    /// Label on the always-visible header row (the toggle control).
    pub header_label: String,
    pub exhaustive: ExhaustiveColumn,
    pub adaptive: AdaptiveColumn,
}

/// Column depicting an exhaustive, ordered sweep of fixed candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhaustiveColumn {
    pub label: String,
    pub accent: ColorToken,
    /// Candidates tried strictly in this order.
    pub candidates: Vec<String>,
    /// One-line takeaway under the list.
    pub summary: String,
}

/// Column depicting an adaptive strategy; each candidate carries the
/// rationale that picked it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveColumn {
    pub label: String,
    pub accent: ColorToken,
    pub candidates: Vec<AdaptiveCandidate>,
    pub summary: String,
}

/// A single adaptive pick: the value tried and why it was tried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveCandidate {
    pub value: String,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_round_trips_through_json() {
        let table = ComparisonTable {
            header_label: "A vs B".into(),
            exhaustive: ExhaustiveColumn {
                label: "A".into(),
                accent: ColorToken::new("#ef4444"),
                candidates: vec!["C=0.1".into(), "C=1.0".into()],
                summary: "tries everything".into(),
            },
            adaptive: AdaptiveColumn {
                label: "B".into(),
                accent: ColorToken::new("#6366f1"),
                candidates: vec![AdaptiveCandidate {
                    value: "C=5.2".into(),
                    note: "random start".into(),
                }],
                summary: "learns".into(),
            },
        };
        let json = serde_json::to_string(&table).unwrap();
        let back: ComparisonTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
