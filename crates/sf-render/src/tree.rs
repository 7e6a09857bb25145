//! Visual-tree node types.
//!
//! Everything a host needs to paint one frame, and nothing it has to
//! compute: line splitting, badge selection, and accent-derived styling
//! are already applied. `PartialEq` + `Serialize` keep idempotence and
//! snapshots testable.

use serde::Serialize;

use sf_types::StepId;

use crate::style::CardStyle;

/// One rendered frame of the whole diagram, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualTree {
    pub nodes: Vec<VisualNode>,
}

impl VisualTree {
    /// The step cards, in sequence order.
    pub fn step_cards(&self) -> impl Iterator<Item = &StepCardView> {
        self.nodes.iter().filter_map(|n| match n {
            VisualNode::StepCard(card) => Some(card),
            _ => None,
        })
    }

    /// The connectors, in sequence order.
    pub fn connectors(&self) -> impl Iterator<Item = &ConnectorView> {
        self.nodes.iter().filter_map(|n| match n {
            VisualNode::Connector(c) => Some(c),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum VisualNode {
    Header {
        logo_glyph: String,
        title: String,
        subtitle: String,
    },
    StepCard(StepCardView),
    Connector(ConnectorView),
    PruningPanel {
        title: String,
        description_lines: Vec<String>,
        code: String,
    },
    ComparisonSection {
        header_label: String,
        /// `+` closed, `−` open.
        indicator: char,
        open: bool,
        /// Present iff the panel is open.
        columns: Option<ComparisonColumns>,
    },
    Footer {
        text: String,
    },
}

/// A single rendered card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepCardView {
    pub id: StepId,
    pub index: usize,
    pub expanded: bool,
    pub icon: String,
    /// "STEP n" caption under the icon, colored in the accent.
    pub step_label: String,
    pub title: String,
    pub accent: String,
    pub code_lines: Vec<String>,
    pub description_lines: Vec<String>,
    /// Only the expanded card carries its detail sub-panel.
    pub detail: Option<DetailPanel>,
    pub style: CardStyle,
}

/// The accent-tinted detail sub-panel of an expanded card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPanel {
    pub text: String,
    pub background: String,
    pub border: String,
    pub text_color: String,
}

/// Directional connector between cards `index` and `index + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorView {
    pub index: usize,
    /// Colored with the *next* step's accent.
    pub arrow_color: String,
    pub loop_badge: Option<String>,
    pub pruning_badge: Option<String>,
}

/// The two open-panel columns, side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonColumns {
    pub exhaustive: ColumnView,
    pub adaptive: ColumnView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnView {
    pub label: String,
    pub accent: String,
    pub rows: Vec<RowView>,
    pub summary: String,
}

/// One numbered candidate row; adaptive rows carry a rationale note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub ordinal: usize,
    pub value: String,
    pub note: Option<String>,
}
