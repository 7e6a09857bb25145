//! # sf-render
//!
//! The stateless renderer: a pure function of the static content and the
//! two state elements, producing a [`VisualTree`]. Rendering the same
//! state twice yields equal trees; the renderer holds no state of its own.
//!
//! The tree is host-agnostic — `sf-tui` paints it in a terminal, but any
//! host that can lay out cards, connectors, and badges can consume it.

mod render;
mod style;
mod tree;

pub use render::render;
pub use style::{card_style, detail_panel, icon_gradient, CardStyle, Fill};
pub use tree::{
    ColumnView, ComparisonColumns, ConnectorView, DetailPanel, RowView, StepCardView, VisualNode,
    VisualTree,
};
