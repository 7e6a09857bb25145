//! The render pass: `(content, sequence, panel) -> VisualTree`.

use sf_model::{loop_badge, pruning_badge, ComparisonPanelModel, StepSequenceModel, PRUNING_LABEL};
use sf_types::{AdaptiveColumn, ExhaustiveColumn, FlowContent, Step};

use crate::style::{card_style, detail_panel};
use crate::tree::{
    ColumnView, ComparisonColumns, ConnectorView, RowView, StepCardView, VisualNode, VisualTree,
};

/// Split on embedded line breaks, preserving each source line verbatim.
fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

fn step_card(step: &Step, index: usize, expanded: bool) -> StepCardView {
    StepCardView {
        id: step.id,
        index,
        expanded,
        icon: step.icon.clone(),
        step_label: format!("STEP {}", step.id),
        title: step.title.clone(),
        accent: step.accent.as_str().to_string(),
        code_lines: lines(&step.code),
        description_lines: lines(&step.description),
        detail: expanded.then(|| detail_panel(step)),
        style: card_style(expanded, &step.accent),
    }
}

fn connector(index: usize, length: usize, next: &Step) -> ConnectorView {
    ConnectorView {
        index,
        arrow_color: next.accent.as_str().to_string(),
        loop_badge: loop_badge(index, length).map(|b| b.label().to_string()),
        pruning_badge: pruning_badge(index, length).then(|| PRUNING_LABEL.to_string()),
    }
}

fn exhaustive_column(column: &ExhaustiveColumn) -> ColumnView {
    ColumnView {
        label: column.label.clone(),
        accent: column.accent.as_str().to_string(),
        rows: column
            .candidates
            .iter()
            .enumerate()
            .map(|(i, value)| RowView {
                ordinal: i + 1,
                value: value.clone(),
                note: None,
            })
            .collect(),
        summary: column.summary.clone(),
    }
}

fn adaptive_column(column: &AdaptiveColumn) -> ColumnView {
    ColumnView {
        label: column.label.clone(),
        accent: column.accent.as_str().to_string(),
        rows: column
            .candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| RowView {
                ordinal: i + 1,
                value: candidate.value.clone(),
                note: Some(candidate.note.clone()),
            })
            .collect(),
        summary: column.summary.clone(),
    }
}

/// Render one frame. Pure: equal inputs produce equal trees, and nothing
/// here mutates the models or the content.
pub fn render(
    content: &FlowContent,
    sequence: &StepSequenceModel,
    panel: &ComparisonPanelModel,
) -> VisualTree {
    let length = content.steps.len();
    let mut nodes = Vec::with_capacity(2 * length + 4);

    nodes.push(VisualNode::Header {
        logo_glyph: content.header.logo_glyph.clone(),
        title: content.header.title.clone(),
        subtitle: content.header.subtitle.clone(),
    });

    for (i, step) in content.steps.iter().enumerate() {
        nodes.push(VisualNode::StepCard(step_card(
            step,
            i,
            sequence.is_expanded(step.id),
        )));
        // No connector after the final card.
        if let Some(next) = content.steps.get(i + 1) {
            nodes.push(VisualNode::Connector(connector(i, length, next)));
        }
    }

    nodes.push(VisualNode::PruningPanel {
        title: content.pruning.title.clone(),
        description_lines: lines(&content.pruning.description),
        code: content.pruning.code.clone(),
    });

    let open = panel.is_open();
    nodes.push(VisualNode::ComparisonSection {
        header_label: content.comparison.header_label.clone(),
        indicator: if open { '−' } else { '+' },
        open,
        columns: open.then(|| ComparisonColumns {
            exhaustive: exhaustive_column(&content.comparison.exhaustive),
            adaptive: adaptive_column(&content.comparison.adaptive),
        }),
    });

    nodes.push(VisualNode::Footer {
        text: content.footer_hint.clone(),
    });

    VisualTree { nodes }
}
