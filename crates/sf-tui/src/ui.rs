//! Painting: visual tree → styled terminal lines + click regions.
//!
//! The widget layer consumes the [`VisualTree`] only — it never reads the
//! models — so a frame is a pure function of the last rendered tree. Each
//! interactive node records the buffer-line range it occupies; mouse
//! dispatch resolves clicks against those ranges.

use std::ops::Range;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use sf_render::{ColumnView, ConnectorView, StepCardView, VisualNode, VisualTree};
use sf_types::StepId;

/// What a click on a region activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Step(StepId),
    Comparison,
}

/// Buffer-line range owned by one interactive node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub target: Target,
    pub lines: Range<usize>,
}

/// One fully laid-out frame.
pub struct Screen {
    pub lines: Vec<Line<'static>>,
    pub regions: Vec<HitRegion>,
}

const CODE_FG: Color = Color::Rgb(0xe2, 0xe8, 0xf0);
const LOOP_BADGE_FG: Color = Color::Rgb(0xc0, 0x84, 0xfc);
const PRUNING_FG: Color = Color::Rgb(0xfb, 0xbf, 0x24);
const PRUNING_CODE_FG: Color = Color::Rgb(0xfd, 0xe6, 0x8a);

/// `#rrggbb` (a longer token keeps its first six hex digits; the terminal
/// has no alpha channel).
fn token_color(token: &str) -> Color {
    let hex = token.strip_prefix('#').unwrap_or("");
    if hex.len() >= 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Gray
}

fn push_blank(lines: &mut Vec<Line<'static>>) {
    lines.push(Line::default());
}

fn card_lines(card: &StepCardView, lines: &mut Vec<Line<'static>>) {
    let accent = token_color(&card.accent);
    let marker = if card.expanded { "▼" } else { "▶" };
    let mut title_style = Style::default().fg(accent);
    if card.expanded {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    lines.push(Line::from(Span::styled(
        format!("{marker} {}  {}  {}", card.icon, card.step_label, card.title),
        title_style,
    )));

    for code in &card.code_lines {
        lines.push(Line::from(vec![
            Span::styled("    │ ".to_string(), Style::default().fg(Color::DarkGray)),
            Span::styled(code.clone(), Style::default().fg(CODE_FG)),
        ]));
    }
    for desc in &card.description_lines {
        lines.push(Line::from(Span::styled(
            format!("    {desc}"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(detail) = &card.detail {
        lines.push(Line::from(Span::styled(
            format!("    💬 {}", detail.text),
            Style::default()
                .fg(token_color(&detail.text_color))
                .add_modifier(Modifier::ITALIC),
        )));
    }
}

fn connector_line(connector: &ConnectorView) -> Line<'static> {
    let mut spans = Vec::new();
    match &connector.pruning_badge {
        Some(badge) => spans.push(Span::styled(
            format!("  {badge}  "),
            Style::default().fg(PRUNING_FG),
        )),
        None => spans.push(Span::raw("              ")),
    }
    spans.push(Span::styled(
        "↓".to_string(),
        Style::default().fg(token_color(&connector.arrow_color)),
    ));
    if let Some(badge) = &connector.loop_badge {
        spans.push(Span::styled(
            format!("   ⟳ {badge}"),
            Style::default().fg(LOOP_BADGE_FG),
        ));
    }
    Line::from(spans)
}

fn column_cell(column: &ColumnView, row: usize) -> String {
    match column.rows.get(row) {
        Some(r) => match &r.note {
            Some(note) => format!("{}. {}  {}", r.ordinal, r.value, note),
            None => format!("{}. {}", r.ordinal, r.value),
        },
        None => String::new(),
    }
}

fn comparison_lines(
    exhaustive: &ColumnView,
    adaptive: &ColumnView,
    lines: &mut Vec<Line<'static>>,
) {
    let left_fg = token_color(&exhaustive.accent);
    let right_fg = token_color(&adaptive.accent);
    let width = 24;

    lines.push(Line::from(vec![
        Span::styled(
            format!("    {:<width$}", exhaustive.label),
            Style::default().fg(left_fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            adaptive.label.clone(),
            Style::default().fg(right_fg).add_modifier(Modifier::BOLD),
        ),
    ]));

    let rows = exhaustive.rows.len().max(adaptive.rows.len());
    for i in 0..rows {
        lines.push(Line::from(vec![
            Span::styled(
                format!("    {:<width$}", column_cell(exhaustive, i)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(column_cell(adaptive, i), Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(
            format!("    {:<width$}", exhaustive.summary),
            Style::default().fg(left_fg),
        ),
        Span::styled(adaptive.summary.clone(), Style::default().fg(right_fg)),
    ]));
}

/// Lay out a frame. Pure: the same tree always produces the same lines
/// and regions.
pub fn build_screen(tree: &VisualTree) -> Screen {
    let mut lines = Vec::new();
    let mut regions = Vec::new();

    for node in &tree.nodes {
        match node {
            VisualNode::Header {
                logo_glyph,
                title,
                subtitle,
            } => {
                lines.push(Line::from(Span::styled(
                    format!("({logo_glyph}) {title}"),
                    Style::default()
                        .fg(Color::Rgb(0xa7, 0x8b, 0xfa))
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    subtitle.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            VisualNode::StepCard(card) => {
                push_blank(&mut lines);
                let start = lines.len();
                card_lines(card, &mut lines);
                regions.push(HitRegion {
                    target: Target::Step(card.id),
                    lines: start..lines.len(),
                });
            }
            VisualNode::Connector(connector) => {
                lines.push(connector_line(connector));
            }
            VisualNode::PruningPanel {
                title,
                description_lines,
                code,
            } => {
                push_blank(&mut lines);
                lines.push(Line::from(Span::styled(
                    title.clone(),
                    Style::default().fg(PRUNING_FG).add_modifier(Modifier::BOLD),
                )));
                for desc in description_lines {
                    lines.push(Line::from(Span::styled(
                        format!("    {desc}"),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                lines.push(Line::from(vec![
                    Span::styled("    │ ".to_string(), Style::default().fg(Color::DarkGray)),
                    Span::styled(code.clone(), Style::default().fg(PRUNING_CODE_FG)),
                ]));
            }
            VisualNode::ComparisonSection {
                header_label,
                indicator,
                columns,
                ..
            } => {
                push_blank(&mut lines);
                let start = lines.len();
                lines.push(Line::from(Span::styled(
                    format!("{header_label}   [{indicator}]"),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                )));
                if let Some(columns) = columns {
                    comparison_lines(&columns.exhaustive, &columns.adaptive, &mut lines);
                }
                // The whole section is one control: clicks inside the open
                // content collapse it, as in the source layout.
                regions.push(HitRegion {
                    target: Target::Comparison,
                    lines: start..lines.len(),
                });
            }
            VisualNode::Footer { text } => {
                push_blank(&mut lines);
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    Screen { lines, regions }
}
