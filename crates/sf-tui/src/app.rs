//! Application state and event dispatch.
//!
//! The app owns the two state elements plus host-only scroll/quit state.
//! Every mutation happens synchronously in response to one input event;
//! the next frame is a fresh `sf_render::render` of the result.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use sf_model::{ComparisonPanelModel, StepSequenceModel};
use sf_types::{FlowContent, StepId};

use crate::ui::{HitRegion, Target};

pub struct App {
    pub content: FlowContent,
    pub sequence: StepSequenceModel,
    pub panel: ComparisonPanelModel,
    /// First visible buffer line.
    pub scroll: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(content: FlowContent) -> Self {
        let sequence = StepSequenceModel::new(&content.steps);
        Self {
            content,
            sequence,
            panel: ComparisonPanelModel::new(),
            scroll: 0,
            should_quit: false,
        }
    }

    /// Dispatch an activation target into the right model.
    pub fn activate(&mut self, target: Target) {
        match target {
            Target::Step(id) => self.sequence.toggle(id),
            Target::Comparison => self.panel.toggle(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') => self.activate(Target::Comparison),
            KeyCode::Char(ch @ '1'..='9') => {
                let id = StepId(ch as u32 - '0' as u32);
                // Digits past the sequence length are ignored, not errors.
                if (id.0 as usize) <= self.sequence.len() {
                    self.activate(Target::Step(id));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }

    /// Resolve a left click against the regions of the last-built screen.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, regions: &[HitRegion]) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let line = self.scroll + mouse.row as usize;
                if let Some(target) = hit_test(regions, line) {
                    debug!(?target, line, "click");
                    self.activate(target);
                }
            }
            MouseEventKind::ScrollDown => self.scroll = self.scroll.saturating_add(2),
            MouseEventKind::ScrollUp => self.scroll = self.scroll.saturating_sub(2),
            _ => {}
        }
    }

    /// Keep the viewport inside the rendered buffer.
    pub fn clamp_scroll(&mut self, total_lines: usize, viewport_height: usize) {
        let max = total_lines.saturating_sub(viewport_height);
        if self.scroll > max {
            self.scroll = max;
        }
    }
}

/// The activation target whose line range contains `line`, if any.
pub fn hit_test(regions: &[HitRegion], line: usize) -> Option<Target> {
    regions
        .iter()
        .find(|r| r.lines.contains(&line))
        .map(|r| r.target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use sf_types::optuna_flow;

    fn app() -> App {
        App::new(optuna_flow())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn digit_keys_toggle_steps() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.sequence.expanded(), Some(StepId(3)));
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.sequence.expanded(), None);
    }

    #[test]
    fn digits_past_the_sequence_are_ignored() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.sequence.expanded(), None);
    }

    #[test]
    fn c_toggles_the_comparison_panel() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('c')));
        assert!(app.panel.is_open());
        app.handle_key(key(KeyCode::Char('c')));
        assert!(!app.panel.is_open());
    }

    #[test]
    fn q_and_esc_quit() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new(optuna_flow());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn hit_test_resolves_containing_region() {
        let regions = vec![
            HitRegion {
                target: Target::Step(StepId(1)),
                lines: 2..6,
            },
            HitRegion {
                target: Target::Comparison,
                lines: 10..14,
            },
        ];
        assert_eq!(hit_test(&regions, 2), Some(Target::Step(StepId(1))));
        assert_eq!(hit_test(&regions, 5), Some(Target::Step(StepId(1))));
        assert_eq!(hit_test(&regions, 6), None);
        assert_eq!(hit_test(&regions, 12), Some(Target::Comparison));
        assert_eq!(hit_test(&regions, 20), None);
    }

    #[test]
    fn scroll_clamps_to_buffer() {
        let mut app = app();
        app.scroll = 500;
        app.clamp_scroll(100, 40);
        assert_eq!(app.scroll, 60);
        app.clamp_scroll(30, 40);
        assert_eq!(app.scroll, 0);
    }
}
