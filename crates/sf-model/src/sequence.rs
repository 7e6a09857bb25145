//! Mutually-exclusive step disclosure.

use serde::{Deserialize, Serialize};
use tracing::debug;

use sf_types::{Step, StepId};

/// Derived disclosure state of a single card.
///
/// Never stored per step: it is read off the single [`StepSequenceModel`]
/// scalar, which makes "at most one expanded" structural rather than an
/// invariant to maintain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disclosure {
    Collapsed,
    Expanded,
}

/// Owns the ordered step ids and the single expanded-step selector.
///
/// Constructed on mount with `expanded = None`, discarded on unmount;
/// nothing is persisted. The id list is fixed for the model's lifetime.
#[derive(Debug, Clone)]
pub struct StepSequenceModel {
    ids: Vec<StepId>,
    expanded: Option<StepId>,
}

impl StepSequenceModel {
    /// Build from the static step sequence. Ids are assumed pre-validated
    /// (see `FlowContent::validate`).
    pub fn new(steps: &[Step]) -> Self {
        Self {
            ids: steps.iter().map(|s| s.id).collect(),
            expanded: None,
        }
    }

    /// Collapse `id` if it is the expanded step, otherwise expand it —
    /// implicitly collapsing whichever other step was expanded.
    ///
    /// Passing an id absent from the sequence is a caller bug: ids are
    /// compile-time-known constants and the interactive surface can only
    /// produce ids taken from the rendered tree itself.
    pub fn toggle(&mut self, id: StepId) {
        debug_assert!(self.ids.contains(&id), "toggle for unknown step id {id}");

        if self.expanded == Some(id) {
            debug!(step = %id, "collapse");
            self.expanded = None;
        } else {
            debug!(step = %id, previous = ?self.expanded, "expand");
            self.expanded = Some(id);
        }
    }

    /// Whether `id` is the currently expanded step.
    pub fn is_expanded(&self, id: StepId) -> bool {
        self.expanded == Some(id)
    }

    /// The expanded step, if any.
    pub fn expanded(&self) -> Option<StepId> {
        self.expanded
    }

    /// Derived per-card state.
    pub fn disclosure(&self, id: StepId) -> Disclosure {
        if self.is_expanded(id) {
            Disclosure::Expanded
        } else {
            Disclosure::Collapsed
        }
    }

    /// Number of steps in the sequence.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_types::optuna_flow;

    fn model() -> StepSequenceModel {
        StepSequenceModel::new(&optuna_flow().steps)
    }

    #[test]
    fn starts_fully_collapsed() {
        let m = model();
        assert_eq!(m.expanded(), None);
        for i in 1..=6 {
            assert!(!m.is_expanded(StepId(i)));
            assert_eq!(m.disclosure(StepId(i)), Disclosure::Collapsed);
        }
    }

    #[test]
    fn toggle_expands_exactly_one() {
        // From None, toggling any step expands it and only it.
        for target in 1..=6u32 {
            let mut m = model();
            m.toggle(StepId(target));
            assert!(m.is_expanded(StepId(target)));
            for other in (1..=6).filter(|&i| i != target) {
                assert!(!m.is_expanded(StepId(other)));
            }
        }
    }

    #[test]
    fn double_toggle_returns_to_none() {
        let mut m = model();
        m.toggle(StepId(2));
        assert_eq!(m.expanded(), Some(StepId(2)));
        m.toggle(StepId(2));
        assert_eq!(m.expanded(), None);
    }

    #[test]
    fn toggling_other_step_is_mutually_exclusive() {
        for a in 1..=6u32 {
            for b in (1..=6u32).filter(|&b| b != a) {
                let mut m = model();
                m.toggle(StepId(a));
                m.toggle(StepId(b));
                assert!(!m.is_expanded(StepId(a)), "a={a} b={b}");
                assert!(m.is_expanded(StepId(b)), "a={a} b={b}");
            }
        }
    }

    #[test]
    fn second_toggle_of_same_id_depends_on_state_not_history() {
        // null → A → A yields null; but A → B → B yields null too,
        // having passed through expanded=B, not back to A.
        let mut m = model();
        m.toggle(StepId(1));
        m.toggle(StepId(4));
        assert_eq!(m.expanded(), Some(StepId(4)));
        m.toggle(StepId(4));
        assert_eq!(m.expanded(), None);
    }

    #[test]
    fn len_matches_content() {
        assert_eq!(model().len(), 6);
        assert!(!model().is_empty());
    }
}
