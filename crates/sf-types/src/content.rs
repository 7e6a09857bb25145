//! The full content bundle consumed by the renderer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::comparison::ComparisonTable;
use crate::errors::{ContentError, ContentResult};
use crate::step::Step;

/// Page header: logo glyph, title, and subtitle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowHeader {
    pub logo_glyph: String,
    pub title: String,
    pub subtitle: String,
}

/// The early-stopping explanation box. Singleton, not a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PruningInfo {
    pub title: String,
    pub description: String,
    pub code: String,
}

/// Everything the diagram shows: fixed at startup, never mutated.
///
/// The only runtime-mutable values in the whole system live outside this
/// type, in `sf-model`'s two scalar state elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowContent {
    pub header: FlowHeader,
    pub steps: Vec<Step>,
    pub pruning: PruningInfo,
    pub comparison: ComparisonTable,
    /// Hint line under the diagram ("click a card for details").
    pub footer_hint: String,
}

impl FlowContent {
    /// Check the startup invariants: a non-empty sequence of positive,
    /// unique step ids.
    pub fn validate(&self) -> ContentResult<()> {
        if self.steps.is_empty() {
            return Err(ContentError::NoSteps);
        }

        let mut seen = HashSet::new();
        for step in &self.steps {
            if step.id.0 == 0 {
                return Err(ContentError::ZeroStepId);
            }
            if !seen.insert(step.id) {
                return Err(ContentError::DuplicateStepId { id: step.id });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::optuna_flow;
    use crate::step::StepId;

    #[test]
    fn builtin_content_validates() {
        assert!(optuna_flow().validate().is_ok());
    }

    #[test]
    fn empty_sequence_rejected() {
        let mut content = optuna_flow();
        content.steps.clear();
        assert!(matches!(content.validate(), Err(ContentError::NoSteps)));
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut content = optuna_flow();
        content.steps[1].id = content.steps[0].id;
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateStepId { id: StepId(1) })
        ));
    }

    #[test]
    fn zero_id_rejected() {
        let mut content = optuna_flow();
        content.steps[0].id = StepId(0);
        assert!(matches!(content.validate(), Err(ContentError::ZeroStepId)));
    }
}
