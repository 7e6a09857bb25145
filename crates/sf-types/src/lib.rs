//! # sf-types
//!
//! Content schema and built-in dataset for StudyFlow.
//!
//! Provides the immutable step records, pruning info, comparison-panel
//! content, the bundled Optuna flow dataset, and content validation. All
//! records here are data, not behavior: the models in `sf-model` and the
//! renderer in `sf-render` consume them without ever mutating them.

pub mod catalog;
pub mod comparison;
pub mod content;
pub mod errors;
pub mod step;

pub use catalog::optuna_flow;
pub use comparison::{AdaptiveCandidate, AdaptiveColumn, ComparisonTable, ExhaustiveColumn};
pub use content::{FlowContent, FlowHeader, PruningInfo};
pub use errors::{ContentError, ContentResult};
pub use step::{ColorToken, Step, StepId};
