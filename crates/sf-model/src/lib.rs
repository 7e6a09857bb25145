//! # sf-model
//!
//! The two runtime state elements of StudyFlow and the pure positional
//! rules for connectors and badges.
//!
//! [`StepSequenceModel`] owns the single "currently expanded step"
//! selector; [`ComparisonPanelModel`] owns one independent boolean. They
//! are the only mutable state in the whole system — everything else is
//! immutable content (`sf-types`) or a pure function of these two values
//! (`sf-render`).

pub mod badges;
pub mod panel;
pub mod sequence;

pub use badges::{loop_badge, pruning_badge, LoopBadge, PRUNING_LABEL};
pub use panel::ComparisonPanelModel;
pub use sequence::{Disclosure, StepSequenceModel};
