//! Comparison panel open/closed state.

use tracing::debug;

/// One independent boolean: whether the comparison panel is open.
///
/// Fully independent of step selection; toggling one never touches the
/// other.
#[derive(Debug, Clone, Default)]
pub struct ComparisonPanelModel {
    is_open: bool,
}

impl ComparisonPanelModel {
    /// Closed on construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip open/closed. Total: no parameters, no failure modes.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
        debug!(open = self.is_open, "comparison panel toggled");
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!ComparisonPanelModel::new().is_open());
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut panel = ComparisonPanelModel::new();
        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
    }
}
