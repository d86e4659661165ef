//! Which feature card is currently highlighted.

use crate::registry::FeatureId;

/// Screen-local selection. Starts empty, lives as long as the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Option<FeatureId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a feature. Re-selecting the current id is a no-op.
    ///
    /// Returns `true` when the selection actually changed.
    pub fn select(&mut self, id: FeatureId) -> bool {
        if self.current == Some(id) {
            return false;
        }
        tracing::debug!(feature = %id, "feature selected");
        self.current = Some(id);
        true
    }

    pub fn current(&self) -> Option<FeatureId> {
        self.current
    }

    pub fn is_selected(&self, id: FeatureId) -> bool {
        self.current == Some(id)
    }

    /// Back to "none selected"
    pub fn clear(&mut self) {
        self.current = None;
    }
}
