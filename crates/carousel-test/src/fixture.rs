//! Recording viewport and indicator fixtures.

use carousel_core::{Indicators, Viewport};

/// Viewport that remembers every offset written to it.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewport {
    offset: i32,
    history: Vec<i32>,
}

impl RecordingViewport {
    /// Create an empty recorder at offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every offset written, oldest first.
    #[must_use]
    pub fn history(&self) -> &[i32] {
        &self.history
    }

    /// Number of writes since creation or the last [`clear`](Self::clear).
    #[must_use]
    pub fn writes(&self) -> usize {
        self.history.len()
    }

    /// Forget the recorded history, keeping the current offset.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Viewport for RecordingViewport {
    fn offset(&self) -> i32 {
        self.offset
    }

    fn set_offset(&mut self, px: i32) {
        self.offset = px;
        self.history.push(px);
    }
}

/// Indicator row that remembers which index was highlighted.
#[derive(Debug, Clone, Default)]
pub struct RecordingIndicators {
    active: Vec<bool>,
    activations: Vec<usize>,
}

impl RecordingIndicators {
    /// Create `count` inactive indicators.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            active: vec![false; count],
            activations: Vec::new(),
        }
    }

    /// The active indicator (1-based) if exactly one is lit.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        let mut lit = self
            .active
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(position, _)| position + 1);
        match (lit.next(), lit.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }

    /// Indices (1-based) that were switched on, oldest first.
    #[must_use]
    pub fn activations(&self) -> &[usize] {
        &self.activations
    }
}

impl Indicators for RecordingIndicators {
    fn len(&self) -> usize {
        self.active.len()
    }

    fn set_active(&mut self, position: usize, active: bool) {
        if let Some(slot) = self.active.get_mut(position) {
            *slot = active;
            if active {
                self.activations.push(position + 1);
            }
        }
    }
}
