//! Indicator row synchronisation.

/// A row of selectable indicators, one per real image.
///
/// Positions are 0-based here; carousel indices are 1-based.
pub trait Indicators {
    /// Number of indicators in the row.
    fn len(&self) -> usize;

    /// Whether the row is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Toggle the active flag of the indicator at `position`.
    fn set_active(&mut self, position: usize, active: bool);
}

impl<I: Indicators + ?Sized> Indicators for Box<I> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn set_active(&mut self, position: usize, active: bool) {
        (**self).set_active(position, active);
    }
}

/// Mark indicator `index` (1-based) active and every other one inactive.
pub fn highlight<I: Indicators + ?Sized>(indicators: &mut I, index: usize) {
    for position in 0..indicators.len() {
        indicators.set_active(position, false);
    }
    if index >= 1 && index <= indicators.len() {
        indicators.set_active(index - 1, true);
    }
}

/// In-memory indicator row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryIndicators {
    active: Vec<bool>,
}

impl MemoryIndicators {
    /// Create `count` inactive indicators.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            active: vec![false; count],
        }
    }

    /// The single active indicator (1-based), if exactly one is active.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        let mut found = None;
        for (position, active) in self.active.iter().enumerate() {
            if *active {
                if found.is_some() {
                    return None;
                }
                found = Some(position + 1);
            }
        }
        found
    }

    /// Number of active indicators.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }

    /// Whether the indicator at `position` is active.
    #[must_use]
    pub fn is_active(&self, position: usize) -> bool {
        self.active.get(position).copied().unwrap_or(false)
    }
}

impl Indicators for MemoryIndicators {
    fn len(&self) -> usize {
        self.active.len()
    }

    fn set_active(&mut self, position: usize, active: bool) {
        if let Some(slot) = self.active.get_mut(position) {
            *slot = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_highlight_sets_single_active() {
        let mut row = MemoryIndicators::new(5);
        highlight(&mut row, 3);
        assert_eq!(row.active_index(), Some(3));
        assert_eq!(row.active_count(), 1);
        assert!(row.is_active(2));
    }

    #[test]
    fn test_highlight_moves_active() {
        let mut row = MemoryIndicators::new(5);
        highlight(&mut row, 1);
        highlight(&mut row, 5);
        assert_eq!(row.active_index(), Some(5));
        assert!(!row.is_active(0));
    }

    #[test]
    fn test_highlight_idempotent() {
        let mut row = MemoryIndicators::new(5);
        highlight(&mut row, 2);
        let once = row.clone();
        highlight(&mut row, 2);
        assert_eq!(row, once);
    }

    #[test]
    fn test_highlight_out_of_range_clears() {
        let mut row = MemoryIndicators::new(5);
        highlight(&mut row, 2);
        highlight(&mut row, 9);
        assert_eq!(row.active_count(), 0);
    }

    #[test]
    fn test_active_index_none_when_several_active() {
        let mut row = MemoryIndicators::new(3);
        row.set_active(0, true);
        row.set_active(1, true);
        assert_eq!(row.active_index(), None);
    }

    #[test]
    fn test_empty_row() {
        let mut row = MemoryIndicators::new(0);
        assert!(row.is_empty());
        highlight(&mut row, 1);
        assert_eq!(row.active_index(), None);
    }

    proptest! {
        #[test]
        fn prop_highlight_exactly_one(n in 1usize..30, picks in proptest::collection::vec(1usize..30, 1..20)) {
            let mut row = MemoryIndicators::new(n);
            for pick in picks {
                let index = (pick - 1) % n + 1;
                highlight(&mut row, index);
                prop_assert_eq!(row.active_index(), Some(index));
            }
        }
    }
}
