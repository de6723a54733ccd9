//! Extended image strip: the real images plus one duplicate at each end.
//!
//! Slot 0 mirrors the last image and slot `n + 1` mirrors the first, so a
//! transition off either end lands on a duplicate that can be swapped for the
//! real slot without a visible jump.

/// Slot layout of a strip holding `image_count` real images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedStrip {
    image_count: usize,
}

impl ExtendedStrip {
    /// Create the layout for `image_count` real images.
    #[must_use]
    pub const fn new(image_count: usize) -> Self {
        Self { image_count }
    }

    /// Number of real images.
    #[must_use]
    pub const fn image_count(&self) -> usize {
        self.image_count
    }

    /// Total slots including both duplicates.
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.image_count + 2
    }

    /// Image (1-based) displayed by `slot`.
    #[must_use]
    pub fn image_at(&self, slot: usize) -> usize {
        let n = self.image_count as isize;
        (slot as isize - 1).rem_euclid(n) as usize + 1
    }

    /// Whether `slot` is one of the two end duplicates.
    #[must_use]
    pub const fn is_duplicate(&self, slot: usize) -> bool {
        slot == 0 || slot == self.image_count + 1
    }

    /// Slot holding the real copy of image `index`.
    #[must_use]
    pub const fn slot_of(&self, index: usize) -> usize {
        index
    }

    /// Real-slot offset equivalent to a position past either real end.
    ///
    /// Returns `None` while `offset` lies within the real range
    /// `[-width * n, -width]`.
    #[must_use]
    pub const fn wrap_target(&self, offset: i32, width: i32) -> Option<i32> {
        let last = -width * self.image_count as i32;
        if offset > -width {
            Some(last)
        } else if offset < last {
            Some(-width)
        } else {
            None
        }
    }
}
