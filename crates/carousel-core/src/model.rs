//! Index and direction model.

use serde::{Deserialize, Serialize};

/// Direction the strip moves during a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Strip moves left (offset decreases), revealing the next image
    Left,
    /// Strip moves right (offset increases), revealing the previous image
    Right,
}

impl Direction {
    /// Direction of travel for an offset delta, `None` for a zero delta.
    #[must_use]
    pub const fn of_delta(delta: i32) -> Option<Self> {
        if delta < 0 {
            Some(Self::Left)
        } else if delta > 0 {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// Sign applied to the per-step speed.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    /// Whether `offset` has reached or passed `target` travelling this way.
    #[must_use]
    pub const fn reached(self, offset: i32, target: i32) -> bool {
        match self {
            Self::Left => offset <= target,
            Self::Right => offset >= target,
        }
    }
}

/// Mutable state of one carousel instance.
///
/// `current_index` is 1-based. At rest `current_offset` equals
/// `-image_width * current_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    current_index: usize,
    is_animating: bool,
    current_offset: i32,
    image_count: usize,
}

impl CarouselState {
    /// State resting on the first image.
    #[must_use]
    pub const fn new(image_count: usize, first_offset: i32) -> Self {
        Self {
            current_index: 1,
            is_animating: false,
            current_offset: first_offset,
            image_count,
        }
    }

    /// Displayed image (1-based).
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether a step loop is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Current strip offset in pixels.
    #[must_use]
    pub const fn current_offset(&self) -> i32 {
        self.current_offset
    }

    /// Number of real images.
    #[must_use]
    pub const fn image_count(&self) -> usize {
        self.image_count
    }

    /// Index after `current_index`, wrapping N to 1.
    #[must_use]
    pub const fn next_index(&self) -> usize {
        if self.current_index >= self.image_count {
            1
        } else {
            self.current_index + 1
        }
    }

    /// Index before `current_index`, wrapping 1 to N.
    #[must_use]
    pub const fn previous_index(&self) -> usize {
        if self.current_index <= 1 {
            self.image_count
        } else {
            self.current_index - 1
        }
    }

    /// Whether `index` addresses a real image.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= 1 && index <= self.image_count
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        debug_assert!(self.contains(index));
        self.current_index = index;
    }

    pub(crate) fn set_animating(&mut self, animating: bool) {
        self.is_animating = animating;
    }

    pub(crate) fn set_offset(&mut self, offset: i32) {
        self.current_offset = offset;
    }
}
