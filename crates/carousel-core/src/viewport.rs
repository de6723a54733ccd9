//! Viewport capability: the element whose horizontal offset scrolls the strip.

/// Horizontal offset of the image strip inside its fixed-width container.
///
/// Implementations own the rendering side (a DOM style, a GPU transform, a
/// test recorder). The carousel never inspects how the offset is stored.
pub trait Viewport {
    /// Current offset in pixels.
    fn offset(&self) -> i32;

    /// Move the strip to `px`.
    fn set_offset(&mut self, px: i32);
}

impl<V: Viewport + ?Sized> Viewport for Box<V> {
    fn offset(&self) -> i32 {
        (**self).offset()
    }

    fn set_offset(&mut self, px: i32) {
        (**self).set_offset(px);
    }
}

/// In-memory viewport for testing and headless hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryViewport {
    offset: i32,
}

impl MemoryViewport {
    /// Create a viewport at offset 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { offset: 0 }
    }
}

impl Viewport for MemoryViewport {
    fn offset(&self) -> i32 {
        self.offset
    }

    fn set_offset(&mut self, px: i32) {
        self.offset = px;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_viewport() {
        let mut viewport = MemoryViewport::new();
        assert_eq!(viewport.offset(), 0);
        viewport.set_offset(-600);
        assert_eq!(viewport.offset(), -600);
    }

    #[test]
    fn test_boxed_viewport() {
        let mut viewport: Box<dyn Viewport> = Box::new(MemoryViewport::new());
        viewport.set_offset(-1200);
        assert_eq!(viewport.offset(), -1200);
    }
}
