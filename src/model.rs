//! Core data model: the slide cursor.

use serde::{Deserialize, Serialize};

/// Integer cursor over a fixed set of slides.
///
/// Navigation is circular: any target is normalized with a floored modulo, so
/// stepping past either end wraps to the other. A cursor over zero slides is
/// inert; `index` stays at 0 and navigation reports no landing slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideCursor {
    index: usize,
    len: usize,
}

impl SlideCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Moves the cursor to `target` normalized into range.
    /// Returns the landing index, or `None` when there are no slides.
    pub fn show(&mut self, target: i64) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let n = self.len as i64;
        self.index = (((target % n) + n) % n) as usize;
        Some(self.index)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.show(self.index as i64 + 1)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.show(self.index as i64 - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_normalizes_with_floored_modulo() {
        let mut c = SlideCursor::new(3);
        assert_eq!(c.show(0), Some(0));
        assert_eq!(c.show(4), Some(1));
        assert_eq!(c.show(-1), Some(2));
        assert_eq!(c.show(-7), Some(2));
        assert_eq!(c.show(3), Some(0));
    }

    #[test]
    fn navigation_is_circular() {
        let mut c = SlideCursor::new(3);
        assert_eq!(c.prev(), Some(2));
        assert_eq!(c.next(), Some(0));
        assert_eq!(c.next(), Some(1));
        assert_eq!(c.next(), Some(2));
    }

    #[test]
    fn re_show_of_current_index_is_idempotent() {
        let mut c = SlideCursor::new(4);
        assert_eq!(c.show(2), Some(2));
        assert_eq!(c.show(2), Some(2));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn empty_cursor_is_inert() {
        let mut c = SlideCursor::new(0);
        assert_eq!(c.show(5), None);
        assert_eq!(c.next(), None);
        assert_eq!(c.prev(), None);
        assert_eq!(c.index(), 0);
    }
}
