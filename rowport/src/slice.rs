use core::iter::FusedIterator;

use crate::WindowRange;

/// One materialized item: a borrowed element plus its absolute placement.
#[derive(Debug)]
pub struct SliceItem<'a, T> {
    pub item: &'a T,
    /// The element's true index in the collection; use it as the render key.
    pub index: usize,
    /// Absolute top edge inside the spacer (`index * item_height`).
    pub top: f64,
}

impl<T> Clone for SliceItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceItem<'_, T> {}

/// Iterator over the items of the current window.
///
/// The range is re-clamped to the collection it is projected onto, so a collection that shrank
/// since the last recomputation yields fewer items instead of panicking.
#[derive(Debug)]
pub struct RenderSlice<'a, T> {
    items: &'a [T],
    next: usize,
    end: usize,
    item_height: f64,
}

impl<'a, T> RenderSlice<'a, T> {
    pub(crate) fn new(items: &'a [T], range: WindowRange, item_height: f64) -> Self {
        let range = range.clamp_to(items.len());
        Self {
            items,
            next: range.start_index,
            end: range.end_index,
            item_height,
        }
    }

    pub(crate) fn empty(items: &'a [T]) -> Self {
        Self {
            items,
            next: 0,
            end: 0,
            item_height: 0.0,
        }
    }

    /// The range still to be yielded.
    pub fn range(&self) -> WindowRange {
        WindowRange {
            start_index: self.next,
            end_index: self.end,
        }
    }
}

impl<T> Clone for RenderSlice<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            next: self.next,
            end: self.end,
            item_height: self.item_height,
        }
    }
}

impl<'a, T> Iterator for RenderSlice<'a, T> {
    type Item = SliceItem<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(SliceItem {
            item: &self.items[index],
            index,
            top: index as f64 * self.item_height,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.next);
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for RenderSlice<'_, T> {}

impl<T> FusedIterator for RenderSlice<'_, T> {}
