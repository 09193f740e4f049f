use alloc::vec::Vec;

/// A source of further pages for an infinite list.
///
/// `loaded` is the number of items the host already holds. Return:
/// - `Some(page)` with the next items to append,
/// - `Some(vec![])` when nothing is available right now (the next breach asks again),
/// - `None` once the source is exhausted (no further requests are made).
pub trait LoadMore<T> {
    fn load_more(&mut self, loaded: usize) -> Option<Vec<T>>;
}

impl<T, F> LoadMore<T> for F
where
    F: FnMut(usize) -> Option<Vec<T>>,
{
    fn load_more(&mut self, loaded: usize) -> Option<Vec<T>> {
        self(loaded)
    }
}
