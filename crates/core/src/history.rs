//! History module - a linear undo/redo ledger
//!
//! `History<T>` stores applied items and a cursor separating the applied prefix
//! from the redo-able suffix. It knows nothing about what an item means: undo
//! and redo hand the item to a [`Reversible`] target supplied by the owner,
//! which performs the actual state change.
//!
//! Adding an item after undoing discards the redo-able suffix. There is one
//! timeline, never a tree.

/// Owner-side state that can revert and re-apply history items.
pub trait Reversible<T> {
    /// Revert `item`, the most recently applied item.
    fn apply_undo(&mut self, item: &T);

    /// Re-apply `item`, the most recently reverted item.
    fn apply_redo(&mut self, item: &T);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    items: Vec<T>,
    /// Number of applied items; `items[cursor..]` can be redone.
    cursor: usize,
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
        }
    }

    /// Record a newly applied item, discarding anything that could have been redone.
    pub fn add(&mut self, item: T) {
        self.items.truncate(self.cursor);
        self.items.push(item);
        self.cursor = self.items.len();
    }

    /// Revert the most recently applied item on `target`.
    ///
    /// Returns false (and does nothing) when there is nothing to undo.
    pub fn undo<R: Reversible<T> + ?Sized>(&mut self, target: &mut R) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        target.apply_undo(&self.items[self.cursor]);
        true
    }

    /// Re-apply the most recently reverted item on `target`.
    ///
    /// Returns false (and does nothing) when there is nothing to redo.
    pub fn redo<R: Reversible<T> + ?Sized>(&mut self, target: &mut R) -> bool {
        if self.cursor == self.items.len() {
            return false;
        }
        target.apply_redo(&self.items[self.cursor]);
        self.cursor += 1;
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = 0;
    }

    pub fn available_undos(&self) -> usize {
        self.cursor
    }

    pub fn available_redos(&self) -> usize {
        self.items.len() - self.cursor
    }

    /// Applied items, oldest first.
    pub fn applied(&self) -> &[T] {
        &self.items[..self.cursor]
    }

    /// Item that the next redo would re-apply.
    pub fn next_redo(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    /// Total recorded items, applied and redo-able.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}
