//! An exclusively owned slot holding an [`Optional`].
//!
//! [`Optional`] values are immutable. The few operations that overwrite the tag and
//! payload in place are only available here, and they all take `&mut self`, so the
//! borrow checker guarantees a single owner at the time of the mutation.

use crate::optional::Optional;

/// A mutable cell around an [`Optional<T>`].
///
/// ```rust
/// use kinded::{Optional, OptionalCell};
///
/// let mut cell = OptionalCell::empty();
/// *cell.get_or_insert(1) += 10;
/// assert_eq!(cell.take(), Optional::some(11));
/// assert!(cell.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionalCell<T> {
    value: Optional<T>,
}

impl<T> OptionalCell<T> {
    /// Wraps an existing optional.
    pub const fn new(value: Optional<T>) -> Self {
        Self { value }
    }

    /// An empty cell.
    pub const fn empty() -> Self {
        Self::new(Optional::none())
    }

    /// The current state.
    pub fn get(&self) -> &Optional<T> {
        &self.value
    }

    /// Mutable access to the payload, if present.
    pub fn get_mut(&mut self) -> Optional<&mut T> {
        self.value.inner.as_mut().into()
    }

    /// Returns `true` if the cell holds a payload.
    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if the cell is empty.
    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Consumes the cell, returning its state.
    pub fn into_inner(self) -> Optional<T> {
        self.value
    }

    /// Stores `value` unconditionally and returns a reference to it.
    ///
    /// Any previous payload is dropped.
    pub fn insert(&mut self, value: T) -> &mut T {
        self.value.inner.insert(value)
    }

    /// Stores `value` if the cell is empty, then returns the payload.
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.value.inner.get_or_insert(value)
    }

    /// Stores `f()` if the cell is empty, then returns the payload.
    ///
    /// `f` is not called when a payload is already present.
    pub fn get_or_insert_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
        self.value.inner.get_or_insert_with(f)
    }

    /// Moves the current state out, leaving the cell empty.
    pub fn take(&mut self) -> Optional<T> {
        self.value.inner.take().into()
    }

    /// Stores `value` and returns the previous state.
    pub fn replace(&mut self, value: T) -> Optional<T> {
        self.value.inner.replace(value).into()
    }
}

impl<T> Default for OptionalCell<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Optional<T>> for OptionalCell<T> {
    fn from(value: Optional<T>) -> Self {
        Self::new(value)
    }
}
