//! Shared handles to externally owned animated values.
//!
//! A task never owns the value it animates. Several tasks may write the same
//! value over a tree's lifetime (two moves in one sequence), so the handle is
//! a cloneable single-threaded cell rather than an exclusive borrow. The cell
//! stays alive as long as the caller or any task holds a handle.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct ValueRef<T: Copy>(Rc<Cell<T>>);

impl<T: Copy> Clone for ValueRef<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Copy> ValueRef<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    #[inline]
    pub fn get(&self) -> T {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, value: T) {
        self.0.set(value);
    }

    /// True if both handles point at the same value.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Copy> From<T> for ValueRef<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
