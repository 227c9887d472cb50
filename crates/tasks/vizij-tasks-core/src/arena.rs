//! Arena owning every task's state block.
//!
//! Blocks are appended and never freed individually. `reset()` drops all of
//! them at once and bumps the epoch, so pointers issued before the reset are
//! detected as stale instead of aliasing new blocks.

use std::any::{type_name, Any, TypeId};
use std::fmt;

use crate::error::TaskError;

/// Opaque handle to one state block inside an [`Arena`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DataPtr {
    index: u32,
    epoch: u32,
}

impl DataPtr {
    #[inline]
    pub fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub fn epoch(self) -> u32 {
        self.epoch
    }
}

#[derive(Default)]
pub struct Arena {
    blocks: Vec<Box<dyn Any>>,
    epoch: u32,
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("blocks", &self.blocks.len())
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            blocks: Vec::with_capacity(capacity),
            epoch: 0,
        }
    }

    /// Move `state` into the arena and return its handle.
    pub fn alloc<T: Any>(&mut self, state: T) -> DataPtr {
        let index = u32::try_from(self.blocks.len()).unwrap_or_else(|_| {
            panic!("task arena exhausted at {} blocks", self.blocks.len())
        });
        self.blocks.push(Box::new(state));
        DataPtr {
            index,
            epoch: self.epoch,
        }
    }

    #[inline]
    pub fn is_live(&self, ptr: DataPtr) -> bool {
        ptr.epoch == self.epoch && (ptr.index as usize) < self.blocks.len()
    }

    /// Type of the state stored behind `ptr`, if it is live.
    pub fn type_id_of(&self, ptr: DataPtr) -> Option<TypeId> {
        if !self.is_live(ptr) {
            return None;
        }
        self.blocks
            .get(ptr.index as usize)
            .map(|block| (**block).type_id())
    }

    fn stale(&self, ptr: DataPtr) -> TaskError {
        TaskError::StaleData {
            index: ptr.index,
            epoch: ptr.epoch,
            current: self.epoch,
        }
    }

    pub fn try_get<T: Any>(&self, ptr: DataPtr) -> Result<&T, TaskError> {
        if ptr.epoch != self.epoch {
            return Err(self.stale(ptr));
        }
        let block = self
            .blocks
            .get(ptr.index as usize)
            .ok_or_else(|| self.stale(ptr))?;
        block
            .downcast_ref::<T>()
            .ok_or_else(|| TaskError::KindMismatch {
                expected: type_name::<T>().to_string(),
            })
    }

    pub fn try_get_mut<T: Any>(&mut self, ptr: DataPtr) -> Result<&mut T, TaskError> {
        if ptr.epoch != self.epoch {
            return Err(self.stale(ptr));
        }
        let stale = self.stale(ptr);
        let block = self.blocks.get_mut(ptr.index as usize).ok_or(stale)?;
        block
            .downcast_mut::<T>()
            .ok_or_else(|| TaskError::KindMismatch {
                expected: type_name::<T>().to_string(),
            })
    }

    /// Typed access for the update path. A stale pointer or a kind mismatch
    /// is a programming error and panics.
    #[inline]
    pub fn get<T: Any>(&self, ptr: DataPtr) -> &T {
        match self.try_get(ptr) {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    #[inline]
    pub fn get_mut<T: Any>(&mut self, ptr: DataPtr) -> &mut T {
        match self.try_get_mut(ptr) {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Drop every block at once. Handles issued before this call become stale.
    pub fn reset(&mut self) {
        self.blocks.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    pub fn epoch(&self) -> u32 {
        self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_and_access() {
        let mut arena = Arena::new();
        let a = arena.alloc(3u32);
        let b = arena.alloc([1.0f32, 2.0]);
        assert_eq!(*arena.get::<u32>(a), 3);
        arena.get_mut::<[f32; 2]>(b)[1] = 5.0;
        assert_eq!(arena.get::<[f32; 2]>(b), &[1.0, 5.0]);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.type_id_of(a), Some(TypeId::of::<u32>()));
    }

    #[test]
    fn wrong_kind_is_reported() {
        let mut arena = Arena::new();
        let a = arena.alloc(3u32);
        let err = arena.try_get::<f32>(a).unwrap_err();
        assert!(matches!(err, TaskError::KindMismatch { .. }));
    }

    #[test]
    fn reset_invalidates_previous_handles() {
        let mut arena = Arena::with_capacity(4);
        let old = arena.alloc(1u8);
        arena.reset();
        assert!(arena.is_empty());
        let new = arena.alloc(2u8);
        assert_eq!(old.index(), new.index());
        assert!(!arena.is_live(old));
        assert!(matches!(
            arena.try_get::<u8>(old),
            Err(TaskError::StaleData { current: 1, .. })
        ));
        assert_eq!(*arena.get::<u8>(new), 2);
    }

    #[test]
    #[should_panic(expected = "Stale task data")]
    fn stale_get_panics() {
        let mut arena = Arena::new();
        let old = arena.alloc(1u8);
        arena.reset();
        arena.get::<u8>(old);
    }
}
