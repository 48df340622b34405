//! The [`Canvas`] seam between the search engine and grid storage, and the
//! [`SharedGrid`] that a search thread and a render loop both hold.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pathviz_core::TileGrid;

/// Grid storage a search can read a snapshot from and paint marks onto.
///
/// Each `paint` call is one short critical section; the engine sleeps
/// between calls, never inside them.
pub trait Canvas {
    /// Run `f` against the current grid.
    fn inspect<R>(&self, f: impl FnOnce(&TileGrid) -> R) -> R;

    /// Run `f` with mutable access to the grid.
    fn paint<R>(&mut self, f: impl FnOnce(&mut TileGrid) -> R) -> R;
}

impl Canvas for TileGrid {
    #[inline]
    fn inspect<R>(&self, f: impl FnOnce(&TileGrid) -> R) -> R {
        f(self)
    }

    #[inline]
    fn paint<R>(&mut self, f: impl FnOnce(&mut TileGrid) -> R) -> R {
        f(self)
    }
}

/// A [`TileGrid`] shared between the render loop and a search thread.
///
/// Cloning yields another handle to the same grid.
#[derive(Clone, Debug, Default)]
pub struct SharedGrid {
    inner: Arc<RwLock<TileGrid>>,
}

impl SharedGrid {
    pub fn new(grid: TileGrid) -> Self {
        Self {
            inner: Arc::new(RwLock::new(grid)),
        }
    }

    /// Lock for reading. A panicked writer leaves every tile in a valid
    /// state, so poisoning is ignored.
    pub fn read(&self) -> RwLockReadGuard<'_, TileGrid> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, TileGrid> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the grid as it is right now.
    pub fn snapshot(&self) -> TileGrid {
        self.read().clone()
    }
}

impl Canvas for SharedGrid {
    fn inspect<R>(&self, f: impl FnOnce(&TileGrid) -> R) -> R {
        f(&self.read())
    }

    fn paint<R>(&mut self, f: impl FnOnce(&mut TileGrid) -> R) -> R {
        f(&mut self.write())
    }
}
