//! # Shared Point Pool
//!
//! A cloneable handle to one pool for hosts that plan paths on more than one
//! thread. Allocation and release both touch the free list, so every call
//! takes the same lock.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{Point, PointId, PointPool, PointPoolStats};
use crate::error::AriadneResult;

/// Thread-safe handle to a [`PointPool`].
///
/// Each method locks for its own duration only. A planning step that must
/// check capacity and then allocate without interference uses
/// [`SharedPointPool::with`].
///
/// # Example
///
/// ```rust
/// use keeper_ariadne::{PointPool, SharedPointPool};
///
/// let shared = SharedPointPool::new(PointPool::with_capacity(8));
/// let worker = shared.clone();
///
/// let id = std::thread::spawn(move || worker.allocate_at(5, 6).unwrap())
///     .join()
///     .unwrap();
/// assert_eq!(shared.get(id).to_array(), [5, 6]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedPointPool {
    inner: Arc<Mutex<PointPool>>,
}

impl SharedPointPool {
    /// Wraps a pool for sharing.
    #[must_use]
    pub fn new(pool: PointPool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// Runs `f` with the pool locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut PointPool) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// See [`PointPool::has_free_points`].
    #[must_use]
    pub fn has_free_points(&self, n: usize) -> bool {
        self.inner.lock().has_free_points(n)
    }

    /// See [`PointPool::allocate`].
    ///
    /// # Errors
    ///
    /// Returns [`AriadneError::PointsExhausted`](crate::AriadneError::PointsExhausted)
    /// when every slot is in use.
    pub fn allocate(&self) -> AriadneResult<PointId> {
        self.inner.lock().allocate()
    }

    /// See [`PointPool::allocate_at`].
    ///
    /// # Errors
    ///
    /// Returns [`AriadneError::PointsExhausted`](crate::AriadneError::PointsExhausted)
    /// when every slot is in use.
    pub fn allocate_at(&self, x: i16, y: i16) -> AriadneResult<PointId> {
        self.inner.lock().allocate_at(x, y)
    }

    /// See [`PointPool::dispose`].
    pub fn dispose(&self, id: PointId) -> bool {
        self.inner.lock().dispose(id)
    }

    /// See [`PointPool::set`].
    ///
    /// # Errors
    ///
    /// Fails exactly when [`PointPool::set`] does.
    pub fn set(&self, id: PointId, x: i16, y: i16) -> AriadneResult<()> {
        self.inner.lock().set(id, x, y)
    }

    /// Reads a point by value; the lock is released before returning.
    #[must_use]
    pub fn get(&self, id: PointId) -> Point {
        *self.inner.lock().get(id)
    }

    /// See [`PointPool::equals`].
    #[must_use]
    pub fn equals(&self, id: PointId, x: i16, y: i16) -> bool {
        self.inner.lock().equals(id, x, y)
    }

    /// See [`PointPool::stats`].
    #[must_use]
    pub fn stats(&self) -> PointPoolStats {
        self.inner.lock().stats()
    }
}
