//! # Point Pool
//!
//! Fixed-size slot table for the points path planning creates and throws
//! away every tick.

use std::fmt;

use tracing::{debug, trace};

use super::{Point, PointId, POINTS_COUNT};
use crate::config::PointPoolConfig;
use crate::error::{AriadneError, AriadneResult};

/// A fixed-capacity pool of map points.
///
/// Slot 0 is reserved as the sentinel: it is never handed out, never
/// released, and always reads as (0, 0). Every other slot is either free or
/// owned by exactly one client.
///
/// # Thread Safety
///
/// Mutation needs `&mut self`. Share between threads through
/// [`SharedPointPool`](super::SharedPointPool).
///
/// # Example
///
/// ```rust
/// use keeper_ariadne::PointPool;
///
/// let mut pool = PointPool::with_capacity(3);
///
/// // Reserve before a step that must not half-fail
/// assert!(pool.has_free_points(2));
/// let start = pool.allocate_at(4, 4).unwrap();
/// let goal = pool.allocate_at(20, 9).unwrap();
///
/// pool.dispose(start);
/// pool.dispose(goal);
/// assert_eq!(pool.free_count(), 3);
/// ```
pub struct PointPool {
    /// Coordinates, indexed by point id. Entry 0 is the sentinel.
    points: Box<[Point]>,
    /// Ownership flag per slot. Entry 0 stays `false`.
    in_use: Box<[bool]>,
    /// Free list - indices of available slots, lowest on top.
    free_list: Vec<usize>,
    /// Highest slot index handed out since construction or the last clear.
    high_water_mark: usize,
}

/// Snapshot of pool occupancy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointPoolStats {
    /// Total slots, sentinel included.
    pub slot_count: usize,
    /// Slots clients can own.
    pub capacity: usize,
    /// Slots currently in use.
    pub allocated: usize,
    /// Slots currently free.
    pub free: usize,
    /// Highest slot index handed out.
    pub high_water_mark: usize,
}

impl PointPool {
    /// Creates a pool with the default [`POINTS_COUNT`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_slot_count(POINTS_COUNT)
    }

    /// Creates a pool holding `capacity` client points.
    ///
    /// The sentinel slot is added on top. All memory is pre-allocated upfront.
    ///
    /// # Panics
    ///
    /// Panics if capacity is zero or the slot table would not be indexable
    /// by a [`PointId`].
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");
        assert!(
            capacity < PointPoolConfig::MAX_SLOT_COUNT,
            "Capacity exceeds point id range"
        );

        Self::with_slot_count(capacity + 1)
    }

    /// Creates a pool from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AriadneError::InvalidConfig`] if the slot count is out of range.
    pub fn from_config(config: &PointPoolConfig) -> AriadneResult<Self> {
        config.validate()?;
        Ok(Self::with_slot_count(config.slot_count))
    }

    fn with_slot_count(slot_count: usize) -> Self {
        // Pre-allocate storage
        let points = vec![Point::ORIGIN; slot_count].into_boxed_slice();
        let in_use = vec![false; slot_count].into_boxed_slice();

        // Reversed so that pop() hands out 1, 2, 3, ...
        let free_list: Vec<usize> = (1..slot_count).rev().collect();

        debug!(slot_count, "point pool created");

        Self {
            points,
            in_use,
            free_list,
            high_water_mark: 0,
        }
    }

    /// Total number of slots, sentinel included.
    #[inline]
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.points.len()
    }

    /// Number of points clients can hold at once.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.points.len() - 1
    }

    /// Number of points currently in use.
    #[inline]
    #[must_use]
    pub fn allocated_count(&self) -> usize {
        self.capacity() - self.free_list.len()
    }

    /// Number of free slots.
    #[inline]
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Highest slot index handed out since construction or the last clear.
    ///
    /// Zero when nothing was ever allocated.
    #[inline]
    #[must_use]
    pub const fn high_water_mark(&self) -> usize {
        self.high_water_mark
    }

    /// Returns current occupancy figures.
    #[must_use]
    pub fn stats(&self) -> PointPoolStats {
        PointPoolStats {
            slot_count: self.slot_count(),
            capacity: self.capacity(),
            allocated: self.allocated_count(),
            free: self.free_count(),
            high_water_mark: self.high_water_mark,
        }
    }

    /// Checks whether at least `n` points can be allocated right now.
    #[inline]
    #[must_use]
    pub fn has_free_points(&self, n: usize) -> bool {
        n <= self.free_list.len()
    }

    /// Checks whether `id` names a slot currently owned by a client.
    #[inline]
    #[must_use]
    pub fn is_allocated(&self, id: PointId) -> bool {
        self.slot(id).is_some_and(|index| self.in_use[index])
    }

    /// Claims a free slot.
    ///
    /// This is a **O(1)** operation with **zero heap allocations**. The new
    /// point reads as (0, 0) until written.
    ///
    /// # Errors
    ///
    /// Returns [`AriadneError::PointsExhausted`] when every slot is in use.
    pub fn allocate(&mut self) -> AriadneResult<PointId> {
        let Some(index) = self.free_list.pop() else {
            trace!(capacity = self.capacity(), "point pool exhausted");
            return Err(AriadneError::PointsExhausted {
                capacity: self.capacity(),
            });
        };

        self.points[index] = Point::ORIGIN;
        self.in_use[index] = true;
        self.high_water_mark = self.high_water_mark.max(index);

        Ok(PointId::from_slot(index))
    }

    /// Claims a free slot and writes `(x, y)` into it.
    ///
    /// # Errors
    ///
    /// Returns [`AriadneError::PointsExhausted`] when every slot is in use.
    pub fn allocate_at(&mut self, x: i16, y: i16) -> AriadneResult<PointId> {
        let id = self.allocate()?;
        self.set(id, x, y)?;
        Ok(id)
    }

    /// Claims `n` slots, or none at all.
    ///
    /// New ids are appended to `out` in allocation order.
    ///
    /// # Errors
    ///
    /// Returns [`AriadneError::InsufficientPoints`] without touching the pool
    /// when fewer than `n` slots are free.
    pub fn allocate_batch(&mut self, n: usize, out: &mut Vec<PointId>) -> AriadneResult<()> {
        if !self.has_free_points(n) {
            return Err(AriadneError::InsufficientPoints {
                requested: n,
                available: self.free_count(),
            });
        }

        out.reserve(n);
        for _ in 0..n {
            out.push(self.allocate()?);
        }
        Ok(())
    }

    /// Releases a point back to the pool.
    ///
    /// This is a **O(1)** operation with **zero heap deallocations**. The
    /// sentinel, out-of-range ids and already free slots are ignored.
    ///
    /// # Returns
    ///
    /// `true` if a slot was released.
    pub fn dispose(&mut self, id: PointId) -> bool {
        let Some(index) = self.slot(id) else {
            debug!(%id, "ignoring dispose of invalid point");
            return false;
        };
        if !self.in_use[index] {
            debug!(%id, "ignoring dispose of free point");
            return false;
        }

        self.in_use[index] = false;
        self.free_list.push(index);
        true
    }

    /// Releases every id in `ids`, returning how many slots were freed.
    pub fn dispose_all<I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = PointId>,
    {
        ids.into_iter().filter(|&id| self.dispose(id)).count()
    }

    /// Writes new coordinates into an allocated point.
    ///
    /// # Errors
    ///
    /// - [`AriadneError::InvalidPoint`] for the sentinel or an out-of-range id
    /// - [`AriadneError::PointNotAllocated`] for a free slot
    pub fn set(&mut self, id: PointId, x: i16, y: i16) -> AriadneResult<()> {
        let index = self.slot(id).ok_or(AriadneError::InvalidPoint(id))?;
        if !self.in_use[index] {
            return Err(AriadneError::PointNotAllocated(id));
        }

        self.points[index] = Point::new(x, y);
        Ok(())
    }

    /// Reads the point named by `id`.
    ///
    /// Never fails: the sentinel, out-of-range ids and free slots all read as
    /// the sentinel (0, 0).
    #[inline]
    #[must_use]
    pub fn get(&self, id: PointId) -> &Point {
        match self.slot(id) {
            Some(index) if self.in_use[index] => &self.points[index],
            _ => &self.points[0],
        }
    }

    /// Compares the coordinates stored at `id` with `(x, y)`.
    ///
    /// Structural: two distinct ids holding the same coordinates both match.
    #[inline]
    #[must_use]
    pub fn equals(&self, id: PointId, x: i16, y: i16) -> bool {
        self.get(id).matches(x, y)
    }

    /// Finds the lowest allocated id holding `(x, y)`.
    ///
    /// Linear scan over the table; meant for deduplication outside the hot path.
    #[must_use]
    pub fn find(&self, x: i16, y: i16) -> Option<PointId> {
        self.iter()
            .find(|(_, point)| point.matches(x, y))
            .map(|(id, _)| id)
    }

    /// Releases every point, resetting the pool.
    ///
    /// This is a **zero-heap-allocation** operation - memory is not freed.
    /// Ids handed out before the call must not be used afterwards.
    pub fn clear(&mut self) {
        let released = self.allocated_count();

        self.points.fill(Point::ORIGIN);
        self.in_use.fill(false);
        self.free_list.clear();
        self.free_list.extend((1..self.points.len()).rev());
        self.high_water_mark = 0;

        debug!(released, "point pool cleared");
    }

    /// Iterates over allocated points in id order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points
            .iter()
            .zip(self.in_use.iter())
            .enumerate()
            .filter(|&(_, (_, &used))| used)
            .map(|(index, (point, _))| (PointId::from_slot(index), point))
    }

    /// Maps an id to a client-ownable slot index.
    #[inline]
    fn slot(&self, id: PointId) -> Option<usize> {
        id.index().filter(|&index| index > 0 && index < self.points.len())
    }
}

impl Default for PointPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PointPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointPool")
            .field("slot_count", &self.slot_count())
            .field("allocated", &self.allocated_count())
            .field("high_water_mark", &self.high_water_mark)
            .finish_non_exhaustive()
    }
}
