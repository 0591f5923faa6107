//! 2-D integer coordinate stored by the point pool.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Map coordinate of a waypoint.
///
/// Four bytes, no padding: the pool stores thousands of these contiguously.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Point {
    /// X component
    pub x: i16,
    /// Y component
    pub y: i16,
}

const _: () = assert!(std::mem::size_of::<Point>() == 4);

impl Point {
    /// Creates a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The origin, which is also what the sentinel slot reads as.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Component-wise comparison against a raw coordinate pair.
    #[inline]
    #[must_use]
    pub const fn matches(self, x: i16, y: i16) -> bool {
        self.x == x && self.y == y
    }

    /// Converts to array
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [i16; 2] {
        [self.x, self.y]
    }

    /// Packs both components into one word.
    ///
    /// Native byte order, meant for in-process hash keys only.
    #[inline]
    #[must_use]
    pub fn to_bits(self) -> u32 {
        bytemuck::cast(self)
    }

    /// Inverse of [`Point::to_bits`].
    #[inline]
    #[must_use]
    pub fn from_bits(bits: u32) -> Self {
        bytemuck::cast(bits)
    }
}

impl From<(i16, i16)> for Point {
    fn from((x, y): (i16, i16)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i16, i16) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}
