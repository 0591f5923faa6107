//! # Points
//!
//! The fixed slot table behind every waypoint, edge end and route vertex.
//!
//! ## Design Philosophy
//!
//! Points are allocated once at startup. During planning:
//! - Clients hold [`PointId`]s, never raw coordinates
//! - Slot 0 is the permanent "no point" sentinel, always (0, 0)
//! - Release is idempotent, so sloppy double-disposal is harmless

mod id;
mod point;
mod pool;
mod shared;

pub use id::PointId;
pub use point::Point;
pub use pool::{PointPool, PointPoolStats};
pub use shared::SharedPointPool;

/// Default number of slots in a point pool, sentinel included.
pub const POINTS_COUNT: usize = 4500;
