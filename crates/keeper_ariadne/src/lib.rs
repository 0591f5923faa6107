//! # KEEPER Ariadne
//!
//! Geometry storage for the Ariadne path-planning subsystem:
//! - Fixed-capacity point pool sized once at startup
//! - O(1) allocation and release, many times per simulation tick
//! - Compact point identifiers usable as array indices in edges, triangles and routes
//!
//! ## Architecture Rules
//!
//! 1. **Every identifier dereferences safely** - invalid ids read as the (0, 0) sentinel
//! 2. **Exhaustion is a value, not a crash** - planners fall back, the tick goes on
//! 3. **No heap allocations in hot path** - the slot table never grows
//!
//! ## Example
//!
//! ```rust
//! use keeper_ariadne::{PointId, PointPool};
//!
//! let mut pool = PointPool::with_capacity(16);
//! let waypoint = pool.allocate().unwrap();
//! pool.set(waypoint, 12, -7).unwrap();
//! assert!(pool.equals(waypoint, 12, -7));
//! pool.dispose(waypoint);
//!
//! assert_eq!(*pool.get(PointId::INVALID), keeper_ariadne::Point::ORIGIN);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod points;

pub use config::PointPoolConfig;
pub use error::{AriadneError, AriadneResult};
pub use points::{
    Point, PointId, PointPool, PointPoolStats, SharedPointPool, POINTS_COUNT,
};
