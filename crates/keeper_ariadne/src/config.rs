//! # Pool Configuration
//!
//! Point pool sizing, loaded once at startup from the engine's TOML config:
//!
//! ```toml
//! [points]
//! slot_count = 4500
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AriadneError, AriadneResult};
use crate::points::POINTS_COUNT;

/// Configuration for a [`PointPool`](crate::PointPool).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointPoolConfig {
    /// Total slots, including the reserved sentinel slot 0.
    pub slot_count: usize,
}

impl Default for PointPoolConfig {
    fn default() -> Self {
        Self {
            slot_count: POINTS_COUNT,
        }
    }
}

/// On-disk layout: pool settings live under `[points]`.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    points: PointPoolConfig,
}

impl PointPoolConfig {
    /// Largest slot count whose indices all fit a [`PointId`](crate::PointId).
    #[allow(clippy::cast_sign_loss)]
    pub const MAX_SLOT_COUNT: usize = i32::MAX as usize;

    /// Number of points clients can hold with this configuration.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.slot_count.saturating_sub(1)
    }

    /// Checks the slot count leaves room for at least one client point.
    ///
    /// # Errors
    ///
    /// Returns [`AriadneError::InvalidConfig`] describing the bad value.
    pub fn validate(&self) -> AriadneResult<()> {
        if self.slot_count < 2 {
            return Err(AriadneError::InvalidConfig(format!(
                "slot_count must be at least 2, got {}",
                self.slot_count
            )));
        }
        if self.slot_count > Self::MAX_SLOT_COUNT {
            return Err(AriadneError::InvalidConfig(format!(
                "slot_count must be at most {}, got {}",
                Self::MAX_SLOT_COUNT,
                self.slot_count
            )));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    ///
    /// A missing `[points]` table yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AriadneError::InvalidConfig`] on malformed TOML or bad values.
    pub fn from_toml_str(text: &str) -> AriadneResult<Self> {
        let file: ConfigFile =
            toml::from_str(text).map_err(|e| AriadneError::InvalidConfig(e.to_string()))?;
        file.points.validate()?;
        Ok(file.points)
    }

    /// Reads, parses and validates a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`AriadneError::InvalidConfig`] if the file cannot be read or
    /// its contents are rejected.
    pub fn load(path: impl AsRef<Path>) -> AriadneResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AriadneError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }
}
