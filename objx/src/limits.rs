//! Selector limits for resolvers fed untrusted paths

use crate::error::{ObjxError, Result};
use serde::{Deserialize, Serialize};

/// Bounds on selector size enforced by a limited `Resolver`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum selector length in bytes (default: 4,096, hard: 65,536)
    pub max_selector_length: usize,
    /// Maximum dot-separated segments (default: 256, hard: 4,096)
    pub max_segments: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_selector_length: 4_096,
            max_segments: 256,
        }
    }
}

impl Limits {
    /// Hard maximum limits that cannot be exceeded
    pub fn hard_maximums() -> Self {
        Self {
            max_selector_length: 64 * 1024,
            max_segments: 4_096,
        }
    }

    /// Validate limits against hard maximums
    pub fn validate(&self) -> Result<()> {
        let hard = Self::hard_maximums();

        if self.max_selector_length > hard.max_selector_length {
            return Err(ObjxError::LimitsExceedHardMaximums {
                reason: format!(
                    "max_selector_length {} exceeds hard limit {}",
                    self.max_selector_length, hard.max_selector_length
                ),
            });
        }

        if self.max_segments > hard.max_segments {
            return Err(ObjxError::LimitsExceedHardMaximums {
                reason: format!(
                    "max_segments {} exceeds hard limit {}",
                    self.max_segments, hard.max_segments
                ),
            });
        }

        // Every string selector has at least one segment
        if self.max_segments == 0 {
            return Err(ObjxError::LimitsExceedHardMaximums {
                reason: "max_segments must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
