//! The domain parameter — a validated half-width for the x-axis.
//!
//! The slider in the hosting UI is bounded to [5, 50], so in normal operation
//! an invalid value never reaches this crate. If one does, the constructor
//! rejects it instead of clamping, so the upstream bug stays visible.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for a half-width outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("half-width {value} is outside the supported range [{}, {}]", HalfWidth::MIN, HalfWidth::MAX)]
    OutOfRange { value: i32 },
}

/// Symmetric bound of the x-axis: the sample spans [-half_width, +half_width].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct HalfWidth(i32);

impl HalfWidth {
    pub const MIN: i32 = 5;
    pub const MAX: i32 = 50;
    pub const DEFAULT: i32 = 10;

    /// Validate a raw slider value.
    pub fn new(value: i32) -> Result<Self, ParamError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ParamError::OutOfRange { value })
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// Left edge of the sampled domain.
    pub fn min_x(self) -> f64 {
        -f64::from(self.0)
    }

    /// Right edge of the sampled domain.
    pub fn max_x(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for HalfWidth {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<i32> for HalfWidth {
    type Error = ParamError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HalfWidth> for i32 {
    fn from(hw: HalfWidth) -> Self {
        hw.0
    }
}

impl fmt::Display for HalfWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
