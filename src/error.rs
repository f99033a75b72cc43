use crate::Float;
use thiserror::Error;

/// Precondition violations detected while building or first using an
/// element, a distribution or the reference particle.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown focusing unit {0} (expected 0 = 1/m or 1 = T)")]
    UnknownUnit(i64),
    #[error("parameter `{name}` is not finite: {value}")]
    NonFinite { name: &'static str, value: Float },
    #[error("parameter `{name}` must not be negative: {value}")]
    Negative { name: &'static str, value: Float },
    #[error("number of slices must be at least 1")]
    ZeroSlices,
    #[error("output stride must be at least 1")]
    ZeroStride,
    #[error("reference rigidity must be finite and non-zero, got {0} T-m")]
    DegenerateRigidity(Float),
    #[error("reference particle is not moving (pt = {0}), cannot integrate a thick element")]
    StationaryReference(Float),
    #[error("correlation `{name}` must lie in (-1, 1), got {value}")]
    InvalidCorrelation { name: &'static str, value: Float },
    #[error("invalid reference particle: {0}")]
    InvalidReference(&'static str),
}

#[inline]
pub(crate) fn check_finite(name: &'static str, value: Float) -> Result<Float, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

#[inline]
pub(crate) fn check_non_negative(name: &'static str, value: Float) -> Result<Float, ConfigError> {
    let value = check_finite(name, value)?;
    if value < 0.0 {
        Err(ConfigError::Negative { name, value })
    } else {
        Ok(value)
    }
}
