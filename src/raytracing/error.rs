//! Errors raised while building a scene from user configuration.
//!
//! Tracing itself never fails: a ray that misses a shape is not an error.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// A comma separated list of numbers could not be read.
    #[error("cannot parse '{input}' as {expected}")]
    Parse { input: String, expected: &'static str },

    #[error("resolution must be at least 1x1, got {0}x{1}")]
    EmptyResolution(u32, u32),

    #[error("pixel size must be a positive finite number, got {0}")]
    InvalidPixelSize(f64),

    #[error("sphere radius must be a positive finite number, got {0}")]
    InvalidRadius(f64),

    /// A position or direction with a NaN or infinite component.
    #[error("{0} must have finite components, got ({1}, {2}, {3})")]
    InvalidVector(&'static str, f64, f64, f64),

    #[error("plane normal must not be the zero vector")]
    DegenerateNormal,

    /// Channels of a color are expected in [0, 1].
    #[error("color channels must be in [0, 1], got ({0}, {1}, {2})")]
    InvalidColor(f64, f64, f64),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
