//! Configuration error types.

use thiserror::Error;

/// Rejected configuration value. Every variant names the parameter that
/// violated its invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("canvas {axis} must be at least 1 pixel")]
    ZeroCanvasDimension { axis: &'static str },

    #[error("canvas {axis} of {value} pixels exceeds the limit of {max}")]
    CanvasTooLarge {
        axis: &'static str,
        value: u32,
        max: u32,
    },

    #[error("scale must be finite and greater than zero, got {0}")]
    NonPositiveScale(f64),

    #[error("max_iterations must be at least {floor}, got {value}")]
    IterationsBelowFloor { value: u32, floor: u32 },

    #[error("sampling_stride must be at least 1")]
    ZeroSamplingStride,

    #[error("move_speed must be finite and greater than zero, got {0}")]
    InvalidMoveSpeed(f64),

    #[error("center must be finite, got ({0}, {1})")]
    NonFiniteCenter(f64, f64),

    #[error("target_fps must be at least 1")]
    InvalidFrameRate,

    #[error("invalid value {value:?} for parameter {name}")]
    InvalidParameter { name: String, value: String },
}
