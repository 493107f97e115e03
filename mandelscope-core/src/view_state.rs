use crate::{ConfigError, Point};
use serde::{Deserialize, Serialize};

/// Lowest iteration budget the explorer will run with.
pub const MIN_ITERATIONS: u32 = 50;
/// Lowest sampling stride (every pixel sampled).
pub const MIN_SAMPLING_STRIDE: u32 = 1;

/// View of the complex plane plus the computation fidelity knobs.
///
/// - `center`: mathematical coordinates of the canvas center
/// - `scale`: visible width in mathematical units
/// - `max_iterations`: escape-time budget, never below [`MIN_ITERATIONS`]
/// - `sampling_stride`: pixels skipped per sample on each axis ("dilation")
/// - `move_speed`: fraction of `scale` moved by one pan step
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub center: Point,
    pub scale: f64,
    pub max_iterations: u32,
    pub sampling_stride: u32,
    pub move_speed: f64,
}

impl ViewState {
    /// Create a validated view state.
    pub fn new(
        center: Point,
        scale: f64,
        max_iterations: u32,
        sampling_stride: u32,
        move_speed: f64,
    ) -> Result<Self, ConfigError> {
        let view = Self {
            center,
            scale,
            max_iterations,
            sampling_stride,
            move_speed,
        };
        view.validate()?;
        Ok(view)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(ConfigError::NonFiniteCenter(self.center.x, self.center.y));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::NonPositiveScale(self.scale));
        }
        if self.max_iterations < MIN_ITERATIONS {
            return Err(ConfigError::IterationsBelowFloor {
                value: self.max_iterations,
                floor: MIN_ITERATIONS,
            });
        }
        if self.sampling_stride < MIN_SAMPLING_STRIDE {
            return Err(ConfigError::ZeroSamplingStride);
        }
        if !(self.move_speed.is_finite() && self.move_speed > 0.0) {
            return Err(ConfigError::InvalidMoveSpeed(self.move_speed));
        }
        Ok(())
    }

    /// Distance travelled by a single pan step.
    pub fn pan_step(&self) -> f64 {
        self.scale * self.move_speed
    }

    pub fn with_center(mut self, x: f64, y: f64) -> Self {
        self.center = Point::new(x, y);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_sampling_stride(mut self, sampling_stride: u32) -> Self {
        self.sampling_stride = sampling_stride;
        self
    }
}

impl Default for ViewState {
    /// The whole set: centered on the origin, 4 units wide.
    fn default() -> Self {
        Self {
            center: Point::new(0.0, 0.0),
            scale: 4.0,
            max_iterations: MIN_ITERATIONS,
            sampling_stride: MIN_SAMPLING_STRIDE,
            move_speed: 0.1,
        }
    }
}
