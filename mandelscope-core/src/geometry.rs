use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest accepted canvas dimension on either axis.
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

/// Pixel dimensions of the display surface, fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasGeometry {
    pub width: u32,
    pub height: u32,
}

impl CanvasGeometry {
    /// Create a validated canvas geometry.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(ConfigError::ZeroCanvasDimension { axis });
            }
            if value > MAX_CANVAS_DIMENSION {
                return Err(ConfigError::CanvasTooLarge {
                    axis,
                    value,
                    max: MAX_CANVAS_DIMENSION,
                });
            }
        }
        Ok(())
    }

    /// Check if a (possibly fractional) pixel position lies on the canvas
    pub fn contains(&self, px: f64, py: f64) -> bool {
        (0.0..self.width as f64).contains(&px) && (0.0..self.height as f64).contains(&py)
    }

    /// Pixel coordinate of the canvas center (may be fractional).
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_square_canvas() {
        let canvas = CanvasGeometry::new(640, 480).unwrap();
        assert_eq!(canvas.width, 640);
        assert_eq!(canvas.height, 480);
    }

    #[test]
    fn new_rejects_zero_width() {
        assert_eq!(
            CanvasGeometry::new(0, 100),
            Err(ConfigError::ZeroCanvasDimension { axis: "width" })
        );
    }

    #[test]
    fn new_rejects_zero_height() {
        assert_eq!(
            CanvasGeometry::new(100, 0),
            Err(ConfigError::ZeroCanvasDimension { axis: "height" })
        );
    }

    #[test]
    fn new_rejects_oversized_canvas() {
        let err = CanvasGeometry::new(100, MAX_CANVAS_DIMENSION + 1).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::CanvasTooLarge {
                axis: "height",
                ..
            }
        ));
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn contains_checks_bounds() {
        let canvas = CanvasGeometry::new(100, 50).unwrap();
        assert!(canvas.contains(0.0, 0.0));
        assert!(canvas.contains(99.5, 49.5)); // Inside bottom-right pixel
        assert!(!canvas.contains(100.0, 49.0)); // Just right
        assert!(!canvas.contains(99.0, 50.0)); // Just below
        assert!(!canvas.contains(-0.5, 10.0));
        assert!(!canvas.contains(f64::NAN, 10.0));
    }

    #[test]
    fn default_is_reference_size() {
        let canvas = CanvasGeometry::default();
        assert_eq!((canvas.width, canvas.height), (1000, 1000));
        assert_eq!(canvas.center(), (500.0, 500.0));
    }

    #[test]
    fn serialization_roundtrip() {
        let original = CanvasGeometry::new(640, 480).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let restored: CanvasGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
