//! Conversion between pixel space and mathematical space.
//!
//! Pixel space has its origin at the top-left corner with `y` growing
//! downward. Mathematical space uses the standard orientation, so the vertical
//! axis is inverted. Both axes share one scale factor derived from the canvas
//! width, which keeps pixels square on non-square canvases.

use crate::{CanvasGeometry, Point, ViewState};

/// Mathematical units covered by one pixel.
pub fn distance_per_pixel(view: &ViewState, canvas: &CanvasGeometry) -> f64 {
    view.scale / canvas.width as f64
}

/// Convert a pixel coordinate to mathematical coordinates.
pub fn pixel_to_math(px: f64, py: f64, view: &ViewState, canvas: &CanvasGeometry) -> Point {
    let dpp = distance_per_pixel(view, canvas);
    let (half_w, half_h) = canvas.center();

    Point::new(
        view.center.x + (px - half_w) * dpp,
        view.center.y - (py - half_h) * dpp,
    )
}

/// Convert mathematical coordinates back to a (fractional) pixel coordinate.
///
/// Exact algebraic inverse of [`pixel_to_math`].
pub fn math_to_pixel(point: Point, view: &ViewState, canvas: &CanvasGeometry) -> (f64, f64) {
    let dpp = distance_per_pixel(view, canvas);
    let (half_w, half_h) = canvas.center();

    (
        (point.x - view.center.x) / dpp + half_w,
        half_h - (point.y - view.center.y) / dpp,
    )
}
