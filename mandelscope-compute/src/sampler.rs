//! Builds the grid of complex sample points for a view.

use mandelscope_core::{pixel_to_math, CanvasGeometry, ComplexSample, ViewState};

/// Row-major grid of samples taken every `stride` pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    pub columns: u32,
    pub rows: u32,
    pub stride: u32,
    pub samples: Vec<ComplexSample>,
}

impl SampleGrid {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Pixel coordinates `0, stride, 2*stride, ...` strictly below `extent`.
pub fn axis_positions(extent: u32, stride: u32) -> impl Iterator<Item = u32> {
    (0..extent).step_by(stride.max(1) as usize)
}

/// Number of samples along an axis of `extent` pixels.
pub fn axis_sample_count(extent: u32, stride: u32) -> u32 {
    extent.div_ceil(stride.max(1))
}

/// Sample the canvas every `view.sampling_stride` pixels on both axes.
///
/// Trailing pixels that do not fill a whole stride are simply not sampled.
pub fn sample_grid(view: &ViewState, canvas: &CanvasGeometry) -> SampleGrid {
    let stride = view.sampling_stride.max(1);
    let columns = axis_sample_count(canvas.width, stride);
    let rows = axis_sample_count(canvas.height, stride);

    let mut samples = Vec::with_capacity(columns as usize * rows as usize);
    for py in axis_positions(canvas.height, stride) {
        for px in axis_positions(canvas.width, stride) {
            let point = pixel_to_math(px as f64, py as f64, view, canvas);
            samples.push(ComplexSample::new(point.x, point.y, px, py));
        }
    }

    SampleGrid {
        columns,
        rows,
        stride,
        samples,
    }
}
