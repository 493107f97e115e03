use serde::{Deserialize, Serialize};

/// A point in mathematical (complex-plane) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A complex sample point `c = re + im*i` together with the pixel it was taken from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexSample {
    pub re: f64,
    pub im: f64,
    pub px: u32,
    pub py: u32,
}

impl ComplexSample {
    pub fn new(re: f64, im: f64, px: u32, py: u32) -> Self {
        Self { re, im, px, py }
    }
}
