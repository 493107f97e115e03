//! Escape-time iteration of `z -> z^2 + c`.
//!
//! Every strategy here reports the same frozen iteration count per sample:
//! the number of updates after which `|z|` was still within radius 2, capped
//! at the budget. A sample is stable iff its count equals the budget.

use crate::{SampleGrid, StabilityGrid};
use mandelscope_core::ComplexSample;

/// Escape radius squared. Radius 2 is the proven divergence bound.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Computes frozen escape counts for a batch of samples.
pub trait EscapeTimeEngine {
    fn escape_counts(&self, samples: &[ComplexSample], max_iterations: u32) -> Vec<u32>;

    /// Stability of every sample in the grid.
    fn iterate(&self, grid: &SampleGrid, max_iterations: u32) -> StabilityGrid {
        let counts = self.escape_counts(&grid.samples, max_iterations);
        StabilityGrid::from_counts(grid.columns, grid.rows, grid.stride, &counts, max_iterations)
    }
}

/// Whole-grid pass per iteration step with a stability mask.
///
/// Escaped samples are frozen: neither `z` nor their count is touched again.
/// Stops early once no sample is still active.
#[derive(Clone, Copy, Debug, Default)]
pub struct BatchedEngine;

impl EscapeTimeEngine for BatchedEngine {
    fn escape_counts(&self, samples: &[ComplexSample], max_iterations: u32) -> Vec<u32> {
        let n = samples.len();
        let mut zr = vec![0.0_f64; n];
        let mut zi = vec![0.0_f64; n];
        let mut counts = vec![0_u32; n];
        let mut active = vec![true; n];
        let mut remaining = n;

        for _ in 0..max_iterations {
            if remaining == 0 {
                break;
            }
            for (i, c) in samples.iter().enumerate() {
                if !active[i] {
                    continue;
                }
                let (re, im) = step(zr[i], zi[i], c.re, c.im);
                zr[i] = re;
                zi[i] = im;
                if re * re + im * im > ESCAPE_RADIUS_SQ {
                    active[i] = false;
                    remaining -= 1;
                } else {
                    counts[i] += 1;
                }
            }
        }

        counts
    }
}

/// One sample at a time, leaving the loop at the first escape.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarEngine;

impl ScalarEngine {
    /// Frozen escape count of a single point `c = cx + cy*i`.
    pub fn escape_count(cx: f64, cy: f64, max_iterations: u32) -> u32 {
        let mut zx = 0.0_f64;
        let mut zy = 0.0_f64;

        for i in 0..max_iterations {
            (zx, zy) = step(zx, zy, cx, cy);
            if zx * zx + zy * zy > ESCAPE_RADIUS_SQ {
                return i;
            }
        }

        max_iterations
    }
}

impl EscapeTimeEngine for ScalarEngine {
    fn escape_counts(&self, samples: &[ComplexSample], max_iterations: u32) -> Vec<u32> {
        samples
            .iter()
            .map(|c| Self::escape_count(c.re, c.im, max_iterations))
            .collect()
    }
}

/// z^2 + c, with (a+bi)^2 = a^2 - b^2 + 2abi
#[inline]
fn step(zx: f64, zy: f64, cx: f64, cy: f64) -> (f64, f64) {
    (zx * zx - zy * zy + cx, 2.0 * zx * zy + cy)
}

/// Stability grid for `grid` using the default (batched) strategy.
pub fn iterate(grid: &SampleGrid, max_iterations: u32) -> StabilityGrid {
    BatchedEngine.iterate(grid, max_iterations)
}
