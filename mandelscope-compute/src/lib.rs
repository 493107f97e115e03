pub mod engine;
pub mod render_loop;
pub mod sampler;
pub mod stability;
pub mod surface;
pub mod throttle;

pub use engine::{iterate, BatchedEngine, EscapeTimeEngine, ScalarEngine, ESCAPE_RADIUS_SQ};
pub use render_loop::{FrameStats, LoopControl, RenderLoop};
pub use sampler::{axis_positions, axis_sample_count, sample_grid, SampleGrid};
pub use stability::StabilityGrid;
pub use surface::DisplaySurface;
pub use throttle::{FixedRateThrottle, FrameThrottle, Unthrottled};

// Re-export core types for convenience
pub use mandelscope_core::*;
