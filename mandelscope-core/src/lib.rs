pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod input;
pub mod mapper;
pub mod points;
pub mod view_state;

pub use config::{ExplorerConfig, DEFAULT_TARGET_FPS};
pub use controller::{Controller, Transition};
pub use diagnostics::{describe_view, DiagnosticSink, LogSink, StderrSink};
pub use error::ConfigError;
pub use geometry::{CanvasGeometry, MAX_CANVAS_DIMENSION};
pub use input::{InputEvent, Key, PointerButton, ViewCommand};
pub use mapper::{distance_per_pixel, math_to_pixel, pixel_to_math};
pub use points::{ComplexSample, Point};
pub use view_state::{ViewState, MIN_ITERATIONS, MIN_SAMPLING_STRIDE};
