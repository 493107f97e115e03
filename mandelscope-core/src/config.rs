//! Explorer configuration.
//!
//! Everything here is validated once at startup. After construction the
//! canvas geometry never changes and the initial view is handed to the
//! controller.

use crate::{CanvasGeometry, ConfigError, ViewState};
use serde::{Deserialize, Serialize};

/// Frame rate of the render loop. Low on purpose: the escape-time pass is
/// compute-bound, a faster tick would only queue frames.
pub const DEFAULT_TARGET_FPS: u32 = 6;

/// Startup configuration for an explorer session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    pub canvas: CanvasGeometry,
    pub initial_view: ViewState,
    pub target_fps: u32,
}

impl ExplorerConfig {
    /// Validated configuration for a canvas of the given size with the
    /// reference initial view.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        Self::default().with_canvas(width, height)
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Result<Self, ConfigError> {
        self.canvas = CanvasGeometry::new(width, height)?;
        Ok(self)
    }

    pub fn with_view(mut self, view: ViewState) -> Result<Self, ConfigError> {
        view.validate()?;
        self.initial_view = view;
        Ok(self)
    }

    pub fn with_target_fps(mut self, target_fps: u32) -> Result<Self, ConfigError> {
        if target_fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        self.target_fps = target_fps;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.canvas.validate()?;
        self.initial_view.validate()?;
        if self.target_fps == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        Ok(())
    }

    /// Milliseconds between frames at the target rate.
    pub fn frame_interval_ms(&self) -> u32 {
        1000 / self.target_fps.max(1)
    }

    /// Build a configuration from a URL query string such as
    /// `?width=800&height=600&fps=10`. Missing keys keep their defaults;
    /// unknown keys are ignored.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let (mut width, mut height) = (config.canvas.width, config.canvas.height);

        for pair in query.trim_start_matches('?').split('&') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            match name {
                "width" => width = parse_param(name, value)?,
                "height" => height = parse_param(name, value)?,
                "fps" => config = config.with_target_fps(parse_param(name, value)?)?,
                _ => {}
            }
        }

        config.with_canvas(width, height)
    }
}

fn parse_param(name: &str, value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        })
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasGeometry::default(),
            initial_view: ViewState::default(),
            target_fps: DEFAULT_TARGET_FPS,
        }
    }
}
