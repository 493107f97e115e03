//! Frame orchestration: sample, iterate, draw, present, then apply input.

use crate::{sample_grid, BatchedEngine, DisplaySurface, EscapeTimeEngine, FrameThrottle};
use mandelscope_core::{
    Controller, DiagnosticSink, ExplorerConfig, InputEvent, Transition, ViewState,
};

/// Whether the loop should keep going after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// What the last frame computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frame: u64,
    pub samples: usize,
    pub stable: usize,
    pub max_iterations: u32,
    pub sampling_stride: u32,
}

/// Owns the controller and drives one frame at a time against a surface.
pub struct RenderLoop<E: EscapeTimeEngine = BatchedEngine> {
    controller: Controller,
    sink: Box<dyn DiagnosticSink>,
    engine: E,
    frames: u64,
    last_stats: FrameStats,
}

impl RenderLoop<BatchedEngine> {
    pub fn new(config: &ExplorerConfig, sink: Box<dyn DiagnosticSink>) -> Self {
        Self::with_engine(config, sink, BatchedEngine)
    }
}

impl<E: EscapeTimeEngine> RenderLoop<E> {
    pub fn with_engine(config: &ExplorerConfig, sink: Box<dyn DiagnosticSink>, engine: E) -> Self {
        Self {
            controller: Controller::new(config.initial_view, config.canvas),
            sink,
            engine,
            frames: 0,
            last_stats: FrameStats::default(),
        }
    }

    pub fn view(&self) -> &ViewState {
        self.controller.view()
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Render one frame, then drain and apply every pending event.
    ///
    /// The view is only mutated after the frame has been presented, so a
    /// frame never observes a half-applied transition.
    pub fn frame<S: DisplaySurface>(&mut self, surface: &mut S) -> Result<LoopControl, S::Error> {
        let view = *self.controller.view();
        let grid = sample_grid(&view, self.controller.canvas());
        let stability = self.engine.iterate(&grid, view.max_iterations);

        surface.clear();
        for (px, py) in stability.stable_pixels() {
            surface.mark_point(px, py);
        }
        surface.present()?;

        self.frames += 1;
        self.last_stats = FrameStats {
            frame: self.frames,
            samples: stability.len(),
            stable: stability.stable_count(),
            max_iterations: view.max_iterations,
            sampling_stride: view.sampling_stride,
        };
        log::debug!(
            "Frame {}: {}/{} stable (iter={}, stride={})",
            self.frames,
            self.last_stats.stable,
            self.last_stats.samples,
            view.max_iterations,
            view.sampling_stride
        );

        Ok(self.apply_events(surface.poll_events()))
    }

    /// Apply events in arrival order. Events after a quit are dropped.
    pub fn apply_events(&mut self, events: Vec<InputEvent>) -> LoopControl {
        for event in events {
            if self.controller.handle_event(&event, &mut *self.sink) == Transition::Quit {
                log::info!("Quit after {} frames", self.frames);
                return LoopControl::Quit;
            }
        }
        LoopControl::Continue
    }

    /// Run frames until a quit event arrives, waiting on `throttle` before each.
    pub fn run<S, T>(&mut self, surface: &mut S, throttle: &mut T) -> Result<(), S::Error>
    where
        S: DisplaySurface,
        T: FrameThrottle,
    {
        loop {
            throttle.wait();
            if self.frame(surface)? == LoopControl::Quit {
                return Ok(());
            }
        }
    }
}
