//! View state machine driven by discrete input events.

use crate::view_state::{MIN_ITERATIONS, MIN_SAMPLING_STRIDE};
use crate::{
    pixel_to_math, CanvasGeometry, DiagnosticSink, InputEvent, PointerButton, ViewCommand,
    ViewState,
};

/// Iteration budget change per key press.
pub const ITERATION_STEP: u32 = 10;
/// Zoom factor per key press.
pub const ZOOM_FACTOR: f64 = 2.0;

/// Outcome of applying one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The view changed; the next frame will differ.
    Changed,
    /// Event handled (or ignored) without touching the view.
    Unchanged,
    /// Terminal: the render loop should stop.
    Quit,
}

/// Sole owner of the [`ViewState`]. Every mutation goes through here.
#[derive(Clone, Debug)]
pub struct Controller {
    view: ViewState,
    canvas: CanvasGeometry,
}

impl Controller {
    pub fn new(view: ViewState, canvas: CanvasGeometry) -> Self {
        Self { view, canvas }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn canvas(&self) -> &CanvasGeometry {
        &self.canvas
    }

    /// Apply a single event. Unrecognized events are no-ops.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        sink: &mut dyn DiagnosticSink,
    ) -> Transition {
        match event {
            InputEvent::Quit => Transition::Quit,
            InputEvent::PointerPress {
                button: PointerButton::Primary,
                px,
                py,
            } if self.canvas.contains(*px, *py) => {
                let center = pixel_to_math(*px, *py, &self.view, &self.canvas);
                let transition = self.commit(ViewState { center, ..self.view });
                log::debug!(
                    "Recentered on ({}, {}) from pixel ({}, {})",
                    self.view.center.x,
                    self.view.center.y,
                    px,
                    py
                );
                transition
            }
            InputEvent::PointerPress { .. } => Transition::Unchanged,
            InputEvent::KeyPress(key) => match ViewCommand::for_key(key) {
                Some(command) => self.apply(command, sink),
                None => Transition::Unchanged,
            },
        }
    }

    /// Apply a named command.
    pub fn apply(&mut self, command: ViewCommand, sink: &mut dyn DiagnosticSink) -> Transition {
        let mut next = self.view;
        let step = next.pan_step();

        match command {
            ViewCommand::PanLeft => next.center.x -= step,
            ViewCommand::PanRight => next.center.x += step,
            ViewCommand::PanUp => next.center.y += step,
            ViewCommand::PanDown => next.center.y -= step,
            ViewCommand::ZoomIn => next.scale /= ZOOM_FACTOR,
            ViewCommand::ZoomOut => next.scale *= ZOOM_FACTOR,
            ViewCommand::DumpState => {
                sink.emit(&self.view);
                return Transition::Unchanged;
            }
            ViewCommand::IncreaseIterations => {
                next.max_iterations = next.max_iterations.saturating_add(ITERATION_STEP)
            }
            ViewCommand::DecreaseIterations => {
                next.max_iterations = next
                    .max_iterations
                    .saturating_sub(ITERATION_STEP)
                    .max(MIN_ITERATIONS)
            }
            ViewCommand::IncreaseStride => {
                next.sampling_stride = next.sampling_stride.saturating_add(1)
            }
            ViewCommand::DecreaseStride => {
                next.sampling_stride = next
                    .sampling_stride
                    .saturating_sub(1)
                    .max(MIN_SAMPLING_STRIDE)
            }
        }

        let transition = self.commit(next);
        if transition == Transition::Changed {
            log::debug!("{:?} -> {:?}", command, self.view);
        }
        transition
    }

    /// Replace the view with `next` if it still satisfies the view invariants.
    ///
    /// At the limits of `f64` a zoom or recenter would underflow the scale to
    /// zero or push it (or the center) to infinity; such moves are dropped.
    fn commit(&mut self, next: ViewState) -> Transition {
        if next == self.view {
            return Transition::Unchanged;
        }
        if let Err(err) = next.validate() {
            log::debug!("Rejected view change: {}", err);
            return Transition::Unchanged;
        }
        self.view = next;
        Transition::Changed
    }
}
