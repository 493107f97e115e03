use crate::input::EventQueue;
use crate::rendering::canvas_utils::{draw_pixels_to_canvas, get_2d_context};
use crate::rendering::PixelBuffer;
use mandelscope_compute::DisplaySurface;
use mandelscope_core::{CanvasGeometry, InputEvent};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Display surface backed by an HTML canvas.
///
/// Frames are composed in a [`PixelBuffer`] and blitted with a single
/// `putImageData` on present.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    buffer: PixelBuffer,
    events: EventQueue,
}

impl CanvasSurface {
    /// Size the canvas backing store to `geometry` and take its 2D context.
    pub fn new(
        canvas: &HtmlCanvasElement,
        geometry: CanvasGeometry,
        events: EventQueue,
    ) -> Result<Self, JsValue> {
        canvas.set_width(geometry.width);
        canvas.set_height(geometry.height);
        let ctx = get_2d_context(canvas)?;

        Ok(Self {
            ctx,
            buffer: PixelBuffer::new(geometry.width, geometry.height),
            events,
        })
    }
}

impl DisplaySurface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn mark_point(&mut self, px: u32, py: u32) {
        self.buffer.mark(px, py);
    }

    fn present(&mut self) -> Result<(), JsValue> {
        draw_pixels_to_canvas(&self.ctx, self.buffer.as_bytes(), self.buffer.width())
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.events.drain()
    }
}
