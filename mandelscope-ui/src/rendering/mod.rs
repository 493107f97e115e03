pub mod canvas_surface;
pub mod canvas_utils;
pub mod pixel_buffer;

pub use canvas_surface::CanvasSurface;
pub use pixel_buffer::PixelBuffer;
