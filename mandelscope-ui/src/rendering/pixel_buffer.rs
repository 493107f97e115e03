//! RGBA back buffer for the canvas surface.

const BACKGROUND: [u8; 4] = [0, 0, 0, 255];
const MARK: [u8; 4] = [255, 255, 255, 255];

/// RGBA8888 pixels in the layout `ImageData` expects.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let mut buffer = Self {
            pixels: vec![0; width as usize * height as usize * 4],
            width,
            height,
        };
        buffer.clear();
        buffer
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill with the opaque background color.
    pub fn clear(&mut self) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&BACKGROUND);
        }
    }

    /// Set one pixel to the mark color. Out-of-range coordinates are ignored.
    pub fn mark(&mut self, px: u32, py: u32) {
        if px >= self.width || py >= self.height {
            return;
        }
        let idx = (py as usize * self.width as usize + px as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&MARK);
    }
}
