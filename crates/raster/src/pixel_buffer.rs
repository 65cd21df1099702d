//! RGBA8 pixel buffer.

use crate::types::{Rgba, BYTES_PER_PIXEL};

/// Owned RGBA8 image, one byte per channel.
///
/// The byte offset of pixel `(x, y)` is `(y * width + x) * 4`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Zero-sized buffer that owns no memory yet
    pub fn empty() -> Self {
        Self::default()
    }

    /// Allocate a zeroed buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bytes: vec![0; byte_len(width, height)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if the buffer has no pixels
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Base address of the pixel data.
    ///
    /// Stays valid until the buffer is resized to different dimensions.
    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// Size the buffer to `width` x `height`.
    ///
    /// A buffer that already has these dimensions is left untouched, so its
    /// allocation (and any pointer handed out) is preserved.
    pub fn ensure_size(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height && self.bytes.len() == byte_len(width, height)
        {
            return;
        }
        self.width = width;
        self.height = height;
        self.bytes.resize(byte_len(width, height), 0);
    }

    /// Set every byte to zero (transparent black)
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgba) {
        let c = color.to_bytes();
        for px in self.bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&c);
        }
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let i = self.idx(x, y)?;
        let mut px = [0u8; BYTES_PER_PIXEL];
        px.copy_from_slice(&self.bytes[i..i + BYTES_PER_PIXEL]);
        Some(Rgba::from_bytes(px))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(i) = self.idx(x, y) {
            self.bytes[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
        }
    }

    /// Fill an axis-aligned rectangle.
    ///
    /// The origin may be negative and the extent may run past the edges; only
    /// the part inside the buffer is drawn.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        let x0 = (x as i64).max(0);
        let y0 = (y as i64).max(0);
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let c = color.to_bytes();
        let stride = self.width as usize * BYTES_PER_PIXEL;
        let span_start = x0 as usize * BYTES_PER_PIXEL;
        let span_end = x1 as usize * BYTES_PER_PIXEL;

        for row in y0 as usize..y1 as usize {
            let base = row * stride;
            for px in self.bytes[base + span_start..base + span_end].chunks_exact_mut(BYTES_PER_PIXEL)
            {
                px.copy_from_slice(&c);
            }
        }
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}
