use crate::foundation::core::Canvas;
use crate::foundation::error::{NotchError, NotchResult};

/// A drawable surface as RGBA8 pixels.
///
/// Pixels are **premultiplied alpha**; the `premultiplied` flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Fully transparent surface of the given size.
    pub fn new(canvas: Canvas) -> NotchResult<Self> {
        let canvas = canvas.validate()?;
        let len = (canvas.width as usize)
            .saturating_mul(canvas.height as usize)
            .saturating_mul(4);
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; len],
            premultiplied: true,
        })
    }

    /// Pixel size of the surface.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Check that the buffer matches the declared size.
    pub fn validate(&self) -> NotchResult<Canvas> {
        let canvas = self.canvas().validate()?;
        let expected = (canvas.width as usize) * (canvas.height as usize) * 4;
        if self.data.len() != expected {
            return Err(NotchError::render_surface(format!(
                "surface buffer holds {} bytes, expected {expected} for {}x{}",
                self.data.len(),
                canvas.width,
                canvas.height
            )));
        }
        Ok(canvas)
    }

    /// RGBA at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
