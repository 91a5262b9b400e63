// crates/engine_shared/src/canvas.rs
//! Pixel-level drawing surface and decoded images, as seen by game code.

use crate::plugin_api::HostError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A fixed-size RGB drawing target. Pixels outside the canvas are ignored,
/// so callers may draw partially visible shapes without clipping first.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Resets every pixel to black.
    fn clear(&mut self);

    fn draw(&mut self, x: i32, y: i32, color: Rgb);

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    fn fill(&mut self, color: Rgb) {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                self.draw(x, y, color);
            }
        }
    }
}

/// Decoded image: tightly packed RGBA8 rows, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Image {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, HostError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(HostError::ImageSize {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Colour at `(x, y)`. Panics when out of range, like slice indexing.
    pub fn at(&self, x: u32, y: u32) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.rgba[i], self.rgba[i + 1], self.rgba[i + 2])
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.rgba[self.offset(x, y) + 3]
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 4
    }
}
