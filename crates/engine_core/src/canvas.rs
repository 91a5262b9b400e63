// crates/engine_core/src/canvas.rs

use engine_shared::{Canvas, Rgb};

/// CPU framebuffer the game draws into. Stored as RGBA8 so it can be copied
/// straight into the screen texture.
pub struct PixelCanvas {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width,
            height,
            rgba: vec![0; width as usize * height as usize * 4],
        };
        canvas.clear();
        canvas
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some(Rgb::new(self.rgba[i], self.rgba[i + 1], self.rgba[i + 2]))
    }
}

impl Canvas for PixelCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        for px in self.rgba.chunks_exact_mut(4) {
            px.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    fn draw(&mut self, x: i32, y: i32, color: Rgb) {
        if !self.contains(x, y) {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba[i..i + 3].copy_from_slice(&[color.r, color.g, color.b]);
    }

    fn fill(&mut self, color: Rgb) {
        for px in self.rgba.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_opaque_black() {
        let canvas = PixelCanvas::new(2, 2);
        assert_eq!(canvas.as_bytes(), &[0, 0, 0, 255].repeat(4)[..]);
    }

    #[test]
    fn draw_ignores_out_of_range_pixels() {
        let mut canvas = PixelCanvas::new(4, 3);
        let red = Rgb::new(255, 0, 0);
        canvas.draw(-1, 0, red);
        canvas.draw(4, 0, red);
        canvas.draw(0, 3, red);
        assert!(canvas.as_bytes().chunks(4).all(|px| px == [0, 0, 0, 255]));

        canvas.draw(3, 2, red);
        assert_eq!(canvas.pixel(3, 2), Some(red));
        assert_eq!(&canvas.as_bytes()[44..48], &[255, 0, 0, 255]);
    }

    #[test]
    fn fill_then_clear() {
        let mut canvas = PixelCanvas::new(3, 3);
        canvas.fill(Rgb::new(0, 0, 255));
        assert_eq!(canvas.pixel(1, 1), Some(Rgb::new(0, 0, 255)));
        canvas.clear();
        assert_eq!(canvas.pixel(1, 1), Some(Rgb::BLACK));
        assert_eq!(canvas.pixel(3, 0), None);
    }
}
