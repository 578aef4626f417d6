//! Software canvas with a transparent, supersampled backing buffer.

use stardrift_core::{Painter, Rgb, Surface};

/// Premultiplied RGBA, each channel 0.0-1.0.
type Rgba = [f32; 4];

const TRANSPARENT: Rgba = [0.0; 4];

/// Backing buffer for the starfield.
///
/// Drawing coordinates are display pixels. The buffer itself is
/// `pixel_ratio` times larger on each axis and is averaged back down when
/// presented.
#[derive(Debug, Clone, Default)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    scale: f32,
    pixels: Vec<Rgba>,
}

impl PixelCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the backing buffer for `surface` and install its scale.
    /// Contents are cleared.
    pub fn resize(&mut self, surface: &Surface) {
        let (width, height) = surface.backing_size();
        self.width = width;
        self.height = height;
        self.scale = surface.pixel_ratio;
        self.pixels.clear();
        self.pixels.resize(width * height, TRANSPARENT);
    }

    /// Backing buffer dimensions in device pixels.
    pub fn backing_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Premultiplied color of a single backing pixel.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Average premultiplied color of the backing pixels under the display
    /// pixel at (`x`, `y`). Out-of-bounds pixels are transparent.
    pub fn display_pixel(&self, x: usize, y: usize) -> Rgba {
        if self.scale <= 0.0 {
            return TRANSPARENT;
        }
        let (x0, x1) = self.span(x, self.width);
        let (y0, y1) = self.span(y, self.height);
        if x0 >= x1 || y0 >= y1 {
            return TRANSPARENT;
        }

        let mut sum = TRANSPARENT;
        for row in y0..y1 {
            for px in &self.pixels[row * self.width + x0..row * self.width + x1] {
                for (acc, channel) in sum.iter_mut().zip(px) {
                    *acc += channel;
                }
            }
        }
        let count = ((x1 - x0) * (y1 - y0)) as f32;
        sum.map(|channel| channel / count)
    }

    /// Backing index range covered by display coordinate `index`.
    fn span(&self, index: usize, limit: usize) -> (usize, usize) {
        let start = (index as f32 * self.scale).floor() as usize;
        let end = ((index + 1) as f32 * self.scale).floor() as usize;
        (start.min(limit), end.max(start + 1).min(limit))
    }

    fn blend(&mut self, x: usize, y: usize, color: [f32; 3], alpha: f32) {
        let dst = &mut self.pixels[y * self.width + x];
        let keep = 1.0 - alpha;
        dst[0] = color[0] * alpha + dst[0] * keep;
        dst[1] = color[1] * alpha + dst[1] * keep;
        dst[2] = color[2] * alpha + dst[2] * keep;
        dst[3] = alpha + dst[3] * keep;
    }
}

impl Painter for PixelCanvas {
    fn clear(&mut self) {
        self.pixels.fill(TRANSPARENT);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if self.pixels.is_empty() || alpha <= 0.0 || radius <= 0.0 {
            return;
        }

        let cx = x * self.scale;
        let cy = y * self.scale;
        let r = radius * self.scale;
        // Half a pixel of feathering on the edge.
        let reach = r + 0.5;

        let x0 = (cx - reach).floor().max(0.0) as usize;
        let y0 = (cy - reach).floor().max(0.0) as usize;
        let x1 = ((cx + reach).ceil().max(0.0) as usize).min(self.width);
        let y1 = ((cy + reach).ceil().max(0.0) as usize).min(self.height);

        let rgb = color.to_unit();
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let coverage = (reach - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(px, py, rgb, alpha * coverage);
                }
            }
        }
    }
}
