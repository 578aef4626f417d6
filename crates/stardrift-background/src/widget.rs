//! Presents a [`PixelCanvas`] in a ratatui buffer.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use stardrift_core::Rgb;

use crate::canvas::PixelCanvas;

/// Upper half block: foreground paints the top display pixel, background
/// the bottom one.
const HALF_BLOCK: &str = "▀";

/// Draws the canvas two display pixels per cell, composited over a solid
/// backdrop.
#[derive(Debug, Clone, Copy)]
pub struct StarfieldWidget<'a> {
    canvas: &'a PixelCanvas,
    backdrop: Rgb,
}

impl<'a> StarfieldWidget<'a> {
    pub fn new(canvas: &'a PixelCanvas) -> Self {
        Self {
            canvas,
            backdrop: Rgb::default(),
        }
    }

    pub fn backdrop(mut self, backdrop: Rgb) -> Self {
        self.backdrop = backdrop;
        self
    }

    fn composite(&self, x: usize, y: usize) -> Rgb {
        let [r, g, b, a] = self.canvas.display_pixel(x, y);
        let [br, bg, bb] = self.backdrop.to_unit();
        let keep = 1.0 - a;
        Rgb::from_unit([r + br * keep, g + bg * keep, b + bb * keep])
    }
}

impl Widget for StarfieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let x = col as usize;
                let top = self.composite(x, row as usize * 2);
                let bottom = self.composite(x, row as usize * 2 + 1);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(HALF_BLOCK)
                        .set_fg(top.into())
                        .set_bg(bottom.into());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use stardrift_core::{Painter, Surface};

    #[test]
    fn test_transparent_canvas_shows_backdrop() {
        let mut canvas = PixelCanvas::new();
        canvas.resize(&Surface::from_viewport(4.0, 4.0, 1.0));
        let backdrop = Rgb::new(6, 8, 22);

        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        StarfieldWidget::new(&canvas)
            .backdrop(backdrop)
            .render(area, &mut buf);

        let cell = &buf[(1, 1)];
        assert_eq!(cell.symbol(), HALF_BLOCK);
        assert_eq!(cell.fg, Color::Rgb(6, 8, 22));
        assert_eq!(cell.bg, Color::Rgb(6, 8, 22));
    }

    #[test]
    fn test_star_lights_its_half_cell() {
        let mut canvas = PixelCanvas::new();
        canvas.resize(&Surface::from_viewport(4.0, 4.0, 1.0));
        // Fully covers display pixel (1, 2): the top half of cell (1, 1).
        canvas.fill_circle(1.5, 2.5, 0.5, Rgb::WHITE, 1.0);

        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        StarfieldWidget::new(&canvas).render(area, &mut buf);

        assert_eq!(buf[(1, 1)].fg, Color::Rgb(255, 255, 255));
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_canvas_smaller_than_area() {
        let canvas = PixelCanvas::new();
        let area = Rect::new(0, 0, 3, 3);
        let mut buf = Buffer::empty(area);
        StarfieldWidget::new(&canvas)
            .backdrop(Rgb::new(1, 1, 1))
            .render(area, &mut buf);
        assert_eq!(buf[(2, 2)].bg, Color::Rgb(1, 1, 1));
    }
}
