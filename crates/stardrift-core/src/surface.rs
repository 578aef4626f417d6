//! Drawing surface geometry.

/// Highest device pixel ratio honoured when sizing the backing buffer.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Display size of the drawing surface and its pixel density.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Surface {
    /// Width in display pixels.
    pub width: f32,
    /// Height in display pixels.
    pub height: f32,
    /// Backing pixels per display pixel, in (0, 2].
    pub pixel_ratio: f32,
}

impl Surface {
    /// Build a surface from raw viewport measurements.
    ///
    /// Extents are floored to whole pixels and negative values become zero.
    /// A missing or nonsensical ratio falls back to 1.
    pub fn from_viewport(width: f32, height: f32, pixel_ratio: f32) -> Self {
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        Self {
            width: width.max(0.0).floor(),
            height: height.max(0.0).floor(),
            pixel_ratio,
        }
    }

    /// Backing buffer dimensions in device pixels.
    pub fn backing_size(&self) -> (usize, usize) {
        (
            (self.width * self.pixel_ratio).floor() as usize,
            (self.height * self.pixel_ratio).floor() as usize,
        )
    }

    /// True when nothing can be seen on this surface.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_ratio_is_capped() {
        assert_eq!(Surface::from_viewport(10.0, 10.0, 3.0).pixel_ratio, 2.0);
        assert_eq!(Surface::from_viewport(10.0, 10.0, 1.5).pixel_ratio, 1.5);
    }

    #[test]
    fn test_fractional_pixel_ratio_is_kept() {
        let surface = Surface::from_viewport(10.0, 10.0, 0.5);
        assert_eq!(surface.pixel_ratio, 0.5);
        assert_eq!(surface.backing_size(), (5, 5));
    }

    #[test]
    fn test_invalid_pixel_ratio_falls_back() {
        for ratio in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert_eq!(Surface::from_viewport(10.0, 10.0, ratio).pixel_ratio, 1.0);
        }
    }

    #[test]
    fn test_backing_size() {
        let surface = Surface::from_viewport(80.7, 48.0, 1.5);
        assert_eq!(surface.width, 80.0);
        assert_eq!(surface.backing_size(), (120, 72));
    }

    #[test]
    fn test_empty_surface() {
        assert!(Surface::from_viewport(0.0, 10.0, 1.0).is_empty());
        assert!(Surface::from_viewport(-4.0, 10.0, 1.0).is_empty());
        assert!(!Surface::from_viewport(1.0, 1.0, 1.0).is_empty());
    }
}
