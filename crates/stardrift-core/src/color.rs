//! Plain RGB color shared between the painter and the terminal widget.

use ratatui::style::Color;

/// An opaque 8-bit RGB color. Alpha travels separately with each paint call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure white, used for the star cores.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Soft blue used for halos around the larger stars.
    pub const HALO: Rgb = Rgb::new(120, 180, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to 0.0-1.0.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Build a color from 0.0-1.0 channels, clamping out-of-range values.
    pub fn from_unit(channels: [f32; 3]) -> Self {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(to_u8(channels[0]), to_u8(channels[1]), to_u8(channels[2]))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion_clamps() {
        assert_eq!(Rgb::from_unit([1.5, -0.2, 0.5]), Rgb::new(255, 0, 128));
        assert_eq!(Rgb::from_unit(Rgb::HALO.to_unit()), Rgb::HALO);
    }

    #[test]
    fn test_into_ratatui_color() {
        assert_eq!(Color::from(Rgb::new(1, 2, 3)), Color::Rgb(1, 2, 3));
    }
}
