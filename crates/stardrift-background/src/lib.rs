//! Animated starfield rendering for stardrift.
//!
//! [`Starfield`] owns the points, the motion state and a [`PixelCanvas`] it
//! paints into once per frame. [`StarfieldWidget`] presents that canvas in a
//! ratatui buffer.

mod canvas;
mod generate;
mod state;
mod widget;

pub use canvas::PixelCanvas;
pub use generate::{StarRanges, make_stars};
pub use state::Starfield;
pub use widget::StarfieldWidget;
