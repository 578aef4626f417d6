//! Core types for the stardrift starfield.
//!
//! Everything in here is host-independent: the point model, surface
//! geometry, the motion state machine and the traits a host implements to
//! give the animation something to paint on and a way to schedule frames.

mod color;
mod host;
mod labels;
mod motion;
mod point;
mod surface;

pub use color::Rgb;
pub use host::{FrameHandle, FrameScheduler, Painter, ToggleControl};
pub use labels::MotionLabels;
pub use motion::{MotionChange, MotionState};
pub use point::{Point, WRAP_MARGIN};
pub use surface::{MAX_PIXEL_RATIO, Surface};
