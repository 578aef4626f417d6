//! Traits implemented by whatever hosts the starfield.

use crate::Rgb;

/// Something circles can be painted onto.
///
/// Coordinates are display pixels; the painter maps them to its backing
/// resolution.
pub trait Painter {
    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    /// Alpha-blend a filled circle over the current contents.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32);
}

/// Token for a frame requested from a [`FrameScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host primitive for running a callback before the next repaint.
pub trait FrameScheduler {
    /// Request one frame. The host later delivers the returned handle.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a requested frame. A cancelled handle must never be
    /// delivered.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A user-facing on/off control for motion.
pub trait ToggleControl {
    fn set_label(&mut self, label: &str);

    fn set_pressed(&mut self, pressed: bool);
}
