//! The starfield animation loop and its motion controller.

use rand::{SeedableRng, rngs::StdRng};
use stardrift_core::{
    FrameHandle, FrameScheduler, MotionChange, MotionLabels, MotionState, Painter, Point, Rgb,
    Surface, ToggleControl,
};

use crate::canvas::PixelCanvas;
use crate::generate::{StarRanges, make_stars};

/// Halo radius relative to the star's core.
const HALO_SCALE: f32 = 2.6;

/// Halo opacity relative to the star's effective opacity.
const HALO_OPACITY: f32 = 0.08;

/// Everything the starfield needs between frames: surface geometry, the
/// stars, motion flags and the host handles used to schedule frames and
/// update the toggle.
#[derive(Debug)]
pub struct Starfield<S, C> {
    surface: Surface,
    stars: Vec<Point>,
    star_count: usize,
    ranges: StarRanges,
    rng: StdRng,
    canvas: PixelCanvas,
    motion: MotionState,
    /// Frame requested from the scheduler and not yet delivered.
    pending_frame: Option<FrameHandle>,
    scheduler: S,
    control: Option<C>,
    labels: MotionLabels,
}

impl<S: FrameScheduler, C: ToggleControl> Starfield<S, C> {
    /// Create a starfield whose initial motion follows `prefers_reduced`.
    ///
    /// Nothing is drawn or scheduled until [`Starfield::resize`] and
    /// [`Starfield::start`] are called.
    pub fn new(star_count: usize, prefers_reduced: bool, scheduler: S, control: Option<C>) -> Self {
        Self {
            surface: Surface::default(),
            stars: Vec::new(),
            star_count,
            ranges: StarRanges::default(),
            rng: StdRng::from_entropy(),
            canvas: PixelCanvas::new(),
            motion: MotionState::from_preference(prefers_reduced),
            pending_frame: None,
            scheduler,
            control,
            labels: MotionLabels::default(),
        }
    }

    /// Replace the random source, e.g. with a seeded one.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Text shown on the toggle control.
    pub fn with_labels(mut self, labels: MotionLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Size the drawing surface to the viewport. Clears the canvas.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.surface = Surface::from_viewport(width, height, pixel_ratio);
        self.canvas.resize(&self.surface);
        tracing::debug!(
            width = self.surface.width,
            height = self.surface.height,
            pixel_ratio = self.surface.pixel_ratio,
            "surface resized"
        );
    }

    /// Throw away the current stars and generate a fresh set.
    pub fn make_stars(&mut self) {
        self.stars = make_stars(self.star_count, &self.surface, &self.ranges, &mut self.rng);
    }

    /// Viewport changed: resize, regenerate, and repaint if motion is off.
    pub fn on_resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.resize(width, height, pixel_ratio);
        self.make_stars();
        if !self.motion.enabled() {
            self.draw(0.0);
        }
    }

    /// First sizing plus [`Starfield::start`]. Unlike [`Starfield::on_resize`]
    /// this never paints before starting, so a disabled boot draws once.
    pub fn init(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.resize(width, height, pixel_ratio);
        self.make_stars();
        self.start();
    }

    /// Kick off the animation, or paint a single static frame when motion
    /// starts out disabled.
    pub fn start(&mut self) {
        self.sync_control();
        if self.motion.enabled() {
            self.request_frame();
        } else {
            self.draw(0.0);
        }
    }

    /// Update and paint one frame at `t_ms`.
    pub fn draw(&mut self, t_ms: f64) {
        let enabled = self.motion.enabled();
        let Surface { width, height, .. } = self.surface;
        let visible = !self.surface.is_empty();

        self.canvas.clear();
        for star in &mut self.stars {
            star.drift(width, height);
            if !visible {
                continue;
            }
            let alpha = star.opacity(t_ms, enabled);
            self.canvas
                .fill_circle(star.x, star.y, star.radius, Rgb::WHITE, alpha);
            if star.has_halo() {
                self.canvas.fill_circle(
                    star.x,
                    star.y,
                    star.radius * HALO_SCALE,
                    Rgb::HALO,
                    alpha * HALO_OPACITY,
                );
            }
        }

        if enabled {
            self.request_frame();
        }
    }

    /// Deliver a frame the scheduler reported as due.
    ///
    /// Handles other than the outstanding one are ignored, so a frame that
    /// was cancelled never draws.
    pub fn on_frame(&mut self, handle: FrameHandle, t_ms: f64) {
        if self.pending_frame != Some(handle) {
            tracing::trace!(?handle, "ignoring stale frame");
            return;
        }
        self.pending_frame = None;
        self.draw(t_ms);
    }

    /// Single entry point for motion changes.
    pub fn set_motion_state(&mut self, next_enabled: bool, from_user: bool) {
        let change = self.motion.apply(next_enabled, from_user);
        self.sync_control();
        tracing::debug!(enabled = next_enabled, from_user, ?change, "motion state set");

        match change {
            MotionChange::Started => {
                if self.pending_frame.is_none() {
                    self.request_frame();
                }
            }
            MotionChange::Stopped => {
                if let Some(handle) = self.pending_frame.take() {
                    self.scheduler.cancel_frame(handle);
                }
                self.draw(0.0);
            }
            MotionChange::Unchanged => {}
        }
    }

    /// The system reduced-motion preference changed.
    pub fn on_preference_change(&mut self, prefers_reduced: bool) {
        match self.motion.preference_changed(prefers_reduced) {
            Some(next) => self.set_motion_state(next, false),
            None => tracing::debug!(prefers_reduced, "preference ignored after user override"),
        }
    }

    /// The user activated the toggle control. No-op without a control.
    pub fn on_toggle(&mut self) {
        if self.control.is_some() {
            self.set_motion_state(!self.motion.enabled(), true);
        }
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn stars(&self) -> &[Point] {
        &self.stars
    }

    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn control(&self) -> Option<&C> {
        self.control.as_ref()
    }

    /// Request the next frame, withdrawing any frame still outstanding.
    fn request_frame(&mut self) {
        if let Some(stale) = self.pending_frame.take() {
            self.scheduler.cancel_frame(stale);
        }
        self.pending_frame = Some(self.scheduler.request_frame());
    }

    fn sync_control(&mut self) {
        let enabled = self.motion.enabled();
        if let Some(control) = self.control.as_mut() {
            control.set_label(self.labels.for_state(enabled));
            control.set_pressed(enabled);
        }
    }
}
