//! A single star and its per-frame motion and brightness.

/// Distance past the surface edge a star may travel before wrapping around.
pub const WRAP_MARGIN: f32 = 10.0;

/// Radius above which a star also gets a soft halo.
pub const HALO_THRESHOLD: f32 = 1.2;

/// One decorative dot in the starfield.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Horizontal position in display pixels.
    pub x: f32,
    /// Vertical position in display pixels.
    pub y: f32,
    /// Core radius in display pixels.
    pub radius: f32,
    /// Opacity before twinkling is applied.
    pub base_opacity: f32,
    /// Twinkle angular speed in radians per millisecond.
    pub twinkle_speed: f32,
    /// Twinkle phase offset in radians.
    pub twinkle_phase: f32,
    /// Horizontal drift in display pixels per frame.
    pub vx: f32,
    /// Vertical drift in display pixels per frame.
    pub vy: f32,
}

impl Point {
    /// Advance the point by its velocity and wrap each axis around the
    /// surface bounds.
    pub fn drift(&mut self, width: f32, height: f32) {
        self.x = wrap(self.x + self.vx, width);
        self.y = wrap(self.y + self.vy, height);
    }

    /// Brightness multiplier at time `t_ms`.
    ///
    /// Exactly 1.0 when motion is off, otherwise a sine oscillation in
    /// [0.3, 1.0].
    pub fn twinkle(&self, t_ms: f64, motion_enabled: bool) -> f32 {
        if !motion_enabled {
            return 1.0;
        }
        let angle = self.twinkle_phase as f64 + t_ms * self.twinkle_speed as f64;
        (0.65 + 0.35 * angle.sin()) as f32
    }

    /// Opacity actually painted at time `t_ms`, clamped to [0, 1].
    pub fn opacity(&self, t_ms: f64, motion_enabled: bool) -> f32 {
        (self.base_opacity * self.twinkle(t_ms, motion_enabled)).clamp(0.0, 1.0)
    }

    /// Whether this star is large enough to get a halo.
    pub fn has_halo(&self) -> bool {
        self.radius > HALO_THRESHOLD
    }
}

fn wrap(value: f32, extent: f32) -> f32 {
    if value < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if value > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        value
    }
}
