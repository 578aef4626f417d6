//! Status-line motion toggle.

use ratatui::{
    style::{Color, Stylize},
    text::Span,
};
use stardrift_core::ToggleControl;

/// The on-screen motion toggle, bound to the `m` key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusToggle {
    label: String,
    pressed: bool,
}

impl StatusToggle {
    /// Spans for the help line, e.g. `m Disable Motion [on]`.
    pub fn spans(&self, accent: Color) -> Vec<Span<'static>> {
        let state = if self.pressed { " [on]" } else { " [off]" };
        vec![
            "m".bold().fg(accent),
            Span::from(format!(" {}", self.label)).dark_gray(),
            Span::from(state).fg(accent),
        ]
    }
}

impl ToggleControl for StatusToggle {
    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}
