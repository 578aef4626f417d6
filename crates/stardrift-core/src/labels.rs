//! Text shown on the motion toggle.

use serde::{Deserialize, Serialize};

/// Toggle labels for each motion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionLabels {
    /// Label while motion is on.
    pub disable: String,
    /// Label while motion is off.
    pub enable: String,
}

impl Default for MotionLabels {
    fn default() -> Self {
        Self {
            disable: "Disable Motion".to_string(),
            enable: "Enable Motion".to_string(),
        }
    }
}

impl MotionLabels {
    pub fn new(disable: impl Into<String>, enable: impl Into<String>) -> Self {
        Self {
            disable: disable.into(),
            enable: enable.into(),
        }
    }

    /// Label describing what pressing the toggle would do next.
    pub fn for_state(&self, motion_enabled: bool) -> &str {
        if motion_enabled {
            &self.disable
        } else {
            &self.enable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_follows_state() {
        let labels = MotionLabels::default();
        assert_eq!(labels.for_state(true), "Disable Motion");
        assert_eq!(labels.for_state(false), "Enable Motion");

        let labels = MotionLabels::new("Parar", "Animar");
        assert_eq!(labels.for_state(false), "Animar");
    }
}
