//! Motion state: reconciles the system reduced-motion preference with the
//! user's manual toggle.

/// Outcome of applying a motion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionChange {
    /// Motion went from off to on.
    Started,
    /// Motion went from on to off.
    Stopped,
    /// The enabled flag did not change.
    Unchanged,
}

/// Whether the starfield animates, and who decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionState {
    enabled: bool,
    overridden: bool,
    prefers_reduced: bool,
}

impl MotionState {
    /// Initial state derived from the system preference.
    pub fn from_preference(prefers_reduced: bool) -> Self {
        Self {
            enabled: !prefers_reduced,
            overridden: false,
            prefers_reduced,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// True once the user has toggled motion by hand. Never resets.
    pub fn overridden(&self) -> bool {
        self.overridden
    }

    /// Last reduced-motion preference reported by the system.
    pub fn prefers_reduced(&self) -> bool {
        self.prefers_reduced
    }

    /// Set the enabled flag. A user-originated request also latches the
    /// override.
    pub fn apply(&mut self, next_enabled: bool, from_user: bool) -> MotionChange {
        if from_user {
            self.overridden = true;
        }
        let change = match (self.enabled, next_enabled) {
            (false, true) => MotionChange::Started,
            (true, false) => MotionChange::Stopped,
            _ => MotionChange::Unchanged,
        };
        self.enabled = next_enabled;
        change
    }

    /// Record a new system preference.
    ///
    /// Returns the enabled value the controller should apply, or `None` when
    /// the user override suppresses the automatic reaction.
    pub fn preference_changed(&mut self, prefers_reduced: bool) -> Option<bool> {
        self.prefers_reduced = prefers_reduced;
        if self.overridden {
            None
        } else {
            Some(!prefers_reduced)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_follows_preference() {
        let state = MotionState::from_preference(false);
        assert!(state.enabled());
        assert!(!state.overridden());

        let state = MotionState::from_preference(true);
        assert!(!state.enabled());
        assert!(state.prefers_reduced());
    }

    #[test]
    fn test_apply_reports_transitions() {
        let mut state = MotionState::from_preference(false);
        assert_eq!(state.apply(true, false), MotionChange::Unchanged);
        assert_eq!(state.apply(false, false), MotionChange::Stopped);
        assert_eq!(state.apply(false, false), MotionChange::Unchanged);
        assert_eq!(state.apply(true, false), MotionChange::Started);
        assert!(!state.overridden());
    }

    #[test]
    fn test_user_request_latches_override() {
        let mut state = MotionState::from_preference(true);
        assert_eq!(state.apply(true, true), MotionChange::Started);
        assert!(state.overridden());
        state.apply(false, false);
        assert!(state.overridden());
    }

    #[test]
    fn test_preference_ignored_after_override() {
        let mut state = MotionState::from_preference(false);
        assert_eq!(state.preference_changed(true), Some(false));

        state.apply(true, true);
        assert_eq!(state.preference_changed(true), None);
        assert!(state.prefers_reduced());
        assert_eq!(state.preference_changed(false), None);
        assert!(!state.prefers_reduced());
    }
}
