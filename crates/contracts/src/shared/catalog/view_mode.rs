use serde::Serialize;

use super::ports::ViewportSignal;

/// Display density of the species list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Gallery cards.
    #[default]
    Expanded,
    /// One row per species.
    Compact,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Expanded => "expanded",
            ViewMode::Compact => "compact",
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, ViewMode::Compact)
    }
}

/// View-mode preference with a one-shot default taken from the viewport.
///
/// The first viewport observation may force `Compact`; later observations
/// are ignored so the signal never fights an explicit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewModeToggle {
    mode: ViewMode,
    seeded: bool,
}

impl ViewModeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_viewport<V: ViewportSignal + ?Sized>(viewport: &V) -> Self {
        let mut toggle = Self::new();
        toggle.observe_viewport(viewport.is_narrow());
        toggle
    }

    pub fn observe_viewport(&mut self, narrow: bool) {
        if self.seeded {
            return;
        }
        self.seeded = true;
        if narrow {
            self.mode = ViewMode::Compact;
        }
    }

    /// Explicit choice; also consumes the viewport seed if it was still pending.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.seeded = true;
        self.mode = mode;
    }

    pub fn current_mode(&self) -> ViewMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_expanded() {
        assert_eq!(ViewModeToggle::new().current_mode(), ViewMode::Expanded);
        assert_eq!(ViewModeToggle::from_viewport(&false).current_mode(), ViewMode::Expanded);
    }

    #[test]
    fn test_narrow_viewport_seeds_compact() {
        assert_eq!(ViewModeToggle::from_viewport(&true).current_mode(), ViewMode::Compact);
    }

    #[test]
    fn test_user_choice_survives_viewport_flips() {
        let mut toggle = ViewModeToggle::from_viewport(&true);
        toggle.set_mode(ViewMode::Expanded);
        assert_eq!(toggle.current_mode(), ViewMode::Expanded);

        toggle.observe_viewport(false);
        assert_eq!(toggle.current_mode(), ViewMode::Expanded);
        toggle.observe_viewport(true);
        assert_eq!(toggle.current_mode(), ViewMode::Expanded);
    }

    #[test]
    fn test_seed_is_one_shot() {
        let mut toggle = ViewModeToggle::from_viewport(&false);
        toggle.observe_viewport(true);
        assert_eq!(toggle.current_mode(), ViewMode::Expanded);
    }

    #[test]
    fn test_explicit_choice_before_first_observation_wins() {
        let mut toggle = ViewModeToggle::new();
        toggle.set_mode(ViewMode::Expanded);
        toggle.observe_viewport(true);
        assert_eq!(toggle.current_mode(), ViewMode::Expanded);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ViewMode::Compact).unwrap(), "\"compact\"");
        assert_eq!(ViewMode::Expanded.as_str(), "expanded");
    }
}
