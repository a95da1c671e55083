use super::model::{NAV_PANEL_WIDTH, NavState};

/// Shell navigation state. `nav` has exactly one writer, the feature
/// reducer, which mutates it only through [`NavigationState::toggle`].
pub(crate) struct NavigationState {
    nav: NavState,
    user_menu_open: bool,
    last_intent: Option<String>,
}

impl NavigationState {
    pub(crate) fn new() -> Self {
        Self {
            nav: NavState::default(),
            user_menu_open: false,
            last_intent: None,
        }
    }

    pub(crate) fn toggle(&mut self) {
        self.nav = self.nav.toggled();
    }

    pub(crate) fn is_expanded(&self) -> bool {
        self.nav == NavState::Expanded
    }

    /// Width the side-panel container renders at in the current state.
    pub(crate) fn panel_width(&self) -> f32 {
        match self.nav {
            NavState::Collapsed => 0.0,
            NavState::Expanded => NAV_PANEL_WIDTH,
        }
    }

    pub(crate) fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    pub(crate) fn dismiss_user_menu(&mut self) {
        self.user_menu_open = false;
    }

    pub(crate) fn is_user_menu_open(&self) -> bool {
        self.user_menu_open
    }

    pub(crate) fn record_intent(&mut self, target: String) {
        self.last_intent = Some(target);
    }

    pub(crate) fn last_intent(&self) -> Option<&str> {
        self.last_intent.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationState;

    #[test]
    fn given_fresh_state_when_toggled_once_then_panel_expands_to_open_width() {
        let mut state = NavigationState::new();
        assert_eq!(state.panel_width(), 0.0);

        state.toggle();

        assert!(state.is_expanded());
        assert_eq!(state.panel_width(), 280.0);
    }

    #[test]
    fn given_expanded_state_when_toggled_again_then_panel_collapses_to_zero() {
        let mut state = NavigationState::new();

        state.toggle();
        state.toggle();

        assert!(!state.is_expanded());
        assert_eq!(state.panel_width(), 0.0);
    }
}
