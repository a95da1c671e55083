/// Rendered width of the navigation panel when expanded.
pub(crate) const NAV_PANEL_WIDTH: f32 = 280.0;

/// Navigation panel states. The toggle transition is symmetric and
/// these are the only two states reachable for the shell's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum NavState {
    #[default]
    Collapsed,
    Expanded,
}

impl NavState {
    pub(crate) fn toggled(self) -> Self {
        match self {
            NavState::Collapsed => NavState::Expanded,
            NavState::Expanded => NavState::Collapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NavState;

    #[test]
    fn given_any_state_when_toggled_twice_then_original_state_returns() {
        assert_eq!(NavState::Collapsed.toggled().toggled(), NavState::Collapsed);
        assert_eq!(NavState::Expanded.toggled().toggled(), NavState::Expanded);
    }

    #[test]
    fn given_default_state_when_shell_mounts_then_panel_starts_collapsed() {
        assert_eq!(NavState::default(), NavState::Collapsed);
    }
}
