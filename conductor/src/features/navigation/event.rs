/// Events emitted by shell chrome widgets and routed to the navigation
/// feature.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    ToggleNav,
    ToggleUserMenu,
    DismissUserMenu,
    Navigate { target: String },
    UtilityActivated { id: String },
    MenuItemActivated { id: String },
}
