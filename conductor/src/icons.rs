pub(crate) const LOGO_SMALL: &[u8] =
    include_bytes!("../assets/svg/logo-small.svg");
pub(crate) const NAV_MENU: &[u8] = include_bytes!("../assets/svg/menu.svg");
pub(crate) const UTILITY_SETTINGS: &[u8] =
    include_bytes!("../assets/svg/settings.svg");
pub(crate) const UTILITY_USER: &[u8] = include_bytes!("../assets/svg/user.svg");
pub(crate) const CRUMB_SEPARATOR: &[u8] =
    include_bytes!("../assets/svg/chevron-right.svg");
pub(crate) const APP_ICON_DATA: &[u8] =
    include_bytes!("../assets/logo/logo-small.png");
