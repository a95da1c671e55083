pub(crate) mod badge;
pub(crate) mod icon_button;
