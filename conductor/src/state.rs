use iced::Size;

use crate::ui::widgets::{footer, top_bar};

#[derive(Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
    pub(crate) screen_size: Size,
}

impl State {
    pub(crate) fn new(window_size: Size, screen_size: Size) -> Self {
        Self {
            window_size,
            screen_size,
        }
    }

    pub(crate) fn set_screen_size(&mut self, size: Size) {
        self.screen_size = size;
    }
}

/// Compute the content pane size from the current screen and the
/// navigation panel width. Toggling the panel reflows this area only.
pub(crate) fn content_size(screen_size: Size, nav_panel_width: f32) -> Size {
    let height =
        (screen_size.height - top_bar::TOP_BAR_HEIGHT - footer::FOOTER_HEIGHT)
            .max(0.0);
    let width = (screen_size.width - nav_panel_width).max(0.0);

    Size::new(width, height)
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::content_size;
    use crate::ui::widgets::{footer, top_bar};

    #[test]
    fn given_collapsed_panel_when_sizing_content_then_full_width_is_available()
    {
        let screen = Size::new(1200.0, 800.0);

        let size = content_size(screen, 0.0);

        assert_eq!(size.width, 1200.0);
        assert_eq!(
            size.height,
            800.0 - top_bar::TOP_BAR_HEIGHT - footer::FOOTER_HEIGHT
        );
    }

    #[test]
    fn given_expanded_panel_when_sizing_content_then_panel_width_is_subtracted()
    {
        let screen = Size::new(1200.0, 800.0);

        let size = content_size(screen, 280.0);

        assert_eq!(size.width, 920.0);
    }

    #[test]
    fn given_tiny_window_when_sizing_content_then_dimensions_never_go_negative()
    {
        let screen = Size::new(100.0, 10.0);

        let size = content_size(screen, 280.0);

        assert_eq!(size.width, 0.0);
        assert_eq!(size.height, 0.0);
    }
}
