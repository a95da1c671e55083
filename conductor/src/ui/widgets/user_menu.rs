use iced::widget::{button, column, container, text};
use iced::{Element, Length};

use crate::config::UtilityMenuItem;
use crate::theme::ThemeProps;

const MENU_WIDTH: f32 = 180.0;
const ITEM_FONT_SIZE: f32 = 13.0;
const ITEM_PADDING_X: f32 = 12.0;
const ITEM_PADDING_Y: f32 = 8.0;
const MENU_RADIUS: f32 = 4.0;

/// UI events emitted by the user utility menu.
#[derive(Debug, Clone)]
pub(crate) enum UserMenuEvent {
    ItemActivated { id: String },
}

/// Props for rendering the user utility dropdown.
pub(crate) struct UserMenuProps<'a> {
    pub(crate) items: &'a [UtilityMenuItem],
    /// Vertical space available below the top bar; the menu never
    /// grows past it.
    pub(crate) max_height: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the dropdown panel with one entry per menu item, in order.
pub(crate) fn view<'a>(props: UserMenuProps<'a>) -> Element<'a, UserMenuEvent> {
    let palette = props.theme.theme.iced_palette();
    let background = palette.overlay;
    let border_color = palette.border;
    let item_color = palette.foreground;
    let hover_color = palette.accent;

    let mut entries = column![].width(Length::Fill);
    for item in props.items {
        let id = item.id.clone();
        let label = text(item.label.as_str()).size(ITEM_FONT_SIZE);

        entries = entries.push(
            button(label)
                .on_press(UserMenuEvent::ItemActivated { id })
                .padding([ITEM_PADDING_Y, ITEM_PADDING_X])
                .width(Length::Fill)
                .style(move |_, status| iced::widget::button::Style {
                    text_color: if matches!(
                        status,
                        iced::widget::button::Status::Hovered
                    ) {
                        hover_color
                    } else {
                        item_color
                    },
                    background: None,
                    border: iced::Border::default(),
                    ..Default::default()
                }),
        );
    }

    container(entries)
        .width(Length::Fixed(MENU_WIDTH))
        .max_height(props.max_height)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            border: iced::Border {
                width: 1.0,
                color: border_color,
                radius: iced::border::Radius::new(MENU_RADIUS),
            },
            ..Default::default()
        })
        .into()
}
