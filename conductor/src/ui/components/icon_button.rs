use iced::widget::{button, container, svg};
use iced::{Element, Length, alignment};

use crate::theme::ThemeProps;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    /// Pressed/engaged state, reflected in the icon and background.
    pub(crate) active: bool,
}

/// A square icon button used for top-bar controls.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let base_color = palette.dim_foreground;
    let accent_color = palette.accent;
    let active_background = palette.overlay;
    let is_active = props.active;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if is_active || status == svg::Status::Hovered {
                accent_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, _| iced::widget::button::Style {
            background: is_active.then(|| active_background.into()),
            border: iced::Border::default(),
            ..Default::default()
        })
        .into()
}
