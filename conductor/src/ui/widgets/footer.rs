use iced::widget::{container, text};
use iced::{Element, Length, alignment};

use crate::theme::ThemeProps;

pub(crate) const FOOTER_HEIGHT: f32 = 40.0;
const FOOTER_FONT_SIZE: f32 = 12.0;

/// Props for rendering the footer line.
pub(crate) struct FooterProps<'a> {
    pub(crate) line: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the footer bar with the configured copyright line.
pub(crate) fn view<'a, M: 'a>(props: FooterProps<'a>) -> Element<'a, M> {
    let palette = props.theme.theme.iced_palette();
    let line_color = palette.dim_foreground;
    let background = palette.surface;
    let border_color = palette.border;

    container(text(props.line).size(FOOTER_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(line_color),
        }
    }))
    .width(Length::Fill)
    .height(Length::Fixed(FOOTER_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| iced::widget::container::Style {
        background: Some(background.into()),
        border: iced::Border {
            width: 1.0,
            color: border_color,
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
