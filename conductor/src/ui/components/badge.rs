use iced::widget::{container, text};
use iced::{Color, Element, Length, alignment};

use crate::theme::ThemeProps;

const BADGE_FONT_SIZE: f32 = 12.0;
const BADGE_PADDING_X: f32 = 8.0;
const BADGE_PADDING_Y: f32 = 2.0;
const BADGE_RADIUS: f32 = 10.0;
const BADGE_BACKGROUND_ALPHA: f32 = 0.15;

/// Color-coded badge semantics, chosen by the caller's column mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BadgeTone {
    Affirmative,
    Neutral,
    Caution,
    Negative,
}

/// Props for rendering a status badge.
#[derive(Debug, Clone)]
pub(crate) struct BadgeProps<'a> {
    pub(crate) label: String,
    pub(crate) tone: BadgeTone,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a small pill with a tone-colored label.
pub(crate) fn view<'a, M: 'a>(props: BadgeProps<'a>) -> Element<'a, M> {
    let palette = props.theme.theme.iced_palette();
    let tone_color = match props.tone {
        BadgeTone::Affirmative => palette.affirmative,
        BadgeTone::Neutral => palette.dim_foreground,
        BadgeTone::Caution => palette.caution,
        BadgeTone::Negative => palette.negative,
    };

    let label = text(props.label)
        .size(BADGE_FONT_SIZE)
        .style(move |_| iced::widget::text::Style {
            color: Some(tone_color),
        });

    container(label)
        .padding([BADGE_PADDING_Y, BADGE_PADDING_X])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .width(Length::Shrink)
        .style(move |_| iced::widget::container::Style {
            background: Some(
                Color {
                    a: BADGE_BACKGROUND_ALPHA,
                    ..tone_color
                }
                .into(),
            ),
            border: iced::Border {
                width: 1.0,
                color: tone_color,
                radius: iced::border::Radius::new(BADGE_RADIUS),
            },
            ..Default::default()
        })
        .into()
}
