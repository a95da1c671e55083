use iced::widget::{button, row, svg, text};
use iced::{Element, Length, alignment};

use crate::config::Crumb;
use crate::icons;
use crate::theme::ThemeProps;

const CRUMB_FONT_SIZE: f32 = 13.0;
const SEPARATOR_SIZE: f32 = 12.0;
const CRUMB_SPACING: f32 = 4.0;

/// UI events emitted by the breadcrumb trail.
#[derive(Debug, Clone)]
pub(crate) enum BreadcrumbsEvent {
    CrumbActivated { target: String },
}

/// Props for rendering the breadcrumb trail.
pub(crate) struct BreadcrumbsProps<'a> {
    pub(crate) crumbs: &'a [Crumb],
    pub(crate) theme: ThemeProps<'a>,
}

/// Render crumbs in order with a separator between adjacent crumbs.
pub(crate) fn view<'a>(
    props: BreadcrumbsProps<'a>,
) -> Element<'a, BreadcrumbsEvent> {
    let palette = props.theme.theme.iced_palette();
    let crumb_color = palette.dim_foreground;
    let hover_color = palette.accent;
    let separator_color = palette.dim_foreground;

    let mut trail = row![]
        .spacing(CRUMB_SPACING)
        .align_y(alignment::Vertical::Center);

    for (index, crumb) in props.crumbs.iter().enumerate() {
        if index > 0 {
            let separator =
                svg::Svg::new(svg::Handle::from_memory(icons::CRUMB_SEPARATOR))
                    .width(Length::Fixed(SEPARATOR_SIZE))
                    .height(Length::Fixed(SEPARATOR_SIZE))
                    .style(move |_, _| svg::Style {
                        color: Some(separator_color),
                    });
            trail = trail.push(separator);
        }

        let target = crumb.target.clone();
        trail = trail.push(
            button(text(crumb.label.as_str()).size(CRUMB_FONT_SIZE))
                .on_press(BreadcrumbsEvent::CrumbActivated { target })
                .padding(0)
                .style(move |_, status| iced::widget::button::Style {
                    text_color: if matches!(
                        status,
                        iced::widget::button::Status::Hovered
                    ) {
                        hover_color
                    } else {
                        crumb_color
                    },
                    background: None,
                    border: iced::Border::default(),
                    ..Default::default()
                }),
        );
    }

    trail.into()
}
