use iced::widget::{button, column, container, scrollable, text};
use iced::{Element, Length, alignment};

use crate::config::{Identity, NavSection};
use crate::theme::ThemeProps;

const HEADER_FONT_SIZE: f32 = 15.0;
const SECTION_FONT_SIZE: f32 = 12.0;
const LINK_FONT_SIZE: f32 = 13.0;
const HEADER_PADDING: f32 = 16.0;
const SECTION_SPACING: f32 = 16.0;
const SECTION_PADDING_X: f32 = 16.0;
const LINK_PADDING_X: f32 = 8.0;
const LINK_PADDING_Y: f32 = 6.0;

/// UI events emitted by the navigation panel.
#[derive(Debug, Clone)]
pub(crate) enum NavigationPanelEvent {
    HeaderActivated { target: String },
    LinkActivated { target: String },
}

/// Props for rendering the side navigation panel.
pub(crate) struct NavigationPanelProps<'a> {
    pub(crate) header: &'a Identity,
    pub(crate) sections: &'a [NavSection],
    pub(crate) width: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the hierarchical link tree. The panel performs no navigation
/// itself: activating a link only emits the link's opaque target.
/// Section and link ordering is preserved exactly as configured.
pub(crate) fn view<'a>(
    props: NavigationPanelProps<'a>,
) -> Element<'a, NavigationPanelEvent> {
    let palette = props.theme.theme.iced_palette();
    let background = palette.surface;

    let header = header_button(props.header, props.theme);

    let mut sections = column![].spacing(SECTION_SPACING);
    for section in props.sections {
        sections = sections.push(section_block(section, props.theme));
    }

    let tree = scrollable(
        column![header, sections]
            .spacing(SECTION_SPACING)
            .width(Length::Fill)
            .padding([HEADER_PADDING, 0.0]),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    container(tree)
        .width(Length::Fixed(props.width))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn header_button<'a>(
    header: &'a Identity,
    theme: ThemeProps<'a>,
) -> Element<'a, NavigationPanelEvent> {
    let palette = theme.theme.iced_palette();
    let color = palette.bright_foreground;
    let target = header.target.clone();

    let label = text(header.title.as_str()).size(HEADER_FONT_SIZE).style(
        move |_| iced::widget::text::Style { color: Some(color) },
    );

    button(label)
        .on_press(NavigationPanelEvent::HeaderActivated { target })
        .padding([0.0, SECTION_PADDING_X])
        .width(Length::Fill)
        .style(|_, _| iced::widget::button::Style::default())
        .into()
}

fn section_block<'a>(
    section: &'a NavSection,
    theme: ThemeProps<'a>,
) -> Element<'a, NavigationPanelEvent> {
    let palette = theme.theme.iced_palette();
    let section_color = palette.dim_foreground;
    let link_color = palette.foreground;
    let hover_color = palette.accent;

    let label = text(section.label.as_str())
        .size(SECTION_FONT_SIZE)
        .style(move |_| iced::widget::text::Style {
            color: Some(section_color),
        });

    let mut links = column![].width(Length::Fill);
    for link in &section.items {
        let target = link.target.clone();
        let link_label = text(link.label.as_str()).size(LINK_FONT_SIZE);

        links = links.push(
            button(link_label)
                .on_press(NavigationPanelEvent::LinkActivated { target })
                .padding([LINK_PADDING_Y, LINK_PADDING_X])
                .width(Length::Fill)
                .style(move |_, status| iced::widget::button::Style {
                    text_color: if matches!(
                        status,
                        iced::widget::button::Status::Hovered
                    ) {
                        hover_color
                    } else {
                        link_color
                    },
                    background: None,
                    border: iced::Border::default(),
                    ..Default::default()
                }),
        );
    }

    container(
        column![label, links]
            .spacing(LINK_PADDING_Y)
            .width(Length::Fill),
    )
    .padding([0.0, SECTION_PADDING_X])
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Left)
    .into()
}
