use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, alignment};

use crate::features::dashboard::{EventRecord, Metric};
use crate::theme::ThemeProps;
use crate::ui::widgets::{metric_summary, record_table};

const PAGE_TITLE_FONT_SIZE: f32 = 24.0;
const SECTION_TITLE_FONT_SIZE: f32 = 18.0;
const ACTION_FONT_SIZE: f32 = 14.0;
const PAGE_PADDING: f32 = 20.0;
const SECTION_SPACING: f32 = 20.0;
const ACTION_PADDING_X: f32 = 16.0;
const ACTION_PADDING_Y: f32 = 8.0;
const ACTION_RADIUS: f32 = 4.0;

/// UI events emitted by the dashboard page.
#[derive(Debug, Clone)]
pub(crate) enum DashboardPageEvent {
    ActionPressed,
}

/// Props for rendering the dashboard content pane.
pub(crate) struct DashboardProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) action_label: &'a str,
    pub(crate) metrics: &'a [Metric],
    pub(crate) columns: &'a record_table::Columns<EventRecord>,
    pub(crate) records: &'a [EventRecord],
    pub(crate) empty_message: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Assemble the page header, primary action, metric summary, and record
/// table into one scrollable content region. Holds no state of its own.
pub(crate) fn view<'a>(
    props: DashboardProps<'a>,
) -> Element<'a, DashboardPageEvent> {
    let palette = props.theme.theme.iced_palette();
    let title_color = palette.bright_foreground;

    let title = text(props.title).size(PAGE_TITLE_FONT_SIZE).style(
        move |_| iced::widget::text::Style {
            color: Some(title_color),
        },
    );

    let header = row![
        title,
        container(iced::widget::Space::new()).width(Length::Fill),
        action_button(props.action_label, props.theme),
    ]
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill);

    let overview = column![
        section_title("Service Overview", props.theme),
        metric_summary::view(metric_summary::MetricSummaryProps {
            metrics: props.metrics,
            theme: props.theme,
        }),
    ]
    .spacing(SECTION_SPACING / 2.0);

    let records = column![
        section_title("Active Events", props.theme),
        record_table::view(record_table::RecordTableProps {
            columns: props.columns,
            records: props.records,
            empty_message: props.empty_message,
            theme: props.theme,
        }),
    ]
    .spacing(SECTION_SPACING / 2.0);

    scrollable(
        column![header, overview, records]
            .spacing(SECTION_SPACING)
            .padding(PAGE_PADDING)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn section_title<'a>(
    title: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, DashboardPageEvent> {
    let palette = theme.theme.iced_palette();
    let color = palette.foreground;

    text(title)
        .size(SECTION_TITLE_FONT_SIZE)
        .style(move |_| iced::widget::text::Style { color: Some(color) })
        .into()
}

fn action_button<'a>(
    label: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, DashboardPageEvent> {
    let palette = theme.theme.iced_palette();
    let accent = palette.accent;
    let label_color = palette.bright_foreground;

    button(text(label).size(ACTION_FONT_SIZE))
        .on_press(DashboardPageEvent::ActionPressed)
        .padding([ACTION_PADDING_Y, ACTION_PADDING_X])
        .style(move |_, status| {
            let mut background = accent;
            if matches!(status, iced::widget::button::Status::Hovered) {
                background.a = 0.85;
            }

            iced::widget::button::Style {
                text_color: label_color,
                background: Some(background.into()),
                border: iced::Border {
                    radius: iced::border::Radius::new(ACTION_RADIUS),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
