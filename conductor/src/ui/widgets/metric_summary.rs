use iced::widget::{Space, column, container, text};
use iced::{Element, Length, alignment};

use crate::features::dashboard::Metric;
use crate::theme::ThemeProps;

const VALUE_FONT_SIZE: f32 = 30.0;
const TITLE_FONT_SIZE: f32 = 14.0;
const TREND_FONT_SIZE: f32 = 12.0;
const TILE_SPACING: f32 = 4.0;
const TILE_PADDING: f32 = 16.0;
const SEPARATOR_WIDTH: f32 = 1.0;
const SEPARATOR_HEIGHT: f32 = 60.0;

/// Props for rendering the KPI tile row.
pub(crate) struct MetricSummaryProps<'a> {
    pub(crate) metrics: &'a [Metric],
    pub(crate) theme: ThemeProps<'a>,
}

/// Number of separators for a tile row: one between each adjacent pair,
/// never after the last tile.
pub(crate) fn separator_count(tile_count: usize) -> usize {
    tile_count.saturating_sub(1)
}

/// Render one tile per metric, in input order, with separators between
/// adjacent tiles. An empty metric list renders an empty row.
pub(crate) fn view<'a, M: 'a>(
    props: MetricSummaryProps<'a>,
) -> Element<'a, M> {
    let palette = props.theme.theme.iced_palette();
    let surface_color = palette.surface;
    let border_color = palette.border;

    let mut children: Vec<Element<'a, M>> = Vec::new();
    for (index, metric) in props.metrics.iter().enumerate() {
        if index > 0 {
            children.push(tile_separator(border_color));
        }
        children.push(metric_tile(metric, props.theme));
    }

    container(
        iced::widget::Row::with_children(children)
            .width(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding(TILE_PADDING)
    .style(move |_| iced::widget::container::Style {
        background: Some(surface_color.into()),
        border: iced::Border {
            width: 1.0,
            color: border_color,
            radius: iced::border::Radius::new(4.0),
        },
        ..Default::default()
    })
    .into()
}

fn metric_tile<'a, M: 'a>(
    metric: &'a Metric,
    theme: ThemeProps<'a>,
) -> Element<'a, M> {
    let palette = theme.theme.iced_palette();
    let value_color = palette.accent;
    let title_color = palette.dim_foreground;
    let trend_color = palette.accent;

    let value = text(metric.value.as_str()).size(VALUE_FONT_SIZE).style(
        move |_| iced::widget::text::Style {
            color: Some(value_color),
        },
    );
    let title = text(metric.title.as_str()).size(TITLE_FONT_SIZE).style(
        move |_| iced::widget::text::Style {
            color: Some(title_color),
        },
    );
    let trend = text(metric.trend.as_str()).size(TREND_FONT_SIZE).style(
        move |_| iced::widget::text::Style {
            color: Some(trend_color),
        },
    );

    container(
        column![value, title, trend]
            .spacing(TILE_SPACING)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::FillPortion(1))
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn tile_separator<'a, M: 'a>(color: iced::Color) -> Element<'a, M> {
    container(Space::new())
        .width(Length::Fixed(SEPARATOR_WIDTH))
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::separator_count;

    #[test]
    fn given_three_tiles_when_counting_separators_then_one_between_each_pair()
    {
        assert_eq!(separator_count(3), 2);
    }

    #[test]
    fn given_one_tile_when_counting_separators_then_none_render() {
        assert_eq!(separator_count(1), 0);
    }

    #[test]
    fn given_no_tiles_when_counting_separators_then_none_render() {
        assert_eq!(separator_count(0), 0);
    }
}
