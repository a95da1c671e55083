use iced::widget::{Space, column, container, text};
use iced::{Element, Length, alignment};
use thiserror::Error;

use crate::theme::ThemeProps;
use crate::ui::components::badge::{self, BadgeTone};

const HEADER_FONT_SIZE: f32 = 13.0;
const CELL_FONT_SIZE: f32 = 14.0;
const EMPTY_FONT_SIZE: f32 = 14.0;
const CELL_PADDING_X: f32 = 12.0;
const CELL_PADDING_Y: f32 = 10.0;
const ROW_SEPARATOR_HEIGHT: f32 = 1.0;
const EMPTY_PADDING: f32 = 32.0;

/// Errors detected while building a column set.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ColumnError {
    #[error("duplicate column id '{0}'")]
    DuplicateColumnId(&'static str),
}

/// Displayable value produced by a column's cell renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CellContent {
    Text(String),
    Badge { label: String, tone: BadgeTone },
}

/// One named, ordered rule for projecting a record field into a cell.
/// The renderer must be pure: deterministic and side-effect free.
pub(crate) struct ColumnDefinition<R> {
    pub(crate) id: &'static str,
    pub(crate) header: &'static str,
    pub(crate) cell: fn(&R) -> CellContent,
}

impl<R> Clone for ColumnDefinition<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ColumnDefinition<R> {}

/// Validated, ordered column set for one table. Construction rejects
/// duplicate ids so two columns can never shadow each other.
pub(crate) struct Columns<R> {
    definitions: Vec<ColumnDefinition<R>>,
}

impl<R> Columns<R> {
    pub(crate) fn new(
        definitions: Vec<ColumnDefinition<R>>,
    ) -> Result<Self, ColumnError> {
        let mut seen = std::collections::HashSet::new();
        for definition in &definitions {
            if !seen.insert(definition.id) {
                return Err(ColumnError::DuplicateColumnId(definition.id));
            }
        }

        Ok(Self { definitions })
    }

    pub(crate) fn definitions(&self) -> &[ColumnDefinition<R>] {
        &self.definitions
    }

    pub(crate) fn len(&self) -> usize {
        self.definitions.len()
    }
}

/// Apply every column renderer to every record, in order. Row order
/// follows `records` exactly; sorting is the caller's responsibility.
pub(crate) fn resolve_rows<R>(
    columns: &Columns<R>,
    records: &[R],
) -> Vec<Vec<CellContent>> {
    records
        .iter()
        .map(|record| {
            columns
                .definitions()
                .iter()
                .map(|column| (column.cell)(record))
                .collect()
        })
        .collect()
}

/// Props for rendering a record table.
pub(crate) struct RecordTableProps<'a, R> {
    pub(crate) columns: &'a Columns<R>,
    pub(crate) records: &'a [R],
    pub(crate) empty_message: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a column-defined tabular view of records. With no records the
/// body shows `empty_message` instead of an empty grid.
pub(crate) fn view<'a, R, M: 'a>(
    props: RecordTableProps<'a, R>,
) -> Element<'a, M> {
    let palette = props.theme.theme.iced_palette();
    let header_color = palette.dim_foreground;
    let cell_color = palette.foreground;
    let separator_color = palette.border;
    let surface_color = palette.surface;

    let mut header_cells: Vec<Element<'a, M>> = Vec::new();
    for definition in props.columns.definitions() {
        header_cells.push(
            container(text(definition.header).size(HEADER_FONT_SIZE).style(
                move |_| iced::widget::text::Style {
                    color: Some(header_color),
                },
            ))
            .padding([CELL_PADDING_Y, CELL_PADDING_X])
            .width(Length::FillPortion(1))
            .into(),
        );
    }
    let header = iced::widget::Row::with_children(header_cells)
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let body: Element<'a, M> = if props.records.is_empty() {
        container(text(props.empty_message).size(EMPTY_FONT_SIZE).style(
            move |_| iced::widget::text::Style {
                color: Some(header_color),
            },
        ))
        .width(Length::Fill)
        .padding(EMPTY_PADDING)
        .align_x(alignment::Horizontal::Center)
        .into()
    } else {
        let mut rows: Vec<Element<'a, M>> = Vec::new();
        for cells in resolve_rows(props.columns, props.records) {
            rows.push(row_separator(separator_color));
            rows.push(record_row(cells, cell_color, props.theme));
        }

        iced::widget::Column::with_children(rows)
            .width(Length::Fill)
            .into()
    };

    container(column![header, body].width(Length::Fill))
        .width(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(surface_color.into()),
            border: iced::Border {
                width: 1.0,
                color: separator_color,
                radius: iced::border::Radius::new(4.0),
            },
            ..Default::default()
        })
        .into()
}

fn record_row<'a, M: 'a>(
    cells: Vec<CellContent>,
    cell_color: iced::Color,
    theme: ThemeProps<'a>,
) -> Element<'a, M> {
    let mut rendered: Vec<Element<'a, M>> = Vec::new();
    for cell in cells {
        let content: Element<'a, M> = match cell {
            CellContent::Text(value) => text(value)
                .size(CELL_FONT_SIZE)
                .style(move |_| iced::widget::text::Style {
                    color: Some(cell_color),
                })
                .into(),
            CellContent::Badge { label, tone } => {
                badge::view(badge::BadgeProps { label, tone, theme })
            },
        };

        rendered.push(
            container(content)
                .padding([CELL_PADDING_Y, CELL_PADDING_X])
                .width(Length::FillPortion(1))
                .into(),
        );
    }

    iced::widget::Row::with_children(rendered)
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn row_separator<'a, M: 'a>(color: iced::Color) -> Element<'a, M> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(ROW_SEPARATOR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::{
        CellContent, ColumnDefinition, ColumnError, Columns, resolve_rows,
    };
    use crate::ui::components::badge::BadgeTone;

    struct Sample {
        name: &'static str,
        count: u32,
    }

    fn name_column() -> ColumnDefinition<Sample> {
        ColumnDefinition {
            id: "name",
            header: "Name",
            cell: |sample| CellContent::Text(sample.name.to_string()),
        }
    }

    fn count_column() -> ColumnDefinition<Sample> {
        ColumnDefinition {
            id: "count",
            header: "Count",
            cell: |sample| CellContent::Text(sample.count.to_string()),
        }
    }

    #[test]
    fn given_duplicate_column_ids_when_building_columns_then_rejected() {
        let result = Columns::new(vec![name_column(), name_column()]);

        assert!(matches!(
            result,
            Err(ColumnError::DuplicateColumnId("name"))
        ));
    }

    #[test]
    fn given_records_when_resolving_rows_then_row_count_matches_input() {
        let columns = Columns::new(vec![name_column(), count_column()])
            .expect("unique ids");
        let records = vec![
            Sample { name: "a", count: 1 },
            Sample { name: "b", count: 2 },
            Sample { name: "c", count: 3 },
        ];

        let rows = resolve_rows(&columns, &records);

        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn given_no_records_when_resolving_rows_then_no_data_rows_exist() {
        let columns = Columns::new(vec![name_column()]).expect("unique ids");
        let records: Vec<Sample> = Vec::new();

        let rows = resolve_rows(&columns, &records);

        assert!(rows.is_empty());
    }

    #[test]
    fn given_records_when_resolving_rows_then_each_cell_uses_its_own_column_and_record()
    {
        let columns = Columns::new(vec![name_column(), count_column()])
            .expect("unique ids");
        let records = vec![
            Sample { name: "a", count: 1 },
            Sample { name: "b", count: 2 },
        ];

        let rows = resolve_rows(&columns, &records);

        assert_eq!(rows[0][0], CellContent::Text(String::from("a")));
        assert_eq!(rows[0][1], CellContent::Text(String::from("1")));
        assert_eq!(rows[1][0], CellContent::Text(String::from("b")));
        assert_eq!(rows[1][1], CellContent::Text(String::from("2")));
    }

    #[test]
    fn given_badge_renderer_when_resolving_rows_then_badge_content_survives() {
        let badge_column: ColumnDefinition<Sample> = ColumnDefinition {
            id: "status",
            header: "Status",
            cell: |_| CellContent::Badge {
                label: String::from("Active"),
                tone: BadgeTone::Affirmative,
            },
        };
        let columns = Columns::new(vec![badge_column]).expect("unique ids");
        let records = vec![Sample { name: "a", count: 1 }];

        let rows = resolve_rows(&columns, &records);

        assert_eq!(
            rows[0][0],
            CellContent::Badge {
                label: String::from("Active"),
                tone: BadgeTone::Affirmative,
            }
        );
    }
}
