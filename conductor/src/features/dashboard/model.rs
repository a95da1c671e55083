use serde::{Deserialize, Serialize};

use crate::ui::components::badge::BadgeTone;
use crate::ui::widgets::record_table::{
    CellContent, ColumnDefinition, ColumnError, Columns,
};

pub(crate) const PAGE_TITLE: &str = "Events";
pub(crate) const ACTION_LABEL: &str = "Create Event";
pub(crate) const EMPTY_MESSAGE: &str = "No events found";
pub(crate) const CREATE_EVENT_TARGET: &str = "#/events/create";

/// One KPI tile: purely display data, recreated wholesale on refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Metric {
    pub(crate) title: String,
    pub(crate) value: String,
    pub(crate) trend: String,
}

/// Lifecycle status of an event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum EventStatus {
    Active,
    Draft,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub(crate) fn label(self) -> &'static str {
        match self {
            EventStatus::Active => "Active",
            EventStatus::Draft => "Draft",
            EventStatus::Completed => "Completed",
            EventStatus::Cancelled => "Cancelled",
        }
    }

    pub(crate) fn tone(self) -> BadgeTone {
        match self {
            EventStatus::Active => BadgeTone::Affirmative,
            EventStatus::Draft => BadgeTone::Caution,
            EventStatus::Completed => BadgeTone::Neutral,
            EventStatus::Cancelled => BadgeTone::Negative,
        }
    }
}

/// One event row in the dashboard table. Identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct EventRecord {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) date: String,
    pub(crate) venue: String,
    pub(crate) tickets_sold: u32,
    pub(crate) status: EventStatus,
}

/// The full document supplied by the data source collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct DashboardData {
    pub(crate) metrics: Vec<Metric>,
    pub(crate) events: Vec<EventRecord>,
}

/// Format a count with thousands separators for display.
pub(crate) fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

/// Column definitions for the event table, owned by the page assembling
/// it. Cell formatting, including the thousands separators and the
/// status badge mapping, lives here rather than in the table.
pub(crate) fn event_columns() -> Result<Columns<EventRecord>, ColumnError> {
    Columns::new(vec![
        ColumnDefinition {
            id: "name",
            header: "Event Name",
            cell: |event| CellContent::Text(event.name.clone()),
        },
        ColumnDefinition {
            id: "date",
            header: "Date",
            cell: |event| CellContent::Text(event.date.clone()),
        },
        ColumnDefinition {
            id: "venue",
            header: "Venue",
            cell: |event| CellContent::Text(event.venue.clone()),
        },
        ColumnDefinition {
            id: "tickets_sold",
            header: "Tickets Sold",
            cell: |event| CellContent::Text(format_count(event.tickets_sold)),
        },
        ColumnDefinition {
            id: "status",
            header: "Status",
            cell: |event| CellContent::Badge {
                label: event.status.label().to_string(),
                tone: event.status.tone(),
            },
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::{
        EventRecord, EventStatus, event_columns, format_count,
    };
    use crate::ui::components::badge::BadgeTone;
    use crate::ui::widgets::record_table::{CellContent, resolve_rows};

    fn sample_event(tickets_sold: u32) -> EventRecord {
        EventRecord {
            id: String::from("1"),
            name: String::from("Tech Conference 2024"),
            date: String::from("2024-03-15"),
            venue: String::from("Convention Center"),
            tickets_sold,
            status: EventStatus::Active,
        }
    }

    #[test]
    fn given_value_below_one_thousand_when_formatted_then_no_separator() {
        assert_eq!(format_count(450), "450");
    }

    #[test]
    fn given_value_above_one_thousand_when_formatted_then_separator_inserted()
    {
        assert_eq!(format_count(12_000), "12,000");
    }

    #[test]
    fn given_value_in_the_millions_when_formatted_then_all_groups_separated()
    {
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(0), "0");
    }

    #[test]
    fn given_event_columns_when_built_then_ids_are_unique_and_ordered() {
        let columns = event_columns().expect("event columns are unique");

        let ids: Vec<&str> = columns
            .definitions()
            .iter()
            .map(|definition| definition.id)
            .collect();

        assert_eq!(
            ids,
            vec!["name", "date", "venue", "tickets_sold", "status"]
        );
    }

    #[test]
    fn given_sample_event_when_rows_resolved_then_cells_match_renderers() {
        let columns = event_columns().expect("event columns are unique");
        let records = vec![sample_event(450)];

        let rows = resolve_rows(&columns, &records);

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0][0],
            CellContent::Text(String::from("Tech Conference 2024"))
        );
        assert_eq!(rows[0][3], CellContent::Text(String::from("450")));
        assert_eq!(
            rows[0][4],
            CellContent::Badge {
                label: String::from("Active"),
                tone: BadgeTone::Affirmative,
            }
        );
    }

    #[test]
    fn given_large_ticket_count_when_rows_resolved_then_cell_uses_separators()
    {
        let columns = event_columns().expect("event columns are unique");
        let records = vec![sample_event(12_000)];

        let rows = resolve_rows(&columns, &records);

        assert_eq!(rows[0][3], CellContent::Text(String::from("12,000")));
    }

    #[test]
    fn given_each_status_when_mapped_then_badge_tone_is_color_coded() {
        assert_eq!(EventStatus::Active.tone(), BadgeTone::Affirmative);
        assert_eq!(EventStatus::Cancelled.tone(), BadgeTone::Negative);
    }
}
