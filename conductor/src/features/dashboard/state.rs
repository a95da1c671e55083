use super::model::{DashboardData, EventRecord, Metric};
use crate::ui::widgets::record_table::Columns;

/// Dashboard content state: the data handed down by the caller and the
/// validated column set. Immutable between data refreshes.
pub(crate) struct DashboardState {
    data: DashboardData,
    columns: Columns<EventRecord>,
}

impl DashboardState {
    pub(crate) fn new(
        data: DashboardData,
        columns: Columns<EventRecord>,
    ) -> Self {
        Self { data, columns }
    }

    pub(crate) fn metrics(&self) -> &[Metric] {
        &self.data.metrics
    }

    pub(crate) fn records(&self) -> &[EventRecord] {
        &self.data.events
    }

    pub(crate) fn columns(&self) -> &Columns<EventRecord> {
        &self.columns
    }
}
