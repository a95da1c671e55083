use iced::Task;

use super::event::DashboardEvent;
use super::model::{
    CREATE_EVENT_TARGET, DashboardData, EventRecord, Metric, event_columns,
};
use super::state::DashboardState;
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::navigation::NavigationEvent;
use crate::ui::widgets::record_table::{ColumnError, Columns};

/// Dashboard feature root. Holds the supplied data read-only; the
/// render path never fetches anything.
pub(crate) struct DashboardFeature {
    state: DashboardState,
}

impl DashboardFeature {
    /// Construct the feature from caller-supplied data. Fails if the
    /// column configuration is malformed.
    pub(crate) fn new(data: DashboardData) -> Result<Self, ColumnError> {
        let columns = event_columns()?;
        Ok(Self {
            state: DashboardState::new(data, columns),
        })
    }

    pub(crate) fn metrics(&self) -> &[Metric] {
        self.state.metrics()
    }

    pub(crate) fn records(&self) -> &[EventRecord] {
        self.state.records()
    }

    pub(crate) fn columns(&self) -> &Columns<EventRecord> {
        self.state.columns()
    }
}

impl Feature for DashboardFeature {
    type Event = DashboardEvent;
    type Ctx<'a>
        = ()
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: Self::Event,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            DashboardEvent::CreateEventRequested => {
                Task::done(AppEvent::Navigation(NavigationEvent::Navigate {
                    target: String::from(CREATE_EVENT_TARGET),
                }))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DashboardFeature;
    use crate::features::dashboard::DashboardData;

    #[test]
    fn given_empty_data_when_feature_built_then_no_records_and_no_metrics() {
        let feature = DashboardFeature::new(DashboardData::default())
            .expect("column configuration is valid");

        assert!(feature.metrics().is_empty());
        assert!(feature.records().is_empty());
        assert_eq!(feature.columns().len(), 5);
    }
}
