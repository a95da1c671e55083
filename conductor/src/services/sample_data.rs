use thiserror::Error;

use crate::features::dashboard::DashboardData;

const SAMPLE_DATA: &str = include_str!("../../assets/data/dashboard.json");

/// Errors emitted while loading dashboard data.
#[derive(Debug, Error)]
pub(crate) enum DataError {
    #[error("invalid dashboard data JSON")]
    Json(#[from] serde_json::Error),
}

/// Seam for the data source collaborator. Metrics and records arrive
/// already validated and already sorted; the shell renders them as-is.
pub(crate) trait DataSource {
    fn load(&self) -> Result<DashboardData, DataError>;
}

/// Static stand-in until a real data source exists: decodes the sample
/// document compiled into the binary.
pub(crate) struct EmbeddedDataSource;

impl DataSource for EmbeddedDataSource {
    fn load(&self) -> Result<DashboardData, DataError> {
        let data = serde_json::from_str(SAMPLE_DATA)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSource, EmbeddedDataSource};
    use crate::features::dashboard::EventStatus;

    #[test]
    fn given_embedded_document_when_loaded_then_sample_shape_matches() {
        let data = EmbeddedDataSource
            .load()
            .expect("embedded sample data must decode");

        assert_eq!(data.metrics.len(), 3);
        assert_eq!(data.metrics[0].title, "Total Events Conducted");
        assert_eq!(data.metrics[0].value, "24");
        assert_eq!(data.metrics[0].trend, "+12%");

        assert_eq!(data.events.len(), 3);
        assert_eq!(data.events[0].id, "1");
        assert_eq!(data.events[0].name, "Tech Conference 2024");
        assert_eq!(data.events[0].tickets_sold, 450);
        assert_eq!(data.events[0].status, EventStatus::Active);
    }

    #[test]
    fn given_embedded_document_when_loaded_then_record_order_is_preserved() {
        let data = EmbeddedDataSource
            .load()
            .expect("embedded sample data must decode");

        let ids: Vec<&str> =
            data.events.iter().map(|event| event.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
