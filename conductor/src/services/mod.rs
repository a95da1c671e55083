pub(crate) mod router;
pub(crate) mod sample_data;

pub(crate) use router::Router;
pub(crate) use sample_data::{DataError, DataSource};

use crate::services::router::LogRouter;
use crate::services::sample_data::EmbeddedDataSource;

/// App-owned registry of long-lived collaborator services.
pub(crate) struct ServiceRegistry {
    router: Box<dyn Router>,
    data: Box<dyn DataSource>,
}

impl ServiceRegistry {
    pub(crate) fn new() -> Self {
        Self {
            router: Box::new(LogRouter),
            data: Box::new(EmbeddedDataSource),
        }
    }

    pub(crate) fn router(&self) -> &dyn Router {
        self.router.as_ref()
    }

    pub(crate) fn data(&self) -> &dyn DataSource {
        self.data.as_ref()
    }
}
