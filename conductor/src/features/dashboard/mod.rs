mod event;
mod feature;
mod model;
mod state;

pub(crate) use event::DashboardEvent;
pub(crate) use feature::DashboardFeature;
pub(crate) use model::{
    ACTION_LABEL, DashboardData, EMPTY_MESSAGE, EventRecord, EventStatus,
    Metric, PAGE_TITLE,
};
