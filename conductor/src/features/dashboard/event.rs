/// Events emitted by the dashboard page.
#[derive(Debug, Clone)]
pub(crate) enum DashboardEvent {
    CreateEventRequested,
}
