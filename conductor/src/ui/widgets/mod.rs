pub(crate) mod breadcrumbs;
pub(crate) mod dashboard;
pub(crate) mod footer;
pub(crate) mod metric_summary;
pub(crate) mod navigation_panel;
pub(crate) mod record_table;
pub(crate) mod top_bar;
pub(crate) mod user_menu;
