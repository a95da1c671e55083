mod event;
mod feature;
mod model;
mod state;

pub(crate) use event::NavigationEvent;
pub(crate) use feature::{NavigationCtx, NavigationFeature};
