use iced::{Task, window};

use super::{App, Event};
use crate::features::Feature;
use crate::features::navigation::NavigationCtx;

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    route(app, event)
}

fn route(app: &mut App, event: Event) -> Task<Event> {
    use Event::*;

    match event {
        IcedReady => {
            log::info!("dashboard shell ready");
            Task::none()
        },
        Navigation(event) => {
            let ctx = NavigationCtx {
                router: app.services.router(),
            };
            app.features.navigation_mut().reduce(event, &ctx)
        },
        Dashboard(event) => app.features.dashboard_mut().reduce(event, &()),
        Window(window::Event::Resized(size)) => {
            app.state.window_size = size;
            app.state.set_screen_size(size);
            Task::none()
        },
        Window(_) => Task::none(),
    }
}
