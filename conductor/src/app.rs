#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Size, Subscription, Task, Theme, window};

use crate::config::ShellConfig;
use crate::features::Features;
use crate::features::dashboard::{DashboardData, DashboardEvent};
use crate::features::navigation::NavigationEvent;
use crate::services::ServiceRegistry;
use crate::state::State;
use crate::theme::ThemeManager;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    IcedReady,
    Navigation(NavigationEvent),
    Dashboard(DashboardEvent),
    Window(window::Event),
}

pub(crate) struct App {
    theme_manager: ThemeManager,
    config: ShellConfig,
    services: ServiceRegistry,
    state: State,
    features: Features,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let services = ServiceRegistry::new();
        let config = ShellConfig::load_defaults()
            .expect("embedded shell configuration is invalid");

        let data = match services.data().load() {
            Ok(data) => data,
            Err(err) => {
                log::warn!("dashboard data load failed: {err}");
                DashboardData::default()
            },
        };

        let theme_manager = ThemeManager::new();
        let features = Features::new(config.navigation.clone(), data)
            .expect("dashboard column configuration is invalid");

        let window_size = Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        };
        let state = State::new(window_size, window_size);

        let app = App {
            theme_manager,
            config,
            services,
            state,
            features,
        };

        (app, Task::done(()).map(|_: ()| Event::IcedReady))
    }

    pub(crate) fn title(&self) -> String {
        String::from("Conductor")
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn subscription(&self) -> Subscription<Event> {
        window::events().map(|(_id, event)| Event::Window(event))
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        view::view(self)
    }
}
