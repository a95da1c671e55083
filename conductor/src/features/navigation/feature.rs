use iced::Task;

use super::event::NavigationEvent;
use super::state::NavigationState;
use crate::app::Event as AppEvent;
use crate::config::NavigationTree;
use crate::features::Feature;
use crate::services::Router;

/// Context handed to the navigation reducer on every dispatch.
pub(crate) struct NavigationCtx<'a> {
    pub(crate) router: &'a dyn Router,
}

/// Navigation feature root that owns the panel state and the immutable
/// navigation tree.
pub(crate) struct NavigationFeature {
    state: NavigationState,
    tree: NavigationTree,
}

impl NavigationFeature {
    /// Construct the feature with a collapsed panel and the configured
    /// tree.
    pub(crate) fn new(tree: NavigationTree) -> Self {
        Self {
            state: NavigationState::new(),
            tree,
        }
    }

    /// Return whether the navigation panel is currently expanded.
    pub(crate) fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Return the side-panel container width for the current state.
    pub(crate) fn panel_width(&self) -> f32 {
        self.state.panel_width()
    }

    /// Return whether the user utility menu overlay is open.
    pub(crate) fn is_user_menu_open(&self) -> bool {
        self.state.is_user_menu_open()
    }

    /// Return the configured navigation tree, in configuration order.
    pub(crate) fn tree(&self) -> &NavigationTree {
        &self.tree
    }

    /// Return the most recent navigation target handed to the router.
    pub(crate) fn last_intent(&self) -> Option<&str> {
        self.state.last_intent()
    }
}

impl Feature for NavigationFeature {
    type Event = NavigationEvent;
    type Ctx<'a>
        = NavigationCtx<'a>
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: Self::Event,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            NavigationEvent::ToggleNav => {
                self.state.toggle();
                log::debug!(
                    "navigation panel {}",
                    if self.state.is_expanded() {
                        "expanded"
                    } else {
                        "collapsed"
                    }
                );
                Task::none()
            },
            NavigationEvent::ToggleUserMenu => {
                self.state.toggle_user_menu();
                Task::none()
            },
            NavigationEvent::DismissUserMenu => {
                self.state.dismiss_user_menu();
                Task::none()
            },
            NavigationEvent::Navigate { target } => {
                self.state.dismiss_user_menu();
                ctx.router.dispatch(&target);
                self.state.record_intent(target);
                Task::none()
            },
            NavigationEvent::UtilityActivated { id } => {
                log::info!("utility activated: {id}");
                Task::none()
            },
            NavigationEvent::MenuItemActivated { id } => {
                self.state.dismiss_user_menu();
                log::info!("utility menu item activated: {id}");
                Task::none()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{NavigationCtx, NavigationFeature};
    use crate::config::ShellConfig;
    use crate::features::Feature;
    use crate::features::navigation::NavigationEvent;
    use crate::services::Router;

    struct RecordingRouter {
        dispatched: RefCell<Vec<String>>,
    }

    impl RecordingRouter {
        fn new() -> Self {
            Self {
                dispatched: RefCell::new(Vec::new()),
            }
        }
    }

    impl Router for RecordingRouter {
        fn dispatch(&self, target: &str) {
            self.dispatched.borrow_mut().push(target.to_string());
        }
    }

    fn feature() -> NavigationFeature {
        let config =
            ShellConfig::load_defaults().expect("default config is valid");
        NavigationFeature::new(config.navigation)
    }

    #[test]
    fn given_collapsed_panel_when_toggle_reduced_then_panel_expands() {
        let mut feature = feature();
        let router = RecordingRouter::new();
        let ctx = NavigationCtx { router: &router };

        let _task = feature.reduce(NavigationEvent::ToggleNav, &ctx);

        assert!(feature.is_expanded());
        assert_eq!(feature.panel_width(), 280.0);
    }

    #[test]
    fn given_toggle_reduced_twice_then_panel_returns_to_collapsed() {
        let mut feature = feature();
        let router = RecordingRouter::new();
        let ctx = NavigationCtx { router: &router };

        let _task = feature.reduce(NavigationEvent::ToggleNav, &ctx);
        let _task = feature.reduce(NavigationEvent::ToggleNav, &ctx);

        assert!(!feature.is_expanded());
        assert_eq!(feature.panel_width(), 0.0);
    }

    #[test]
    fn given_navigate_event_when_reduced_then_target_reaches_the_router() {
        let mut feature = feature();
        let router = RecordingRouter::new();
        let ctx = NavigationCtx { router: &router };

        let _task = feature.reduce(
            NavigationEvent::Navigate {
                target: String::from("#/events"),
            },
            &ctx,
        );

        assert_eq!(
            *router.dispatched.borrow(),
            vec![String::from("#/events")]
        );
        assert_eq!(feature.last_intent(), Some("#/events"));
    }

    #[test]
    fn given_open_user_menu_when_item_activated_then_menu_dismisses() {
        let mut feature = feature();
        let router = RecordingRouter::new();
        let ctx = NavigationCtx { router: &router };

        let _task = feature.reduce(NavigationEvent::ToggleUserMenu, &ctx);
        assert!(feature.is_user_menu_open());

        let _task = feature.reduce(
            NavigationEvent::MenuItemActivated {
                id: String::from("signout"),
            },
            &ctx,
        );

        assert!(!feature.is_user_menu_open());
    }

    #[test]
    fn given_configured_tree_when_feature_built_then_order_is_preserved() {
        let feature = feature();

        let labels: Vec<&str> = feature
            .tree()
            .sections
            .iter()
            .map(|section| section.label.as_str())
            .collect();

        assert_eq!(labels, vec!["Dashboard", "Events", "Tickets", "Settings"]);
    }
}
