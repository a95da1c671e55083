use iced::Task;

use crate::app::Event as AppEvent;
use crate::config::NavigationTree;
use crate::ui::widgets::record_table::ColumnError;

pub(crate) mod dashboard;
pub(crate) mod navigation;

/// Shared feature contract for stateful domain modules.
pub(crate) trait Feature {
    type Event;
    type Ctx<'a>
    where
        Self: 'a;

    /// Reduce a typed feature event into state mutations and routed app
    /// tasks.
    fn reduce<'a>(
        &mut self,
        event: Self::Event,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent>;
}

/// Root container for the shell's features.
pub(crate) struct Features {
    navigation: navigation::NavigationFeature,
    dashboard: dashboard::DashboardFeature,
}

impl Features {
    /// Create the features container from validated configuration and
    /// caller-supplied dashboard data.
    pub(crate) fn new(
        tree: NavigationTree,
        data: dashboard::DashboardData,
    ) -> Result<Self, ColumnError> {
        Ok(Self {
            navigation: navigation::NavigationFeature::new(tree),
            dashboard: dashboard::DashboardFeature::new(data)?,
        })
    }

    /// Return read-only access to navigation feature state and queries.
    pub(crate) fn navigation(&self) -> &navigation::NavigationFeature {
        &self.navigation
    }

    /// Return mutable access for routing navigation events.
    pub(crate) fn navigation_mut(
        &mut self,
    ) -> &mut navigation::NavigationFeature {
        &mut self.navigation
    }

    /// Return read-only access to dashboard feature state and queries.
    pub(crate) fn dashboard(&self) -> &dashboard::DashboardFeature {
        &self.dashboard
    }

    /// Return mutable access for routing dashboard events.
    pub(crate) fn dashboard_mut(
        &mut self,
    ) -> &mut dashboard::DashboardFeature {
        &mut self.dashboard
    }
}
