use iced::widget::{Space, column, container, mouse_area, row};
use iced::{Element, Length, Theme, alignment};

use super::{App, Event};
use crate::config::UtilityKind;
use crate::features::dashboard::{
    ACTION_LABEL, DashboardEvent, EMPTY_MESSAGE, PAGE_TITLE,
};
use crate::features::navigation::NavigationEvent;
use crate::theme::ThemeProps;
use crate::ui::widgets::{
    breadcrumbs, dashboard, footer, navigation_panel, top_bar, user_menu,
};

const NAV_SEPARATOR_WIDTH: f32 = 1.0;
const CRUMBS_PADDING_X: f32 = 20.0;
const CRUMBS_PADDING_Y: f32 = 12.0;
const USER_MENU_MARGIN: f32 = 8.0;

pub(super) fn view(app: &App) -> Element<'_, Event, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props = ThemeProps::new(theme);
    let navigation = app.features.navigation();

    let header = top_bar::view(top_bar::TopBarProps {
        identity: &app.config.identity,
        utilities: &app.config.utilities,
        nav_expanded: navigation.is_expanded(),
        theme: theme_props,
    })
    .map(map_top_bar_event);

    let content_pane = view_content_pane(app, theme_props);

    // Toggling only changes which branch lays out the same content
    // pane; the pane itself is built identically in both.
    let content_row: Element<'_, Event, Theme, iced::Renderer> =
        if navigation.is_expanded() {
            view_nav_layout(app, theme_props, content_pane)
        } else {
            content_pane
        };

    let footer = footer::view(footer::FooterProps {
        line: &app.config.footer_line,
        theme: theme_props,
    });

    let base: Element<'_, Event, Theme, iced::Renderer> =
        column![header, content_row, footer]
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

    if navigation.is_user_menu_open() {
        view_user_menu_overlay(app, theme_props, base)
    } else {
        base
    }
}

/// Render the breadcrumb trail and the dashboard page. This subtree is
/// identical whether or not the navigation panel is expanded.
fn view_content_pane<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let crumbs = container(
        breadcrumbs::view(breadcrumbs::BreadcrumbsProps {
            crumbs: &app.config.breadcrumbs,
            theme: theme_props,
        })
        .map(|event| match event {
            breadcrumbs::BreadcrumbsEvent::CrumbActivated { target } => {
                Event::Navigation(NavigationEvent::Navigate { target })
            },
        }),
    )
    .padding([CRUMBS_PADDING_Y, CRUMBS_PADDING_X]);

    let dashboard_feature = app.features.dashboard();
    let page = dashboard::view(dashboard::DashboardProps {
        title: PAGE_TITLE,
        action_label: ACTION_LABEL,
        metrics: dashboard_feature.metrics(),
        columns: dashboard_feature.columns(),
        records: dashboard_feature.records(),
        empty_message: EMPTY_MESSAGE,
        theme: theme_props,
    })
    .map(|event| match event {
        dashboard::DashboardPageEvent::ActionPressed => {
            Event::Dashboard(DashboardEvent::CreateEventRequested)
        },
    });

    column![crumbs, page]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the navigation panel, its separator, and the content pane.
fn view_nav_layout<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
    content_pane: Element<'a, Event, Theme, iced::Renderer>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let navigation = app.features.navigation();

    let panel = navigation_panel::view(navigation_panel::NavigationPanelProps {
        header: &app.config.identity,
        sections: &navigation.tree().sections,
        width: navigation.panel_width(),
        theme: theme_props,
    })
    .map(|event| match event {
        navigation_panel::NavigationPanelEvent::HeaderActivated { target }
        | navigation_panel::NavigationPanelEvent::LinkActivated { target } => {
            Event::Navigation(NavigationEvent::Navigate { target })
        },
    });

    let palette = theme_props.theme.iced_palette();
    let separator_color = palette.border;
    let separator = container(Space::new())
        .width(Length::Fixed(NAV_SEPARATOR_WIDTH))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(separator_color.into()),
            ..Default::default()
        });

    row![panel, separator, content_pane]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Layer the user utility menu over the shell, with a dismiss area
/// covering everything behind it.
fn view_user_menu_overlay<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
    base: Element<'a, Event, Theme, iced::Renderer>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let Some(items) = app.config.utilities.iter().find_map(|utility| {
        match &utility.kind {
            UtilityKind::Menu { items } => Some(items.as_slice()),
            UtilityKind::Button => None,
        }
    }) else {
        return base;
    };

    let dismiss_layer = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Event::Navigation(NavigationEvent::DismissUserMenu));

    let area = crate::state::content_size(app.state.screen_size, 0.0);
    let menu = user_menu::view(user_menu::UserMenuProps {
        items,
        max_height: area.height,
        theme: theme_props,
    })
    .map(|event| match event {
        user_menu::UserMenuEvent::ItemActivated { id } => {
            Event::Navigation(NavigationEvent::MenuItemActivated { id })
        },
    });

    let menu_layer = container(menu)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding([
            top_bar::TOP_BAR_HEIGHT + USER_MENU_MARGIN,
            USER_MENU_MARGIN,
        ]);

    iced::widget::Stack::with_children(vec![
        base,
        dismiss_layer.into(),
        menu_layer.into(),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn map_top_bar_event(event: top_bar::TopBarEvent) -> Event {
    match event {
        top_bar::TopBarEvent::IdentityActivated { target } => {
            Event::Navigation(NavigationEvent::Navigate { target })
        },
        top_bar::TopBarEvent::ToggleNavigation => {
            Event::Navigation(NavigationEvent::ToggleNav)
        },
        top_bar::TopBarEvent::UtilityActivated { id } => {
            Event::Navigation(NavigationEvent::UtilityActivated { id })
        },
        top_bar::TopBarEvent::UtilityMenuToggled { id: _ } => {
            Event::Navigation(NavigationEvent::ToggleUserMenu)
        },
    }
}
