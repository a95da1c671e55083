use iced::widget::{button, container, row, svg, text};
use iced::{Element, Length, alignment};

use crate::config::{Identity, Utility, UtilityKind};
use crate::icons;
use crate::theme::ThemeProps;
use crate::ui::components::icon_button::{
    self, IconButtonEvent, IconButtonProps,
};

pub(crate) const TOP_BAR_HEIGHT: f32 = 48.0;
const IDENTITY_FONT_SIZE: f32 = 16.0;
const LOGO_SIZE: f32 = 22.0;
const TRIGGER_SIZE: f32 = 36.0;
const TRIGGER_ICON_SIZE: f32 = 18.0;
const BAR_PADDING_X: f32 = 12.0;
const BAR_SPACING: f32 = 12.0;
const UTILITY_SPACING: f32 = 4.0;

/// UI events emitted by the top bar.
#[derive(Debug, Clone)]
pub(crate) enum TopBarEvent {
    IdentityActivated { target: String },
    ToggleNavigation,
    UtilityActivated { id: String },
    UtilityMenuToggled { id: String },
}

/// Props for rendering the top bar.
pub(crate) struct TopBarProps<'a> {
    pub(crate) identity: &'a Identity,
    pub(crate) utilities: &'a [Utility],
    /// Whether the navigation panel is expanded; mirrored by the
    /// trigger's pressed state.
    pub(crate) nav_expanded: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render identity, the navigation trigger, and the utility controls.
pub(crate) fn view<'a>(props: TopBarProps<'a>) -> Element<'a, TopBarEvent> {
    let palette = props.theme.theme.iced_palette();
    let background = palette.background;
    let border_color = palette.border;

    let trigger = icon_button::view(IconButtonProps {
        icon: icons::NAV_MENU,
        theme: props.theme,
        size: TRIGGER_SIZE,
        icon_size: TRIGGER_ICON_SIZE,
        active: props.nav_expanded,
    })
    .map(|IconButtonEvent::Pressed| TopBarEvent::ToggleNavigation);

    let identity = identity_button(props.identity, props.theme);

    let mut utilities = row![].spacing(UTILITY_SPACING);
    for utility in props.utilities {
        utilities = utilities.push(utility_button(utility, props.theme));
    }

    let bar = row![
        trigger,
        identity,
        container(iced::widget::Space::new()).width(Length::Fill),
        utilities,
    ]
    .spacing(BAR_SPACING)
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .padding([0.0, BAR_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            border: iced::Border {
                width: 1.0,
                color: border_color,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn identity_button<'a>(
    identity: &'a Identity,
    theme: ThemeProps<'a>,
) -> Element<'a, TopBarEvent> {
    let palette = theme.theme.iced_palette();
    let accent = palette.accent;
    let title_color = palette.bright_foreground;
    let target = identity.target.clone();

    let logo = svg::Svg::new(svg::Handle::from_memory(icons::LOGO_SMALL))
        .width(Length::Fixed(LOGO_SIZE))
        .height(Length::Fixed(LOGO_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(accent),
        });

    let title = text(identity.title.as_str())
        .size(IDENTITY_FONT_SIZE)
        .style(move |_| iced::widget::text::Style {
            color: Some(title_color),
        });

    button(
        row![logo, title]
            .spacing(BAR_SPACING / 2.0)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(TopBarEvent::IdentityActivated { target })
    .padding(0)
    .style(|_, _| iced::widget::button::Style::default())
    .into()
}

fn utility_button<'a>(
    utility: &'a Utility,
    theme: ThemeProps<'a>,
) -> Element<'a, TopBarEvent> {
    let id = utility.id.clone();
    let event = match utility.kind {
        UtilityKind::Button => TopBarEvent::UtilityActivated { id },
        UtilityKind::Menu { .. } => TopBarEvent::UtilityMenuToggled { id },
    };

    icon_button::view(IconButtonProps {
        icon: utility.icon,
        theme,
        size: TRIGGER_SIZE,
        icon_size: TRIGGER_ICON_SIZE,
        active: false,
    })
    .map(move |IconButtonEvent::Pressed| event.clone())
}
