use std::collections::HashSet;

use thiserror::Error;

use crate::icons;

/// Errors detected while validating shell configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("duplicate navigation section label '{0}'")]
    DuplicateSectionLabel(String),
    #[error("duplicate link label '{label}' in section '{section}'")]
    DuplicateLinkLabel { section: String, label: String },
    #[error("duplicate utility id '{0}'")]
    DuplicateUtilityId(String),
    #[error("duplicate menu item id '{item}' in utility '{utility}'")]
    DuplicateMenuItemId { utility: String, item: String },
    #[error("breadcrumb with empty label")]
    EmptyCrumbLabel,
}

/// Brand identity shown in the top bar and the navigation panel header.
#[derive(Debug, Clone)]
pub(crate) struct Identity {
    pub(crate) title: String,
    pub(crate) target: String,
}

/// One link in the navigation tree. `target` is an opaque address
/// resolved by an external router.
#[derive(Debug, Clone)]
pub(crate) struct NavLink {
    pub(crate) label: String,
    pub(crate) target: String,
}

/// A labelled group of links in the navigation panel.
#[derive(Debug, Clone)]
pub(crate) struct NavSection {
    pub(crate) label: String,
    pub(crate) items: Vec<NavLink>,
}

/// Ordered sections shown in the side panel. Ordering is semantically
/// meaningful and preserved exactly through rendering.
#[derive(Debug, Clone, Default)]
pub(crate) struct NavigationTree {
    pub(crate) sections: Vec<NavSection>,
}

/// Entries of a utility dropdown menu.
#[derive(Debug, Clone)]
pub(crate) struct UtilityMenuItem {
    pub(crate) id: String,
    pub(crate) label: String,
}

#[derive(Debug, Clone)]
pub(crate) enum UtilityKind {
    Button,
    Menu { items: Vec<UtilityMenuItem> },
}

/// One utility control on the right side of the top bar.
#[derive(Debug, Clone)]
pub(crate) struct Utility {
    pub(crate) id: String,
    pub(crate) icon: &'static [u8],
    pub(crate) kind: UtilityKind,
}

/// One entry of the breadcrumb trail.
#[derive(Debug, Clone)]
pub(crate) struct Crumb {
    pub(crate) label: String,
    pub(crate) target: String,
}

/// Static shell configuration: everything the chrome renders besides the
/// content pane. Built once at startup and validated before use.
#[derive(Debug, Clone)]
pub(crate) struct ShellConfig {
    pub(crate) identity: Identity,
    pub(crate) utilities: Vec<Utility>,
    pub(crate) navigation: NavigationTree,
    pub(crate) breadcrumbs: Vec<Crumb>,
    pub(crate) footer_line: String,
}

impl ShellConfig {
    /// Build and validate the embedded default configuration.
    pub(crate) fn load_defaults() -> Result<Self, ConfigError> {
        let config = Self::defaults();
        config.validate()?;
        Ok(config)
    }

    /// Reject malformed configuration before anything renders. A
    /// collision here is a programming error, not a runtime condition.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let mut section_labels = HashSet::new();
        for section in &self.navigation.sections {
            if !section_labels.insert(section.label.as_str()) {
                return Err(ConfigError::DuplicateSectionLabel(
                    section.label.clone(),
                ));
            }

            let mut link_labels = HashSet::new();
            for link in &section.items {
                if !link_labels.insert(link.label.as_str()) {
                    return Err(ConfigError::DuplicateLinkLabel {
                        section: section.label.clone(),
                        label: link.label.clone(),
                    });
                }
            }
        }

        let mut utility_ids = HashSet::new();
        for utility in &self.utilities {
            if !utility_ids.insert(utility.id.as_str()) {
                return Err(ConfigError::DuplicateUtilityId(
                    utility.id.clone(),
                ));
            }

            if let UtilityKind::Menu { items } = &utility.kind {
                let mut item_ids = HashSet::new();
                for item in items {
                    if !item_ids.insert(item.id.as_str()) {
                        return Err(ConfigError::DuplicateMenuItemId {
                            utility: utility.id.clone(),
                            item: item.id.clone(),
                        });
                    }
                }
            }
        }

        if self.breadcrumbs.iter().any(|crumb| crumb.label.is_empty()) {
            return Err(ConfigError::EmptyCrumbLabel);
        }

        Ok(())
    }

    fn defaults() -> Self {
        let navigation = NavigationTree {
            sections: vec![
                section(
                    "Dashboard",
                    &[
                        ("Overview", "#/dashboard"),
                        ("Analytics", "#/analytics"),
                    ],
                ),
                section(
                    "Events",
                    &[
                        ("All Events", "#/events"),
                        ("Create Event", "#/events/create"),
                        ("Event Categories", "#/events/categories"),
                    ],
                ),
                section(
                    "Tickets",
                    &[
                        ("Ticket Sales", "#/tickets"),
                        ("Refunds", "#/tickets/refunds"),
                    ],
                ),
                section(
                    "Settings",
                    &[
                        ("Account", "#/settings/account"),
                        ("Notifications", "#/settings/notifications"),
                    ],
                ),
            ],
        };

        let utilities = vec![
            Utility {
                id: String::from("settings"),
                icon: icons::UTILITY_SETTINGS,
                kind: UtilityKind::Button,
            },
            Utility {
                id: String::from("user"),
                icon: icons::UTILITY_USER,
                kind: UtilityKind::Menu {
                    items: vec![
                        menu_item("profile", "Profile"),
                        menu_item("preferences", "Preferences"),
                        menu_item("signout", "Sign out"),
                    ],
                },
            },
        ];

        let breadcrumbs = vec![
            Crumb {
                label: String::from("Dashboard"),
                target: String::from("#/dashboard"),
            },
            Crumb {
                label: String::from("Events"),
                target: String::from("#/events"),
            },
        ];

        Self {
            identity: Identity {
                title: String::from("Conductor"),
                target: String::from("#/"),
            },
            utilities,
            navigation,
            breadcrumbs,
            footer_line: String::from(
                "© 2024 Conductor. All rights reserved.",
            ),
        }
    }
}

fn section(label: &str, links: &[(&str, &str)]) -> NavSection {
    NavSection {
        label: String::from(label),
        items: links
            .iter()
            .map(|(label, target)| NavLink {
                label: String::from(*label),
                target: String::from(*target),
            })
            .collect(),
    }
}

fn menu_item(id: &str, label: &str) -> UtilityMenuItem {
    UtilityMenuItem {
        id: String::from(id),
        label: String::from(label),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, NavLink, ShellConfig, section};

    #[test]
    fn given_default_configuration_when_validated_then_it_passes() {
        let config = ShellConfig::load_defaults();

        assert!(config.is_ok());
    }

    #[test]
    fn given_duplicate_section_labels_when_validated_then_rejected() {
        let mut config = ShellConfig::defaults();
        config
            .navigation
            .sections
            .push(section("Events", &[("Archive", "#/events/archive")]));

        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateSectionLabel(String::from("Events")))
        );
    }

    #[test]
    fn given_duplicate_link_labels_in_one_section_when_validated_then_rejected()
    {
        let mut config = ShellConfig::defaults();
        config.navigation.sections[0].items.push(NavLink {
            label: String::from("Overview"),
            target: String::from("#/other"),
        });

        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateLinkLabel {
                section: String::from("Dashboard"),
                label: String::from("Overview"),
            })
        );
    }

    #[test]
    fn given_duplicate_utility_ids_when_validated_then_rejected() {
        let mut config = ShellConfig::defaults();
        let duplicate = config.utilities[0].clone();
        config.utilities.push(duplicate);

        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateUtilityId(String::from("settings")))
        );
    }

    #[test]
    fn given_empty_breadcrumb_label_when_validated_then_rejected() {
        let mut config = ShellConfig::defaults();
        config.breadcrumbs[0].label.clear();

        assert_eq!(config.validate(), Err(ConfigError::EmptyCrumbLabel));
    }

    #[test]
    fn given_default_navigation_tree_when_built_then_section_order_matches_information_architecture()
    {
        let config = ShellConfig::defaults();
        let labels: Vec<&str> = config
            .navigation
            .sections
            .iter()
            .map(|section| section.label.as_str())
            .collect();

        assert_eq!(labels, vec!["Dashboard", "Events", "Tickets", "Settings"]);
    }
}
