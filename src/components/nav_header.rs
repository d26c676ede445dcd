//! Navigation Header Component
//!
//! Desktop: horizontal bar with the site title and section links
//! Mobile: links collapse behind a hamburger toggle

use dioxus::prelude::*;
use portfolio_core::{anchor_target, NavMenu, NavShadow};

use crate::context::use_nav_menu;
use crate::hooks::{scroll_into_view, use_scroll_offset};

/// Page section reachable from the navigation bar
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavSection {
    Home,
    Paintings,
    Pottery,
    About,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [
        NavSection::Home,
        NavSection::Paintings,
        NavSection::Pottery,
        NavSection::About,
    ];

    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Paintings => "Paintings",
            NavSection::Pottery => "Pottery",
            NavSection::About => "About",
        }
    }

    /// Element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::Paintings => "paintings",
            NavSection::Pottery => "pottery",
            NavSection::About => "about",
        }
    }

    /// In-page link to the section
    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

/// Navigation Header component
///
/// - Left: site title, itself a link back to the top
/// - Right: section links (hamburger menu on mobile)
///
/// The bar's shadow deepens once the page has scrolled past the
/// threshold.
#[component]
pub fn NavHeader(
    /// Site title shown on the left
    title: String,
) -> Element {
    let mut menu = use_nav_menu();
    let scroll_y = use_scroll_offset();

    let shadow = NavShadow::for_offset(scroll_y());

    rsx! {
        nav {
            class: "navbar",
            style: "box-shadow: {shadow.box_shadow()};",

            div { class: "nav-container",
                a {
                    class: "nav-logo",
                    href: NavSection::Home.href(),
                    onclick: move |evt| follow_link(menu, evt, &NavSection::Home.href()),
                    "{title}"
                }

                ul { class: menu.read().class("nav-menu"),
                    for section in NavSection::ALL {
                        li {
                            key: "{section.id()}",
                            class: "nav-item",
                            a {
                                class: "nav-link",
                                href: section.href(),
                                onclick: move |evt| follow_link(menu, evt, &section.href()),
                                "{section.display_name()}"
                            }
                        }
                    }
                }

                div {
                    class: menu.read().class("hamburger"),
                    "aria-label": "Toggle navigation",
                    onclick: move |_| menu.write().toggle(),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}

/// Collapse the menu and, for in-page links, scroll instead of jumping
fn follow_link(mut menu: Signal<NavMenu>, evt: MouseEvent, href: &str) {
    menu.write().collapse();
    if let Some(id) = anchor_target(href) {
        evt.prevent_default();
        scroll_into_view(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_links_are_local_anchors() {
        for section in NavSection::ALL {
            assert_eq!(anchor_target(&section.href()), Some(section.id()));
        }
    }
}
