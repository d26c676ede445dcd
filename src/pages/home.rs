//! Home page - the whole portfolio on one scrolling page.
//!
//! Hero, paintings grid, pottery grid and the about timeline, with the
//! shared lightbox on top.

use dioxus::prelude::*;
use portfolio_core::{render_catalog, GalleryKind, Tile};

use crate::components::{GalleryGrid, HeroImages, Lightbox, NavHeader, NavSection, Timeline};
use crate::context::{site_title, use_catalog, use_reveal};
use crate::hooks::use_reveal_observer;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let title = site_title();
    let catalog = use_catalog();
    let reveal = use_reveal();

    // Tiles are rendered once; the catalog never changes after load
    let (paintings, pottery) = use_hook(|| {
        let mut paintings: Vec<Tile> = Vec::new();
        let mut pottery: Vec<Tile> = Vec::new();
        let summary = render_catalog(&catalog.read(), Some(&mut paintings), Some(&mut pottery));
        tracing::info!(
            paintings = summary.paintings,
            pottery = summary.pottery,
            "Rendered catalog"
        );
        (paintings, pottery)
    });
    let timeline = catalog.read().timeline().to_vec();

    use_reveal_observer(reveal);

    rsx! {
        NavHeader { title: title.clone() }

        main { class: "portfolio",
            section { id: NavSection::Home.id(), class: "hero",
                div { class: "hero-content",
                    h1 { class: "hero-title", "{title}" }
                    p { class: "hero-subtitle", "Paintings & Pottery" }
                }
                HeroImages {}
            }

            section { id: NavSection::Paintings.id(), class: "gallery-section",
                h2 { class: "section-title", "{GalleryKind::Paintings.display_name()}" }
                GalleryGrid {
                    kind: GalleryKind::Paintings,
                    tiles: paintings,
                }
            }

            section { id: NavSection::Pottery.id(), class: "gallery-section",
                h2 { class: "section-title", "{GalleryKind::Pottery.display_name()}" }
                GalleryGrid {
                    kind: GalleryKind::Pottery,
                    tiles: pottery,
                }
            }

            section { id: NavSection::About.id(), class: "about-section",
                h2 { class: "section-title", "{NavSection::About.display_name()}" }
                Timeline { entries: timeline }
            }
        }

        footer { class: "footer",
            p { "© {title}" }
        }

        Lightbox {}
    }
}
