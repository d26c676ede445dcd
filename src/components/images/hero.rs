//! Hero image slots shown at the top of the page.

use dioxus::prelude::*;
use portfolio_core::{encode_file_path, TileImage};

use crate::components::images::GalleryImage;
use crate::context::use_catalog;

/// Hero image slots (`heroImage1`, `heroImage2`, ...)
///
/// One slot per hero identifier in the catalog; none when the catalog has
/// no hero images.
#[component]
pub fn HeroImages() -> Element {
    let catalog = use_catalog();
    let heroes = catalog.read().hero_images().to_vec();

    rsx! {
        div { class: "hero-images",
            for (index, identifier) in heroes.into_iter().enumerate() {
                div {
                    key: "{identifier}",
                    class: "hero-image-frame",
                    GalleryImage {
                        id: Some(format!("heroImage{}", index + 1)),
                        class: Some("hero-image".to_string()),
                        image: TileImage {
                            url: encode_file_path(&identifier),
                            alt: format!("Portrait {}", index + 1),
                            identifier,
                            active: true,
                        },
                    }
                }
            }
        }
    }
}
