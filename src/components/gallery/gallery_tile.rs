//! Gallery Tile Component
//!
//! A clickable grid cell that opens the lightbox on its gallery.

use dioxus::prelude::*;
use portfolio_core::{GalleryKind, RevealKind, Tile};

use crate::components::images::GalleryImage;
use crate::context::{use_catalog, use_lightbox, use_reveal};

/// Clickable gallery tile
///
/// Paintings show a single image. Pottery pieces stack all their views
/// (only the first is visible), and pieces with several views get a
/// "N views" badge. Every pottery tile carries the piece name.
///
/// Clicking opens the lightbox on the gallery's flat sequence at the
/// tile's start index.
#[component]
pub fn GalleryTile(
    /// Rendered catalog entry
    tile: Tile,
) -> Element {
    let catalog = use_catalog();
    let mut lightbox = use_lightbox();
    let reveal = use_reveal();

    let kind = tile.kind;
    let start_index = tile.start_index;
    let open = move |_| {
        let sequence = catalog.read().sequence(kind);
        if let Err(e) = lightbox.write().open(start_index, sequence) {
            tracing::error!(gallery = kind.data_type(), start_index, "Failed to open lightbox: {}", e);
        }
    };

    let reveal_index = catalog.read().reveal_index(kind, tile.position);
    let style = reveal.read().style(RevealKind::GalleryItem, reveal_index);
    let reveal_key = RevealKind::GalleryItem.key(reveal_index);

    rsx! {
        div {
            class: "gallery-item",
            "data-type": kind.data_type(),
            "data-index": "{tile.position}",
            "data-reveal": "{reveal_key}",
            style: "{style}",
            onclick: open,

            {match kind {
                GalleryKind::Paintings => rsx! {
                    for image in tile.images.iter().cloned() {
                        GalleryImage { key: "{image.identifier}", image: image }
                    }
                },
                GalleryKind::Pottery => rsx! {
                    div { class: "image-container",
                        for image in tile.images.iter().cloned() {
                            GalleryImage { key: "{image.identifier}", image: image }
                        }
                    }
                },
            }}

            if let Some(badge) = &tile.badge {
                div { class: "multi-image-indicator", "{badge}" }
            }

            if let Some(label) = &tile.label {
                div { class: "piece-label", "{label}" }
            }
        }
    }
}
