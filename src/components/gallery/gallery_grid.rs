//! Gallery Grid Component
//!
//! Displays one gallery section (paintings or pottery) as a grid of tiles.

use dioxus::prelude::*;
use portfolio_core::{GalleryKind, Tile};

use crate::components::gallery::GalleryTile;

/// Grid container for one gallery
///
/// The container carries the gallery's stable id (`paintingsGrid` or
/// `potteryGrid`).
///
/// # Examples
///
/// ```rust
/// rsx! {
///     GalleryGrid {
///         kind: GalleryKind::Pottery,
///         tiles: pottery_tiles,
///     }
/// }
/// ```
#[component]
pub fn GalleryGrid(
    /// Which gallery this grid shows
    kind: GalleryKind,
    /// Tiles in grid order
    tiles: Vec<Tile>,
) -> Element {
    rsx! {
        div {
            id: kind.container_id(),
            class: "gallery-grid",
            for tile in tiles {
                GalleryTile {
                    key: "{kind.data_type()}-{tile.position}",
                    tile: tile.clone(),
                }
            }
        }
    }
}
