//! Gallery grids
//!
//! Paintings and pottery grids built from rendered catalog tiles.

mod gallery_grid;
mod gallery_tile;

pub use gallery_grid::GalleryGrid;
pub use gallery_tile::GalleryTile;
