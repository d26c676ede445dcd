//! Catalog rendering into grid containers.
//!
//! The page hands in one sink per grid. A grid whose container is missing
//! is skipped with a warning; the other grid still renders.

use crate::catalog::{Catalog, GalleryKind, Tile};

/// A container that tiles are appended to.
pub trait GridSink {
    fn append(&mut self, tile: Tile);
}

impl GridSink for Vec<Tile> {
    fn append(&mut self, tile: Tile) {
        self.push(tile);
    }
}

/// What a render pass produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub paintings: usize,
    pub pottery: usize,
    /// Grids skipped because their container was missing
    pub skipped: usize,
}

/// Render one gallery into its container, if there is one.
///
/// Returns the number of tiles appended.
pub fn render_gallery<G>(catalog: &Catalog, kind: GalleryKind, container: Option<&mut G>) -> usize
where
    G: GridSink + ?Sized,
{
    let Some(container) = container else {
        tracing::warn!(
            container = kind.container_id(),
            "Grid container missing, skipping {}",
            kind.display_name()
        );
        return 0;
    };

    let tiles = catalog.tiles(kind);
    let count = tiles.len();
    for tile in tiles {
        container.append(tile);
    }

    tracing::debug!(gallery = kind.data_type(), tiles = count, "Rendered gallery");
    count
}

/// Render both galleries.
pub fn render_catalog<P, Q>(
    catalog: &Catalog,
    paintings: Option<&mut P>,
    pottery: Option<&mut Q>,
) -> RenderSummary
where
    P: GridSink + ?Sized,
    Q: GridSink + ?Sized,
{
    let skipped = usize::from(paintings.is_none()) + usize::from(pottery.is_none());
    RenderSummary {
        paintings: render_gallery(catalog, GalleryKind::Paintings, paintings),
        pottery: render_gallery(catalog, GalleryKind::Pottery, pottery),
        skipped,
    }
}
