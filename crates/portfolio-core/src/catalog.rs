//! Catalog - the static description of everything the page shows.
//!
//! Paintings are a flat list of image identifiers. Pottery is grouped by
//! piece, each piece owning one or more views; for lightbox navigation the
//! pieces are flattened into one sequence, and a piece's tile opens the
//! viewer at the offset of its first view inside that sequence.
//!
//! Identifiers are kept exactly as the files on disk are named, including
//! the odd trailing space and misspellings.

use std::sync::Arc;

use serde::Serialize;

use crate::asset::encode_file_path;
use crate::error::{PortfolioError, PortfolioResult};

/// A flat, shareable navigation sequence of image identifiers.
pub type ImageSequence = Arc<[String]>;

/// Which grid a tile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryKind {
    Paintings,
    Pottery,
}

impl GalleryKind {
    /// Element id of the grid container for this gallery
    pub fn container_id(&self) -> &'static str {
        match self {
            GalleryKind::Paintings => "paintingsGrid",
            GalleryKind::Pottery => "potteryGrid",
        }
    }

    /// Value of the tile's `data-type` attribute
    pub fn data_type(&self) -> &'static str {
        match self {
            GalleryKind::Paintings => "painting",
            GalleryKind::Pottery => "pottery",
        }
    }

    /// Section heading shown above the grid
    pub fn display_name(&self) -> &'static str {
        match self {
            GalleryKind::Paintings => "Paintings",
            GalleryKind::Pottery => "Pottery",
        }
    }
}

impl std::str::FromStr for GalleryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "paintings" | "painting" => Ok(GalleryKind::Paintings),
            "pottery" => Ok(GalleryKind::Pottery),
            other => Err(format!("unknown gallery '{}'", other)),
        }
    }
}

/// A named pottery artifact with one or more views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PotteryPiece {
    name: String,
    images: Vec<String>,
}

impl PotteryPiece {
    /// Create a piece. A piece must have at least one image.
    pub fn new<I, S>(name: impl Into<String>, images: I) -> PortfolioResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let images: Vec<String> = images.into_iter().map(Into::into).collect();
        if images.is_empty() {
            return Err(PortfolioError::EmptyPiece(name));
        }
        Ok(Self { name, images })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Number of views of this piece (always ≥ 1)
    pub fn view_count(&self) -> usize {
        self.images.len()
    }
}

/// An entry of the "About" timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub detail: String,
}

impl TimelineEntry {
    pub fn new(
        period: impl Into<String>,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            period: period.into(),
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// One image inside a rendered tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileImage {
    pub identifier: String,
    pub url: String,
    pub alt: String,
    /// First view of a piece; the one shown in the grid
    pub active: bool,
}

/// A clickable grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub kind: GalleryKind,
    /// Position of the entry in its grid
    pub position: usize,
    /// Index into the gallery's flat sequence opened on click
    pub start_index: usize,
    pub images: Vec<TileImage>,
    /// Count badge, only for pieces with several views
    pub badge: Option<String>,
    /// Piece name label
    pub label: Option<String>,
}

/// The full static content of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    paintings: Vec<String>,
    pottery: Vec<PotteryPiece>,
    hero_images: Vec<String>,
    timeline: Vec<TimelineEntry>,
}

impl Catalog {
    pub fn new<I, S>(paintings: I, pottery: Vec<PotteryPiece>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paintings: paintings.into_iter().map(Into::into).collect(),
            pottery,
            hero_images: Vec::new(),
            timeline: Vec::new(),
        }
    }

    pub fn with_hero_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hero_images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeline(mut self, timeline: Vec<TimelineEntry>) -> Self {
        self.timeline = timeline;
        self
    }

    /// The catalog the page ships with.
    pub fn builtin() -> Self {
        let piece = |name: &str, images: &[&str]| PotteryPiece {
            name: name.to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        };

        Self::new(
            [
                "Scan of birthday candles.png",
                "Scan of bougainvillea.png",
                "Scan of field of poppies.png",
                "Scan of flowers card.png",
                "Scan of lavender.png",
                "Scan of olive leaves.png",
                "Scan of oranges.png",
                "Scan of outdoor camping card.png",
                "Scan of pomegranets.png",
                // trailing space is part of the file name
                "Scan of poppies .png",
                "Scan of rainbow olive leaves.png",
                "Scan of roses.png",
                "Scan of sunflowers.png",
                "Scan of sunset.png",
                "Scan of yellow flowers.png",
            ],
            vec![
                piece("All Pottery", &["All_pottery.jpeg"]),
                piece("Bowl - Green & White", &["Bowl_green_white_1.jpeg"]),
                piece("Bowl - Ocean", &["Bowl_ocean_1.jpeg", "Bowl_ocean_2.jpeg"]),
                piece("Bowl - Sand", &["Bowl_sand_1.jpeg", "Bowl_sand_2.jpeg"]),
                piece("Bowl - White & Green", &["Bowl_white_green_2.jpeg"]),
                // second file really is "ping"
                piece("Mug - Pink & Red", &["Mug_pink_red_1.jpeg", "Mug_ping_red_2.jpeg"]),
            ],
        )
        .with_hero_images(["Zineb_in_Lamps.jpeg", "Zineb_in_Marraketch.jpeg"])
        .with_timeline(vec![
            TimelineEntry::new(
                "Watercolour",
                "Paintings",
                "Botanical studies and hand-painted cards, scanned from the originals.",
            ),
            TimelineEntry::new(
                "Ceramics",
                "Pottery",
                "Wheel-thrown bowls and mugs, glazed in ocean, sand and garden colours.",
            ),
        ])
    }

    pub fn paintings(&self) -> &[String] {
        &self.paintings
    }

    pub fn pottery(&self) -> &[PotteryPiece] {
        &self.pottery
    }

    pub fn hero_images(&self) -> &[String] {
        &self.hero_images
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    /// Painting navigation sequence
    pub fn painting_sequence(&self) -> ImageSequence {
        self.paintings.iter().cloned().collect()
    }

    /// All pottery views in piece order
    pub fn pottery_sequence(&self) -> ImageSequence {
        self.pottery
            .iter()
            .flat_map(|piece| piece.images.iter().cloned())
            .collect()
    }

    /// Navigation sequence for a gallery
    pub fn sequence(&self, kind: GalleryKind) -> ImageSequence {
        match kind {
            GalleryKind::Paintings => self.painting_sequence(),
            GalleryKind::Pottery => self.pottery_sequence(),
        }
    }

    /// Offset of a piece's first view in the flattened pottery sequence.
    ///
    /// Returns `None` when `piece_index` is past the last piece.
    pub fn pottery_start_index(&self, piece_index: usize) -> Option<usize> {
        if piece_index >= self.pottery.len() {
            return None;
        }
        Some(
            self.pottery[..piece_index]
                .iter()
                .map(PotteryPiece::view_count)
                .sum(),
        )
    }

    /// Document-order index of a gallery tile, counted across both grids.
    ///
    /// Paintings come first, so pottery tile `p` follows every painting tile.
    pub fn reveal_index(&self, kind: GalleryKind, position: usize) -> usize {
        match kind {
            GalleryKind::Paintings => position,
            GalleryKind::Pottery => self.paintings.len() + position,
        }
    }

    /// Tiles for the paintings grid
    pub fn painting_tiles(&self) -> Vec<Tile> {
        self.paintings
            .iter()
            .enumerate()
            .map(|(index, identifier)| Tile {
                kind: GalleryKind::Paintings,
                position: index,
                start_index: index,
                images: vec![TileImage {
                    identifier: identifier.clone(),
                    url: encode_file_path(identifier),
                    alt: format!("Painting {}", index + 1),
                    active: true,
                }],
                badge: None,
                label: None,
            })
            .collect()
    }

    /// Tiles for the pottery grid, one per piece
    pub fn pottery_tiles(&self) -> Vec<Tile> {
        let mut start_index = 0;
        self.pottery
            .iter()
            .enumerate()
            .map(|(position, piece)| {
                let images = piece
                    .images
                    .iter()
                    .enumerate()
                    .map(|(view, identifier)| TileImage {
                        identifier: identifier.clone(),
                        url: encode_file_path(identifier),
                        alt: format!("{} - View {}", piece.name, view + 1),
                        active: view == 0,
                    })
                    .collect();

                let badge = (piece.view_count() > 1)
                    .then(|| format!("{} views", piece.view_count()));

                let tile = Tile {
                    kind: GalleryKind::Pottery,
                    position,
                    start_index,
                    images,
                    badge,
                    label: Some(piece.name.clone()),
                };
                start_index += piece.view_count();
                tile
            })
            .collect()
    }

    /// Tiles for a gallery
    pub fn tiles(&self, kind: GalleryKind) -> Vec<Tile> {
        match kind {
            GalleryKind::Paintings => self.painting_tiles(),
            GalleryKind::Pottery => self.pottery_tiles(),
        }
    }

    /// Every identifier the page references, hero slots included
    pub fn all_identifiers(&self) -> impl Iterator<Item = &str> {
        self.hero_images
            .iter()
            .chain(self.paintings.iter())
            .chain(self.pottery.iter().flat_map(|piece| piece.images.iter()))
            .map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
