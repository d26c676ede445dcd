//! Portfolio Gallery Core Library
//!
//! Everything behind the portfolio page that is not markup: the static
//! catalog of paintings and pottery, asset URL encoding, the lightbox
//! viewer and the small bits of navigation state.
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{Catalog, GalleryKind, LightboxController, ViewerSurface};
//!
//! #[derive(Default)]
//! struct Modal {
//!     src: Option<String>,
//! }
//!
//! impl ViewerSurface for Modal {
//!     fn show_image(&mut self, url: &str) {
//!         self.src = Some(url.to_string());
//!     }
//!     fn set_visible(&mut self, _visible: bool) {}
//!     fn set_scroll_locked(&mut self, _locked: bool) {}
//! }
//!
//! let catalog = Catalog::builtin();
//! let tile = &catalog.tiles(GalleryKind::Pottery)[3];
//!
//! let mut lightbox = LightboxController::new(Modal::default());
//! lightbox.open(tile.start_index, catalog.sequence(GalleryKind::Pottery))?;
//! assert_eq!(lightbox.surface().src.as_deref(), Some("Bowl_sand_1.jpeg"));
//!
//! lightbox.handle_key("ArrowRight");
//! assert_eq!(lightbox.viewer().current(), Some("Bowl_sand_2.jpeg"));
//! # Ok::<(), portfolio_core::PortfolioError>(())
//! ```

pub mod asset;
pub mod catalog;
pub mod chrome;
pub mod error;
pub mod logging;
pub mod render;
pub mod viewer;

// Re-exports
pub use asset::{decode_file_path, encode_file_path, AssetRoot, AuditReport, MissingAsset};
pub use catalog::{
    Catalog, GalleryKind, ImageSequence, PotteryPiece, Tile, TileImage, TimelineEntry,
};
pub use chrome::{anchor_target, NavMenu, NavShadow, RevealKind, RevealTracker};
pub use error::{PortfolioError, PortfolioResult};
pub use render::{render_catalog, render_gallery, GridSink, RenderSummary};
pub use viewer::{
    ClickTarget, LightboxController, Viewer, ViewerAction, ViewerKey, ViewerState, ViewerSurface,
};
