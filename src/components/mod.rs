//! UI Components for the portfolio page.

pub mod gallery;
pub mod images;
mod lightbox;
mod nav_header;
mod timeline;

pub use gallery::{GalleryGrid, GalleryTile};
pub use images::{GalleryImage, HeroImages};
pub use lightbox::Lightbox;
pub use nav_header::{NavHeader, NavSection};
pub use timeline::Timeline;
