//! Image components
//!
//! Catalog images with lazy loading and a hide-on-failure fallback.

mod gallery_image;
mod hero;

pub use gallery_image::GalleryImage;
pub use hero::HeroImages;
