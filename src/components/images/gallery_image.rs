//! Gallery Image
//!
//! Lazy-loaded image that hides itself when its file fails to load.

use dioxus::prelude::*;
use portfolio_core::asset::{log_load_failure, log_load_success};
use portfolio_core::TileImage;

/// Lazy-loaded catalog image with load-failure fallback
///
/// A failed load is logged with the identifier and its URL, then the
/// image is hidden in place. The surrounding tile stays.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     GalleryImage {
///         image: tile.images[0].clone(),
///     }
/// }
/// ```
#[component]
pub fn GalleryImage(
    /// Image to display
    image: TileImage,
    /// Optional element id (hero slots)
    #[props(default = None)]
    id: Option<String>,
    /// Optional CSS class
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let mut failed = use_signal(|| false);

    let on_error = {
        let identifier = image.identifier.clone();
        move |_| {
            log_load_failure(&identifier);
            failed.set(true);
        }
    };
    let on_load = {
        let identifier = image.identifier.clone();
        move |_| log_load_success(&identifier)
    };

    let css_class = class.unwrap_or_else(|| if image.active { "active".to_string() } else { String::new() });

    rsx! {
        img {
            id: id,
            class: "{css_class}",
            src: "{image.url}",
            alt: "{image.alt}",
            "loading": "lazy",
            style: if failed() { "display: none;" } else { "" },
            onerror: on_error,
            onload: on_load,
        }
    }
}
