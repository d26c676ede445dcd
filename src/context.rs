//! Page context for the portfolio.
//!
//! Provides the catalog, the lightbox controller and the navigation state
//! to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut lightbox = use_lightbox();
//! lightbox.write().open(index, sequence)?;
//! ```

use dioxus::prelude::*;
use portfolio_core::{Catalog, LightboxController, NavMenu, RevealTracker, ViewerSurface};

/// The modal as the lightbox controller sees it.
///
/// Each field is a signal the `Lightbox` component renders from, so the
/// controller drives the DOM without holding any element handles.
#[derive(Clone, Copy, PartialEq)]
pub struct DomSurface {
    /// Encoded URL shown in `#lightboxImg`
    pub src: Signal<Option<String>>,
    /// Whether `#lightbox` carries the `active` class
    pub visible: Signal<bool>,
    /// Whether the page body is prevented from scrolling
    pub scroll_locked: Signal<bool>,
}

impl ViewerSurface for DomSurface {
    fn show_image(&mut self, url: &str) {
        self.src.set(Some(url.to_string()));
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible.set(visible);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked.set(locked);
    }
}

/// The page's single lightbox.
pub type Lightbox = LightboxController<DomSurface>;

/// Title shown in the navigation bar and hero.
/// Uses the global title set from command line args.
pub fn site_title() -> String {
    crate::get_site_title()
}

/// Hook to access the static catalog.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}

/// Hook to access the lightbox controller.
///
/// All viewer state changes go through this signal's `write()`.
pub fn use_lightbox() -> Signal<Lightbox> {
    use_context::<Signal<Lightbox>>()
}

/// Hook to access the modal's render signals.
pub fn use_surface() -> DomSurface {
    use_context::<DomSurface>()
}

/// Hook to access the mobile menu state.
pub fn use_nav_menu() -> Signal<NavMenu> {
    use_context::<Signal<NavMenu>>()
}

/// Hook to access the reveal tracker.
pub fn use_reveal() -> Signal<RevealTracker> {
    use_context::<Signal<RevealTracker>>()
}
