use dioxus::prelude::*;
use portfolio_core::{Catalog, LightboxController, NavMenu, RevealTracker};

use crate::context::DomSurface;
use crate::hooks::{use_lightbox_keys, use_scroll_lock};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the catalog, the lightbox controller and the
/// navigation state, then renders the single portfolio page.
#[component]
pub fn App() -> Element {
    let catalog: Signal<Catalog> = use_signal(Catalog::builtin);

    // The modal's render signals, handed to the controller as its surface
    let surface = DomSurface {
        src: use_signal(|| None),
        visible: use_signal(|| false),
        scroll_locked: use_signal(|| false),
    };
    let lightbox = use_signal(|| LightboxController::new(surface));

    let nav_menu: Signal<NavMenu> = use_signal(NavMenu::default);
    let reveal: Signal<RevealTracker> = use_signal(RevealTracker::new);

    // Provide page state to all child components
    use_context_provider(|| catalog);
    use_context_provider(|| surface);
    use_context_provider(|| lightbox);
    use_context_provider(|| nav_menu);
    use_context_provider(|| reveal);

    use_lightbox_keys(lightbox);
    use_scroll_lock(surface.scroll_locked);

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
