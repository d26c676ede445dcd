//! Lightbox Component
//!
//! Full-screen modal showing one image with close / previous / next
//! controls.

use dioxus::prelude::*;
use portfolio_core::ClickTarget;

use crate::context::{use_lightbox, use_surface};

/// Lightbox modal
///
/// Renders from the [`DomSurface`](crate::context::DomSurface) signals the
/// controller writes to. Clicking the dark backdrop closes it; clicks on
/// the image and the controls stop at their own element.
#[component]
pub fn Lightbox() -> Element {
    let mut lightbox = use_lightbox();
    let surface = use_surface();

    let visible = (surface.visible)();
    let src = (surface.src)().unwrap_or_default();

    let on_backdrop = move |_| {
        lightbox.write().handle_click(ClickTarget::Backdrop);
    };
    let on_image = move |e: MouseEvent| {
        e.stop_propagation();
        lightbox.write().handle_click(ClickTarget::Content);
    };
    let on_close = move |e: MouseEvent| {
        e.stop_propagation();
        lightbox.write().close();
    };
    let on_prev = move |e: MouseEvent| {
        e.stop_propagation();
        lightbox.write().previous();
    };
    let on_next = move |e: MouseEvent| {
        e.stop_propagation();
        lightbox.write().next();
    };

    rsx! {
        div {
            id: "lightbox",
            class: if visible { "lightbox active" } else { "lightbox" },
            onclick: on_backdrop,

            span {
                class: "lightbox-close",
                "aria-label": "Close",
                onclick: on_close,
                "×"
            }

            button {
                r#type: "button",
                class: "lightbox-prev",
                "aria-label": "Previous image",
                onclick: on_prev,
                "‹"
            }

            img {
                id: "lightboxImg",
                class: "lightbox-img",
                src: "{src}",
                alt: "",
                onclick: on_image,
            }

            button {
                r#type: "button",
                class: "lightbox-next",
                "aria-label": "Next image",
                onclick: on_next,
                "›"
            }
        }
    }
}
