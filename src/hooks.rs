//! Document-level listeners.
//!
//! Key presses, window scrolling and viewport intersection happen outside
//! any one component, so each is installed once through `document::eval`
//! and forwards plain values (key names, offsets, reveal keys) back here.

use dioxus::prelude::*;
use portfolio_core::chrome::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use portfolio_core::RevealTracker;

use crate::context::Lightbox;

const KEYDOWN_LISTENER: &str = r#"
document.addEventListener('keydown', (e) => dioxus.send(e.key));
await new Promise(() => {});
"#;

const SCROLL_LISTENER: &str = r#"
dioxus.send(window.pageYOffset);
window.addEventListener('scroll', () => dioxus.send(window.pageYOffset), { passive: true });
await new Promise(() => {});
"#;

const REVEAL_OBSERVER: &str = r#"
const observer = new IntersectionObserver((entries) => {
  entries.forEach((entry) => {
    if (entry.isIntersecting) {
      dioxus.send(entry.target.dataset.reveal);
      observer.unobserve(entry.target);
    }
  });
}, { threshold: __THRESHOLD__, rootMargin: '__ROOT_MARGIN__' });
document.querySelectorAll('[data-reveal]').forEach((el) => observer.observe(el));
await new Promise(() => {});
"#;

/// Forward document key presses to the lightbox.
///
/// Keys only reach the controller while it is open; the controller then
/// maps Escape / ArrowRight / ArrowLeft.
pub fn use_lightbox_keys(mut lightbox: Signal<Lightbox>) {
    use_future(move || async move {
        let mut keys = document::eval(KEYDOWN_LISTENER);
        while let Ok(key) = keys.recv::<String>().await {
            if !lightbox.peek().is_open() {
                continue;
            }
            if let Some(action) = lightbox.write().handle_key(&key) {
                tracing::trace!(key = %key, ?action, "Lightbox key");
            }
        }
        tracing::warn!("Keydown listener closed");
    });
}

/// Current vertical scroll offset of the page.
pub fn use_scroll_offset() -> Signal<f64> {
    let mut offset = use_signal(|| 0.0_f64);

    use_future(move || async move {
        let mut scroll = document::eval(SCROLL_LISTENER);
        while let Ok(y) = scroll.recv::<f64>().await {
            if *offset.peek() != y {
                offset.set(y);
            }
        }
    });

    offset
}

/// Lock page scrolling while the lightbox is open.
pub fn use_scroll_lock(scroll_locked: Signal<bool>) {
    use_effect(move || {
        let overflow = if scroll_locked() { "hidden" } else { "auto" };
        let _ = document::eval(&format!("document.body.style.overflow = '{overflow}';"));
    });
}

/// Observe every `[data-reveal]` element and mark it revealed the first
/// time it enters the viewport.
///
/// Must run after the tagged elements are mounted.
pub fn use_reveal_observer(mut reveal: Signal<RevealTracker>) {
    use_effect(move || {
        spawn(async move {
            let script = REVEAL_OBSERVER
                .replace("__THRESHOLD__", &REVEAL_THRESHOLD.to_string())
                .replace("__ROOT_MARGIN__", REVEAL_ROOT_MARGIN);
            let mut observer = document::eval(&script);

            while let Ok(key) = observer.recv::<String>().await {
                if reveal.write().reveal(key.clone()) {
                    tracing::trace!(key = %key, "Revealed");
                }
            }
        });
    });
}

/// Smooth-scroll to the element with `id`.
pub fn scroll_into_view(id: &str) {
    let _ = document::eval(&format!(
        "document.getElementById({id:?})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    ));
}
