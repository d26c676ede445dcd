//! Navigation chrome: hamburger menu, in-page anchors, navbar shadow and
//! the fade-in reveal of gallery and timeline items.

use std::collections::HashSet;

/// Scroll offset (px) past which the navbar gets the raised shadow
pub const SHADOW_SCROLL_THRESHOLD: f64 = 100.0;

/// Intersection ratio that counts as "entered the viewport"
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so items reveal slightly after entering
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Open/closed state of the mobile menu.
///
/// The menu and its toggle button share this one flag, so their `active`
/// classes cannot drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any in-page link click collapses the menu
    pub fn collapse(&mut self) {
        self.open = false;
    }

    /// Class list for an element carrying the `active` modifier
    pub fn class(&self, base: &str) -> String {
        if self.open {
            format!("{} active", base)
        } else {
            base.to_string()
        }
    }
}

/// Element id targeted by a local fragment link (`#about` → `about`).
///
/// A bare `#` or a non-fragment href has no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Navbar shadow for the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavShadow {
    Resting,
    Raised,
}

impl NavShadow {
    pub fn for_offset(scroll_y: f64) -> Self {
        if scroll_y > SHADOW_SCROLL_THRESHOLD {
            NavShadow::Raised
        } else {
            NavShadow::Resting
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            NavShadow::Resting => "0 2px 10px rgba(0, 0, 0, 0.1)",
            NavShadow::Raised => "0 4px 20px rgba(0, 0, 0, 0.15)",
        }
    }
}

/// Kind of element that fades in on first sight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    GalleryItem,
    TimelineItem,
}

impl RevealKind {
    /// Transform applied before the item is revealed
    pub fn hidden_transform(&self) -> &'static str {
        match self {
            RevealKind::GalleryItem => "translateY(30px)",
            RevealKind::TimelineItem => "translateX(-30px)",
        }
    }

    /// Transform once revealed
    pub fn shown_transform(&self) -> &'static str {
        match self {
            RevealKind::GalleryItem => "translateY(0)",
            RevealKind::TimelineItem => "translateX(0)",
        }
    }

    /// Per-index transition delay step, in seconds
    pub fn stagger_secs(&self) -> f64 {
        match self {
            RevealKind::GalleryItem => 0.05,
            RevealKind::TimelineItem => 0.1,
        }
    }

    /// Key prefix used to tag elements for the intersection observer
    pub fn key_prefix(&self) -> &'static str {
        match self {
            RevealKind::GalleryItem => "gallery",
            RevealKind::TimelineItem => "timeline",
        }
    }

    /// Observer key of the item at `index`
    pub fn key(&self, index: usize) -> String {
        format!("{}-{}", self.key_prefix(), index)
    }

    /// Transition declaration for the item at `index`
    pub fn transition(&self, index: usize) -> String {
        let delay = format_secs(index as f64 * self.stagger_secs());
        format!("opacity 0.6s ease {delay}s, transform 0.6s ease {delay}s")
    }
}

/// Format seconds without float noise (0.15000000000000002 → 0.15)
fn format_secs(secs: f64) -> String {
    let rounded = (secs * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}

/// Tracks which items have already been revealed.
///
/// Revealing is one-shot: once an item has entered the viewport it stays
/// visible, even after scrolling back out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an item revealed. Returns true the first time only.
    pub fn reveal(&mut self, key: impl Into<String>) -> bool {
        self.revealed.insert(key.into())
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Inline style for the item at `index`
    pub fn style(&self, kind: RevealKind, index: usize) -> String {
        let (opacity, transform) = if self.is_revealed(&kind.key(index)) {
            (1, kind.shown_transform())
        } else {
            (0, kind.hidden_transform())
        };
        format!(
            "opacity: {opacity}; transform: {transform}; transition: {};",
            kind.transition(index)
        )
    }
}
