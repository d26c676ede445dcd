//! Lightbox viewer.
//!
//! [`Viewer`] is the bare two-state machine (Closed / Open). It knows nothing
//! about the page. [`LightboxController`] owns the one `Viewer` of the page
//! together with a [`ViewerSurface`] handle to the modal, and is the only
//! thing allowed to change either.
//!
//! ## State machine
//!
//! ```text
//!            open(i, S)                 next / previous
//!  Closed ─────────────▶ Open { i, S } ◀───────────────┐
//!    ▲                      │  │                       │
//!    └──────── close ───────┘  └───────────────────────┘
//! ```

use crate::asset::encode_file_path;
use crate::catalog::ImageSequence;
use crate::error::{PortfolioError, PortfolioResult};

/// Viewer state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewerState {
    #[default]
    Closed,
    Open {
        current_index: usize,
        active_sequence: ImageSequence,
    },
}

/// Keys the open viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    Escape,
    ArrowRight,
    ArrowLeft,
}

impl ViewerKey {
    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" => Some(ViewerKey::Escape),
            "ArrowRight" => Some(ViewerKey::ArrowRight),
            "ArrowLeft" => Some(ViewerKey::ArrowLeft),
            _ => None,
        }
    }
}

/// Where a click on the modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the image
    Backdrop,
    /// The image or one of the controls
    Content,
}

/// The single-image modal state machine.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    state: ViewerState,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            ViewerState::Open { current_index, .. } => Some(*current_index),
            ViewerState::Closed => None,
        }
    }

    /// Identifier of the displayed image
    pub fn current(&self) -> Option<&str> {
        match &self.state {
            ViewerState::Open {
                current_index,
                active_sequence,
            } => active_sequence.get(*current_index).map(String::as_str),
            ViewerState::Closed => None,
        }
    }

    /// Encoded URL of the displayed image
    pub fn current_url(&self) -> Option<String> {
        self.current().map(encode_file_path)
    }

    /// Length of the active sequence, 0 when closed
    pub fn len(&self) -> usize {
        match &self.state {
            ViewerState::Open { active_sequence, .. } => active_sequence.len(),
            ViewerState::Closed => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Open (or re-open) on `sequence` at `index`.
    ///
    /// On error the previous state is kept.
    pub fn open(&mut self, index: usize, sequence: ImageSequence) -> PortfolioResult<&str> {
        if sequence.is_empty() {
            return Err(PortfolioError::EmptySequence);
        }
        if index >= sequence.len() {
            return Err(PortfolioError::IndexOutOfRange {
                index,
                len: sequence.len(),
            });
        }

        self.state = ViewerState::Open {
            current_index: index,
            active_sequence: sequence,
        };
        Ok(self.current().unwrap_or_default())
    }

    /// Step forward with wrap-around. No-op unless open.
    pub fn next(&mut self) -> Option<&str> {
        self.step(1)
    }

    /// Step backward with wrap-around. No-op unless open.
    pub fn previous(&mut self) -> Option<&str> {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> Option<&str> {
        let ViewerState::Open {
            current_index,
            active_sequence,
        } = &mut self.state
        else {
            return None;
        };

        let len = active_sequence.len();
        if len == 0 {
            return None;
        }

        *current_index = if delta >= 0 {
            (*current_index + 1) % len
        } else {
            (*current_index + len - 1) % len
        };
        self.current()
    }

    /// Close and drop the active sequence. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = ViewerState::Closed;
        was_open
    }
}

/// Handle to the modal the controller drives.
pub trait ViewerSurface {
    /// Point the modal image at `url`
    fn show_image(&mut self, url: &str);
    /// Show or hide the modal
    fn set_visible(&mut self, visible: bool);
    /// Lock or restore background page scrolling
    fn set_scroll_locked(&mut self, locked: bool);
}

/// What a dispatched input did to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    Next,
    Previous,
    Close,
}

/// Owner of the page's viewer state and modal handle.
#[derive(Debug)]
pub struct LightboxController<S> {
    viewer: Viewer,
    surface: S,
}

impl<S: ViewerSurface> LightboxController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            viewer: Viewer::new(),
            surface,
        }
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    /// Open on `sequence` at `index` and show the modal.
    pub fn open(&mut self, index: usize, sequence: ImageSequence) -> PortfolioResult<()> {
        let identifier = self.viewer.open(index, sequence)?;
        let url = encode_file_path(identifier);
        tracing::debug!(index, identifier = %identifier, "Opening lightbox");

        self.surface.show_image(&url);
        self.surface.set_visible(true);
        self.surface.set_scroll_locked(true);
        Ok(())
    }

    pub fn next(&mut self) {
        if let Some(url) = self.viewer.next().map(encode_file_path) {
            self.surface.show_image(&url);
        }
    }

    pub fn previous(&mut self) {
        if let Some(url) = self.viewer.previous().map(encode_file_path) {
            self.surface.show_image(&url);
        }
    }

    /// Close the modal and restore page scrolling.
    pub fn close(&mut self) {
        if self.viewer.close() {
            tracing::debug!("Closing lightbox");
        }
        self.surface.set_visible(false);
        self.surface.set_scroll_locked(false);
    }

    /// Dispatch a document key press. Ignored while closed.
    pub fn handle_key(&mut self, key_name: &str) -> Option<ViewerAction> {
        if !self.viewer.is_open() {
            return None;
        }

        let action = match ViewerKey::from_key_name(key_name)? {
            ViewerKey::Escape => ViewerAction::Close,
            ViewerKey::ArrowRight => ViewerAction::Next,
            ViewerKey::ArrowLeft => ViewerAction::Previous,
        };
        self.apply(action);
        Some(action)
    }

    /// Dispatch a click on the modal. Only the backdrop closes it.
    pub fn handle_click(&mut self, target: ClickTarget) -> Option<ViewerAction> {
        match target {
            ClickTarget::Backdrop if self.viewer.is_open() => {
                self.close();
                Some(ViewerAction::Close)
            }
            _ => None,
        }
    }

    pub fn apply(&mut self, action: ViewerAction) {
        match action {
            ViewerAction::Next => self.next(),
            ViewerAction::Previous => self.previous(),
            ViewerAction::Close => self.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call the controller makes on the modal
    #[derive(Debug, Default)]
    struct RecordingSurface {
        shown: Vec<String>,
        visible: bool,
        scroll_locked: bool,
    }

    impl ViewerSurface for RecordingSurface {
        fn show_image(&mut self, url: &str) {
            self.shown.push(url.to_string());
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }

        fn set_scroll_locked(&mut self, locked: bool) {
            self.scroll_locked = locked;
        }
    }

    fn seq(items: &[&str]) -> ImageSequence {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_starts_closed() {
        let viewer = Viewer::new();
        assert!(!viewer.is_open());
        assert_eq!(viewer.current(), None);
        assert!(viewer.is_empty());
    }

    #[test]
    fn test_open_shows_index() {
        let mut viewer = Viewer::new();
        assert_eq!(viewer.open(1, seq(&["a", "b", "c"])).unwrap(), "b");
        assert_eq!(viewer.current_index(), Some(1));
    }

    #[test]
    fn test_open_rejects_bad_input() {
        let mut viewer = Viewer::new();
        assert!(matches!(
            viewer.open(0, seq(&[])),
            Err(PortfolioError::EmptySequence)
        ));
        assert!(matches!(
            viewer.open(3, seq(&["a"])),
            Err(PortfolioError::IndexOutOfRange { index: 3, len: 1 })
        ));
        assert!(!viewer.is_open());
    }

    #[test]
    fn test_failed_open_keeps_previous_state() {
        let mut viewer = Viewer::new();
        viewer.open(0, seq(&["a", "b"])).unwrap();
        assert!(viewer.open(9, seq(&["x"])).is_err());
        assert_eq!(viewer.current(), Some("a"));
    }

    #[test]
    fn test_wraps_both_directions() {
        let mut viewer = Viewer::new();
        viewer.open(2, seq(&["a", "b", "c"])).unwrap();
        assert_eq!(viewer.next(), Some("a"));
        assert_eq!(viewer.previous(), Some("c"));
        assert_eq!(viewer.previous(), Some("b"));
    }

    #[test]
    fn test_single_image_sequence_stays_put() {
        let mut viewer = Viewer::new();
        viewer.open(0, seq(&["only"])).unwrap();
        assert_eq!(viewer.next(), Some("only"));
        assert_eq!(viewer.previous(), Some("only"));
    }

    #[test]
    fn test_close_makes_navigation_noop() {
        let mut viewer = Viewer::new();
        viewer.open(0, seq(&["a", "b"])).unwrap();
        assert!(viewer.close());
        assert_eq!(viewer.next(), None);
        assert_eq!(viewer.previous(), None);
        assert_eq!(viewer.current_index(), None);
        assert!(!viewer.close());
    }

    #[test]
    fn test_reopen_switches_sequence() {
        let mut viewer = Viewer::new();
        viewer.open(1, seq(&["a", "b"])).unwrap();
        viewer.open(0, seq(&["x1", "x2", "y1"])).unwrap();
        assert_eq!(viewer.len(), 3);
        assert_eq!(viewer.current(), Some("x1"));
    }

    #[test]
    fn test_current_url_is_encoded() {
        let mut viewer = Viewer::new();
        viewer.open(0, seq(&["Scan of roses.png"])).unwrap();
        assert_eq!(viewer.current_url().as_deref(), Some("Scan%20of%20roses.png"));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(ViewerKey::from_key_name("Escape"), Some(ViewerKey::Escape));
        assert_eq!(ViewerKey::from_key_name("ArrowLeft"), Some(ViewerKey::ArrowLeft));
        assert_eq!(ViewerKey::from_key_name("Enter"), None);
    }

    #[test]
    fn test_controller_drives_surface() {
        let mut lightbox = LightboxController::new(RecordingSurface::default());

        lightbox.open(0, seq(&["a b.png", "c.png"])).unwrap();
        assert!(lightbox.surface().visible);
        assert!(lightbox.surface().scroll_locked);
        assert_eq!(lightbox.surface().shown, vec!["a%20b.png"]);

        lightbox.next();
        assert_eq!(lightbox.surface().shown.last().unwrap(), "c.png");

        lightbox.close();
        assert!(!lightbox.surface().visible);
        assert!(!lightbox.surface().scroll_locked);
    }

    #[test]
    fn test_failed_open_leaves_surface_alone() {
        let mut lightbox = LightboxController::new(RecordingSurface::default());
        assert!(lightbox.open(0, seq(&[])).is_err());
        assert!(!lightbox.surface().visible);
        assert!(lightbox.surface().shown.is_empty());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut lightbox = LightboxController::new(RecordingSurface::default());
        assert_eq!(lightbox.handle_key("ArrowRight"), None);
        assert_eq!(lightbox.handle_key("Escape"), None);
        assert!(lightbox.surface().shown.is_empty());
    }

    #[test]
    fn test_keys_dispatch_while_open() {
        let mut lightbox = LightboxController::new(RecordingSurface::default());
        lightbox.open(0, seq(&["a", "b"])).unwrap();

        assert_eq!(lightbox.handle_key("ArrowLeft"), Some(ViewerAction::Previous));
        assert_eq!(lightbox.viewer().current(), Some("b"));
        assert_eq!(lightbox.handle_key("q"), None);
        assert_eq!(lightbox.handle_key("Escape"), Some(ViewerAction::Close));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_only_backdrop_click_closes() {
        let mut lightbox = LightboxController::new(RecordingSurface::default());
        lightbox.open(0, seq(&["a"])).unwrap();

        assert_eq!(lightbox.handle_click(ClickTarget::Content), None);
        assert!(lightbox.is_open());
        assert_eq!(
            lightbox.handle_click(ClickTarget::Backdrop),
            Some(ViewerAction::Close)
        );
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.handle_click(ClickTarget::Backdrop), None);
    }
}
