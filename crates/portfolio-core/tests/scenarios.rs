//! End-to-end scenarios: render the catalog, click a tile, drive the
//! lightbox with keys and clicks through a recording surface.

use portfolio_core::{
    render_catalog, Catalog, ClickTarget, GalleryKind, LightboxController, PotteryPiece, Tile,
    ViewerSurface,
};

#[derive(Debug, Default)]
struct StubModal {
    src: Option<String>,
    visible: bool,
    scroll_locked: bool,
}

impl ViewerSurface for StubModal {
    fn show_image(&mut self, url: &str) {
        self.src = Some(url.to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

/// Simulate a click on a rendered tile
fn click(lightbox: &mut LightboxController<StubModal>, catalog: &Catalog, tile: &Tile) {
    lightbox
        .open(tile.start_index, catalog.sequence(tile.kind))
        .expect("tile opens the viewer");
}

#[test]
fn painting_click_then_arrow_right_wraps() {
    let catalog = Catalog::new(["a.png", "b.png"], Vec::new());
    let mut paintings: Vec<Tile> = Vec::new();
    let mut pottery: Vec<Tile> = Vec::new();
    render_catalog(&catalog, Some(&mut paintings), Some(&mut pottery));

    let mut lightbox = LightboxController::new(StubModal::default());
    click(&mut lightbox, &catalog, &paintings[1]);

    assert_eq!(lightbox.viewer().current_index(), Some(1));
    assert_eq!(lightbox.viewer().current(), Some("b.png"));
    assert!(lightbox.surface().visible);
    assert!(lightbox.surface().scroll_locked);

    lightbox.handle_key("ArrowRight");
    assert_eq!(lightbox.viewer().current_index(), Some(0));
    assert_eq!(lightbox.surface().src.as_deref(), Some("a.png"));
}

#[test]
fn second_pottery_piece_opens_at_flat_index() {
    let catalog = Catalog::new(
        Vec::<String>::new(),
        vec![
            PotteryPiece::new("first", ["x1", "x2"]).unwrap(),
            PotteryPiece::new("second", ["y1"]).unwrap(),
        ],
    );
    let mut pottery: Vec<Tile> = Vec::new();
    render_catalog::<Vec<Tile>, _>(&catalog, None, Some(&mut pottery));

    let mut lightbox = LightboxController::new(StubModal::default());
    click(&mut lightbox, &catalog, &pottery[1]);

    assert_eq!(lightbox.viewer().current_index(), Some(2));
    assert_eq!(lightbox.viewer().current(), Some("y1"));
}

#[test]
fn escape_closes_and_restores_scrolling() {
    let catalog = Catalog::builtin();
    let tiles = catalog.tiles(GalleryKind::Paintings);

    let mut lightbox = LightboxController::new(StubModal::default());
    click(&mut lightbox, &catalog, &tiles[9]);
    assert_eq!(
        lightbox.surface().src.as_deref(),
        Some("Scan%20of%20poppies%20.png")
    );

    lightbox.handle_key("Escape");
    assert!(!lightbox.surface().visible);
    assert!(!lightbox.surface().scroll_locked);

    // nothing moves until the next open
    lightbox.handle_key("ArrowLeft");
    lightbox.previous();
    assert_eq!(lightbox.viewer().current(), None);
    assert_eq!(
        lightbox.surface().src.as_deref(),
        Some("Scan%20of%20poppies%20.png")
    );
}

#[test]
fn switching_galleries_replaces_active_sequence() {
    let catalog = Catalog::builtin();
    let mut lightbox = LightboxController::new(StubModal::default());

    click(&mut lightbox, &catalog, &catalog.painting_tiles()[0]);
    lightbox.handle_key("ArrowLeft");
    assert_eq!(lightbox.viewer().current(), Some("Scan of yellow flowers.png"));

    let mug = &catalog.pottery_tiles()[5];
    click(&mut lightbox, &catalog, mug);
    assert_eq!(lightbox.viewer().current(), Some("Mug_pink_red_1.jpeg"));
    lightbox.handle_key("ArrowRight");
    assert_eq!(lightbox.viewer().current(), Some("Mug_ping_red_2.jpeg"));
    lightbox.handle_key("ArrowRight");
    assert_eq!(lightbox.viewer().current(), Some("All_pottery.jpeg"));
}

#[test]
fn backdrop_click_closes_but_image_click_does_not() {
    let catalog = Catalog::builtin();
    let mut lightbox = LightboxController::new(StubModal::default());
    click(&mut lightbox, &catalog, &catalog.pottery_tiles()[2]);

    lightbox.handle_click(ClickTarget::Content);
    assert!(lightbox.is_open());

    lightbox.handle_click(ClickTarget::Backdrop);
    assert!(!lightbox.is_open());
    assert!(!lightbox.surface().visible);
}
