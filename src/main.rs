#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{logging, AssetRoot, Catalog};

/// Global site title, set from command line
static SITE_TITLE: OnceLock<String> = OnceLock::new();

const DEFAULT_TITLE: &str = "Portfolio";

/// Get the site title (set from command line or default)
pub fn get_site_title() -> String {
    SITE_TITLE
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Portfolio Gallery - paintings and pottery
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Portfolio Gallery - paintings and pottery with a lightbox viewer")]
struct Args {
    /// Directory the page's images are served from
    #[arg(short, long, default_value = ".")]
    assets_dir: PathBuf,

    /// Site title shown in the window, navigation bar and hero
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() {
    logging::init(logging::DEFAULT_FILTER);

    let args = Args::parse();

    let _ = SITE_TITLE.set(args.title.clone());

    // Missing images only get hidden on the page; say so up front
    let assets = AssetRoot::new(&args.assets_dir);
    if !assets.dir().is_dir() {
        tracing::error!("Assets directory {:?} does not exist", assets.dir());
    } else {
        let report = assets.audit(Catalog::builtin().all_identifiers());
        if !report.is_complete() {
            tracing::warn!(
                "{} of {} images missing from {:?}; they will be hidden",
                report.missing.len(),
                report.checked,
                assets.dir()
            );
        }
    }

    tracing::info!("Starting '{}' with assets dir: {:?}", args.title, assets.dir());

    // Configure desktop window
    let config = Config::new()
        .with_resource_directory(assets.dir().to_path_buf())
        .with_window(
            WindowBuilder::new()
                .with_title(&args.title)
                .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
