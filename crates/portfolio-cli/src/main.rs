//! Portfolio CLI
//!
//! Thin wrapper around portfolio-core for inspecting the gallery from a
//! terminal.
//!
//! ## Usage
//!
//! ```bash
//! # List every tile with its lightbox start index
//! portfolio catalog
//!
//! # Same, as JSON
//! portfolio catalog --json
//!
//! # Print the flat navigation sequence of a gallery
//! portfolio sequence pottery
//!
//! # Print the URL an identifier resolves to
//! portfolio url "Scan of poppies .png"
//!
//! # Check that every image exists in a directory
//! portfolio check --assets-dir ./site
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio_core::{encode_file_path, logging, AssetRoot, Catalog, GalleryKind, Tile};

/// Portfolio Gallery - catalog inspection and asset audit
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Portfolio Gallery - inspect the catalog and audit image assets")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all gallery tiles
    Catalog {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print a gallery's lightbox navigation sequence
    Sequence {
        /// Gallery: paintings or pottery
        gallery: GalleryKind,
    },

    /// Print the encoded URL of an image identifier
    Url {
        /// Image identifier (file name)
        identifier: String,
    },

    /// Check that every catalog image exists under a directory
    Check {
        /// Directory the page's images are served from
        #[arg(short, long, default_value = ".")]
        assets_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(logging::filter_for_verbosity(cli.verbose));

    tracing::debug!(command = ?cli.command, "Dispatching");
    let catalog = Catalog::builtin();

    match cli.command {
        Commands::Catalog { json } => {
            let galleries = [GalleryKind::Paintings, GalleryKind::Pottery];

            if json {
                let tiles: Vec<Tile> = galleries
                    .iter()
                    .flat_map(|kind| catalog.tiles(*kind))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&tiles)?);
                return Ok(());
            }

            for kind in galleries {
                let tiles = catalog.tiles(kind);
                println!("{} ({} tiles)", kind.display_name(), tiles.len());
                for tile in &tiles {
                    print_tile(tile);
                }
                println!();
            }
        }

        Commands::Sequence { gallery } => {
            let sequence = catalog.sequence(gallery);
            println!("{} ({} images)", gallery.display_name(), sequence.len());
            for (index, identifier) in sequence.iter().enumerate() {
                println!("  {:>3}  {}", index, identifier);
            }
        }

        Commands::Url { identifier } => {
            println!("{}", encode_file_path(&identifier));
        }

        Commands::Check { assets_dir } => {
            let root = AssetRoot::new(&assets_dir);
            let report = root.audit(catalog.all_identifiers());

            if report.is_complete() {
                println!(
                    "All {} images present in {}",
                    report.checked,
                    root.dir().display()
                );
                return Ok(());
            }

            println!(
                "Missing {} of {} images in {}:",
                report.missing.len(),
                report.checked,
                root.dir().display()
            );
            for missing in &report.missing {
                println!("  {}", missing.identifier);
            }
            report.into_result()?;
        }
    }

    Ok(())
}

/// Print one tile as an indented block
fn print_tile(tile: &Tile) {
    let title = tile
        .label
        .clone()
        .unwrap_or_else(|| tile.images[0].alt.clone());

    match &tile.badge {
        Some(badge) => println!(
            "  #{:<2} start {:>2}  {} [{}]",
            tile.position, tile.start_index, title, badge
        ),
        None => println!(
            "  #{:<2} start {:>2}  {}",
            tile.position, tile.start_index, title
        ),
    }

    for image in &tile.images {
        println!("        {}", image.url);
    }
}
