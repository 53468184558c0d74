use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::input::{parse_items, sample_items, RawItem};
use crate::layout::GridConfig;

/// Input and layout options shared by the binaries.
#[derive(Debug, Clone, Args)]
pub struct GridArgs {
    /// Item sizes in pixels. Without sizes or --file the built-in sample is used.
    pub sizes: Vec<f64>,

    /// Read items from a file, one `<size> [label]` per line
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    #[arg(long, default_value_t = 600.0)]
    pub grid_width: f64,

    #[arg(long, default_value_t = 1.0)]
    pub padding: f64,

    #[arg(long, default_value_t = 0.8)]
    pub max_square_scaledown: f64,

    #[arg(long, default_value_t = 0.8)]
    pub max_rect_scaledown: f64,

    /// Widest rectangle as a fraction of the grid width
    #[arg(long, default_value_t = 0.4)]
    pub max_rect_width: f64,

    #[arg(long, default_value_t = 6)]
    pub max_edge_items: usize,

    /// Keep raw edge scores instead of favouring split edges
    #[arg(long)]
    pub no_reduce_visual_monotony: bool,
}

impl GridArgs {
    pub fn config(&self) -> GridConfig {
        GridConfig {
            padding: self.padding,
            max_square_scaledown: self.max_square_scaledown,
            max_rect_scaledown: self.max_rect_scaledown,
            max_rect_width: self.max_rect_width,
            grid_width: self.grid_width,
            reduce_visual_monotony: !self.no_reduce_visual_monotony,
            max_edge_items: self.max_edge_items,
        }
    }

    pub fn load_items(&self) -> Result<Vec<RawItem>> {
        let mut items: Vec<RawItem> = self.sizes.iter().copied().map(RawItem::new).collect();

        if let Some(path) = &self.file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            items.extend(
                parse_items(&text).with_context(|| format!("Failed to parse {}", path.display()))?,
            );
        } else if items.is_empty() {
            tracing::info!("No input given, using the built-in sample");
            items = sample_items();
        }

        Ok(items)
    }
}

/// Install the fmt subscriber with `squaregrid=info` unless RUST_LOG says otherwise.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "squaregrid=info".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
