use anyhow::Result;
use clap::Parser;

use squaregrid::cli::{init_tracing, GridArgs};
use squaregrid::compute_layout;

/// Lay out square images into a whitespace-free grid of fixed width.
#[derive(Debug, Parser)]
#[command(name = "squaregrid", version)]
struct Cli {
    #[command(flatten)]
    grid: GridArgs,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.grid.config();
    let items = cli.grid.load_items()?;

    tracing::info!(
        "squaregrid starting: {} items, grid width {}",
        items.len(),
        config.grid_width
    );

    let layout = compute_layout(&items, &config)?;

    println!(
        "# grid {:.0}x{:.0}, {} rectangles",
        layout.width(),
        layout.height(),
        layout.rects.len()
    );
    println!("# item\trect\tx\ty\tcrop\tshown\tlabel");
    for p in &layout.placements {
        println!(
            "{}\t{}\t{:.1}\t{:.1}\t{:.1}\t{:.0}%\t{}",
            p.item.0,
            p.rect.0,
            p.x,
            p.y,
            p.crop,
            p.scale() * 100.0,
            p.label.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
