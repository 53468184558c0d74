/// Diagnostic tool to verify input → rectangles → packing → positions
use anyhow::Result;
use clap::Parser;

use squaregrid::cli::{init_tracing, GridArgs};
use squaregrid::{compute_layout, validate_layout};

#[derive(Debug, Parser)]
#[command(name = "debug-layout")]
struct Cli {
    #[command(flatten)]
    grid: GridArgs,

    /// How many rectangles to list
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.grid.config();

    println!("=== DIAGNOSTIC: Items → Grid Layout Pipeline ===");
    println!("Config: {:?}", config);

    let items = cli.grid.load_items()?;
    let total: f64 = items.iter().map(|i| i.size).sum();
    println!(
        "\n[1] Input: {} items, mean size {:.1}px",
        items.len(),
        total / items.len().max(1) as f64
    );

    let start = std::time::Instant::now();
    let layout = compute_layout(&items, &config)?;
    println!(
        "\n[2] Layout computed in {:.2}ms: {} rectangles in {} rows, {:.0}x{:.0}px",
        start.elapsed().as_secs_f64() * 1000.0,
        layout.rects.len(),
        layout.rows,
        layout.width(),
        layout.height()
    );

    println!("\n[3] Top {} rectangles by area:", cli.top);
    let mut sorted = layout.rects.clone();
    sorted.sort_by(|a, b| (b.width * b.height).total_cmp(&(a.width * a.height)));
    for r in sorted.iter().take(cli.top) {
        println!(
            "    rect {:>3}: {:>6.1}x{:<6.1} at ({:>6.1}, {:>6.1}) - {} items, score {:.3}",
            r.id.0, r.width, r.height, r.x, r.y, r.item_count, r.score
        );
    }

    // Coverage and cropping
    let grid_area = layout.width() * layout.height();
    let item_area: f64 = layout.placements.iter().map(|p| p.crop * p.crop).sum();
    let worst = layout
        .placements
        .iter()
        .map(|p| p.scale())
        .fold(1.0, f64::min);
    println!("\n[4] Coverage:");
    println!("    Item area: {:.0}px²", item_area);
    println!("    Grid area: {:.0}px²", grid_area);
    if grid_area > 0.0 {
        println!("    Coverage:  {:.1}%", item_area / grid_area * 100.0);
    }
    println!("    Worst crop: {:.1}% of intrinsic size", worst * 100.0);

    println!("\n[5] Validation:");
    let report = validate_layout(&layout, &config);
    if report.is_ok() {
        println!("    ✓ no violations");
    } else {
        for v in report.violations.iter().take(20) {
            println!("    ✗ {:?}", v);
        }
        if report.violations.len() > 20 {
            println!("    ... ({} more)", report.violations.len() - 20);
        }
    }

    Ok(())
}
