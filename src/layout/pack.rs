use crate::error::LayoutError;
use crate::grid::arena::{ItemArena, RectId};
use crate::layout::GridConfig;

/// Free area a rectangle may be packed into. `height: None` means unbounded
/// (the start of a new row).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: Option<f64>,
}

impl Region {
    fn fits(&self, width: f64, height: f64) -> bool {
        width <= self.width && self.height.map_or(true, |h| height <= h)
    }
}

/// Pack every rectangle into rows of the grid, tallest first.
/// Resets previous packing, so running it twice gives the same origins.
/// Returns the number of rows used.
pub fn pack_rects(arena: &mut ItemArena, config: &GridConfig) -> Result<usize, LayoutError> {
    for rect in &mut arena.rects {
        rect.packed = false;
    }

    // Stable sort: equal heights keep build order
    let mut order: Vec<RectId> = arena.rect_ids().collect();
    order.sort_by(|a, b| arena.rect(*b).height.total_cmp(&arena.rect(*a).height));

    let mut remaining = order.len();
    let mut rows = 0;
    while remaining > 0 {
        let row = Region {
            x: 0.0,
            y: row_start(arena, config.padding),
            width: config.grid_width,
            height: None,
        };
        let placed = fill(arena, &order, row, config.padding);
        if placed == 0 {
            // Anything still unpacked is wider than the grid itself
            let stuck = order
                .iter()
                .copied()
                .find(|&id| !arena.rect(id).packed)
                .unwrap_or(RectId(0));
            return Err(LayoutError::PackingDeadlock {
                rect: stuck,
                width: arena.rect(stuck).width,
                grid_width: config.grid_width,
            });
        }

        rows += 1;
        remaining -= placed;
        tracing::debug!(
            "Row {} at y={:.1}: {} rectangles, {} left",
            rows,
            row.y,
            placed,
            remaining
        );
    }

    Ok(rows)
}

/// Top of the next row: just below the lowest packed rectangle.
fn row_start(arena: &ItemArena, padding: f64) -> f64 {
    let lowest = arena
        .rects
        .iter()
        .filter(|r| r.packed)
        .map(|r| r.bottom())
        .fold(0.0, f64::max);
    lowest + padding
}

/// Place the first unpacked rectangle that fits `region`, then fill the space to
/// its right and, for bounded regions, the space below it. Returns how many
/// rectangles were placed.
fn fill(arena: &mut ItemArena, order: &[RectId], region: Region, padding: f64) -> usize {
    let Some(id) = order.iter().copied().find(|&id| {
        let r = arena.rect(id);
        !r.packed && region.fits(r.width, r.height)
    }) else {
        return 0;
    };

    let r = arena.rect_mut(id);
    r.x = region.x;
    r.y = region.y;
    r.packed = true;
    let (w, h) = (r.width, r.height);

    let right = Region {
        x: region.x + w + padding,
        y: region.y,
        width: region.width - w - padding,
        height: Some(h),
    };
    let mut placed = 1 + fill(arena, order, right, padding);

    if let Some(height) = region.height {
        let below = Region {
            x: region.x,
            y: region.y + h + padding,
            width: w,
            height: Some(height - h - padding),
        };
        placed += fill(arena, order, below, padding);
    }

    placed
}
