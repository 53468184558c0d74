use crate::grid::arena::{Align, Edge, ItemArena, ItemId, RectId};
use crate::layout::edge::find_best_edge;
use crate::layout::position::content_extent;
use crate::layout::scale::{scale_rect, ScaleOutcome};
use crate::layout::select::pick_largest;
use crate::layout::GridConfig;

/// Growth state of a rectangle under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectState {
    Seeded,
    Growing,
    /// The next right edge would have crossed the width cap
    MaxWidthReached,
    /// A full iteration appended nothing
    NoMoreEdges,
}

/// Outcome of one edge attempt on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Append {
    Appended,
    /// No feasible candidate right now; the side may still grow later
    Missing,
    /// Rescaling was rejected; the side stays closed for this rectangle
    Closed,
    MaxWidth,
}

/// Build rectangles from the largest remaining square until every item is placed.
/// Returns the rectangles in build order.
pub fn build_rects(arena: &mut ItemArena, config: &GridConfig) -> Vec<RectId> {
    let mut built = Vec::new();
    while let Some(seed) = pick_largest(arena) {
        let (rect, state) = build_rect(arena, seed, config);
        let r = arena.rect(rect);
        tracing::debug!(
            "Rect {}: {:.1}x{:.1}, score {:.3}, {} items ({:?})",
            rect.0,
            r.width,
            r.height,
            r.score,
            r.item_count(),
            state
        );
        built.push(rect);
    }
    built
}

/// Grow one rectangle from `seed` by alternating right and bottom edges, then
/// stand it on its short side.
pub fn build_rect(arena: &mut ItemArena, seed: ItemId, config: &GridConfig) -> (RectId, RectState) {
    let rect = arena.open_rect(seed);
    let state = grow_rect(arena, rect, config);
    settle_bounds(arena, rect, config.padding);

    let r = arena.rect(rect);
    if r.height > r.width && r.height < config.grid_width && r.height <= config.max_width() {
        rotate(arena, rect);
    }

    (rect, state)
}

/// Append edges to `rect` until neither side can grow.
///
/// A side whose rescale was rejected is not tried again, even if a later edge
/// on the other side would make a candidate fit.
pub fn grow_rect(arena: &mut ItemArena, rect: RectId, config: &GridConfig) -> RectState {
    let mut state = RectState::Seeded;
    let mut right_open = true;
    let mut bottom_open = true;

    while matches!(state, RectState::Seeded | RectState::Growing) {
        let mut grew = false;

        if right_open {
            match try_append(arena, rect, Align::Vertical, config) {
                Append::Appended => grew = true,
                Append::Missing => {}
                Append::Closed => right_open = false,
                Append::MaxWidth => {
                    state = RectState::MaxWidthReached;
                    break;
                }
            }
        }

        if bottom_open {
            match try_append(arena, rect, Align::Horizontal, config) {
                Append::Appended => grew = true,
                Append::Missing | Append::MaxWidth => {}
                Append::Closed => bottom_open = false,
            }
        }

        state = if grew {
            RectState::Growing
        } else {
            RectState::NoMoreEdges
        };
    }
    state
}

/// Grow the box over any rescaled edge that ends inside the padding past it.
fn settle_bounds(arena: &mut ItemArena, rect: RectId, padding: f64) {
    let (w, h) = content_extent(arena, rect, padding);
    let r = arena.rect_mut(rect);
    r.width = r.width.max(w);
    r.height = r.height.max(h);
}

/// Find, fit and append one edge on the side given by `align`.
fn try_append(arena: &mut ItemArena, rect: RectId, align: Align, config: &GridConfig) -> Append {
    let r = arena.rect(rect);
    let along = match align {
        Align::Vertical => r.height,
        Align::Horizontal => r.width,
    };

    let Some(edge) = find_best_edge(arena, along, config) else {
        return Append::Missing;
    };

    if align == Align::Vertical && r.width + edge.crop + config.padding > config.max_width() {
        return Append::MaxWidth;
    }

    let extent = edge.extent(config.padding);
    if extent < along {
        let outcome = scale_rect(
            arena,
            rect,
            along,
            extent,
            align,
            config.padding,
            config.max_rect_scaledown,
        );
        if let ScaleOutcome::Rejected { score, reason } = outcome {
            tracing::trace!(
                "Rect {}: {:?} edge rejected ({:?}) at score {:.3}",
                rect.0,
                align,
                reason,
                score
            );
            return Append::Closed;
        }
    }

    for &id in &edge.items {
        arena.commit(id, rect, edge.crop);
    }

    let r = arena.rect_mut(rect);
    match align {
        Align::Vertical => r.width += edge.crop + config.padding,
        Align::Horizontal => r.height += edge.crop + config.padding,
    }
    tracing::trace!(
        "Rect {}: appended {:?} edge of {} x {:.1}px (score {:.3})",
        rect.0,
        align,
        edge.items.len(),
        edge.crop,
        edge.score
    );
    r.edges.push(Edge {
        items: edge.items,
        align,
        score: edge.score,
    });

    Append::Appended
}

/// Transpose a rectangle: swap its sides and flip every edge.
pub fn rotate(arena: &mut ItemArena, rect: RectId) {
    let r = arena.rect_mut(rect);
    std::mem::swap(&mut r.width, &mut r.height);
    for edge in &mut r.edges {
        edge.align = edge.align.flipped();
    }
}
