use crate::grid::arena::{Align, ItemArena, RectId, Rectangle};

/// Result of trying to shrink a rectangle onto a shorter edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleOutcome {
    /// Applied; carries the ratio used
    Fits(f64),
    /// Nothing changed
    Rejected { score: f64, reason: Rejection },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The cumulative score would drop below the floor
    ScoreFloor,
    /// A multi-item edge would run past the padding next to it
    EdgeDrift,
}

/// Uniformly shrink every item of `rect` so that the side an `align` edge is
/// appended to goes from `old_len` to `new_len`.
///
/// Only item content scales. Padding between edges stays fixed, so it is taken
/// out of both lengths before computing the ratio.
///
/// The padding inside a k-item edge does not scale either, so such an edge
/// outgrows its side by up to `(k - 1) * padding * (1 - score)`. A scale that
/// would let that overhang exceed one padding is rejected.
pub fn scale_rect(
    arena: &mut ItemArena,
    rect: RectId,
    old_len: f64,
    new_len: f64,
    align: Align,
    padding: f64,
    floor: f64,
) -> ScaleOutcome {
    let r = arena.rect(rect);
    let (pad_w, pad_h) = r.padding_overhead(padding);

    // A right edge spans the height, a bottom edge spans the width
    let pad = match align {
        Align::Vertical => pad_h,
        Align::Horizontal => pad_w,
    };
    let ratio = (new_len - pad) / (old_len - pad);
    let score = r.score * ratio;
    if !(ratio > 0.0) || score < floor {
        return ScaleOutcome::Rejected {
            score,
            reason: Rejection::ScoreFloor,
        };
    }
    if edge_drift(r, padding, score) > padding {
        return ScaleOutcome::Rejected {
            score,
            reason: Rejection::EdgeDrift,
        };
    }

    let members: Vec<_> = r.items().collect();
    for id in members {
        arena.item_mut(id).crop *= ratio;
    }

    let r = arena.rect_mut(rect);
    r.width = (r.width - pad_w) * ratio + pad_w;
    r.height = (r.height - pad_h) * ratio + pad_h;
    r.score = score;

    ScaleOutcome::Fits(ratio)
}

/// Upper bound on how far any edge of `r` overhangs its side at `score`.
fn edge_drift(r: &Rectangle, padding: f64, score: f64) -> f64 {
    let longest = r.edges.iter().map(|e| e.items.len()).max().unwrap_or(1);
    longest.saturating_sub(1) as f64 * padding * (1.0 - score)
}
