use crate::grid::arena::{ItemArena, ItemId};
use crate::layout::GridConfig;

/// Items chosen to extend one side of a rectangle. Nothing is committed yet.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeCandidate {
    pub items: Vec<ItemId>,
    /// Crop every item takes once the edge is appended
    pub crop: f64,
    pub score: f64,
}

impl EdgeCandidate {
    /// Length the edge covers along the side it is appended to.
    pub fn extent(&self, padding: f64) -> f64 {
        let n = self.items.len() as f64;
        n * self.crop + (n - 1.0) * padding
    }
}

/// Fit of an item into a slot: smaller over larger, 1.0 is a perfect fit.
fn fit_score(item_size: f64, slot: f64) -> f64 {
    let ratio = item_size / slot;
    if ratio > 1.0 {
        1.0 / ratio
    } else {
        ratio
    }
}

/// Best `count` unplaced items for an edge of length `size` split into `count` slots.
/// Returns the chosen items (best fit first) and the aggregate score.
pub fn candidates_for_count(
    arena: &ItemArena,
    size: f64,
    count: usize,
    config: &GridConfig,
) -> Option<(Vec<ItemId>, f64)> {
    let slot = size / count as f64;
    if count == 0 || slot <= 0.0 {
        return None;
    }

    let mut scored: Vec<(ItemId, f64)> = arena
        .unplaced()
        .map(|id| (id, fit_score(arena.item(id).size, slot)))
        .collect();
    if scored.len() < count {
        return None;
    }

    // Stable: equal fits stay in input order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(count);

    let mut score = 1.0;
    for &(_, s) in &scored {
        if s < config.max_square_scaledown {
            return None;
        }
        score *= s;
    }

    if config.reduce_visual_monotony && count > 1 {
        score = score.sqrt().sqrt();
    }

    Some((scored.into_iter().map(|(id, _)| id).collect(), score))
}

/// Search candidate counts `1..=max_edge_items` for the best edge of length `edge_length`.
pub fn find_best_edge(
    arena: &ItemArena,
    edge_length: f64,
    config: &GridConfig,
) -> Option<EdgeCandidate> {
    let mut best: Option<EdgeCandidate> = None;

    for count in 1..=config.max_edge_items {
        let target = edge_length - (count - 1) as f64 * config.padding;
        let Some((items, score)) = candidates_for_count(arena, target, count, config) else {
            continue;
        };

        let mut crop = edge_length / count as f64 - (count - 1) as f64 * config.padding;
        for &id in &items {
            crop = crop.min(arena.item(id).size);
        }
        if crop <= 0.0 {
            continue;
        }

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(EdgeCandidate { items, crop, score });
        }
    }

    best
}
