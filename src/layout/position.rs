use crate::grid::arena::{Align, ItemArena, ItemId, RectId};

/// Offsets of every item of `rect` relative to its top-left corner, seed first.
pub fn item_offsets(arena: &ItemArena, rect: RectId, padding: f64) -> Vec<(ItemId, f64, f64)> {
    let r = arena.rect(rect);
    let Some(&seed) = r.edges.first().and_then(|e| e.items.first()) else {
        return Vec::new();
    };

    let mut offsets = Vec::with_capacity(r.item_count());
    offsets.push((seed, 0.0, 0.0));
    let mut x = arena.item(seed).crop + padding;
    let mut y = x;

    for edge in r.edges.iter().skip(1) {
        let Some(&first) = edge.items.first() else {
            continue;
        };
        let step = arena.item(first).crop + padding;

        for (k, &id) in edge.items.iter().enumerate() {
            let along = k as f64 * step;
            offsets.push(match edge.align {
                Align::Vertical => (id, x, along),
                Align::Horizontal => (id, along, y),
            });
        }

        match edge.align {
            Align::Vertical => x += step,
            Align::Horizontal => y += step,
        }
    }
    offsets
}

/// Right and bottom of the item content of `rect`, relative to its corner.
pub fn content_extent(arena: &ItemArena, rect: RectId, padding: f64) -> (f64, f64) {
    item_offsets(arena, rect, padding)
        .into_iter()
        .fold((0.0, 0.0), |(w, h), (id, x, y)| {
            let crop = arena.item(id).crop;
            (f64::max(w, x + crop), f64::max(h, y + crop))
        })
}

/// Absolute coordinates for every item of a packed rectangle.
pub fn position_items(arena: &mut ItemArena, rect: RectId, padding: f64) {
    let r = arena.rect(rect);
    let (ox, oy) = (r.x, r.y);
    for (id, x, y) in item_offsets(arena, rect, padding) {
        let item = arena.item_mut(id);
        item.x = ox + x;
        item.y = oy + y;
    }
}

/// Position the items of every rectangle.
pub fn position_all(arena: &mut ItemArena, padding: f64) {
    let ids: Vec<_> = arena.rect_ids().collect();
    for id in ids {
        position_items(arena, id, padding);
    }
}
