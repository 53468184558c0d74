use crate::grid::arena::{ItemArena, ItemId};

/// Largest unplaced item, or `None` once everything is in a rectangle.
/// Equal sizes keep input order: the first one wins.
pub fn pick_largest(arena: &ItemArena) -> Option<ItemId> {
    let mut best: Option<ItemId> = None;
    for id in arena.unplaced() {
        match best {
            Some(b) if arena.item(id).size <= arena.item(b).size => {}
            _ => best = Some(id),
        }
    }
    best
}
