pub mod arena;

use self::arena::ItemArena;
use crate::error::LayoutError;
use crate::input::RawItem;

/// Build an ItemArena from the raw input list, rejecting unusable sizes.
/// Item handles follow input order, which is also the tie-break order.
pub fn build_arena(entries: &[RawItem]) -> Result<ItemArena, LayoutError> {
    let mut arena = ItemArena::new();
    if entries.is_empty() {
        return Ok(arena);
    }

    for (index, entry) in entries.iter().enumerate() {
        if !entry.size.is_finite() || entry.size <= 0.0 {
            return Err(LayoutError::InvalidSize {
                index,
                size: entry.size,
            });
        }
        arena.add_item(entry.size, entry.label.clone());
    }

    let largest = entries.iter().map(|e| e.size).fold(0.0, f64::max);
    let smallest = entries.iter().map(|e| e.size).fold(f64::INFINITY, f64::min);
    tracing::info!(
        "Arena built: {} items (sizes {:.1}..{:.1})",
        arena.len(),
        smallest,
        largest
    );

    Ok(arena)
}
