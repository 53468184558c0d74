use compact_str::CompactString;

/// Index into the arena's item `Vec`. Uses u32 to keep handles small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index into the arena's rectangle `Vec`, assigned in build order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RectId(pub u32);

impl RectId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single square item stored in the arena.
#[derive(Debug, Clone)]
pub struct Item {
    /// Intrinsic edge length (px). Never changes.
    pub size: f64,
    /// Rendered edge length (px). Starts at `size` and only ever shrinks.
    pub crop: f64,
    /// Whether the item has joined a rectangle
    pub placed: bool,
    /// Owning rectangle, set together with `placed`
    pub rect: Option<RectId>,
    /// Absolute position, filled in by the position pass
    pub x: f64,
    pub y: f64,
    /// Opaque caller data (an image URL, a file name, ...)
    pub label: Option<CompactString>,
}

/// Which side of a rectangle an edge was appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Appended on the right, grows the width
    Vertical,
    /// Appended at the bottom, grows the height
    Horizontal,
}

impl Align {
    pub fn flipped(self) -> Self {
        match self {
            Align::Vertical => Align::Horizontal,
            Align::Horizontal => Align::Vertical,
        }
    }
}

/// A run of same-crop items appended together to one side of a rectangle.
#[derive(Debug, Clone)]
pub struct Edge {
    pub items: Vec<ItemId>,
    pub align: Align,
    /// Selection score in (0, 1]
    pub score: f64,
}

/// A block of items grown from one seed square.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub id: RectId,
    pub width: f64,
    pub height: f64,
    /// Cumulative scale-down factor applied to the whole block
    pub score: f64,
    /// Edges in append order; `edges[0]` is the seed
    pub edges: Vec<Edge>,
    pub x: f64,
    pub y: f64,
    pub packed: bool,
}

impl Rectangle {
    /// Iterate over every item in append order.
    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.edges.iter().flat_map(|e| e.items.iter().copied())
    }

    pub fn item_count(&self) -> usize {
        self.edges.iter().map(|e| e.items.len()).sum()
    }

    /// Fixed padding along (width, height) contributed by appended edges.
    pub fn padding_overhead(&self, padding: f64) -> (f64, f64) {
        let mut pad_w = 0.0;
        let mut pad_h = 0.0;
        for edge in self.edges.iter().skip(1) {
            match edge.align {
                Align::Vertical => pad_w += padding,
                Align::Horizontal => pad_h += padding,
            }
        }
        (pad_w, pad_h)
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Items and rectangles stored as flat arenas addressed by handles.
#[derive(Debug, Clone, Default)]
pub struct ItemArena {
    pub items: Vec<Item>,
    pub rects: Vec<Rectangle>,
}

impl ItemArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unplaced item. Returns its handle.
    pub fn add_item(&mut self, size: f64, label: Option<CompactString>) -> ItemId {
        let id = ItemId(self.items.len() as u32);
        self.items.push(Item {
            size,
            crop: size,
            placed: false,
            rect: None,
            x: 0.0,
            y: 0.0,
            label,
        });
        id
    }

    /// Start a new rectangle from `seed`, committing the seed to it.
    pub fn open_rect(&mut self, seed: ItemId) -> RectId {
        let id = RectId(self.rects.len() as u32);
        let size = self.items[seed.index()].size;
        self.commit(seed, id, size);
        self.rects.push(Rectangle {
            id,
            width: size,
            height: size,
            score: 1.0,
            edges: vec![Edge {
                items: vec![seed],
                align: Align::Vertical,
                score: 1.0,
            }],
            x: 0.0,
            y: 0.0,
            packed: false,
        });
        id
    }

    /// Mark `item` as belonging to `rect` with the given crop.
    pub fn commit(&mut self, item: ItemId, rect: RectId, crop: f64) {
        let it = &mut self.items[item.index()];
        debug_assert!(!it.placed, "item {:?} committed twice", item);
        it.crop = crop.min(it.crop);
        it.placed = true;
        it.rect = Some(rect);
    }

    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.index()]
    }

    pub fn item_mut(&mut self, id: ItemId) -> &mut Item {
        &mut self.items[id.index()]
    }

    pub fn rect(&self, id: RectId) -> &Rectangle {
        &self.rects[id.index()]
    }

    pub fn rect_mut(&mut self, id: RectId) -> &mut Rectangle {
        &mut self.rects[id.index()]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the handles of items not yet in any rectangle, in input order.
    pub fn unplaced(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, it)| !it.placed)
            .map(|(i, _)| ItemId(i as u32))
    }

    pub fn rect_ids(&self) -> impl Iterator<Item = RectId> {
        (0..self.rects.len() as u32).map(RectId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_rect_commits_seed_and_numbers_in_order() {
        let mut arena = ItemArena::new();
        let a = arena.add_item(40.0, None);
        let b = arena.add_item(30.0, None);

        let r0 = arena.open_rect(b);
        let r1 = arena.open_rect(a);
        assert_eq!(r0, RectId(0));
        assert_eq!(r1, RectId(1));
        assert_eq!(arena.item(b).rect, Some(r0));
        assert!(arena.item(a).placed);
        assert_eq!(arena.rect(r1).width, 40.0);
        assert_eq!(arena.unplaced().count(), 0);
    }

    #[test]
    fn padding_overhead_ignores_seed_edge() {
        let mut arena = ItemArena::new();
        let a = arena.add_item(10.0, None);
        let r = arena.open_rect(a);
        let rect = arena.rect_mut(r);
        rect.edges.push(Edge {
            items: vec![],
            align: Align::Vertical,
            score: 1.0,
        });
        rect.edges.push(Edge {
            items: vec![],
            align: Align::Horizontal,
            score: 1.0,
        });
        rect.edges.push(Edge {
            items: vec![],
            align: Align::Horizontal,
            score: 1.0,
        });
        assert_eq!(rect.padding_overhead(2.0), (2.0, 4.0));
    }
}
