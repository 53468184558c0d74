pub mod builder;
pub mod edge;
pub mod pack;
pub mod position;
pub mod scale;
pub mod select;

use compact_str::CompactString;

use crate::error::LayoutError;
use crate::grid::{self, arena::ItemId, arena::RectId};
use crate::input::RawItem;

/// Where one item ended up and how large it is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub item: ItemId,
    pub rect: RectId,
    pub x: f64,
    pub y: f64,
    /// Rendered edge length
    pub crop: f64,
    /// Intrinsic edge length
    pub size: f64,
    pub label: Option<CompactString>,
}

impl Placement {
    /// Fraction of the intrinsic size that is shown (1.0 = uncropped).
    pub fn scale(&self) -> f64 {
        self.crop / self.size
    }
}

/// A packed rectangle of items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPlacement {
    pub id: RectId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub score: f64,
    pub item_count: usize,
}

/// The full layout result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLayout {
    /// One entry per input item, in input order
    pub placements: Vec<Placement>,
    /// Rectangles in build order (index == `RectId`)
    pub rects: Vec<RectPlacement>,
    /// Number of packing rows
    pub rows: usize,
    grid_width: f64,
}

impl GridLayout {
    pub fn width(&self) -> f64 {
        self.grid_width
    }

    /// Bottom edge of the lowest rectangle.
    pub fn height(&self) -> f64 {
        self.rects
            .iter()
            .map(|r| r.y + r.height)
            .fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Configuration for the square grid layout.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Gap between neighbouring items and rectangles (px)
    pub padding: f64,
    /// Worst fit an item may have to join an edge (0..1]
    pub max_square_scaledown: f64,
    /// Lowest cumulative shrink a rectangle may take (0..1]
    pub max_rect_scaledown: f64,
    /// Widest a grown rectangle may get, as a fraction of `grid_width`
    pub max_rect_width: f64,
    /// Total grid width (px)
    pub grid_width: f64,
    /// Flatten multi-item edge scores so edges get split more often
    pub reduce_visual_monotony: bool,
    /// Most items tried on a single edge
    pub max_edge_items: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            padding: 1.0,
            // worst total item shrink is the product of these two
            max_square_scaledown: 0.8,
            max_rect_scaledown: 0.8,
            max_rect_width: 0.4,
            grid_width: 600.0,
            reduce_visual_monotony: true,
            max_edge_items: 6,
        }
    }
}

impl GridConfig {
    /// Width cap for rectangles in pixels.
    pub fn max_width(&self) -> f64 {
        self.max_rect_width * self.grid_width
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let unit = |field: &'static str, value: f64| {
            if value > 0.0 && value <= 1.0 {
                Ok(())
            } else {
                Err(LayoutError::InvalidConfig { field, value })
            }
        };

        if !(self.grid_width.is_finite() && self.grid_width > 0.0) {
            return Err(LayoutError::InvalidConfig {
                field: "grid_width",
                value: self.grid_width,
            });
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(LayoutError::InvalidConfig {
                field: "padding",
                value: self.padding,
            });
        }
        unit("max_square_scaledown", self.max_square_scaledown)?;
        unit("max_rect_scaledown", self.max_rect_scaledown)?;
        unit("max_rect_width", self.max_rect_width)?;
        if self.max_edge_items == 0 {
            return Err(LayoutError::InvalidConfig {
                field: "max_edge_items",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// Lay out `items` into a grid: build rectangles, pack them into rows and
/// position every item.
pub fn compute_layout(items: &[RawItem], config: &GridConfig) -> Result<GridLayout, LayoutError> {
    config.validate()?;

    let mut arena = grid::build_arena(items)?;
    if arena.is_empty() {
        return Ok(GridLayout {
            grid_width: config.grid_width,
            ..GridLayout::default()
        });
    }

    let built = builder::build_rects(&mut arena, config);
    tracing::info!(
        "Built {} rectangles from {} items",
        built.len(),
        arena.len()
    );

    let rows = pack::pack_rects(&mut arena, config)?;
    position::position_all(&mut arena, config.padding);

    let placements = arena
        .items
        .iter()
        .enumerate()
        .filter_map(|(i, it)| {
            Some(Placement {
                item: ItemId(i as u32),
                rect: it.rect?,
                x: it.x,
                y: it.y,
                crop: it.crop,
                size: it.size,
                label: it.label.clone(),
            })
        })
        .collect();

    let rects = arena
        .rects
        .iter()
        .map(|r| RectPlacement {
            id: r.id,
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
            score: r.score,
            item_count: r.item_count(),
        })
        .collect();

    let layout = GridLayout {
        placements,
        rects,
        rows,
        grid_width: config.grid_width,
    };
    tracing::info!(
        "Layout computed: {} rows, {:.0}x{:.0}px",
        layout.rows,
        layout.width(),
        layout.height()
    );

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
        assert_eq!(GridConfig::default().max_width(), 240.0);
    }

    #[test]
    fn rejects_out_of_range_options() {
        let bad = GridConfig {
            grid_width: 0.0,
            ..GridConfig::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(LayoutError::InvalidConfig {
                field: "grid_width",
                ..
            })
        ));

        let bad = GridConfig {
            max_rect_scaledown: 1.5,
            ..GridConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = GridConfig {
            padding: -1.0,
            ..GridConfig::default()
        };
        assert!(bad.validate().is_err());

        let bad = GridConfig {
            max_edge_items: 0,
            ..GridConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn empty_input_is_an_empty_layout() {
        let layout = compute_layout(&[], &GridConfig::default()).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.height(), 0.0);
        assert_eq!(layout.width(), 600.0);
    }

    #[test]
    fn placements_carry_labels_and_scale() {
        let items = [RawItem::labeled(100.0, "a.png"), RawItem::new(100.0)];
        let layout = compute_layout(&items, &GridConfig::default()).unwrap();
        assert_eq!(layout.placements[0].label.as_deref(), Some("a.png"));
        assert_eq!(layout.placements[1].scale(), 1.0);
        assert_eq!(layout.rects.len(), 1);
    }
}
