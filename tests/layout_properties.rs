use std::collections::HashSet;

use squaregrid::{
    compute_layout, sample_items, validate_layout, GridConfig, GridLayout, LayoutError, RawItem,
};

const EPS: f64 = 1e-6;

/// Deterministic sizes in `lo..hi` from a 64-bit LCG.
fn lcg_items(count: usize, lo: u64, hi: u64, mut state: u64) -> Vec<RawItem> {
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            RawItem::new((lo + (state >> 33) % (hi - lo)) as f64)
        })
        .collect()
}

fn assert_clean(layout: &GridLayout, config: &GridConfig) {
    let report = validate_layout(layout, config);
    assert!(report.is_ok(), "violations: {:?}", report.violations);
}

#[test]
fn sample_fits_in_a_single_rectangle_on_one_row() {
    let config = GridConfig::default();
    let layout = compute_layout(&sample_items(), &config).unwrap();

    assert_eq!(layout.rects.len(), 1);
    assert_eq!(layout.rows, 1);
    let rect = layout.rects[0];
    assert_eq!(rect.x, 0.0);
    assert_eq!(rect.item_count, 5);
    assert!(rect.width < config.grid_width);

    // leftover space is all on the right
    let right = layout
        .placements
        .iter()
        .map(|p| p.x + p.crop)
        .fold(0.0, f64::max);
    assert!(right <= rect.width + EPS);
    assert!(layout.placements.iter().all(|p| p.rect == rect.id));
    assert_clean(&layout, &config);
}

#[test]
fn oversized_item_is_a_packing_deadlock() {
    let err = compute_layout(&[RawItem::new(700.0)], &GridConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::PackingDeadlock { width, grid_width, .. }
            if width == 700.0 && grid_width == 600.0
    ));
}

#[test]
fn empty_input_gives_empty_layout() {
    let layout = compute_layout(&[], &GridConfig::default()).unwrap();
    assert!(layout.placements.is_empty());
    assert!(layout.rects.is_empty());
}

#[test]
fn equal_pair_is_padded_exactly_once() {
    let config = GridConfig::default();
    let layout = compute_layout(&[RawItem::new(100.0), RawItem::new(100.0)], &config).unwrap();

    assert_eq!(layout.rects.len(), 1);
    assert_eq!(layout.rects[0].width, 2.0 * 100.0 + config.padding);
    assert_eq!(layout.rects[0].height, 100.0);

    let (a, b) = (&layout.placements[0], &layout.placements[1]);
    assert_eq!(a.crop, 100.0);
    assert_eq!(b.crop, 100.0);
    assert_eq!(a.y, b.y);
    assert_eq!(b.x - (a.x + a.crop), config.padding);
}

#[test]
fn invalid_config_fails_fast() {
    let config = GridConfig {
        grid_width: -5.0,
        ..GridConfig::default()
    };
    assert!(matches!(
        compute_layout(&sample_items(), &config),
        Err(LayoutError::InvalidConfig { field: "grid_width", .. })
    ));
    assert!(matches!(
        compute_layout(&[RawItem::new(-1.0)], &GridConfig::default()),
        Err(LayoutError::InvalidSize { index: 0, .. })
    ));
}

#[test]
fn hundred_items_hold_every_invariant() {
    let config = GridConfig::default();
    let items = lcg_items(100, 30, 100, 7);
    let layout = compute_layout(&items, &config).unwrap();

    assert_eq!(layout.placements.len(), items.len());
    assert!(layout.rows > 1);
    for (p, item) in layout.placements.iter().zip(&items) {
        assert_eq!(p.size, item.size);
        assert!(p.crop > 0.0 && p.crop <= p.size);
        assert!(p.x >= 0.0 && p.x + p.crop <= config.grid_width + EPS);
    }
    for r in &layout.rects {
        assert!(r.score >= config.max_rect_scaledown && r.score <= 1.0);
        assert!(r.width <= config.max_width() + EPS);
    }

    // every item in exactly one rectangle, no duplicates
    let ids: HashSet<_> = layout.placements.iter().map(|p| p.item).collect();
    assert_eq!(ids.len(), items.len());
    let total: usize = layout.rects.iter().map(|r| r.item_count).sum();
    assert_eq!(total, items.len());

    assert_clean(&layout, &config);
}

#[test]
fn other_configurations_stay_overlap_free() {
    let configs = [
        GridConfig {
            padding: 0.0,
            ..GridConfig::default()
        },
        GridConfig {
            reduce_visual_monotony: false,
            ..GridConfig::default()
        },
        GridConfig {
            grid_width: 900.0,
            padding: 4.0,
            ..GridConfig::default()
        },
    ];
    for (seed, config) in configs.iter().enumerate() {
        let items = lcg_items(150, 40, 250, seed as u64 + 1);
        let layout = compute_layout(&items, config).unwrap();
        assert_eq!(layout.placements.len(), items.len());
        assert_clean(&layout, config);
    }
}

#[test]
fn low_floors_stay_inside_the_grid_without_overlap() {
    let loose = GridConfig {
        grid_width: 1000.0,
        padding: 2.0,
        max_rect_width: 1.0,
        max_rect_scaledown: 0.6,
        max_square_scaledown: 0.7,
        ..GridConfig::default()
    };
    let configs = [
        loose.clone(),
        GridConfig {
            max_edge_items: 10,
            ..loose.clone()
        },
        GridConfig {
            padding: 6.0,
            max_rect_scaledown: 0.5,
            ..loose
        },
    ];
    for config in &configs {
        for seed in 1..=24 {
            let items = lcg_items(80, 20, 300, seed);
            let layout = compute_layout(&items, config).unwrap();
            assert_eq!(layout.placements.len(), items.len());
            for p in &layout.placements {
                assert!(p.x + p.crop <= config.grid_width + EPS, "seed {seed}");
            }
            for r in layout.rects.iter().filter(|r| r.item_count > 1) {
                assert!(r.width <= config.max_width() + EPS, "seed {seed}");
            }
            assert_clean(&layout, config);
        }
    }
}

#[test]
fn identical_input_gives_identical_output() {
    let items = lcg_items(80, 30, 100, 42);
    let config = GridConfig::default();
    let a = compute_layout(&items, &config).unwrap();
    let b = compute_layout(&items, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn taller_rectangles_come_first() {
    let config = GridConfig::default();
    let layout = compute_layout(&lcg_items(60, 30, 100, 3), &config).unwrap();

    // the first row is started by the tallest rectangle at the left edge
    let tallest = layout
        .rects
        .iter()
        .copied()
        .max_by(|a, b| a.height.total_cmp(&b.height))
        .unwrap();
    let first = layout
        .rects
        .iter()
        .copied()
        .find(|r| r.x == 0.0 && r.y == config.padding)
        .unwrap();
    assert_eq!(first.height, tallest.height);
}
