use rayon::prelude::*;

use crate::layout::{GridConfig, GridLayout};

/// Overlap smaller than this (px) is float noise, not a collision.
pub const OVERLAP_TOLERANCE: f64 = 1e-6;

/// A broken layout property.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    CropOutOfRange { item: usize, crop: f64, size: f64 },
    ScoreOutOfRange { rect: usize, score: f64 },
    RectTooWide { rect: usize, width: f64, max: f64 },
    MembershipMismatch { rect: usize, listed: usize, claimed: usize },
    ItemOverlap { a: usize, b: usize },
    RectOverlap { a: usize, b: usize },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Bounds {
    fn overlaps(&self, other: &Bounds) -> bool {
        let dx = (self.x + self.w).min(other.x + other.w) - self.x.max(other.x);
        let dy = (self.y + self.h).min(other.y + other.h) - self.y.max(other.y);
        dx > OVERLAP_TOLERANCE && dy > OVERLAP_TOLERANCE
    }
}

/// Pairs `(i, j)` with `i < j` whose bounds intersect. Runs on the rayon pool;
/// output is sorted so it does not depend on scheduling.
fn overlapping_pairs(bounds: &[Bounds]) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = (0..bounds.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            ((i + 1)..bounds.len())
                .filter(move |&j| bounds[i].overlaps(&bounds[j]))
                .map(move |j| (i, j))
        })
        .collect();
    pairs.sort_unstable();
    pairs
}

/// Check a finished layout against the grid invariants.
pub fn validate_layout(layout: &GridLayout, config: &GridConfig) -> ValidationReport {
    let mut violations = Vec::new();

    for (i, p) in layout.placements.iter().enumerate() {
        if !(p.crop > 0.0 && p.crop <= p.size) {
            violations.push(Violation::CropOutOfRange {
                item: i,
                crop: p.crop,
                size: p.size,
            });
        }
    }

    let mut claimed = vec![0usize; layout.rects.len()];
    for p in &layout.placements {
        if let Some(c) = claimed.get_mut(p.rect.index()) {
            *c += 1;
        }
    }

    let max = config.max_width();
    for (i, r) in layout.rects.iter().enumerate() {
        if !(r.score >= config.max_rect_scaledown && r.score <= 1.0) {
            violations.push(Violation::ScoreOutOfRange {
                rect: i,
                score: r.score,
            });
        }
        // A lone seed can't be shrunk, so only grown rectangles are held to the cap
        if r.item_count > 1 && r.width > max {
            violations.push(Violation::RectTooWide {
                rect: i,
                width: r.width,
                max,
            });
        }
        if claimed[i] != r.item_count {
            violations.push(Violation::MembershipMismatch {
                rect: i,
                listed: r.item_count,
                claimed: claimed[i],
            });
        }
    }

    let items: Vec<Bounds> = layout
        .placements
        .iter()
        .map(|p| Bounds {
            x: p.x,
            y: p.y,
            w: p.crop,
            h: p.crop,
        })
        .collect();
    violations.extend(
        overlapping_pairs(&items)
            .into_iter()
            .map(|(a, b)| Violation::ItemOverlap { a, b }),
    );

    let rects: Vec<Bounds> = layout
        .rects
        .iter()
        .map(|r| Bounds {
            x: r.x,
            y: r.y,
            w: r.width,
            h: r.height,
        })
        .collect();
    violations.extend(
        overlapping_pairs(&rects)
            .into_iter()
            .map(|(a, b)| Violation::RectOverlap { a, b }),
    );

    if !violations.is_empty() {
        tracing::warn!("Layout validation found {} violations", violations.len());
    }

    ValidationReport { violations }
}
