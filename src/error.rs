use thiserror::Error;

use crate::grid::arena::RectId;

/// Errors surfaced by the grid layout pipeline.
///
/// Everything except `Parse` is a configuration error: the input or the options
/// cannot produce a layout. Missing edge candidates and scale-floor rejections are
/// normal outcomes and never show up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid configuration: `{field}` = {value} is out of range")]
    InvalidConfig { field: &'static str, value: f64 },
    #[error("Item {index} has invalid size {size} (must be finite and > 0)")]
    InvalidSize { index: usize, size: f64 },
    #[error("Packing deadlock: rectangle {rect:?} is {width:.1}px wide, grid is {grid_width:.1}px")]
    PackingDeadlock {
        rect: RectId,
        width: f64,
        grid_width: f64,
    },
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
}
