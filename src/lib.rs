// Public library interface for squaregrid
// The binaries and integration tests use the core modules through this

pub mod cli;
pub mod error;
pub mod grid;
pub mod input;
pub mod layout;
pub mod validate;

pub use error::LayoutError;
pub use input::{parse_items, sample_items, RawItem};
pub use layout::{compute_layout, GridConfig, GridLayout, Placement, RectPlacement};
pub use validate::{validate_layout, ValidationReport, Violation};
