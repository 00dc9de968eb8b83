//! Layout calculation for print-ready interiors and covers
//!
//! - Inch-space dimensions (spine, cover sheet, interior leaf)
//! - Point-space geometry for renderers (trim, panels, safe areas)

mod calc;
mod geometry;
mod types;

pub use calc::*;
pub use geometry::*;
pub use types::*;
