//! Inch-space geometry for interiors and covers
//!
//! Every function here is pure: no I/O, no shared state, safe to call from
//! any thread. Results are recomputed on demand rather than cached.

use crate::catalog::{PrintSpec, TrimSize};
use crate::types::{LayoutError, LayoutResult, PaperType};

use super::types::{CoverDimensions, PageDimensions};

/// Spine width in inches: page count times per-page paper thickness.
pub fn calculate_spine_width(page_count: u32, paper_type: PaperType) -> LayoutResult<f64> {
    if page_count == 0 {
        return Err(LayoutError::InvalidPageCount(i64::from(page_count)));
    }
    Ok(f64::from(page_count) * PrintSpec::KDP.thickness_per_page(paper_type))
}

/// Interior leaf size, with bleed added symmetrically on both axes when requested.
pub fn calculate_page_dimensions(trim_size: TrimSize, include_bleed: bool) -> PageDimensions {
    let trim = trim_size.dimensions_in();
    let bleed = PrintSpec::KDP.bleed_for(include_bleed);

    PageDimensions {
        width: trim.width + bleed * 2.0,
        height: trim.height + bleed * 2.0,
    }
}

/// Single-sheet cover: back panel + spine + front panel, bleed on every outer edge.
///
/// A spine narrower than [`PrintSpec::min_spine_gutter`] is not clamped; the
/// geometry stays physically accurate and warning the user is up to the caller.
pub fn calculate_cover_dimensions(
    trim_size: TrimSize,
    page_count: u32,
    paper_type: PaperType,
    include_bleed: bool,
) -> LayoutResult<CoverDimensions> {
    let trim = trim_size.dimensions_in();
    let spine_width = calculate_spine_width(page_count, paper_type)?;
    let bleed = PrintSpec::KDP.bleed_for(include_bleed);

    Ok(CoverDimensions {
        width: trim.width * 2.0 + spine_width + bleed * 2.0,
        height: trim.height + bleed * 2.0,
        spine_width,
    })
}

/// Whether a spine of this width is narrower than the vendor's minimum gutter
pub fn spine_below_minimum_gutter(spine_width: f64) -> bool {
    spine_width < PrintSpec::KDP.min_spine_gutter
}
