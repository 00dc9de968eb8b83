//! Point-space geometry handed to renderers
//!
//! Renderers only ever see numbers in points and flags; trim identifiers
//! stay on this side of the seam.

use crate::catalog::{PrintSpec, TrimSize};
use crate::constants::inches_to_points;
use crate::types::{LayoutResult, PaperType};

use super::calc::{calculate_cover_dimensions, calculate_page_dimensions, spine_below_minimum_gutter};
use super::types::{CoverGeometry, InteriorGeometry, Rect};

/// Interior page geometry: sheet, trim box and safe area.
pub fn interior_geometry(trim_size: TrimSize, include_bleed: bool) -> InteriorGeometry {
    let kdp = PrintSpec::KDP;
    let page = calculate_page_dimensions(trim_size, include_bleed);
    let trim = trim_size.dimensions_in();

    let page_width = inches_to_points(page.width);
    let page_height = inches_to_points(page.height);
    let bleed = inches_to_points(kdp.bleed_for(include_bleed));
    let safe_margin = inches_to_points(kdp.safe_margin);

    let trim_rect = Rect::new(
        bleed,
        bleed,
        inches_to_points(trim.width),
        inches_to_points(trim.height),
    );

    // Safe area is inset from the sheet edge by bleed + margin on every side.
    let inset = bleed + safe_margin;
    let safe = Rect::new(
        inset,
        inset,
        page_width - 2.0 * inset,
        page_height - 2.0 * inset,
    );

    log::trace!(
        "interior geometry for {}: {}x{}pt, bleed {}pt",
        trim_size,
        page_width,
        page_height,
        bleed
    );

    InteriorGeometry {
        page_width,
        page_height,
        bleed,
        safe_margin,
        trim: trim_rect,
        safe,
        include_bleed,
    }
}

/// Cover geometry: sheet, panel and spine rects, per-panel safe areas.
pub fn cover_geometry(
    trim_size: TrimSize,
    page_count: u32,
    paper_type: PaperType,
    include_bleed: bool,
) -> LayoutResult<CoverGeometry> {
    let kdp = PrintSpec::KDP;
    let dims = calculate_cover_dimensions(trim_size, page_count, paper_type, include_bleed)?;
    let trim = trim_size.dimensions_in();

    let sheet_width = inches_to_points(dims.width);
    let sheet_height = inches_to_points(dims.height);
    let spine_width = inches_to_points(dims.spine_width);
    let bleed = inches_to_points(kdp.bleed_for(include_bleed));
    let safe_margin = inches_to_points(kdp.safe_margin);
    let panel_width = inches_to_points(trim.width);
    let panel_height = inches_to_points(trim.height);

    let back_left = bleed;
    let spine_left = bleed + panel_width;
    let front_left = bleed + panel_width + spine_width;

    let back_panel = Rect::new(back_left, bleed, panel_width, panel_height);
    let spine = Rect::new(spine_left, bleed, spine_width, panel_height);
    let front_panel = Rect::new(front_left, bleed, panel_width, panel_height);
    let trim_rect = Rect::new(bleed, bleed, panel_width * 2.0 + spine_width, panel_height);

    let below_gutter = spine_below_minimum_gutter(dims.spine_width);
    if below_gutter {
        log::warn!(
            "spine is {:.4}\" for {} pages on {} paper, under the {}\" minimum; spine text may not fit",
            dims.spine_width,
            page_count,
            paper_type,
            kdp.min_spine_gutter
        );
    }

    Ok(CoverGeometry {
        sheet_width,
        sheet_height,
        bleed,
        safe_margin,
        spine_width,
        trim: trim_rect,
        back_panel,
        spine,
        front_panel,
        back_safe: back_panel.inset(safe_margin),
        front_safe: front_panel.inset(safe_margin),
        include_bleed,
        spine_below_minimum_gutter: below_gutter,
    })
}
