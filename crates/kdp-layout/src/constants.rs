//! Shared constants for print layout
//!
//! Physical print-vendor constants live on [`crate::PrintSpec`]; this module
//! holds unit conversion and the drawing constants used by proof templates.

// =============================================================================
// Unit Conversion
// =============================================================================

/// PDF user-space points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert inches to PDF points.
///
/// No rounding is applied; callers that need device units round at the
/// boundary so repeated conversions don't accumulate error.
#[inline]
pub fn inches_to_points(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

// =============================================================================
// Template Guides
// =============================================================================

/// Line width for the trim guide (points)
pub const TRIM_GUIDE_WIDTH: f64 = 0.5;

/// Line width for the safe-area guide (points)
pub const SAFE_GUIDE_WIDTH: f64 = 0.5;

/// Line width for spine fold guides (points)
pub const SPINE_GUIDE_WIDTH: f64 = 0.75;

/// Dash pattern for trim and safe guides: 6pt dash, 3pt gap
pub const GUIDE_DASH_PATTERN: (f64, f64) = (6.0, 3.0);

