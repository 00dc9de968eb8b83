//! Proof guides as PDF content stream operations
//!
//! Trim and safe-area guides are dashed rectangles; spine folds are solid
//! lines running the full sheet height.

use crate::constants::{GUIDE_DASH_PATTERN, SAFE_GUIDE_WIDTH, SPINE_GUIDE_WIDTH, TRIM_GUIDE_WIDTH};
use crate::layout::{CoverGeometry, InteriorGeometry, Rect};

/// An RGB stroke colour, components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub f64, pub f64, pub f64);

impl Rgb {
    pub const RED: Rgb = Rgb(1.0, 0.0, 0.0);
    pub const BLUE: Rgb = Rgb(0.0, 0.4, 1.0);
    pub const MAGENTA: Rgb = Rgb(0.85, 0.0, 0.85);

    /// Luminance-weighted grey for black-and-white proofs
    pub fn to_gray(self) -> Rgb {
        let y = 0.299 * self.0 + 0.587 * self.1 + 0.114 * self.2;
        Rgb(y, y, y)
    }
}

/// Colours for each guide kind
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuideColors {
    pub trim: Rgb,
    pub safe: Rgb,
    pub spine: Rgb,
}

impl Default for GuideColors {
    fn default() -> Self {
        Self {
            trim: Rgb::RED,
            safe: Rgb::BLUE,
            spine: Rgb::MAGENTA,
        }
    }
}

impl GuideColors {
    pub fn to_gray(self) -> Self {
        Self {
            trim: self.trim.to_gray(),
            safe: self.safe.to_gray(),
            spine: self.spine.to_gray(),
        }
    }
}

/// Guides for one interior page
pub fn interior_guides(geometry: &InteriorGeometry, colors: &GuideColors) -> String {
    let mut ops = String::new();
    ops.push_str("q\n");

    if geometry.include_bleed {
        ops.push_str(&dashed_rect(&geometry.trim, colors.trim, TRIM_GUIDE_WIDTH));
    }
    ops.push_str(&dashed_rect(&geometry.safe, colors.safe, SAFE_GUIDE_WIDTH));

    ops.push_str("Q\n");
    ops
}

/// Guides for a wrap-around cover
pub fn cover_guides(geometry: &CoverGeometry, colors: &GuideColors) -> String {
    let mut ops = String::new();
    ops.push_str("q\n");

    if geometry.include_bleed {
        ops.push_str(&dashed_rect(&geometry.trim, colors.trim, TRIM_GUIDE_WIDTH));
    }
    ops.push_str(&dashed_rect(&geometry.back_safe, colors.safe, SAFE_GUIDE_WIDTH));
    ops.push_str(&dashed_rect(&geometry.front_safe, colors.safe, SAFE_GUIDE_WIDTH));
    ops.push_str(&spine_folds(geometry, colors.spine));

    ops.push_str("Q\n");
    ops
}

fn dashed_rect(rect: &Rect, color: Rgb, width: f64) -> String {
    let (dash, gap) = GUIDE_DASH_PATTERN;
    format!(
        "{} w\n[{} {}] 0 d\n{} RG\n{:.4} {:.4} {:.4} {:.4} re S\n[] 0 d\n",
        width,
        dash,
        gap,
        stroke_color(color),
        rect.x,
        rect.y,
        rect.width,
        rect.height
    )
}

fn spine_folds(geometry: &CoverGeometry, color: Rgb) -> String {
    let mut ops = format!("{} w\n{} RG\n", SPINE_GUIDE_WIDTH, stroke_color(color));
    for x in [geometry.spine.x, geometry.spine.right()] {
        ops.push_str(&format!(
            "{:.4} 0 m {:.4} {:.4} l S\n",
            x, x, geometry.sheet_height
        ));
    }
    ops
}

fn stroke_color(color: Rgb) -> String {
    format!("{:.3} {:.3} {:.3}", color.0, color.1, color.2)
}
