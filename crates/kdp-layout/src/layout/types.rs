//! Layout data types
//!
//! Inch-space results come out of the calculator; point-space geometry is
//! what a renderer consumes.

/// Interior leaf size in inches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageDimensions {
    pub width: f64,
    pub height: f64,
}

/// Full wrap-around cover sheet in inches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CoverDimensions {
    pub width: f64,
    pub height: f64,
    pub spine_width: f64,
}

/// A rectangular area in points, origin at the bottom-left of the sheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (bottom edge)
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Shrink uniformly on all four sides
    pub fn inset(&self, amount: f64) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }

    /// True if `other` lies entirely inside this rect (edges may touch).
    ///
    /// Edges summed from panels and edges scaled from inch totals can differ
    /// in the last bits, so a micro-point of slack is allowed.
    pub fn contains(&self, other: &Rect) -> bool {
        const SLACK: f64 = 1e-6;
        other.x >= self.x - SLACK
            && other.y >= self.y - SLACK
            && other.right() <= self.right() + SLACK
            && other.top() <= self.top() + SLACK
    }

    /// `[x0 y0 x1 y1]`, the PDF box array order
    pub fn to_box(&self) -> [f64; 4] {
        [self.x, self.y, self.right(), self.top()]
    }
}

/// Everything a renderer needs to paint one interior page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteriorGeometry {
    pub page_width: f64,
    pub page_height: f64,
    pub bleed: f64,
    pub safe_margin: f64,
    /// Final cut page inside the bleed
    pub trim: Rect,
    /// Area essential content must stay within
    pub safe: Rect,
    pub include_bleed: bool,
}

impl InteriorGeometry {
    /// The whole sheet including bleed
    pub fn media(&self) -> Rect {
        Rect::new(0.0, 0.0, self.page_width, self.page_height)
    }
}

/// Everything a renderer needs to paint a wrap-around cover, in points.
///
/// Panels run left to right: back, spine, front.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverGeometry {
    pub sheet_width: f64,
    pub sheet_height: f64,
    pub bleed: f64,
    pub safe_margin: f64,
    pub spine_width: f64,
    /// Trimmed cover: both panels plus the spine
    pub trim: Rect,
    pub back_panel: Rect,
    pub spine: Rect,
    pub front_panel: Rect,
    pub back_safe: Rect,
    pub front_safe: Rect,
    pub include_bleed: bool,
    /// Spine narrower than the vendor's minimum gutter; spine text may not fit
    pub spine_below_minimum_gutter: bool,
}

impl CoverGeometry {
    pub fn media(&self) -> Rect {
        Rect::new(0.0, 0.0, self.sheet_width, self.sheet_height)
    }

    pub fn spine_below_minimum_gutter(&self) -> bool {
        self.spine_below_minimum_gutter
    }
}
