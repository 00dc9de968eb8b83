//! KDP trim catalog and print constants
//!
//! The catalog is closed: each entry is a trim size the print vendor accepts,
//! so adding one is a code change with a vendor-published width and height.

use crate::types::{LayoutError, LayoutResult, PaperType};
use std::fmt;
use std::str::FromStr;

/// Accepted KDP trim sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrimSize {
    #[cfg_attr(feature = "serde", serde(rename = "5x8"))]
    In5x8,
    #[cfg_attr(feature = "serde", serde(rename = "5.5x8.5"))]
    In5_5x8_5,
    #[cfg_attr(feature = "serde", serde(rename = "6x6"))]
    In6x6,
    #[cfg_attr(feature = "serde", serde(rename = "6x9"))]
    In6x9,
    #[cfg_attr(feature = "serde", serde(rename = "7x7"))]
    In7x7,
    #[cfg_attr(feature = "serde", serde(rename = "8x8"))]
    In8x8,
    #[cfg_attr(feature = "serde", serde(rename = "8x10"))]
    In8x10,
    #[cfg_attr(feature = "serde", serde(rename = "8.5x8.5"))]
    In8_5x8_5,
    #[cfg_attr(feature = "serde", serde(rename = "8.5x11"))]
    In8_5x11,
}

/// Physical trim dimensions in inches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrimDimensions {
    pub width: f64,
    pub height: f64,
}

impl TrimSize {
    /// Every catalog entry, smallest first
    pub const ALL: [TrimSize; 9] = [
        TrimSize::In5x8,
        TrimSize::In5_5x8_5,
        TrimSize::In6x6,
        TrimSize::In6x9,
        TrimSize::In7x7,
        TrimSize::In8x8,
        TrimSize::In8x10,
        TrimSize::In8_5x8_5,
        TrimSize::In8_5x11,
    ];

    /// Wire identifier, e.g. `"8.5x8.5"`
    pub fn id(self) -> &'static str {
        match self {
            TrimSize::In5x8 => "5x8",
            TrimSize::In5_5x8_5 => "5.5x8.5",
            TrimSize::In6x6 => "6x6",
            TrimSize::In6x9 => "6x9",
            TrimSize::In7x7 => "7x7",
            TrimSize::In8x8 => "8x8",
            TrimSize::In8x10 => "8x10",
            TrimSize::In8_5x8_5 => "8.5x8.5",
            TrimSize::In8_5x11 => "8.5x11",
        }
    }

    /// Width and height in inches (portrait: width <= height)
    pub fn dimensions_in(self) -> TrimDimensions {
        let (width, height) = match self {
            TrimSize::In5x8 => (5.0, 8.0),
            TrimSize::In5_5x8_5 => (5.5, 8.5),
            TrimSize::In6x6 => (6.0, 6.0),
            TrimSize::In6x9 => (6.0, 9.0),
            TrimSize::In7x7 => (7.0, 7.0),
            TrimSize::In8x8 => (8.0, 8.0),
            TrimSize::In8x10 => (8.0, 10.0),
            TrimSize::In8_5x8_5 => (8.5, 8.5),
            TrimSize::In8_5x11 => (8.5, 11.0),
        };
        TrimDimensions { width, height }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrimSize::In5x8 => "5\" x 8\" Digest",
            TrimSize::In5_5x8_5 => "5.5\" x 8.5\" Digest",
            TrimSize::In6x6 => "6\" x 6\" Square",
            TrimSize::In6x9 => "6\" x 9\" Standard",
            TrimSize::In7x7 => "7\" x 7\" Square",
            TrimSize::In8x8 => "8\" x 8\" Square",
            TrimSize::In8x10 => "8\" x 10\" Portrait",
            TrimSize::In8_5x8_5 => "8.5\" x 8.5\" Square",
            TrimSize::In8_5x11 => "8.5\" x 11\" Portrait",
        }
    }
}

impl fmt::Display for TrimSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TrimSize {
    type Err = LayoutError;

    fn from_str(s: &str) -> LayoutResult<Self> {
        TrimSize::ALL
            .into_iter()
            .find(|trim| trim.id() == s)
            .ok_or_else(|| LayoutError::UnknownTrimSize(s.to_string()))
    }
}

/// Look up a trim identifier in the catalog
pub fn resolve_trim(identifier: &str) -> LayoutResult<TrimDimensions> {
    identifier.parse::<TrimSize>().map(TrimSize::dimensions_in)
}

/// Print-vendor physical constants, all in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintSpec {
    /// Added on each bleed-facing edge
    pub bleed: f64,
    /// Inset from the trim edge that essential content must stay inside
    pub safe_margin: f64,
    /// Minimum dead margin near the spine fold
    pub min_spine_gutter: f64,
    pub white_thickness_per_page: f64,
    pub cream_thickness_per_page: f64,
    /// Largest interior a single paperback can bind
    pub max_page_count: u32,
}

impl PrintSpec {
    /// Amazon KDP print-on-demand constants
    pub const KDP: PrintSpec = PrintSpec {
        bleed: 0.125,
        safe_margin: 0.25,
        min_spine_gutter: 0.375,
        white_thickness_per_page: 0.002252,
        cream_thickness_per_page: 0.0025,
        max_page_count: 828,
    };

    pub fn thickness_per_page(&self, paper: PaperType) -> f64 {
        match paper {
            PaperType::White => self.white_thickness_per_page,
            PaperType::Cream => self.cream_thickness_per_page,
        }
    }

    /// Bleed allowance applied when bleed is requested, zero otherwise
    pub fn bleed_for(&self, include_bleed: bool) -> f64 {
        if include_bleed { self.bleed } else { 0.0 }
    }
}

impl Default for PrintSpec {
    fn default() -> Self {
        Self::KDP
    }
}
