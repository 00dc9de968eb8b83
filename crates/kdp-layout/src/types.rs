use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Input errors raised by the catalog, the calculator and config validation.
///
/// All of these are caller mistakes: nothing here is retried, the caller
/// fixes the input and recomputes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Book ID is required")]
    MissingBookId,
    #[error("Invalid trim size: {0}")]
    UnknownTrimSize(String),
    #[error("Invalid paper type: {0}")]
    InvalidPaperType(String),
    #[error("Invalid color mode: {0}")]
    InvalidColorMode(String),
    #[error("Invalid page count: {0} (must be a positive integer)")]
    InvalidPageCount(i64),
    #[error("Invalid page count: {count} (maximum is {max})")]
    TooManyPages { count: u32, max: u32 },
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Invalid book type: {0}")]
    InvalidBookType(String),
    #[error("Invalid export job transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}

pub type LayoutResult<T> = std::result::Result<T, LayoutError>;

/// Errors from the export pipeline: geometry plus file and PDF I/O.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Interior paper stock. Determines per-page thickness and therefore spine width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PaperType {
    #[default]
    White,
    Cream,
}

impl PaperType {
    pub const ALL: [PaperType; 2] = [PaperType::White, PaperType::Cream];

    pub fn id(self) -> &'static str {
        match self {
            PaperType::White => "white",
            PaperType::Cream => "cream",
        }
    }
}

impl fmt::Display for PaperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PaperType {
    type Err = LayoutError;

    fn from_str(s: &str) -> LayoutResult<Self> {
        match s {
            "white" => Ok(PaperType::White),
            "cream" => Ok(PaperType::Cream),
            other => Err(LayoutError::InvalidPaperType(other.to_string())),
        }
    }
}

/// Ink plan for the renderer. Has no effect on geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorMode {
    #[default]
    Color,
    /// Black and white
    Bw,
}

impl ColorMode {
    pub fn id(self) -> &'static str {
        match self {
            ColorMode::Color => "color",
            ColorMode::Bw => "bw",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ColorMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> LayoutResult<Self> {
        match s {
            "color" => Ok(ColorMode::Color),
            "bw" => Ok(ColorMode::Bw),
            other => Err(LayoutError::InvalidColorMode(other.to_string())),
        }
    }
}
