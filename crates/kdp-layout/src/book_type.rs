//! Children's book formats and the print settings that suit them

use crate::catalog::TrimSize;
use crate::options::ExportSettings;
use crate::types::*;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BookType {
    /// Illustrated storybook with a narrative arc
    #[default]
    Picture,
    /// Simple concepts for babies and toddlers
    Board,
    /// Chapter book for transitioning readers
    EarlyReader,
    /// Mazes, puzzles, matching, tracing
    Activity,
    /// Line art for colouring
    Coloring,
}

/// Print settings to pre-fill an export form with
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RecommendedSettings {
    pub trim_size: TrimSize,
    pub paper_type: PaperType,
    pub include_bleed: bool,
    pub color_mode: ColorMode,
}

impl RecommendedSettings {
    pub fn into_settings(self, book_id: impl Into<String>) -> ExportSettings {
        ExportSettings {
            book_id: book_id.into(),
            trim_size: self.trim_size,
            paper_type: self.paper_type,
            include_bleed: self.include_bleed,
            color_mode: self.color_mode,
        }
    }
}

impl BookType {
    pub const ALL: [BookType; 5] = [
        BookType::Picture,
        BookType::Board,
        BookType::EarlyReader,
        BookType::Activity,
        BookType::Coloring,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BookType::Picture => "picture",
            BookType::Board => "board",
            BookType::EarlyReader => "early_reader",
            BookType::Activity => "activity",
            BookType::Coloring => "coloring",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BookType::Picture => "Picture Book",
            BookType::Board => "Board Book",
            BookType::EarlyReader => "Early Reader",
            BookType::Activity => "Activity Book",
            BookType::Coloring => "Coloring Book",
        }
    }

    /// Typical interior page count for the format
    pub fn default_page_count(self) -> u32 {
        match self {
            BookType::Picture => 32,
            BookType::Board => 14,
            BookType::EarlyReader => 48,
            BookType::Activity => 64,
            BookType::Coloring => 50,
        }
    }

    /// Trim sizes offered for the format
    pub fn trim_sizes(self) -> &'static [TrimSize] {
        match self {
            BookType::Picture => &[TrimSize::In8x8, TrimSize::In8_5x8_5, TrimSize::In8x10],
            BookType::Board => &[TrimSize::In6x6, TrimSize::In7x7],
            BookType::EarlyReader => &[TrimSize::In5x8, TrimSize::In5_5x8_5, TrimSize::In6x9],
            BookType::Activity | BookType::Coloring => &[TrimSize::In8x10, TrimSize::In8_5x11],
        }
    }

    pub fn recommended_settings(self) -> RecommendedSettings {
        let (trim_size, paper_type, include_bleed, color_mode) = match self {
            BookType::Picture => (TrimSize::In8_5x8_5, PaperType::White, true, ColorMode::Color),
            BookType::Board => (TrimSize::In8x10, PaperType::White, true, ColorMode::Color),
            BookType::EarlyReader => (TrimSize::In6x9, PaperType::Cream, false, ColorMode::Bw),
            BookType::Activity | BookType::Coloring => {
                (TrimSize::In8_5x11, PaperType::White, false, ColorMode::Bw)
            }
        };
        RecommendedSettings {
            trim_size,
            paper_type,
            include_bleed,
            color_mode,
        }
    }
}

impl fmt::Display for BookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BookType {
    type Err = LayoutError;

    fn from_str(s: &str) -> LayoutResult<Self> {
        BookType::ALL
            .into_iter()
            .find(|book_type| book_type.id() == s)
            .ok_or_else(|| LayoutError::InvalidBookType(s.to_string()))
    }
}

/// Recommended settings for a book type id; unknown ids get picture-book settings.
pub fn recommended_settings(book_type: &str) -> RecommendedSettings {
    book_type
        .parse::<BookType>()
        .unwrap_or_default()
        .recommended_settings()
}
