mod logger;

use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use kdp_async_runtime::{ExportCommand, ExportUpdate, worker_task};
use kdp_layout::{
    BookType, ExportConfig, ExportKind, JobId, PaperType, TemplateOptions, TemplateRenderer,
    TrimSize, calculate_cover_dimensions, calculate_page_dimensions, calculate_spine_width,
    inches_to_points, spine_below_minimum_gutter,
};
use std::path::PathBuf;
use tokio::sync::mpsc;

use logger::CliLogger;

#[derive(Parser)]
#[command(name = "kdpt", about = "KDP print layout CLI", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported trim sizes
    Trims,

    /// Spine width for a page count
    Spine {
        /// Interior page count
        #[arg(short, long)]
        pages: u32,

        /// Paper stock
        #[arg(long, default_value = "white", value_enum)]
        paper: PaperArg,
    },

    /// Interior page dimensions
    Page {
        /// Trim size
        #[arg(short, long, default_value = "8.5x8.5", value_enum)]
        trim: TrimArg,

        /// Lay out without bleed
        #[arg(long)]
        no_bleed: bool,
    },

    /// Full-wrap cover dimensions
    Cover {
        /// Trim size
        #[arg(short, long, default_value = "8.5x8.5", value_enum)]
        trim: TrimArg,

        /// Interior page count
        #[arg(short, long)]
        pages: u32,

        /// Paper stock
        #[arg(long, default_value = "white", value_enum)]
        paper: PaperArg,

        /// Lay out without bleed
        #[arg(long)]
        no_bleed: bool,
    },

    /// Check export settings and report every problem
    Validate {
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Recommended settings for a book type
    Recommend {
        /// picture, board, early_reader, activity or coloring
        book_type: String,
    },

    /// Write proof template PDFs through an export job
    Template {
        #[command(flatten)]
        settings: SettingsArgs,

        /// What to export
        #[arg(short, long, default_value = "complete", value_enum)]
        kind: KindArg,

        /// Interior page count
        #[arg(short, long)]
        pages: u32,

        /// Book title used in output file names
        #[arg(long, default_value = "book")]
        title: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Only set the page boxes, draw no guides
        #[arg(long)]
        no_guides: bool,
    },
}

/// Export settings, either from a JSON file or as unchecked flag values
#[derive(clap::Args)]
struct SettingsArgs {
    /// JSON export config; overrides the flags below
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "")]
    book_id: String,

    #[arg(long, default_value = "8.5x8.5")]
    trim_size: String,

    #[arg(long, default_value = "white")]
    paper_type: String,

    #[arg(long, default_value = "color")]
    color_mode: String,

    #[arg(long)]
    no_bleed: bool,
}

impl SettingsArgs {
    async fn into_config(self) -> Result<ExportConfig> {
        match self.config {
            Some(path) => Ok(ExportConfig::load(&path).await?),
            None => Ok(ExportConfig {
                book_id: self.book_id,
                trim_size: self.trim_size,
                paper_type: self.paper_type,
                include_bleed: !self.no_bleed,
                color_mode: self.color_mode,
            }),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TrimArg {
    #[value(name = "5x8")]
    In5x8,
    #[value(name = "5.5x8.5")]
    In5_5x8_5,
    #[value(name = "6x6")]
    In6x6,
    #[value(name = "6x9")]
    In6x9,
    #[value(name = "7x7")]
    In7x7,
    #[value(name = "8x8")]
    In8x8,
    #[value(name = "8x10")]
    In8x10,
    #[value(name = "8.5x8.5")]
    In8_5x8_5,
    #[value(name = "8.5x11")]
    In8_5x11,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    White,
    Cream,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Interior,
    Cover,
    Complete,
}

impl From<TrimArg> for TrimSize {
    fn from(arg: TrimArg) -> Self {
        match arg {
            TrimArg::In5x8 => Self::In5x8,
            TrimArg::In5_5x8_5 => Self::In5_5x8_5,
            TrimArg::In6x6 => Self::In6x6,
            TrimArg::In6x9 => Self::In6x9,
            TrimArg::In7x7 => Self::In7x7,
            TrimArg::In8x8 => Self::In8x8,
            TrimArg::In8x10 => Self::In8x10,
            TrimArg::In8_5x8_5 => Self::In8_5x8_5,
            TrimArg::In8_5x11 => Self::In8_5x11,
        }
    }
}

impl From<PaperArg> for PaperType {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::White => Self::White,
            PaperArg::Cream => Self::Cream,
        }
    }
}

impl From<KindArg> for ExportKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Interior => Self::Interior,
            KindArg::Cover => Self::Cover,
            KindArg::Complete => Self::Complete,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    CliLogger::from_flags(cli.verbose, cli.quiet).init()?;

    match cli.command {
        Commands::Trims => {
            for trim in TrimSize::ALL {
                let dims = trim.dimensions_in();
                println!(
                    "{:<8} {:<20} {} x {} in",
                    trim.id(),
                    trim.label(),
                    dims.width,
                    dims.height
                );
            }
        }

        Commands::Spine { pages, paper } => {
            let paper = PaperType::from(paper);
            let spine = calculate_spine_width(pages, paper)?;
            println!(
                "Spine for {} {} pages: {:.6} in ({:.3} pt)",
                pages,
                paper,
                spine,
                inches_to_points(spine)
            );
        }

        Commands::Page { trim, no_bleed } => {
            let trim = TrimSize::from(trim);
            let page = calculate_page_dimensions(trim, !no_bleed);
            println!("Interior page for {}:", trim);
            println!(
                "  {} x {} in ({} x {} pt)",
                page.width,
                page.height,
                inches_to_points(page.width),
                inches_to_points(page.height)
            );
        }

        Commands::Cover {
            trim,
            pages,
            paper,
            no_bleed,
        } => {
            let trim = TrimSize::from(trim);
            let cover = calculate_cover_dimensions(trim, pages, paper.into(), !no_bleed)?;
            println!("Cover for {} with {} pages:", trim, pages);
            println!(
                "  Sheet: {:.6} x {} in ({:.3} x {} pt)",
                cover.width,
                cover.height,
                inches_to_points(cover.width),
                inches_to_points(cover.height)
            );
            println!("  Spine: {:.6} in", cover.spine_width);
            if spine_below_minimum_gutter(cover.spine_width) {
                log::warn!(
                    "spine is {:.4}\" for {} pages, too thin for spine text",
                    cover.spine_width,
                    pages
                );
            }
        }

        Commands::Validate { settings } => {
            let config = settings.into_config().await?;
            let report = config.validate();
            if !report.is_valid() {
                for message in report.messages() {
                    println!("  {}", message);
                }
                bail!("{} validation error(s)", report.errors.len());
            }
            println!("Settings are valid");
        }

        Commands::Recommend { book_type } => {
            let book_type = resolve_book_type(&book_type);
            let settings = book_type.recommended_settings();
            println!("{}:", book_type.name());
            println!("  Trim size: {}", settings.trim_size);
            println!("  Paper: {}", settings.paper_type);
            println!("  Bleed: {}", if settings.include_bleed { "yes" } else { "no" });
            println!("  Color: {}", settings.color_mode);
            println!("  Typical page count: {}", book_type.default_page_count());
            let trims: Vec<&str> = book_type.trim_sizes().iter().map(|t| t.id()).collect();
            println!("  Common trims: {}", trims.join(", "));
        }

        Commands::Template {
            settings,
            kind,
            pages,
            title,
            output_dir,
            no_guides,
        } => {
            let config = settings.into_config().await?;
            let renderer = TemplateRenderer::new(TemplateOptions {
                guides: !no_guides,
                ..Default::default()
            });
            run_export(renderer, config, kind.into(), pages, title, output_dir).await?;
        }
    }

    Ok(())
}

/// Unknown book types get the picture book recommendations
fn resolve_book_type(id: &str) -> BookType {
    id.parse().unwrap_or_else(|e| {
        log::warn!("{}, using {}", e, BookType::default());
        BookType::default()
    })
}

/// Drive a single export job through the worker and print its progress
async fn run_export(
    renderer: TemplateRenderer,
    config: ExportConfig,
    kind: ExportKind,
    page_count: u32,
    book_title: String,
    output_dir: PathBuf,
) -> Result<()> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();

    command_tx
        .send(ExportCommand::Render {
            job_id: JobId(1),
            kind,
            config,
            page_count,
            book_title,
            output_dir,
        })
        .map_err(|_| anyhow!("export worker is not running"))?;
    drop(command_tx);

    let report = async {
        let mut outcome = Err(anyhow!("export worker stopped without finishing the job"));
        while let Some(update) = update_rx.recv().await {
            match update {
                ExportUpdate::JobQueued { job } => {
                    println!("{} queued ({} export)", job.id, job.kind);
                }
                ExportUpdate::JobProgress { job_id, progress } => {
                    println!("{} {:>3}%", job_id, progress);
                }
                ExportUpdate::JobCompleted { job } => {
                    for path in &job.output_paths {
                        println!("Wrote {}", path.display());
                    }
                    outcome = Ok(());
                }
                ExportUpdate::JobFailed { job } => {
                    let error = job.error.unwrap_or_else(|| "unknown error".to_string());
                    outcome = Err(anyhow!("{} failed: {}", job.id, error));
                }
                ExportUpdate::Error { message } => {
                    outcome = Err(anyhow!(message));
                }
                ExportUpdate::Validated { .. } | ExportUpdate::GeometryComputed { .. } => {}
            }
        }
        outcome
    };

    let ((), outcome) = tokio::join!(worker_task(renderer, command_rx, update_tx), report);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn trim_args_cover_the_catalog() {
        for trim in TrimSize::ALL {
            let arg = TrimArg::from_str(trim.id(), false).unwrap();
            assert_eq!(TrimSize::from(arg), trim);
        }
    }

    #[test]
    fn unknown_book_type_falls_back_to_picture() {
        assert_eq!(resolve_book_type("cookbook"), BookType::Picture);
        assert_eq!(resolve_book_type("board"), BookType::Board);
        assert_eq!(
            resolve_book_type("cookbook").recommended_settings(),
            kdp_layout::recommended_settings("cookbook")
        );
    }

    #[test]
    fn settings_flags_build_config() {
        let cli = Cli::parse_from([
            "kdpt",
            "validate",
            "--book-id",
            "b1",
            "--trim-size",
            "6x9",
            "--no-bleed",
        ]);
        let Commands::Validate { settings } = cli.command else {
            panic!("expected validate");
        };
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let config = rt.block_on(settings.into_config()).unwrap();
        assert_eq!(config.book_id, "b1");
        assert_eq!(config.trim_size, "6x9");
        assert!(!config.include_bleed);
        assert!(config.validate().is_valid());
    }
}
