use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdft", about = "PDF tools CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flow a text/markdown document into a foldable multi-column booklet
    Booklet {
        /// Input text or markdown file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long, required_unless_present = "stats_only")]
        output: Option<PathBuf>,

        /// Options JSON file; command line flags override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the effective options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Output paper size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Output orientation
        #[arg(long, value_enum)]
        orientation: Option<OrientationArg>,

        /// Page margin in mm (horizontal and vertical)
        #[arg(long)]
        margin: Option<f32>,

        /// Gap between columns in mm
        #[arg(long)]
        gap: Option<f32>,

        /// Font size in points
        #[arg(long)]
        font_size: Option<f32>,

        /// Document title stored in the PDF metadata
        #[arg(long)]
        title: Option<String>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for pdf_booklet::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for pdf_booklet::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

fn print_statistics(stats: &pdf_booklet::BookletStatistics) {
    println!("Booklet Statistics:");
    println!("  Source lines: {}", stats.source_lines);
    println!("  Lines per column: {}", stats.lines_per_column);
    println!("  Column width: {:.2}pt", stats.column_width_pt);
    println!("  Output sheets: {}", stats.output_sheets());
    println!("  Output pages: {}", stats.output_pages);
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Booklet {
            input,
            output,
            config,
            save_config,
            paper,
            orientation,
            margin,
            gap,
            font_size,
            title,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => pdf_booklet::BookletOptions::load(path)
                    .await
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => pdf_booklet::BookletOptions::default(),
            };
            if let Some(paper) = paper {
                options.paper_size = paper.into();
            }
            if let Some(orientation) = orientation {
                options.orientation = orientation.into();
            }
            if let Some(margin) = margin {
                options.horizontal_margin_mm = margin;
                options.vertical_margin_mm = margin;
            }
            if let Some(gap) = gap {
                options.column_gap_mm = gap;
            }
            if let Some(font_size) = font_size {
                options.font_size_pt = font_size;
            }
            if title.is_some() {
                options.title = title;
            }

            if let Some(path) = &save_config {
                options.save(path).await?;
                log::info!("Saved options to {}", path.display());
            }

            let text = pdf_booklet::load_text(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;

            if stats_only {
                let stats = pdf_booklet::calculate_statistics(&text, &options)?;
                print_statistics(&stats);
                return Ok(());
            }

            let Some(output) = output else {
                anyhow::bail!("No output file given");
            };
            let stats = pdf_booklet::generate_booklet(&text, &options, &output).await?;
            print_statistics(&stats);
            println!("Booklet → {}", output.display());
        }
    }

    Ok(())
}
