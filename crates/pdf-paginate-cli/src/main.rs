mod logger;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use logger::StderrLogger;
use pdf_paginate::{BreakMarker, PaginationOptions, PaginationOutcome, SegmentDecision};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfp", about = "Paginate rendered documents into PDF", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Slice a rendered document image into PDF pages
    Paginate {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Print page numbers in the bottom margin
        #[arg(long)]
        page_numbers: bool,

        /// Number printed on the first page
        #[arg(long)]
        first_page_number: Option<usize>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Print the page segments and break decisions without writing a PDF
    Plan {
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Rendered document image (PNG or JPEG)
    #[arg(short, long)]
    input: PathBuf,

    /// CSV file of break marker positions in pixels (header row expected)
    #[arg(short, long)]
    markers: Option<PathBuf>,

    /// JSON options file; flags given on the command line take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output page format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Margin on every side in mm
    #[arg(long)]
    margin: Option<f32>,

    /// Scale the renderer used on top of 96 DPI
    #[arg(long)]
    scale: Option<f32>,

    /// Always use landscape pages
    #[arg(long)]
    force_landscape: bool,

    /// Ignore break markers and cut uniform pages
    #[arg(long)]
    no_markers: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    A4,
    Letter,
}

impl From<FormatArg> for pdf_paginate::PageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::A4 => Self::A4,
            FormatArg::Letter => Self::Letter,
        }
    }
}

impl LayoutArgs {
    async fn options(&self) -> Result<PaginationOptions> {
        let mut options = match &self.config {
            Some(path) => PaginationOptions::load(path).await?,
            None => PaginationOptions::default(),
        };

        if let Some(format) = self.format {
            options.page_format = format.into();
        }
        if let Some(margin) = self.margin {
            options.margin_mm = margin;
        }
        if let Some(scale) = self.scale {
            options.scale = scale;
        }
        if self.force_landscape {
            options.force_landscape = true;
        }
        if self.no_markers {
            options.use_marker_pagination = false;
        }

        options.validate()?;
        Ok(options)
    }

    async fn markers(&self) -> Result<Vec<BreakMarker>> {
        match &self.markers {
            Some(path) => Ok(pdf_paginate::load_markers(path).await?),
            None => Ok(Vec::new()),
        }
    }
}

/// Override page numbering only where a flag was given
fn apply_page_numbering(
    options: &mut PaginationOptions,
    page_numbers: bool,
    first_page_number: Option<usize>,
) {
    if page_numbers {
        options.add_page_numbers = true;
    }
    if let Some(start) = first_page_number {
        options.page_number_start = start;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    StderrLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Paginate {
            layout,
            output,
            page_numbers,
            first_page_number,
            stats_only,
        } => {
            let mut options = layout.options().await?;
            apply_page_numbering(&mut options, page_numbers, first_page_number);

            let bitmap = pdf_paginate::load_bitmap(&layout.input).await?;
            let markers = layout.markers().await?;

            // Calculate and show statistics
            let stats = pdf_paginate::calculate_statistics(
                bitmap.width_px(),
                bitmap.height_px(),
                &markers,
                &options,
            )?;
            println!("Pagination Statistics:");
            println!(
                "  Source: {}x{}px",
                stats.source_width_px, stats.source_height_px
            );
            println!("  Orientation: {:?}", stats.orientation);
            println!("  Strategy: {:?}", stats.strategy);
            println!("  Page capacity: {}px", stats.content_height_px);
            println!("  Output pages: {}", stats.output_pages);
            println!("  Marker breaks: {}", stats.marker_breaks);
            println!("  Skipped markers: {}", stats.skipped_markers);

            if stats_only {
                return Ok(());
            }

            let (document, outcome) =
                pdf_paginate::paginate_to_pdf(bitmap, markers, &options).await?;
            match outcome {
                PaginationOutcome::Paginated { pages } => {
                    pdf_paginate::save_pdf(document, &output).await?;
                    println!("Paginated {} pages → {}", pages, output.display());
                }
                PaginationOutcome::NothingToPaginate => {
                    println!("Nothing to paginate: {} is empty", layout.input.display());
                }
            }
        }

        Commands::Plan { layout } => {
            let options = layout.options().await?;
            let bitmap = pdf_paginate::load_bitmap(&layout.input).await?;
            let markers = layout.markers().await?;

            let paginator = pdf_paginate::Paginator::new(options)?;
            let plan = paginator.plan(bitmap.width_px(), bitmap.height_px(), &markers)?;

            println!(
                "{:?} {:?} pages, {} per page, {:?}",
                paginator.options().page_format,
                plan.orientation,
                plan.geometry.content_height_whole_px(),
                plan.strategy
            );
            for page in &plan.pages {
                println!(
                    "  page {:>3}: y={:>6}px h={:>5}px → {:.1}x{:.1}mm at ({:.1}, {:.1})",
                    page.segment.page_number + 1,
                    page.segment.y_px,
                    page.segment.height_px,
                    page.placement.width_mm,
                    page.placement.height_mm,
                    page.placement.x_mm,
                    page.placement.y_mm
                );
            }
            for decision in &plan.decisions {
                if let SegmentDecision::MarkerSkipped {
                    marker_index,
                    position_px,
                    reason,
                    ..
                } = decision
                {
                    println!(
                        "  skipped marker #{} at {}px ({:?})",
                        marker_index, position_px, reason
                    );
                }
            }
        }
    }

    Ok(())
}
