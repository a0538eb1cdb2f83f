use clap::{Parser, Subcommand};
use sheetcast::cli;
use sheetcast::error::SheetcastResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetcast")]
#[command(about = "Deterministic template-driven Excel batch generation.")]
#[command(long_about = "Sheetcast - fixed-rule spreadsheet transformation

Takes one template workbook (layout, header depth, styling) and any number of
flat source workbooks, and generates one output workbook per source. Data
lands via fixed positional column-mapping rules; row numbering is
regenerated, the template's exemplar-row styling is cloned onto every written
row, and leftover template example rows are removed.

MAPPING RULES (first three template sheets):
  all sheets: column 1 = sequence, column 2 = \"来源详情\" passthrough
  sheet 1:    source R-U -> C-F, source H-Q -> G-P
  sheet 2:    source V-AE -> C-L
  sheet 3:    source AF-AK -> C-H

EXAMPLES:
  sheetcast convert --template 模版.xlsx 九月.xlsx 十月.xlsx
  sheetcast convert --template 模版.xlsx data/*.xlsx --out-dir out/
  sheetcast inspect --template 模版.xlsx")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one output workbook per source file
    Convert {
        /// Template workbook (.xlsx) defining layout and styling
        #[arg(short, long)]
        template: PathBuf,

        /// Source workbooks to convert, processed in order
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Directory for generated files (default: current directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Infer header depth from cell content instead of sheet position
        #[arg(long)]
        sniff_headers: bool,
    },

    /// Show the per-sheet structure inferred from a template
    Inspect {
        /// Template workbook (.xlsx)
        #[arg(short, long)]
        template: PathBuf,

        /// Infer header depth from cell content instead of sheet position
        #[arg(long)]
        sniff_headers: bool,
    },
}

fn main() -> SheetcastResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            template,
            sources,
            out_dir,
            sniff_headers,
        } => cli::convert(template, sources, out_dir, sniff_headers),

        Commands::Inspect {
            template,
            sniff_headers,
        } => cli::inspect(template, sniff_headers),
    }
}
