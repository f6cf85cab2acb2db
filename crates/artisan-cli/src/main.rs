mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "artisan", about = "Canvas compositing and mask tool for generative image edits")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image metadata and output sizes per aspect ratio
    Info(commands::info::InfoArgs),
    /// Compute the canvas layout for a container
    Layout(commands::layout::LayoutArgs),
    /// Render the display canvas to an image
    Render(commands::render::RenderArgs),
    /// Replay brush strokes and write the resolved mask
    Mask(commands::mask::MaskArgs),
    /// Bake adjustments into one or more images
    Export(commands::export::ExportArgs),
    /// Assemble an edit request for the generation backend
    Request(commands::request::RequestArgs),
    /// Print or save the default editor config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Layout(args) => commands::layout::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Mask(args) => commands::mask::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Request(args) => commands::request::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
