use std::path::PathBuf;

use anyhow::{Context, Result};
use artisan_core::aspect::AspectRatio;
use artisan_core::geometry::Size;
use artisan_core::layout::compute_layout;
use artisan_core::output_size::resolve_output_size;
use artisan_core::source::ImageSource;
use clap::Args;

use super::{load_config, parse_size};
use crate::summary::print_layout_summary;

#[derive(Args)]
pub struct LayoutArgs {
    /// Input image
    pub file: PathBuf,

    /// Container size as WIDTHxHEIGHT (defaults to the config's container)
    #[arg(long, value_parser = parse_size)]
    pub container: Option<Size>,

    /// Target aspect ratio: original, 1:1, 4:5 or 16:9
    #[arg(long)]
    pub aspect: Option<AspectRatio>,

    /// Editor config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the layout as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &LayoutArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let source = ImageSource::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    let container = args.container.unwrap_or_else(|| config.canvas.container());
    let aspect = args.aspect.unwrap_or(config.canvas.aspect_ratio);
    let (w, h) = (source.natural_width(), source.natural_height());

    let layout = compute_layout(container, w, h, aspect)?;
    let output = resolve_output_size(w, h, aspect)?;

    if args.json {
        let value = serde_json::json!({
            "container": container,
            "aspect_ratio": aspect,
            "layout": layout,
            "backing_size": layout.backing_size(),
            "output_size": output,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_layout_summary(&args.file, container, aspect, &layout, output);
    }

    Ok(())
}
