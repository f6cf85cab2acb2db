use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use artisan_core::aspect::AspectRatio;
use artisan_core::canvas::ImageCanvas;
use artisan_core::geometry::Size;
use artisan_core::io::image_io::save_image;
use artisan_core::source::ImageSource;
use clap::Args;

use super::mask::StrokeScript;
use super::{load_config, parse_size, AdjustArgs};
use crate::summary::print_render_summary;

#[derive(Args)]
pub struct RenderArgs {
    /// Input image
    pub file: PathBuf,

    /// Container size as WIDTHxHEIGHT (defaults to the config's container)
    #[arg(long, value_parser = parse_size)]
    pub container: Option<Size>,

    /// Target aspect ratio: original, 1:1, 4:5 or 16:9
    #[arg(long)]
    pub aspect: Option<AspectRatio>,

    #[command(flatten)]
    pub adjust: AdjustArgs,

    /// Stroke script whose mask is drawn over the canvas
    #[arg(long)]
    pub strokes: Option<PathBuf>,

    /// Editor config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output image
    #[arg(short, long, default_value = "canvas.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(aspect) = args.aspect {
        config.canvas.aspect_ratio = aspect;
    }
    config.adjustments = args.adjust.resolve(&config.adjustments);
    let container = args.container.unwrap_or_else(|| config.canvas.container());

    let source = ImageSource::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    let mut canvas = ImageCanvas::new(container, &config)?;
    canvas.load_image(source)?;
    if canvas.layout().is_degenerate() {
        bail!("Container {}x{} leaves no drawable area", container.width, container.height);
    }

    if let Some(ref path) = args.strokes {
        StrokeScript::load(path)?.replay(&mut canvas)?;
    }

    print_render_summary(&canvas, &args.output);

    let Some(image) = canvas.preview() else {
        bail!("Nothing was rendered");
    };
    save_image(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Canvas saved to {}", args.output.display());

    Ok(())
}
