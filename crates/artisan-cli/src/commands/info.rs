use std::path::PathBuf;

use anyhow::{Context, Result};
use artisan_core::aspect::AspectRatio;
use artisan_core::output_size::resolve_output_size;
use artisan_core::source::ImageSource;
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let source = ImageSource::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let (w, h) = (source.natural_width(), source.natural_height());

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", w, h);
    println!("Format:      {}", source.mime_type());
    println!("Ratio:       {:.4}", w as f64 / h as f64);
    println!();
    println!("{:>10}  {:>12}", "Aspect", "Output");
    println!("{}", "-".repeat(24));
    for &aspect in AspectRatio::ALL {
        let out = resolve_output_size(w, h, aspect)?;
        println!("{:>10}  {:>12}", aspect.to_string(), out.to_string());
    }

    Ok(())
}
