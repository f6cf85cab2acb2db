use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use artisan_core::adjust::Adjustments;
use artisan_core::io::image_io::save_image;
use artisan_core::render::export_image;
use artisan_core::source::ImageSource;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use super::{load_config, AdjustArgs};
use crate::summary::print_export_summary;

#[derive(Args)]
pub struct ExportArgs {
    /// Input images
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub adjust: AdjustArgs,

    /// Editor config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "exported")]
    pub output_dir: PathBuf,

    /// Output format extension (png, jpg, ...); defaults to each input's own
    #[arg(long)]
    pub format: Option<String>,
}

pub fn run(args: &ExportArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let adjustments = args.adjust.resolve(&config.adjustments);

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    print_export_summary(&adjustments, args.files.len(), &args.output_dir);

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Exporting");

    let written = args
        .files
        .par_iter()
        .map(|input| -> Result<PathBuf> {
            let output = output_path(input, &args.output_dir, args.format.as_deref());
            export_one(input, &output, &adjustments)?;
            pb.inc(1);
            Ok(output)
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Done");
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(())
}

fn export_one(input: &Path, output: &Path, adjustments: &Adjustments) -> Result<()> {
    let source = ImageSource::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let image = export_image(&source, adjustments);
    save_image(&image, output).with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}

fn output_path(input: &Path, dir: &Path, format: Option<&str>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let ext = format
        .map(str::to_string)
        .or_else(|| {
            input
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "png".to_string());
    dir.join(format!("{stem}-edited.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_keeps_input_extension() {
        let p = output_path(Path::new("photos/cat.jpg"), Path::new("out"), None);
        assert_eq!(p, Path::new("out/cat-edited.jpg"));
    }

    #[test]
    fn test_output_path_format_override() {
        let p = output_path(Path::new("cat.jpg"), Path::new("out"), Some("png"));
        assert_eq!(p, Path::new("out/cat-edited.png"));
    }

    #[test]
    fn test_output_path_without_extension() {
        let p = output_path(Path::new("cat"), Path::new("out"), None);
        assert_eq!(p, Path::new("out/cat-edited.png"));
    }
}
