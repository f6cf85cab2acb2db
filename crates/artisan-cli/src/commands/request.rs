use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use artisan_core::aspect::AspectRatio;
use artisan_core::edit::{ui_code_request, EditRequest, ImagePart, Preset, StyleFilter};
use artisan_core::geometry::Point;
use artisan_core::output_size::resolve_output_size;
use artisan_core::select::selection_request;
use artisan_core::source::ImageSource;
use clap::{Args, ValueEnum};

use super::load_config;
use crate::summary::print_request_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum PresetArg {
    Enhance,
    Upscale,
    Relight,
    MagicErase,
    RemoveBackground,
    ReplaceBackground,
    MagicExpand,
}

#[derive(Args)]
pub struct RequestArgs {
    /// Base image
    pub file: PathBuf,

    /// One-click edit preset
    #[arg(long, value_enum, conflicts_with_all = ["style", "prompt", "select"])]
    pub preset: Option<PresetArg>,

    /// Lighting or background description for relight / replace-background
    #[arg(long)]
    pub text: Option<String>,

    /// Artistic style filter
    #[arg(long, conflicts_with_all = ["prompt", "select"])]
    pub style: Option<StyleFilter>,

    /// Free-form edit instruction
    #[arg(long, conflicts_with = "select")]
    pub prompt: Option<String>,

    /// Select the object at a normalized point, as X,Y in [0, 1]
    #[arg(long, value_parser = parse_point)]
    pub select: Option<Point>,

    /// Ask for HTML and CSS recreating the image as a web interface
    #[arg(long, conflicts_with_all = ["preset", "style", "prompt", "select", "mask", "reference"])]
    pub ui: Option<String>,

    /// Mask PNG restricting the edit (white = editable)
    #[arg(long)]
    pub mask: Option<PathBuf>,

    /// Reference image guiding the edit
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Target aspect ratio for magic expand: 1:1, 4:5 or 16:9
    #[arg(long)]
    pub aspect: Option<AspectRatio>,

    /// Editor config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the request JSON to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(Point::new(x, y))
}

fn read_part(path: &Path) -> Result<ImagePart> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    ImagePart::from_bytes(&bytes).with_context(|| format!("Not an image: {}", path.display()))
}

pub fn run(args: &RequestArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let source = ImageSource::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let aspect = args.aspect.unwrap_or(config.canvas.aspect_ratio);
    let output_size =
        resolve_output_size(source.natural_width(), source.natural_height(), aspect)?;

    let request = if let Some(ref prompt) = args.ui {
        if !config.capabilities.ui_code {
            bail!("UI-code generation is disabled in this configuration");
        }
        ui_code_request(&source, prompt, &config.capabilities)?
    } else if let Some(point) = args.select {
        if !config.capabilities.object_select {
            bail!("Object selection is disabled in this configuration");
        }
        selection_request(&source, point)?
    } else {
        let preset = choose_preset(args, aspect, output_size)?;
        if matches!(preset, Preset::MagicErase) && args.mask.is_none() {
            bail!("Magic erase needs a mask (--mask)");
        }

        let mut request = EditRequest::new(ImagePart::from_source(&source)?, preset.instruction());
        if let Some(ref path) = args.mask {
            request.mask = Some(read_part(path)?);
        }
        if let Some(ref path) = args.reference {
            request = request.with_reference(read_part(path)?);
        }
        request
    };

    let value = serde_json::json!({
        "instruction": request.instruction,
        "output_size": output_size,
        "parts": request.parts(),
    });
    let json = serde_json::to_string_pretty(&value)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &json)
            .with_context(|| format!("Failed to write request to {}", path.display()))?;
        print_request_summary(&request, output_size, path);
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn choose_preset(
    args: &RequestArgs,
    aspect: AspectRatio,
    output_size: artisan_core::output_size::OutputSize,
) -> Result<Preset> {
    if let Some(style) = args.style {
        return Ok(Preset::Style(style));
    }
    if let Some(ref prompt) = args.prompt {
        return Ok(Preset::Custom(prompt.clone()));
    }
    let Some(preset) = args.preset else {
        bail!("Give one of --preset, --style, --prompt, --select or --ui");
    };

    let text = || {
        args.text
            .clone()
            .context("This preset needs a description (--text)")
    };
    Ok(match preset {
        PresetArg::Enhance => Preset::Enhance,
        PresetArg::Upscale => Preset::Upscale,
        PresetArg::Relight => Preset::Relight(text()?),
        PresetArg::MagicErase => Preset::MagicErase,
        PresetArg::RemoveBackground => Preset::RemoveBackground,
        PresetArg::ReplaceBackground => Preset::ReplaceBackground(text()?),
        PresetArg::MagicExpand => {
            if !aspect.expands() {
                bail!("Magic expand needs an expanding aspect ratio (--aspect 1:1, 4:5 or 16:9)");
            }
            Preset::MagicExpand(output_size)
        }
    })
}
