use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use artisan_core::aspect::AspectRatio;
use artisan_core::canvas::ImageCanvas;
use artisan_core::geometry::{BoxRect, Point, Size};
use artisan_core::io::image_io::save_gray_png;
use artisan_core::mask::MaskBitmap;
use artisan_core::pointer::PointerEvent;
use artisan_core::source::ImageSource;
use clap::Args;
use serde::Deserialize;
use tracing::info;

use super::{load_config, parse_size};

/// Brush strokes to replay against a canvas, in display coordinates.
///
/// ```toml
/// brush_size = 24.0
///
/// [[strokes]]
/// points = [[100.0, 100.0], [220.0, 140.0]]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StrokeScript {
    /// Brush diameter for every stroke that does not set its own.
    pub brush_size: Option<f64>,
    /// On-screen canvas box size, when it differs from the backing store.
    pub display_width: Option<f64>,
    pub display_height: Option<f64>,
    pub strokes: Vec<Stroke>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Stroke {
    pub brush_size: Option<f64>,
    pub points: Vec<[f64; 2]>,
}

impl StrokeScript {
    /// Read a script as JSON when the extension says so, TOML otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stroke script {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(&text).context("Invalid stroke script (JSON)")
        } else {
            toml::from_str(&text).context("Invalid stroke script (TOML)")
        }
    }

    /// Drive the canvas with press, move and release events for every stroke.
    ///
    /// Returns the mask resolved by the last completed stroke.
    pub fn replay(&self, canvas: &mut ImageCanvas) -> Result<Option<MaskBitmap>> {
        let layout = *canvas.layout();
        let canvas_box = BoxRect::at_origin(Size::new(
            self.display_width.unwrap_or(layout.canvas_width),
            self.display_height.unwrap_or(layout.canvas_height),
        ));

        if let Some(size) = self.brush_size {
            canvas.set_brush_size(size);
        }

        let mut resolved = None;
        for (i, stroke) in self.strokes.iter().enumerate() {
            let Some((first, rest)) = stroke.points.split_first() else {
                continue;
            };
            if let Some(size) = stroke.brush_size.or(self.brush_size) {
                canvas.set_brush_size(size);
            }

            let event = |[x, y]: [f64; 2]| PointerEvent::new(Point::new(x, y), canvas_box);
            if !canvas.pointer_down(&event(*first)) {
                bail!("Stroke {} could not start; the canvas has no drawable area", i + 1);
            }
            for p in rest {
                canvas.pointer_move(&event(*p));
            }
            if let Some(mask) = canvas.pointer_up()? {
                resolved = Some(mask);
            }
        }

        info!(strokes = self.strokes.len(), "Stroke script replayed");
        Ok(resolved)
    }
}

#[derive(Args)]
pub struct MaskArgs {
    /// Input image
    pub file: PathBuf,

    /// Stroke script (TOML, or JSON by extension)
    #[arg(long)]
    pub strokes: PathBuf,

    /// Container size as WIDTHxHEIGHT (defaults to the config's container)
    #[arg(long, value_parser = parse_size)]
    pub container: Option<Size>,

    /// Target aspect ratio: original, 1:1, 4:5 or 16:9
    #[arg(long)]
    pub aspect: Option<AspectRatio>,

    /// Editor config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output mask PNG
    #[arg(short, long, default_value = "mask.png")]
    pub output: PathBuf,
}

pub fn run(args: &MaskArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(aspect) = args.aspect {
        config.canvas.aspect_ratio = aspect;
    }
    let container = args.container.unwrap_or_else(|| config.canvas.container());

    let source = ImageSource::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let script = StrokeScript::load(&args.strokes)?;

    let mut canvas = ImageCanvas::new(container, &config)?;
    canvas.load_image(source)?;
    let Some(output) = canvas.output_size() else {
        bail!("No output size for {}", args.file.display());
    };

    let mask = script
        .replay(&mut canvas)?
        .unwrap_or_else(|| MaskBitmap::blank(output));

    save_gray_png(mask.image(), &args.output)
        .with_context(|| format!("Failed to write mask to {}", args.output.display()))?;

    println!(
        "Mask {} ({} of {} pixels selected) saved to {}",
        mask.size(),
        mask.selected_count(),
        mask.width() as u64 * mask.height() as u64,
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use artisan_core::config::EditorConfig;
    use artisan_core::output_size::OutputSize;
    use image::{Rgba, RgbaImage};

    fn loaded_canvas() -> ImageCanvas {
        let pixels = RgbaImage::from_pixel(100, 50, Rgba([90, 90, 90, 255]));
        let mut canvas =
            ImageCanvas::new(Size::new(200.0, 200.0), &EditorConfig::default()).unwrap();
        canvas
            .load_image(ImageSource::from_rgba(pixels).unwrap())
            .unwrap();
        canvas
    }

    #[test]
    fn test_toml_script_parses() {
        let script: StrokeScript = toml::from_str(
            r#"
brush_size = 12.0

[[strokes]]
points = [[10.0, 10.0], [50.0, 20.0]]

[[strokes]]
brush_size = 4.0
points = [[90.0, 60.0]]
"#,
        )
        .unwrap();
        assert_eq!(script.brush_size, Some(12.0));
        assert_eq!(script.strokes.len(), 2);
        assert_eq!(script.strokes[1].brush_size, Some(4.0));
        assert_eq!(script.strokes[0].points[1], [50.0, 20.0]);
    }

    #[test]
    fn test_json_script_parses() {
        let script: StrokeScript =
            serde_json::from_str(r#"{"strokes":[{"points":[[1.0,2.0]]}]}"#).unwrap();
        assert_eq!(script.brush_size, None);
        assert_eq!(script.strokes[0].points, vec![[1.0, 2.0]]);
    }

    #[test]
    fn test_replay_resolves_last_stroke() {
        // 100x50 image in a 200x200 container: canvas is 200x100.
        let mut canvas = loaded_canvas();
        let script = StrokeScript {
            brush_size: Some(20.0),
            strokes: vec![
                Stroke {
                    brush_size: None,
                    points: vec![[20.0, 50.0], [80.0, 50.0]],
                },
                Stroke::default(),
                Stroke {
                    brush_size: None,
                    points: vec![[150.0, 50.0]],
                },
            ],
            ..StrokeScript::default()
        };

        let mask = script.replay(&mut canvas).unwrap().unwrap();
        assert_eq!(mask.size(), OutputSize::new(100, 50));
        // Both strokes accumulate; output is half the display size.
        assert!(mask.is_selected(25, 25));
        assert!(mask.is_selected(75, 25));
        assert!(!mask.is_selected(50, 5));
    }

    #[test]
    fn test_empty_script_resolves_nothing() {
        let mut canvas = loaded_canvas();
        let mask = StrokeScript::default().replay(&mut canvas).unwrap();
        assert!(mask.is_none());
    }
}
