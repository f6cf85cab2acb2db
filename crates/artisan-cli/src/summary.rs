use std::path::Path;

use artisan_core::adjust::Adjustments;
use artisan_core::aspect::AspectRatio;
use artisan_core::canvas::ImageCanvas;
use artisan_core::edit::EditRequest;
use artisan_core::geometry::Size;
use artisan_core::layout::CanvasLayout;
use artisan_core::output_size::OutputSize;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

pub fn print_layout_summary(
    file: &Path,
    container: Size,
    aspect: AspectRatio,
    layout: &CanvasLayout,
    output: OutputSize,
) {
    let s = Styles::new();
    print_title(&s, "Canvas Layout");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(file.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Container"),
        s.value
            .apply_to(format!("{}x{}", container.width, container.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Aspect"),
        s.method.apply_to(aspect)
    );
    println!();

    println!("  {}", s.header.apply_to("Canvas"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!(
            "{:.2}x{:.2}",
            layout.canvas_width, layout.canvas_height
        ))
    );
    let (bw, bh) = layout.backing_size();
    println!(
        "    {:<12}{}",
        s.label.apply_to("Backing"),
        s.value.apply_to(format!("{bw}x{bh}"))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Image"),
        s.value.apply_to(format!(
            "{:.2}x{:.2} at ({:.2}, {:.2})",
            layout.image_draw_width,
            layout.image_draw_height,
            layout.image_offset_x,
            layout.image_offset_y
        ))
    );
    if layout.has_padding() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Padding"),
            s.method.apply_to("checkerboard")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Padding"),
            s.disabled.apply_to("none")
        );
    }
    println!();

    println!(
        "  {:<14}{}",
        s.header.apply_to("Output"),
        s.value.apply_to(output)
    );
    println!();
}

pub fn print_render_summary(canvas: &ImageCanvas, output: &Path) {
    let s = Styles::new();
    print_title(&s, "Render");

    let (bw, bh) = canvas.layout().backing_size();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(format!("{bw}x{bh}"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Aspect"),
        s.method.apply_to(canvas.aspect_ratio())
    );
    if let Some(size) = canvas.output_size() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Output size"),
            s.value.apply_to(size)
        );
    }
    print_adjustments(&s, canvas.adjustments());

    let mask = canvas.mask();
    if mask.is_empty() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Mask"),
            s.disabled.apply_to("none")
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Mask"),
            s.value.apply_to(format!("{} stroke(s)", mask.stroke_count()))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();
}

pub fn print_export_summary(adjustments: &Adjustments, count: usize, dir: &Path) {
    let s = Styles::new();
    print_title(&s, "Export");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(count)
    );
    print_adjustments(&s, adjustments);
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output dir"),
        s.path.apply_to(dir.display())
    );
    println!();
}

pub fn print_request_summary(request: &EditRequest, output_size: OutputSize, path: &Path) {
    let s = Styles::new();
    print_title(&s, "Edit Request");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Instruction"),
        s.value.apply_to(&request.instruction)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output size"),
        s.value.apply_to(output_size)
    );
    let flag = |present: bool| {
        if present {
            s.method.apply_to("attached")
        } else {
            s.disabled.apply_to("none")
        }
    };
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mask"),
        flag(request.mask.is_some())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Reference"),
        flag(request.reference.is_some())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Parts"),
        s.value.apply_to(request.parts().len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Saved to"),
        s.path.apply_to(path.display())
    );
    println!();
}

fn print_adjustments(s: &Styles, adjustments: &Adjustments) {
    if adjustments.is_identity() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Adjustments"),
            s.disabled.apply_to("none")
        );
        return;
    }
    println!("  {}", s.header.apply_to("Adjustments"));
    for (name, value) in [
        ("Brightness", adjustments.brightness),
        ("Contrast", adjustments.contrast),
        ("Saturation", adjustments.saturation),
    ] {
        println!(
            "    {:<12}{}",
            s.label.apply_to(name),
            s.value.apply_to(format!("{value:.0}%"))
        );
    }
}
