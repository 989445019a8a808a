use console::Style;
use zoomview_core::geometry::{SourceRect, ViewportSize, WidgetPos};
use zoomview_core::transform::BlitParams;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    scale: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            scale: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

pub fn print_blit_summary(
    source: &SourceRect,
    viewport: ViewportSize,
    resolution_scale: f64,
    params: &BlitParams,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("View"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(viewport)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Source rect"),
        s.value.apply_to(source)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Resolution"),
        s.value.apply_to(format!("{:.0}%", resolution_scale * 100.0))
    );
    if params.xscale < 1.0 || params.yscale < 1.0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Downsample"),
            s.scale
                .apply_to(format!("x {:.3}, y {:.3}", params.xscale, params.yscale))
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Downsample"),
            s.disabled.apply_to("none")
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Resampled"),
        s.value.apply_to(params.resampled)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Blit source"),
        s.value.apply_to(params.blit_source)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Destination"),
        s.value.apply_to(params.dest)
    );
    println!();
}

pub fn print_drag_result(index: usize, from: WidgetPos, to: WidgetPos, rect: Option<SourceRect>) {
    let s = Styles::new();
    let gesture = format!("({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y);
    match rect {
        Some(rect) => println!(
            "  {} {:<28}{}",
            s.label.apply_to(format!("drag {index}")),
            gesture,
            s.value.apply_to(rect)
        ),
        None => println!(
            "  {} {:<28}{}",
            s.label.apply_to(format!("drag {index}")),
            gesture,
            s.disabled.apply_to("no image")
        ),
    }
}
