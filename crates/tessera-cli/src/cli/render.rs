//! The `render` command: rasterize a design preview to PNG.

use resvg::usvg;
use tiny_skia::Pixmap;

use crate::cli::preview::{load_design, plan_and_compose};

pub fn cmd_render(args: &[String]) {
    let mut design_path: Option<&str> = None;
    let mut output_path = "preview.png";
    let mut width: u32 = 1024;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = &args[i];
                }
            }
            "-w" | "--width" => {
                i += 1;
                if i < args.len() {
                    width = args[i].parse().unwrap_or(1024);
                }
            }
            path => {
                if design_path.is_none() {
                    design_path = Some(path);
                }
            }
        }
        i += 1;
    }

    let design_path = design_path.unwrap_or_else(|| {
        eprintln!("Error: design file required");
        std::process::exit(1);
    });

    let resolved = load_design(design_path);
    let (layout, svg) = plan_and_compose(&resolved);

    let scale = width as f64 / layout.view_width;
    let height = (layout.view_height * scale).round() as u32;

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg, &options)
        .expect("Failed to parse composed SVG");

    let mut pixmap = Pixmap::new(width, height)
        .expect("Failed to create pixmap");

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale as f32, scale as f32),
        &mut pixmap.as_mut(),
    );

    if let Err(e) = pixmap.save_png(output_path) {
        eprintln!("Error writing {}: {}", output_path, e);
        std::process::exit(1);
    }

    eprintln!(
        "Rendered {} tiles at {}x{}",
        layout.placements.len(),
        width,
        height
    );
    eprintln!("Wrote: {}", output_path);
}
