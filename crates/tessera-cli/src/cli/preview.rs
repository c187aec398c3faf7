//! The `preview` command: design file in, composed layout out.

use std::fs;
use std::path::Path;

use tessera::{Layout, LayoutConfig, TileDescription, plan_layout};

use crate::cli::compose::{TileArt, compose_svg, layout_to_json};
use crate::cli::design::{Design, ResolvedDesign, TileSpec};

/// Output format for the preview command.
#[derive(Clone, Copy, PartialEq)]
enum OutputFormat {
    Svg,
    Json,
}

/// Command-line overrides applied on top of a loaded design.
#[derive(Default)]
struct Overrides {
    shape: Option<String>,
    pattern: Option<String>,
    no_border: bool,
}

/// Plan a resolved design and compose its preview SVG.
pub(crate) fn plan_and_compose(resolved: &ResolvedDesign) -> (Layout, String) {
    let desc = TileDescription {
        shape: resolved.shape,
        aspect_ratio: resolved.artwork.aspect_ratio(),
        rotation: resolved.rotation.as_ref(),
        pattern: resolved.pattern,
        border: resolved.border.as_ref(),
        flat_color: resolved.flat_color.as_deref(),
    };
    let layout = plan_layout(&desc, &LayoutConfig::default());

    let art = TileArt {
        main: Some(&resolved.artwork),
        corner: resolved.border.as_ref().and_then(|b| b.corner.as_ref()),
        side_a: resolved.border.as_ref().and_then(|b| b.side_a.as_ref()),
        side_b: resolved.border.as_ref().and_then(|b| b.side_b.as_ref()),
    };
    let svg = compose_svg(&layout, &art);
    (layout, svg)
}

/// Load and resolve a design file, exiting with a message on failure.
pub(crate) fn load_design(path: &str) -> ResolvedDesign {
    load_design_with(path, &Overrides::default())
}

/// Load a design — or wrap a bare tile SVG in a minimal one — apply
/// overrides, and resolve it.
fn load_design_with(path: &str, overrides: &Overrides) -> ResolvedDesign {
    eprintln!("Loading design: {}", path);

    let mut design = if path.to_lowercase().ends_with(".svg") {
        // A bare tile SVG previews as a square-grid design with the
        // artwork's own colors
        let file = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        Design {
            name: None,
            tile: TileSpec {
                svg: file,
                shape: "square".to_string(),
            },
            colors: Vec::new(),
            rotate: None,
            pattern: None,
            border: None,
        }
    } else {
        match Design::load(path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    };

    if let Some(shape) = &overrides.shape {
        design.tile.shape = shape.clone();
    }
    if let Some(pattern) = &overrides.pattern {
        design.pattern = Some(pattern.clone());
    }
    if overrides.no_border {
        design.border = None;
    }

    let base_dir = Path::new(path).parent().unwrap_or(Path::new("."));
    match design.resolve(base_dir) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn cmd_preview(args: &[String]) {
    let mut design_path: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut format = OutputFormat::Svg;
    let mut overrides = Overrides::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            "-f" | "--format" => {
                i += 1;
                if i < args.len() {
                    format = match args[i].to_lowercase().as_str() {
                        "json" => OutputFormat::Json,
                        "svg" => OutputFormat::Svg,
                        other => {
                            eprintln!("Unknown format: {}. Use 'svg' or 'json'.", other);
                            std::process::exit(1);
                        }
                    };
                }
            }
            "--shape" => {
                i += 1;
                if i < args.len() {
                    overrides.shape = Some(args[i].clone());
                }
            }
            "--pattern" => {
                i += 1;
                if i < args.len() {
                    overrides.pattern = Some(args[i].clone());
                }
            }
            "--no-border" => {
                overrides.no_border = true;
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

    let resolved = load_design_with(design_path, &overrides);
    let (layout, svg) = plan_and_compose(&resolved);

    eprintln!(
        "Planned {} tiles ({} layout, {:.0}x{:.0})",
        layout.placements.len(),
        resolved.shape.name(),
        layout.view_width,
        layout.view_height
    );

    let output = match format {
        OutputFormat::Svg => svg,
        OutputFormat::Json => layout_to_json(&layout, resolved.shape),
    };

    match output_path {
        Some("-") | None => {
            println!("{}", output);
        }
        Some(path) => {
            fs::write(path, &output).expect("Failed to write output file");
            eprintln!("Wrote: {}", path);
        }
    }
}
