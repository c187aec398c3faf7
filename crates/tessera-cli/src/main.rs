//! tessera - mosaic tile layout previews
//!
//! Usage:
//!   tessera preview <design> [-o out.svg] [-f svg|json]
//!   tessera render <design> [-o out.png] [-w width]
//!   tessera regions <tile.svg> [--json]
//!   tessera shapes

use std::env;

mod cli;

use cli::{cmd_preview, cmd_regions, cmd_render, cmd_shapes};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "preview" => {
                cmd_preview(&args[2..]);
                return;
            }
            "render" => {
                cmd_render(&args[2..]);
                return;
            }
            "regions" => {
                cmd_regions(&args[2..]);
                return;
            }
            "shapes" => {
                cmd_shapes();
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!();
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    print_usage(&args[0]);
    std::process::exit(1);
}

fn print_usage(prog: &str) {
    eprintln!("tessera - compose mosaic tile designs into layout previews");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} preview <design> [options]    Compose a design into a preview SVG", prog);
    eprintln!("  {} render <design> [options]     Rasterize a design preview to PNG", prog);
    eprintln!("  {} regions <tile.svg> [--json]   Inspect a tile's colorable regions", prog);
    eprintln!("  {} shapes                        List supported shapes and patterns", prog);
    eprintln!();
    eprintln!("Preview options:");
    eprintln!("  -o, --output <file>    Output file (- for stdout, default: stdout)");
    eprintln!("  -f, --format <fmt>     Output format: svg, json (default: svg)");
    eprintln!("  --shape <name>         Override the design's shape");
    eprintln!("  --pattern <name>       Override the rectangle pattern");
    eprintln!("  --no-border            Drop the design's border");
    eprintln!();
    eprintln!("A bare tile SVG can stand in for a design file:");
    eprintln!("  {} preview tile.svg --shape hexagon", prog);
    eprintln!();
    eprintln!("Render options:");
    eprintln!("  -o, --output <file>    Output PNG (default: preview.png)");
    eprintln!("  -w, --width <px>       Raster width in pixels (default: 1024)");
    eprintln!();
    eprintln!("Design files are YAML or JSON, chosen by extension:");
    eprintln!();
    eprintln!("  tile:");
    eprintln!("    svg: tiles/checker.svg");
    eprintln!("    shape: square          # square, hexagon, rectangle, fish-scale");
    eprintln!("  colors:");
    eprintln!("    - region: part1");
    eprintln!("      color: \"#8B5CF6\"");
    eprintln!("  rotate:                  # optional, degrees, may be partial");
    eprintln!("    - [0, 90]");
    eprintln!("    - [270, 180]");
    eprintln!("  pattern: brick           # rectangles only");
    eprintln!("  border:                  # squares only");
    eprintln!("    corner: borders/corner.svg");
    eprintln!("    side1: borders/side_a.svg");
    eprintln!("    side2: borders/side_b.svg");
}
