//! The `shapes` and `regions` commands: catalog introspection.

use std::fs;

use serde::Serialize;

use tessera::{Artwork, BondPattern, Shape};

pub fn cmd_shapes() {
    println!("Available shapes:");
    for shape in Shape::all() {
        println!("  {}", shape.name());
    }
    println!();
    println!("Rectangle patterns:");
    for pattern in BondPattern::all() {
        println!("  {}", pattern.name());
    }
}

/// A region in JSON output format.
#[derive(Serialize)]
struct JsonRegion {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

#[derive(Serialize)]
struct JsonRegions {
    regions: Vec<JsonRegion>,
}

pub fn cmd_regions(args: &[String]) {
    let mut svg_path: Option<&str> = None;
    let mut json_output = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                json_output = true;
            }
            path => {
                if svg_path.is_none() {
                    svg_path = Some(path);
                }
            }
        }
        i += 1;
    }

    let svg_path = svg_path.unwrap_or_else(|| {
        eprintln!("Error: SVG file required");
        std::process::exit(1);
    });

    let svg = match fs::read_to_string(svg_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", svg_path, e);
            std::process::exit(1);
        }
    };

    let artwork = match Artwork::parse(&svg) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error parsing {}: {}", svg_path, e);
            std::process::exit(1);
        }
    };

    let colors = artwork.region_colors();
    let current = |id: &str| -> Option<String> {
        colors
            .iter()
            .find(|rc| rc.region_id == id)
            .map(|rc| rc.color_hex.clone())
    };

    if json_output {
        let output = JsonRegions {
            regions: artwork
                .region_ids()
                .into_iter()
                .map(|id| JsonRegion {
                    color: current(&id),
                    id,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output).expect("Failed to serialize JSON"));
        return;
    }

    println!(
        "{} ({}x{})",
        svg_path,
        artwork.width(),
        artwork.height()
    );
    println!("Colorable regions:");
    for id in artwork.region_ids() {
        match current(&id) {
            Some(color) => println!("  {:12} {}", id, color),
            None => println!("  {:12} (no fill)", id),
        }
    }
}
