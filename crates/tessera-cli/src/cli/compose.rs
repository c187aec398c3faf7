//! Layout-to-SVG composition.
//!
//! The core library plans *where* tiles go; this module turns a plan into
//! a standalone SVG document. Each placement becomes either a nested
//! `<svg>` embedding the colorized artwork, a flat rounded rect for the
//! bare-shape engines, or a dashed outline for placeholder cells.

use serde::Serialize;

use tessera::{Artwork, ArtworkRef, Layout, PlacedTile, Shape};

const BACKGROUND: &str = "#f1f5f9";
const PLACEHOLDER_STROKE: &str = "#cbd5e1";
const CLIP_ID: &str = "tile-clip";

/// The artwork available to the composer, one slot per [`ArtworkRef`].
#[derive(Debug, Clone, Copy)]
pub struct TileArt<'a> {
    pub main: Option<&'a Artwork>,
    pub corner: Option<&'a Artwork>,
    pub side_a: Option<&'a Artwork>,
    pub side_b: Option<&'a Artwork>,
}

impl<'a> TileArt<'a> {
    /// Main tile only, no border pieces.
    pub fn main_only(main: &'a Artwork) -> Self {
        Self {
            main: Some(main),
            corner: None,
            side_a: None,
            side_b: None,
        }
    }

    fn for_ref(&self, artwork: ArtworkRef) -> Option<&'a Artwork> {
        match artwork {
            ArtworkRef::Main => self.main,
            ArtworkRef::BorderCorner => self.corner,
            ArtworkRef::BorderSideA => self.side_a,
            ArtworkRef::BorderSideB => self.side_b,
            ArtworkRef::Placeholder => None,
        }
    }
}

/// Compose a layout into a standalone SVG document.
pub fn compose_svg(layout: &Layout, art: &TileArt) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {:.2} {:.2}\">\n",
        layout.view_width, layout.view_height
    ));
    svg.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\" rx=\"8\"/>\n",
        BACKGROUND
    ));

    if let Some(clip) = &layout.clip {
        svg.push_str(&format!(
            "  <defs><clipPath id=\"{}\"><path d=\"{}\"/></clipPath></defs>\n",
            CLIP_ID,
            clip.to_path_data()
        ));
    }

    for tile in &layout.placements {
        match &layout.fill {
            // Bare-shape engines paint every placement in the flat color
            Some(color) => svg.push_str(&flat_rect(tile, color)),
            None => match art.for_ref(tile.artwork) {
                Some(artwork) => svg.push_str(&embedded_tile(tile, artwork, layout.clip.is_some())),
                None => svg.push_str(&placeholder_rect(tile)),
            },
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// A placement rendered as its colorized artwork: translate to the cell,
/// rotate about the local center, clip in tile-local coordinates.
fn embedded_tile(tile: &PlacedTile, artwork: &Artwork, clipped: bool) -> String {
    let x0 = tile.x - tile.width / 2.0;
    let y0 = tile.y - tile.height / 2.0;
    let clip_attr = if clipped {
        format!(" clip-path=\"url(#{})\"", CLIP_ID)
    } else {
        String::new()
    };
    format!(
        "  <g transform=\"translate({:.2} {:.2}) rotate({:.2}, {:.2}, {:.2})\"{}>\n    {}\n  </g>\n",
        x0,
        y0,
        tile.rotation,
        tile.width / 2.0,
        tile.height / 2.0,
        clip_attr,
        artwork.to_embedded_svg(0.0, 0.0, tile.width, tile.height)
    )
}

fn flat_rect(tile: &PlacedTile, color: &str) -> String {
    format!(
        "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"1\" fill=\"{}\" transform=\"rotate({:.2}, {:.2}, {:.2})\"/>\n",
        tile.x - tile.width / 2.0,
        tile.y - tile.height / 2.0,
        tile.width,
        tile.height,
        color,
        tile.rotation,
        tile.x,
        tile.y
    )
}

fn placeholder_rect(tile: &PlacedTile) -> String {
    format!(
        "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" stroke-dasharray=\"6 4\"/>\n",
        tile.x - tile.width / 2.0,
        tile.y - tile.height / 2.0,
        tile.width,
        tile.height,
        PLACEHOLDER_STROKE
    )
}

// ============ JSON output ============

/// A placed tile in JSON output format.
#[derive(Serialize)]
struct JsonTile {
    row: usize,
    col: usize,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation: f64,
    artwork: &'static str,
}

/// JSON output for a planned layout.
#[derive(Serialize)]
struct JsonLayout {
    shape: &'static str,
    view_width: f64,
    view_height: f64,
    tiles: Vec<JsonTile>,
}

fn artwork_name(artwork: ArtworkRef) -> &'static str {
    match artwork {
        ArtworkRef::Main => "main",
        ArtworkRef::BorderCorner => "border-corner",
        ArtworkRef::BorderSideA => "border-side-a",
        ArtworkRef::BorderSideB => "border-side-b",
        ArtworkRef::Placeholder => "placeholder",
    }
}

/// Serialize a layout plan as JSON for downstream tooling.
pub fn layout_to_json(layout: &Layout, shape: Shape) -> String {
    let output = JsonLayout {
        shape: shape.name(),
        view_width: layout.view_width,
        view_height: layout.view_height,
        tiles: layout
            .placements
            .iter()
            .map(|t| JsonTile {
                row: t.row,
                col: t.col,
                x: t.x,
                y: t.y,
                width: t.width,
                height: t.height,
                rotation: t.rotation,
                artwork: artwork_name(t.artwork),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&output).expect("Failed to serialize JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera::{LayoutConfig, TileDescription, plan_layout};

    const TILE: &str = r##"<svg viewBox="0 0 200 200"><g id="part1"><rect width="200" height="200" fill="#8B5CF6"/></g></svg>"##;

    fn plan(shape: Shape) -> Layout {
        let desc = TileDescription {
            shape,
            aspect_ratio: 1.0,
            rotation: None,
            pattern: None,
            border: None,
            flat_color: Some("#8B5CF6"),
        };
        plan_layout(&desc, &LayoutConfig::default())
    }

    #[test]
    fn square_preview_embeds_artwork_and_placeholders() {
        let art = Artwork::parse(TILE).unwrap();
        let svg = compose_svg(&plan(Shape::Square), &TileArt::main_only(&art));
        assert_eq!(svg.matches("<g transform=").count(), 16, "16 interior tiles");
        assert_eq!(svg.matches("stroke-dasharray").count(), 9, "9 ring placeholders");
        assert!(!svg.contains("clipPath"), "square tiles are unclipped");
    }

    #[test]
    fn hexagon_preview_declares_one_shared_clip() {
        let art = Artwork::parse(TILE).unwrap();
        let svg = compose_svg(&plan(Shape::Hexagon), &TileArt::main_only(&art));
        assert_eq!(svg.matches("<clipPath").count(), 1);
        assert_eq!(svg.matches("clip-path=\"url(#tile-clip)\"").count(), 28);
    }

    #[test]
    fn herringbone_preview_uses_flat_rects() {
        let desc = TileDescription {
            shape: Shape::Rectangle,
            aspect_ratio: 2.0,
            rotation: None,
            pattern: Some(tessera::BondPattern::Herringbone),
            border: None,
            flat_color: Some("#8B5CF6"),
        };
        let layout = plan_layout(&desc, &LayoutConfig::default());
        let art = Artwork::parse(TILE).unwrap();
        let svg = compose_svg(&layout, &TileArt::main_only(&art));
        assert!(svg.contains("fill=\"#8B5CF6\""));
        assert!(!svg.contains("<g transform="), "no artwork embedding in flat mode");
    }

    #[test]
    fn json_layout_names_artwork_slots() {
        let json = layout_to_json(&plan(Shape::Square), Shape::Square);
        assert!(json.contains("\"shape\": \"square\""));
        assert!(json.contains("\"artwork\": \"main\""));
        assert!(json.contains("\"artwork\": \"placeholder\""));
    }
}
