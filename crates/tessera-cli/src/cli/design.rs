//! Design file loading and resolution.
//!
//! A design is a YAML or JSON file naming a tile SVG, its shape, and the
//! user's choices: region colors, a rotation table, a laying pattern, and
//! an optional border. Loading gives the raw declaration; resolving reads
//! and colorizes the artwork and turns the strings into core types.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use tessera::{
    Artwork, BondPattern, BorderSet, RegionColor, RotationTable, Shape,
};

/// A complete tile design declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Design {
    /// Design name/title
    #[serde(default)]
    pub name: Option<String>,

    /// The main tile
    pub tile: TileSpec,

    /// Region-color picks for the main tile (missing regions keep the
    /// artwork's own fills)
    #[serde(default)]
    pub colors: Vec<ColorEntry>,

    /// Rotation table in degrees; may be smaller than the grid
    #[serde(default)]
    pub rotate: Option<Vec<Vec<f64>>>,

    /// Laying pattern for rectangular tiles
    #[serde(default)]
    pub pattern: Option<String>,

    /// Optional border selection
    #[serde(default)]
    pub border: Option<BorderSpec>,
}

/// The main tile reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileSpec {
    /// Path to the tile artwork SVG, relative to the design file
    pub svg: String,

    /// Shape name: square, hexagon, rectangle, fish-scale
    pub shape: String,
}

/// One region-color pick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorEntry {
    pub region: String,
    pub color: String,
}

/// Border piece paths plus their shared color picks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorderSpec {
    #[serde(default)]
    pub corner: Option<String>,

    #[serde(default)]
    pub side1: Option<String>,

    #[serde(default)]
    pub side2: Option<String>,

    /// One map for all pieces; matching region ids across pieces take the
    /// same color
    #[serde(default)]
    pub colors: Vec<ColorEntry>,
}

/// A design with its artwork loaded, colorized, and typed.
#[derive(Debug, Clone)]
pub struct ResolvedDesign {
    pub name: Option<String>,
    pub shape: Shape,
    pub artwork: Artwork,
    pub rotation: Option<RotationTable>,
    pub pattern: Option<BondPattern>,
    pub border: Option<BorderSet>,
    /// First region color of the colorized tile, for engines that paint
    /// bare shapes
    pub flat_color: Option<String>,
}

impl Design {
    /// Load a design from a YAML or JSON file, chosen by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read design file: {}", e))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&content)
                .map_err(|e| format!("Failed to parse design JSON: {}", e))
        } else {
            serde_yaml::from_str(&content)
                .map_err(|e| format!("Failed to parse design YAML: {}", e))
        }
    }

    /// Resolve the declaration: read artwork files relative to `base_dir`,
    /// apply color picks, and parse the enum-valued strings.
    pub fn resolve(&self, base_dir: &Path) -> Result<ResolvedDesign, String> {
        let shape = Shape::from_name(&self.tile.shape).map_err(|e| e.to_string())?;

        let artwork = load_artwork(base_dir, &self.tile.svg)?;
        let artwork = artwork.with_colors(&to_region_colors(&self.colors));

        // Unknown pattern names degrade to the plainest layout rather
        // than failing; shapes stay strict because a wrong shape means a
        // wrong engine.
        let pattern = self
            .pattern
            .as_deref()
            .map(|name| BondPattern::from_name(name).unwrap_or(BondPattern::StackBond));

        let rotation = self
            .rotate
            .clone()
            .map(RotationTable::new)
            .filter(|t| !t.is_empty());

        let border = match &self.border {
            Some(spec) => Some(resolve_border(base_dir, spec)?),
            None => None,
        };

        let flat_color = artwork.region_colors().first().map(|rc| rc.color_hex.clone());

        Ok(ResolvedDesign {
            name: self.name.clone(),
            shape,
            artwork,
            rotation,
            pattern,
            border,
            flat_color,
        })
    }
}

fn to_region_colors(entries: &[ColorEntry]) -> Vec<RegionColor> {
    entries
        .iter()
        .map(|e| RegionColor::new(e.region.as_str(), e.color.as_str()))
        .collect()
}

fn load_artwork(base_dir: &Path, rel: &str) -> Result<Artwork, String> {
    let path = base_dir.join(rel);
    let svg = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    Artwork::parse(&svg).map_err(|e| format!("{}: {}", path.display(), e))
}

fn resolve_border(base_dir: &Path, spec: &BorderSpec) -> Result<BorderSet, String> {
    let load = |rel: &Option<String>| -> Result<Option<Artwork>, String> {
        match rel {
            Some(rel) => Ok(Some(load_artwork(base_dir, rel)?)),
            None => Ok(None),
        }
    };
    let set = BorderSet::new(load(&spec.corner)?, load(&spec.side1)?, load(&spec.side2)?);
    Ok(set.with_colors(&to_region_colors(&spec.colors)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_design_parses_with_defaults() {
        let yaml = r##"
tile:
  svg: tiles/checker.svg
  shape: square
colors:
  - region: part1
    color: "#EFEFEF"
"##;
        let design: Design = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(design.tile.shape, "square");
        assert_eq!(design.colors.len(), 1);
        assert!(design.rotate.is_none());
        assert!(design.pattern.is_none());
        assert!(design.border.is_none());
    }

    #[test]
    fn json_design_parses_rotation_table() {
        let json = r#"{
            "tile": {"svg": "t.svg", "shape": "hexagon"},
            "rotate": [[0, 60], [120]]
        }"#;
        let design: Design = serde_json::from_str(json).unwrap();
        let rotate = design.rotate.unwrap();
        assert_eq!(rotate.len(), 2);
        assert_eq!(rotate[0], vec![0.0, 60.0]);
    }

    #[test]
    fn design_roundtrips_through_yaml() {
        let design = Design {
            name: Some("demo".to_string()),
            tile: TileSpec {
                svg: "t.svg".to_string(),
                shape: "rectangle".to_string(),
            },
            colors: vec![],
            rotate: None,
            pattern: Some("herringbone".to_string()),
            border: None,
        };
        let yaml = serde_yaml::to_string(&design).unwrap();
        let back: Design = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.pattern.as_deref(), Some("herringbone"));
    }
}
