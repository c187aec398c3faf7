//! Typed tile-artwork model.
//!
//! A tile's artwork is an SVG document whose colorable regions are `<g>`
//! elements carrying an `id` (the catalog names them `part1..partN`). The
//! storefront needs to recolor those regions on every user color pick, so
//! instead of string-churning a DOM we parse the document **once** into an
//! element tree and recolor by walking it. Every transform returns a new
//! value; nothing here mutates in place.
//!
//! ## Rust Lesson #11: Owned trees without a garbage collector
//!
//! In JS the DOM is a graph of references kept alive by the GC. Here the
//! tree is plain ownership: an `Element` owns its children `Vec`, cloning
//! the root deep-copies the document, and dropping it frees everything.
//! No parent pointers needed - we only ever walk downward.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Error type for artwork parsing.
#[derive(Debug)]
pub enum ArtworkError {
    /// The document is not well-formed XML.
    Xml(String),
    /// The document parsed but its root element is not `<svg>`.
    NotSvg,
}

impl std::fmt::Display for ArtworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtworkError::Xml(msg) => write!(f, "artwork parse error: {}", msg),
            ArtworkError::NotSvg => write!(f, "artwork root element is not <svg>"),
        }
    }
}

impl std::error::Error for ArtworkError {}

/// One entry of a region-color map: paint region `region_id` with
/// `color_hex`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionColor {
    pub region_id: String,
    pub color_hex: String,
}

impl RegionColor {
    pub fn new(region_id: impl Into<String>, color_hex: impl Into<String>) -> Self {
        Self {
            region_id: region_id.into(),
            color_hex: color_hex.into(),
        }
    }
}

/// Element names whose fill we are allowed to rewrite.
const FILLABLE: &[&str] = &["path", "rect", "circle", "polygon", "ellipse"];

#[inline]
fn is_fillable(name: &str) -> bool {
    FILLABLE.contains(&name)
}

/// A node in the artwork tree.
#[derive(Debug, Clone, PartialEq)]
enum Node {
    Element(Element),
    Text(String),
}

/// An SVG element with its attributes and children, in document order.
#[derive(Debug, Clone, PartialEq)]
struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value.to_string();
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    fn id(&self) -> Option<&str> {
        self.attr("id")
    }
}

/// A tile's (or border piece's) vector drawing, organized into named,
/// independently colorable regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    root: Element,
    width: f64,
    height: f64,
}

impl Artwork {
    /// Parse an SVG document into an artwork model.
    ///
    /// Intrinsic size comes from the root `width`/`height` attributes,
    /// falling back to the `viewBox`, falling back to a 200x200 square
    /// (the catalog's standard tile canvas).
    pub fn parse(svg: &str) -> Result<Self, ArtworkError> {
        let mut reader = Reader::from_str(svg);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    stack.push(element_from(&e)?);
                }
                Ok(Event::Empty(e)) => {
                    let el = element_from(&e)?;
                    attach(&mut stack, &mut root, Node::Element(el));
                }
                Ok(Event::End(_)) => {
                    if let Some(el) = stack.pop() {
                        attach(&mut stack, &mut root, Node::Element(el));
                    }
                }
                Ok(Event::Text(t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| ArtworkError::Xml(e.to_string()))?;
                    if !text.trim().is_empty() {
                        attach(&mut stack, &mut root, Node::Text(text.into_owned()));
                    }
                }
                Ok(Event::CData(c)) => {
                    let text = String::from_utf8_lossy(c.as_ref()).into_owned();
                    attach(&mut stack, &mut root, Node::Text(text));
                }
                // Declarations, comments, PIs and doctypes carry nothing we
                // need for recoloring or layout.
                Ok(Event::Decl(_))
                | Ok(Event::Comment(_))
                | Ok(Event::PI(_))
                | Ok(Event::DocType(_)) => {}
                Ok(Event::Eof) => break,
                Err(e) => return Err(ArtworkError::Xml(e.to_string())),
            }
        }

        let root = root.ok_or(ArtworkError::NotSvg)?;
        if root.name != "svg" {
            return Err(ArtworkError::NotSvg);
        }

        let (width, height) = intrinsic_size(&root);
        Ok(Self {
            root,
            width,
            height,
        })
    }

    /// Intrinsic width of the tile canvas.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Intrinsic height of the tile canvas.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width / height. Rectangular catalog tiles use this to scale
    /// placements; square tiles report 1.0.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Ids of the colorable regions (`<g id="...">`), in document order.
    pub fn region_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        collect_region_ids(&self.root, &mut ids);
        ids
    }

    /// Extract the current region-color map: for each region, the fill of
    /// its first fillable primitive. Regions with no filled primitive are
    /// skipped. This seeds the color picker when a tile is selected.
    pub fn region_colors(&self) -> Vec<RegionColor> {
        let mut colors = Vec::new();
        collect_region_colors(&self.root, &mut colors);
        colors
    }

    /// Apply a region-color map, returning a recolored copy.
    ///
    /// For each `(region_id, color_hex)` pair, every fillable primitive
    /// inside the matching region gets its fill replaced. Region ids with
    /// no matching group are silently ignored; an empty map returns the
    /// artwork unchanged. Applying the same map twice yields the same
    /// result as applying it once.
    pub fn with_colors(&self, colors: &[RegionColor]) -> Artwork {
        if colors.is_empty() {
            return self.clone();
        }
        let mut root = self.root.clone();
        recolor_children(&mut root, colors, None);
        Artwork {
            root,
            width: self.width,
            height: self.height,
        }
    }

    /// Serialize the artwork back to an SVG string.
    pub fn to_svg(&self) -> String {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, &self.root);
        String::from_utf8_lossy(&writer.into_inner()).into_owned()
    }

    /// Serialize as a nested `<svg>` positioned inside a larger document.
    ///
    /// Sets `x`/`y`/`width`/`height` on the root and pins the `viewBox` to
    /// the intrinsic size so the drawing scales to the placement box. The
    /// aspect-ratio lock is dropped: the placement box already has the
    /// tile's proportions, and stretched edge cases should stay visible
    /// rather than leak past their cell.
    pub fn to_embedded_svg(&self, x: f64, y: f64, width: f64, height: f64) -> String {
        let mut root = self.root.clone();
        if root.attr("viewBox").is_none() {
            root.set_attr("viewBox", &format!("0 0 {} {}", self.width, self.height));
        }
        root.set_attr("x", &format!("{}", x));
        root.set_attr("y", &format!("{}", y));
        root.set_attr("width", &format!("{}", width));
        root.set_attr("height", &format!("{}", height));
        root.set_attr("preserveAspectRatio", "none");

        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, &root);
        String::from_utf8_lossy(&writer.into_inner()).into_owned()
    }
}

/// Build an element from a start/empty tag.
fn element_from(e: &BytesStart) -> Result<Element, ArtworkError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ArtworkError::Xml(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| ArtworkError::Xml(e.to_string()))?
            .into_owned();
        attrs.push((key, value));
    }
    Ok(Element {
        name,
        attrs,
        children: Vec::new(),
    })
}

/// Attach a finished node to the innermost open element, or promote it to
/// the document root when the stack is empty.
fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            // Top-level text and any element after the root are dropped.
            if root.is_none() {
                if let Node::Element(el) = node {
                    *root = Some(el);
                }
            }
        }
    }
}

/// Resolve the root element's intrinsic size.
fn intrinsic_size(root: &Element) -> (f64, f64) {
    let length = |name: &str| -> Option<f64> {
        root.attr(name)
            .and_then(|v| v.parse::<svgtypes::Length>().ok())
            .map(|len| len.number)
            .filter(|n| *n > 0.0)
    };
    if let (Some(w), Some(h)) = (length("width"), length("height")) {
        return (w, h);
    }
    if let Some(vb) = root
        .attr("viewBox")
        .and_then(|v| v.parse::<svgtypes::ViewBox>().ok())
    {
        return (vb.w, vb.h);
    }
    (200.0, 200.0)
}

fn collect_region_ids(el: &Element, ids: &mut Vec<String>) {
    for child in &el.children {
        if let Node::Element(c) = child {
            if c.name == "g" {
                if let Some(id) = c.id() {
                    ids.push(id.to_string());
                }
            }
            collect_region_ids(c, ids);
        }
    }
}

fn collect_region_colors(el: &Element, colors: &mut Vec<RegionColor>) {
    for child in &el.children {
        if let Node::Element(c) = child {
            if c.name == "g" {
                if let Some(id) = c.id() {
                    if let Some(fill) = first_fill(c) {
                        colors.push(RegionColor::new(id, fill));
                    }
                }
            }
            collect_region_colors(c, colors);
        }
    }
}

/// Fill of the first fillable primitive inside an element, depth-first.
fn first_fill(el: &Element) -> Option<String> {
    for child in &el.children {
        if let Node::Element(c) = child {
            if is_fillable(&c.name) {
                if let Some(fill) = c.attr("fill") {
                    return Some(fill.to_string());
                }
            }
            if let Some(fill) = first_fill(c) {
                return Some(fill);
            }
        }
    }
    None
}

/// Walk the tree, painting fillable primitives under mapped region groups.
/// `active` is the color of the nearest enclosing mapped region, innermost
/// group winning.
fn recolor_children(el: &mut Element, colors: &[RegionColor], active: Option<&str>) {
    for child in &mut el.children {
        if let Node::Element(c) = child {
            let next_active = if c.name == "g" {
                c.id()
                    .and_then(|id| colors.iter().find(|rc| rc.region_id == id))
                    .map(|rc| rc.color_hex.as_str())
                    .or(active)
            } else {
                active
            };
            if let Some(color) = next_active {
                if is_fillable(&c.name) {
                    c.set_attr("fill", color);
                }
            }
            recolor_children(c, colors, next_active);
        }
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, el: &Element) {
    let mut start = BytesStart::new(el.name.as_str());
    for (k, v) in &el.attrs {
        start.push_attribute((k.as_str(), v.as_str()));
    }
    if el.children.is_empty() {
        let _ = writer.write_event(Event::Empty(start));
        return;
    }
    let _ = writer.write_event(Event::Start(start));
    for child in &el.children {
        match child {
            Node::Element(c) => write_element(writer, c),
            Node::Text(t) => {
                let _ = writer.write_event(Event::Text(BytesText::new(t)));
            }
        }
    }
    let _ = writer.write_event(Event::End(BytesEnd::new(el.name.as_str())));
}
