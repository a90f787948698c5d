//! Read-back view of a written `.pptx`.
//!
//! Only what is needed to check a generated deck is extracted: slide order,
//! slide size, and per slide the shapes with their names, kinds, text runs
//! and picture relationships.

use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Kind of a shape found on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// `<p:sp>` with `txBox="1"`
    TextBox,
    /// Any other `<p:sp>`
    AutoShape,
    /// `<p:pic>`
    Picture,
}

/// A shape as read back from a slide part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeSummary {
    pub id: u32,
    pub name: String,
    pub kind: ShapeKind,
    /// Text of each `<a:t>` run, in document order
    pub runs: Vec<String>,
    /// `r:embed` of a picture
    pub image_rel: Option<String>,
}

impl ShapeSummary {
    fn new(kind: ShapeKind) -> Self {
        Self {
            id: 0,
            name: String::new(),
            kind,
            runs: Vec::new(),
            image_rel: None,
        }
    }

    /// All runs concatenated.
    pub fn text(&self) -> String {
        self.runs.concat()
    }
}

/// Shapes of one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSummary {
    /// Archive member the slide was read from
    pub member: String,
    pub shapes: Vec<ShapeSummary>,
}

impl SlideSummary {
    /// The shape named `Title`.
    pub fn title(&self) -> Option<&ShapeSummary> {
        self.shapes.iter().find(|s| s.name == "Title")
    }

    /// Shapes named `Bullet N`, in slide order.
    pub fn bullets(&self) -> Vec<&ShapeSummary> {
        self.shapes
            .iter()
            .filter(|s| s.name.starts_with("Bullet "))
            .collect()
    }

    pub fn pictures(&self) -> Vec<&ShapeSummary> {
        self.shapes
            .iter()
            .filter(|s| s.kind == ShapeKind::Picture)
            .collect()
    }
}

/// Summary of a whole presentation package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSummary {
    pub slide_width: i64,
    pub slide_height: i64,
    pub slides: Vec<SlideSummary>,
}

impl DeckSummary {
    /// Read a `.pptx` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Read a `.pptx` held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;

        let rels_xml = read_member(&mut archive, "ppt/_rels/presentation.xml.rels")?;
        let targets = parse_relationships(&rels_xml)?;

        let pres_xml = read_member(&mut archive, "ppt/presentation.xml")?;
        let (slide_rel_ids, slide_width, slide_height) = parse_presentation(&pres_xml)?;

        let mut slides = Vec::with_capacity(slide_rel_ids.len());
        for rel_id in slide_rel_ids {
            let target = targets.get(&rel_id).ok_or_else(|| {
                OoxmlError::InvalidRelationship(format!("slide relationship {} not found", rel_id))
            })?;
            let member = resolve_target("ppt", target);
            let xml = read_member(&mut archive, &member)?;
            slides.push(SlideSummary {
                shapes: parse_slide(&xml)?,
                member,
            });
        }

        Ok(Self {
            slide_width,
            slide_height,
            slides,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Title text of every slide, empty where a slide has no title shape.
    pub fn titles(&self) -> Vec<String> {
        self.slides
            .iter()
            .map(|s| s.title().map(ShapeSummary::text).unwrap_or_default())
            .collect()
    }
}

fn read_member<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut file = archive
        .by_name(name)
        .map_err(|_| OoxmlError::PartNotFound(name.to_string()))?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Resolve a relationship target relative to the source part's directory.
fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            ".." => {
                segments.pop();
            },
            "." | "" => {},
            other => segments.push(other),
        }
    }
    segments.join("/")
}

fn attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .map(|a| unescape_xml(&String::from_utf8_lossy(&a.value)))
}

fn parse_relationships(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                if e.local_name().as_ref() == b"Relationship" =>
            {
                if let (Some(id), Some(target)) = (attr(e, b"Id"), attr(e, b"Target")) {
                    targets.insert(id, target);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok(targets)
}

fn parse_presentation(xml: &str) -> Result<(Vec<String>, i64, i64)> {
    let mut reader = Reader::from_str(xml);
    let mut rel_ids = Vec::new();
    let (mut width, mut height) = (0, 0);

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"sldId" => {
                    if let Some(rid) = attr(e, b"r:id") {
                        rel_ids.push(rid);
                    }
                },
                b"sldSz" => {
                    width = parse_emu(attr(e, b"cx"))?;
                    height = parse_emu(attr(e, b"cy"))?;
                },
                _ => {},
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok((rel_ids, width, height))
}

fn parse_emu(value: Option<String>) -> Result<i64> {
    let value = value.ok_or_else(|| OoxmlError::InvalidFormat("missing slide size".to_string()))?;
    value
        .parse()
        .map_err(|_| OoxmlError::InvalidFormat(format!("bad EMU value: {}", value)))
}

fn parse_slide(xml: &str) -> Result<Vec<ShapeSummary>> {
    let mut reader = Reader::from_str(xml);
    let mut shapes = Vec::new();
    let mut current: Option<ShapeSummary> = None;
    let mut run_text: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"sp" => current = Some(ShapeSummary::new(ShapeKind::AutoShape)),
                b"pic" => current = Some(ShapeSummary::new(ShapeKind::Picture)),
                b"cNvPr" => {
                    if let Some(shape) = current.as_mut() {
                        shape.id = attr(e, b"id").and_then(|v| v.parse().ok()).unwrap_or(0);
                        shape.name = attr(e, b"name").unwrap_or_default();
                    }
                },
                b"cNvSpPr" => {
                    if let Some(shape) = current.as_mut()
                        && attr(e, b"txBox").as_deref() == Some("1")
                    {
                        shape.kind = ShapeKind::TextBox;
                    }
                },
                b"blip" => {
                    if let Some(shape) = current.as_mut() {
                        shape.image_rel = attr(e, b"r:embed");
                    }
                },
                b"t" if current.is_some() => run_text = Some(String::new()),
                _ => {},
            },
            Ok(Event::Text(e)) => {
                if let Some(text) = run_text.as_mut() {
                    text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            },
            Ok(Event::GeneralRef(e)) => {
                if let Some(text) = run_text.as_mut() {
                    match e.resolve_char_ref() {
                        Ok(Some(ch)) => text.push(ch),
                        _ => {
                            text.push('&');
                            text.push_str(&String::from_utf8_lossy(&e));
                            text.push(';');
                        },
                    }
                }
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => {
                    if let (Some(text), Some(shape)) = (run_text.take(), current.as_mut()) {
                        shape.runs.push(unescape_xml(&text));
                    }
                },
                b"sp" | b"pic" => {
                    if let Some(shape) = current.take() {
                        shapes.push(shape);
                    }
                },
                _ => {},
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(OoxmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok(shapes)
}
