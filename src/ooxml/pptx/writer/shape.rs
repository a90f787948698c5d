/// Shape types and implementation for PPTX presentations.
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::{ImageFormat, TextFormat};

/// A shape on a slide (text box, autoshape, picture).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    /// Display name; a generated one is used when unset
    pub(crate) name: Option<String>,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

/// Fill of an autoshape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeFill {
    /// Fill taken from the default shape style (theme `accent1`)
    Style,
    /// Solid fill in hex RGB
    Solid(String),
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        text: String,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        format: TextFormat,
    },
    Rectangle {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill: ShapeFill,
        line_color: Option<String>,
        text: Option<String>,
        format: TextFormat,
    },
    Picture {
        data: Vec<u8>,
        format: ImageFormat,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: String,
    },
}

impl MutableShape {
    /// Create a new text box shape.
    pub(crate) fn new_text_box(
        shape_id: u32,
        text: String,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Self {
        Self {
            shape_id,
            name: None,
            shape_type: ShapeType::TextBox {
                text,
                x,
                y,
                width,
                height,
                format: TextFormat::default(),
            },
        }
    }

    /// Create a new rectangle autoshape styled with the theme defaults.
    pub(crate) fn new_rectangle(shape_id: u32, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            shape_id,
            name: None,
            shape_type: ShapeType::Rectangle {
                x,
                y,
                width,
                height,
                fill: ShapeFill::Style,
                line_color: None,
                text: None,
                format: TextFormat::default(),
            },
        }
    }

    /// Create a new picture shape.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_picture(
        shape_id: u32,
        data: Vec<u8>,
        format: ImageFormat,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: String,
    ) -> Self {
        Self {
            shape_id,
            name: None,
            shape_type: ShapeType::Picture {
                data,
                format,
                x,
                y,
                width,
                height,
                description,
            },
        }
    }

    /// Shape ID within its slide.
    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Display name written to `<p:cNvPr name="...">`.
    pub fn display_name(&self) -> String {
        if let Some(ref name) = self.name {
            return name.clone();
        }
        let kind = match self.shape_type {
            ShapeType::TextBox { .. } => "TextBox",
            ShapeType::Rectangle { .. } => "Rectangle",
            ShapeType::Picture { .. } => "Picture",
        };
        format!("{} {}", kind, self.shape_id.saturating_sub(1))
    }

    /// Text carried by the shape, if any.
    pub fn text(&self) -> Option<&str> {
        match &self.shape_type {
            ShapeType::TextBox { text, .. } => Some(text),
            ShapeType::Rectangle { text, .. } => text.as_deref(),
            ShapeType::Picture { .. } => None,
        }
    }

    /// Builder method: set the display name.
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.name = Some(name.to_string());
        self
    }

    fn text_format_mut(&mut self) -> Option<&mut TextFormat> {
        match self.shape_type {
            ShapeType::TextBox { ref mut format, .. }
            | ShapeType::Rectangle { ref mut format, .. } => Some(format),
            ShapeType::Picture { .. } => None,
        }
    }

    /// Set text formatting for this shape (text boxes and rectangles).
    pub fn set_text_format(&mut self, format: TextFormat) -> &mut Self {
        if let Some(f) = self.text_format_mut() {
            *f = format;
        }
        self
    }

    /// Builder method: set font size in points.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        if let Some(f) = self.text_format_mut() {
            f.size = Some(size);
        }
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        if let Some(f) = self.text_format_mut() {
            f.bold = Some(bold);
        }
        self
    }

    /// Builder method: set text color (hex RGB).
    pub fn color(&mut self, color: &str) -> &mut Self {
        if let Some(f) = self.text_format_mut() {
            f.color = Some(color.to_string());
        }
        self
    }

    /// Builder method: set the text of a rectangle.
    pub fn set_text(&mut self, value: &str) -> &mut Self {
        if let ShapeType::Rectangle { ref mut text, .. } = self.shape_type {
            *text = Some(value.to_string());
        }
        self
    }

    /// Builder method: solid fill for a rectangle (hex RGB).
    pub fn fill_color(&mut self, color: &str) -> &mut Self {
        if let ShapeType::Rectangle { ref mut fill, .. } = self.shape_type {
            *fill = ShapeFill::Solid(color.to_string());
        }
        self
    }

    /// Builder method: outline color for a rectangle (hex RGB).
    pub fn line_color(&mut self, color: &str) -> &mut Self {
        if let ShapeType::Rectangle {
            ref mut line_color, ..
        } = self.shape_type
        {
            *line_color = Some(color.to_string());
        }
        self
    }

    /// Get image data if this shape is a picture.
    pub(crate) fn get_image_data(&self) -> Option<(&[u8], ImageFormat)> {
        match &self.shape_type {
            ShapeType::Picture { data, format, .. } => Some((data.as_slice(), *format)),
            _ => None,
        }
    }

    /// Generate XML for this shape.
    ///
    /// Pictures need the relationship ID of their image part.
    pub(crate) fn to_xml(&self, xml: &mut String, rel_id: Option<&str>) -> Result<()> {
        let name = escape_xml(&self.display_name());

        match &self.shape_type {
            ShapeType::TextBox {
                text,
                x,
                y,
                width,
                height,
                format,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, self.shape_id, name)?;
                xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr wrap="none" rtlCol="0">"#);
                xml.push_str(r#"<a:spAutoFit/>"#);
                xml.push_str("</a:bodyPr>");
                xml.push_str("<a:lstStyle/>");
                xml.push_str("<a:p>");
                write_run(xml, text, format)?;
                xml.push_str("</a:p>");
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeType::Rectangle {
                x,
                y,
                width,
                height,
                fill,
                line_color,
                text,
                format,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(xml, r#"<p:cNvPr id="{}" name="{}"/>"#, self.shape_id, name)?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);

                if let ShapeFill::Solid(color) = fill {
                    write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        color
                    )?;
                }

                if let Some(color) = line_color {
                    write!(
                        xml,
                        r#"<a:ln><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                        color
                    )?;
                }

                xml.push_str("</p:spPr>");

                // Default autoshape style: accent1 fill and outline, light text
                xml.push_str("<p:style>");
                xml.push_str(r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#);
                xml.push_str(r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#);
                xml.push_str(r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#);
                xml.push_str(r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#);
                xml.push_str("</p:style>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#);
                xml.push_str("<a:lstStyle/>");
                xml.push_str("<a:p>");
                xml.push_str(r#"<a:pPr algn="ctr"/>"#);
                if let Some(text) = text {
                    write_run(xml, text, format)?;
                }
                xml.push_str("</a:p>");
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeType::Picture {
                x,
                y,
                width,
                height,
                description,
                ..
            } => {
                xml.push_str("<p:pic>");
                xml.push_str("<p:nvPicPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{}" descr="{}"/>"#,
                    self.shape_id,
                    name,
                    escape_xml(description)
                )?;
                xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvPicPr>");

                xml.push_str("<p:blipFill>");
                let rid = rel_id.ok_or_else(|| {
                    crate::ooxml::error::OoxmlError::InvalidRelationship(format!(
                        "picture shape {} has no image relationship",
                        self.shape_id
                    ))
                })?;
                write!(xml, r#"<a:blip r:embed="{}"/>"#, rid)?;
                xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
                xml.push_str("</p:blipFill>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *x, *y, *width, *height)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");
                xml.push_str("</p:pic>");
            },
        }

        Ok(())
    }
}

fn write_xfrm(xml: &mut String, x: i64, y: i64, width: i64, height: i64) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, width, height)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

/// Write a single `<a:r>` run with its character properties.
fn write_run(xml: &mut String, text: &str, format: &TextFormat) -> Result<()> {
    xml.push_str("<a:r>");
    xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"");

    if let Some(size) = format.size {
        write!(
            xml,
            " sz=\"{}\"",
            crate::common::unit::pt_to_centipoints(size)
        )?;
    }

    if let Some(true) = format.bold {
        xml.push_str(" b=\"1\"");
    }

    xml.push('>');

    // Fill precedes the typeface in CT_TextCharacterProperties
    if let Some(ref color) = format.color {
        write!(
            xml,
            "<a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>",
            color
        )?;
    }

    if let Some(ref font) = format.font {
        write!(xml, "<a:latin typeface=\"{}\"/>", escape_xml(font))?;
    }

    xml.push_str("</a:rPr>");

    write!(xml, "<a:t>{}</a:t>", escape_xml(text))?;
    xml.push_str("</a:r>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_box_xml() {
        let mut shape = MutableShape::new_text_box(2, "I Keep Time".to_string(), 1, 2, 3, 4);
        shape.name("Title").font_size(36.0).bold(true).color("FFFFFF");

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();

        assert!(xml.contains(r#"<p:cNvPr id="2" name="Title"/>"#));
        assert!(xml.contains(r#"sz="3600" b="1">"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill>"#));
        assert!(xml.contains("<a:t>I Keep Time</a:t>"));
        assert!(xml.contains(r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));
    }

    #[test]
    fn test_rectangle_with_text_and_outline() {
        let mut shape = MutableShape::new_rectangle(3, 0, 0, 10, 10);
        shape
            .fill_color("FFFFFF")
            .line_color("000000")
            .set_text("Debugging & tips")
            .font_size(18.0)
            .color("505050");

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();

        assert!(xml.contains(r#"<a:ln><a:solidFill><a:srgbClr val="000000"/></a:solidFill></a:ln>"#));
        assert!(xml.contains("<a:t>Debugging &amp; tips</a:t>"));
        assert!(xml.contains("<p:style>"));
        assert_eq!(shape.text(), Some("Debugging & tips"));
    }

    #[test]
    fn test_style_filled_rectangle_has_no_explicit_fill() {
        let shape = MutableShape::new_rectangle(2, 0, 0, 9144000, 6858000);
        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();

        let sp_pr = &xml[xml.find("<p:spPr>").unwrap()..xml.find("</p:spPr>").unwrap()];
        assert!(!sp_pr.contains("solidFill"));
        assert!(xml.contains(r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#));
        assert_eq!(shape.display_name(), "Rectangle 1");
    }

    #[test]
    fn test_set_text_format_replaces_format() {
        let mut shape = MutableShape::new_text_box(2, "x".to_string(), 0, 0, 1, 1);
        shape.set_text_format(TextFormat::new().with_size(12.0).with_bold(true));

        let mut xml = String::new();
        shape.to_xml(&mut xml, None).unwrap();
        assert!(xml.contains(r#"sz="1200" b="1">"#));
        assert!(!xml.contains("srgbClr"));
    }

    #[test]
    fn test_picture_requires_rel_id() {
        let shape = MutableShape::new_picture(
            4,
            vec![0x89, 0x50, 0x4E, 0x47],
            ImageFormat::Png,
            0,
            0,
            10,
            10,
            "icon".to_string(),
        );
        let mut xml = String::new();
        assert!(shape.to_xml(&mut xml, None).is_err());

        let mut xml = String::new();
        shape.to_xml(&mut xml, Some("rId2")).unwrap();
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
    }
}
