/// Slide types and implementation for PPTX presentations.
use crate::ooxml::error::{OoxmlError, Result};
use std::path::Path;

// Import shared format types
use super::super::format::ImageFormat;
use super::relmap::RelationshipMapper;
use super::shape::MutableShape;

/// A mutable slide in a presentation.
///
/// Every slide uses the blank layout; all content is added as shapes.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    #[inline]
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Shapes on the slide, back to front.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    // IDs: 1=group, 2+=shapes
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    fn push(&mut self, shape: MutableShape) -> &mut MutableShape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Add a text box to the slide.
    pub fn add_text_box(
        &mut self,
        text: &str,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let shape_id = self.next_shape_id();
        let shape = MutableShape::new_text_box(shape_id, text.to_string(), x, y, width, height);
        self.push(shape)
    }

    /// Add a rectangle autoshape to the slide.
    ///
    /// The rectangle takes its fill and outline from the theme until
    /// overridden with [`MutableShape::fill_color`] or [`MutableShape::line_color`].
    pub fn add_rectangle(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut MutableShape {
        let shape_id = self.next_shape_id();
        let shape = MutableShape::new_rectangle(shape_id, x, y, width, height);
        self.push(shape)
    }

    /// Add a picture to the slide from a file.
    pub fn add_picture<P: AsRef<Path>>(
        &mut self,
        image_path: P,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Result<&mut MutableShape> {
        let image_path = image_path.as_ref();
        let data = std::fs::read(image_path)?;
        let description = image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        self.add_picture_from_bytes(data, x, y, width, height, description)
    }

    /// Add a picture to the slide from bytes.
    pub fn add_picture_from_bytes(
        &mut self,
        data: Vec<u8>,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        description: Option<String>,
    ) -> Result<&mut MutableShape> {
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| OoxmlError::InvalidFormat("Unknown image format".to_string()))?;

        let shape_id = self.next_shape_id();
        let desc = description.unwrap_or_default();
        let shape = MutableShape::new_picture(shape_id, data, format, x, y, width, height, desc);
        Ok(self.push(shape))
    }

    /// Collect all images from this slide, in shape order.
    pub(crate) fn collect_images(&self) -> Vec<(&[u8], ImageFormat)> {
        self.shapes
            .iter()
            .filter_map(|shape| shape.get_image_data())
            .collect()
    }

    /// Generate slide XML content with actual relationship IDs.
    pub(crate) fn to_xml_with_rels(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        let mut image_counter = 0;
        for shape in &self.shapes {
            let rel_id = if shape.get_image_data().is_some() {
                let rid = rel_mapper.get_image_id(slide_index, image_counter);
                image_counter += 1;
                rid
            } else {
                None
            };

            shape.to_xml(&mut xml, rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");

        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_shape_ids_start_after_group() {
        let mut slide = MutableSlide::new(256);
        assert_eq!(slide.add_rectangle(0, 0, 1, 1).shape_id(), 2);
        assert_eq!(slide.add_text_box("Title", 0, 0, 1, 1).shape_id(), 3);
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_unknown_image_rejected() {
        let mut slide = MutableSlide::new(256);
        let result = slide.add_picture_from_bytes(b"not an image".to_vec(), 0, 0, 1, 1, None);
        assert!(matches!(result, Err(OoxmlError::InvalidFormat(_))));
    }

    #[test]
    fn test_picture_uses_mapped_rel_id() {
        let mut slide = MutableSlide::new(256);
        slide.add_rectangle(0, 0, 1, 1);
        slide
            .add_picture_from_bytes(PNG_MAGIC.to_vec(), 0, 0, 1, 1, Some("icon_0.png".into()))
            .unwrap();

        assert_eq!(slide.collect_images().len(), 1);

        let mut mapper = RelationshipMapper::new();
        mapper.add_image(0, 0, "rId2".to_string());
        let xml = slide.to_xml_with_rels(0, &mapper).unwrap();

        assert!(xml.contains(r#"r:embed="rId2""#));
        assert!(xml.contains(r#"descr="icon_0.png""#));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_missing_rel_id_is_an_error() {
        let mut slide = MutableSlide::new(256);
        slide
            .add_picture_from_bytes(PNG_MAGIC.to_vec(), 0, 0, 1, 1, None)
            .unwrap();
        assert!(slide.to_xml_with_rels(0, &RelationshipMapper::new()).is_err());
    }
}
