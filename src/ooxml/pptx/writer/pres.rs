/// Presentation writer for PPTX.
use crate::common::unit::emu_to_inches;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackageWriter, Part};
use crate::ooxml::pptx::template;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::relmap::RelationshipMapper;
use super::slide::MutableSlide;

const PRESENTATION_PART: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_PART: &str = "/ppt/slideMasters/slideMaster1.xml";
const SLIDE_LAYOUT_PART: &str = "/ppt/slideLayouts/slideLayout1.xml";
const THEME_PART: &str = "/ppt/theme/theme1.xml";

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set dimensions and document properties,
/// and serialize the whole deck as an OPC package.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// `dc:title` of the core properties
    title: String,
    /// `dc:creator` of the core properties
    creator: String,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,
            slide_height: 6858000,
            title: String::new(),
            creator: env!("CARGO_PKG_NAME").to_string(),
        }
    }

    /// Append a new blank slide and return it for editing.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(MutableSlide::new(slide_id));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by index.
    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the document title stored in `docProps/core.xml`.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Save the presentation to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let package = self.to_package()?;
        PackageWriter::write(path.as_ref(), &package)?;
        log::debug!(
            "wrote {} slides ({:.2}x{:.2} in, {} parts) to {}",
            self.slides.len(),
            emu_to_inches(self.slide_width),
            emu_to_inches(self.slide_height),
            package.part_count(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Serialize the presentation to an in-memory `.pptx`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = self.to_package()?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Build the OPC package: presentation part, master, layout, theme,
    /// property parts, one part per slide, and one media part per picture.
    pub(crate) fn to_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();

        package
            .rels_mut()
            .get_or_add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        package
            .rels_mut()
            .get_or_add(rt::CORE_PROPERTIES, "docProps/core.xml");
        package
            .rels_mut()
            .get_or_add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

        package.add_part(Part::new(
            "/docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            template::core_properties_xml(&self.title, &self.creator).into_bytes(),
        )?)?;
        package.add_part(Part::new(
            "/docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_properties_xml(self.slides.len()).into_bytes(),
        )?)?;

        // Master first so it gets rId1, which presentation.xml hardcodes
        let mut pres_rels = crate::ooxml::opc::Relationships::new();
        pres_rels.get_or_add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");

        let master = package.add_part(Part::new(
            SLIDE_MASTER_PART,
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml().as_bytes().to_vec(),
        )?)?;
        master
            .rels_mut()
            .get_or_add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master.rels_mut().get_or_add(rt::THEME, "../theme/theme1.xml");

        let layout = package.add_part(Part::new(
            SLIDE_LAYOUT_PART,
            ct::PML_SLIDE_LAYOUT,
            template::blank_slide_layout_xml().as_bytes().to_vec(),
        )?)?;
        layout
            .rels_mut()
            .get_or_add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");

        package.add_part(Part::new(
            THEME_PART,
            ct::OFC_THEME,
            template::default_theme_xml().as_bytes().to_vec(),
        )?)?;

        // Slides, with their media
        let mut rel_mapper = RelationshipMapper::new();
        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        let mut media_counter = 0;

        for (slide_index, slide) in self.slides.iter().enumerate() {
            let slide_number = slide_index + 1;
            let mut slide_part = Part::new(
                &format!("/ppt/slides/slide{}.xml", slide_number),
                ct::PML_SLIDE,
                Vec::new(),
            )?;
            slide_part
                .rels_mut()
                .get_or_add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");

            for (image_index, (data, format)) in slide.collect_images().into_iter().enumerate() {
                media_counter += 1;
                let media_name = format!("image{}.{}", media_counter, format.extension());
                package.add_part(Part::new(
                    &format!("/ppt/media/{}", media_name),
                    format.mime_type(),
                    data.to_vec(),
                )?)?;
                let rid = slide_part
                    .rels_mut()
                    .get_or_add(rt::IMAGE, &format!("../media/{}", media_name));
                rel_mapper.add_image(slide_index, image_index, rid);
            }

            let xml = slide.to_xml_with_rels(slide_index, &rel_mapper)?;
            slide_part.set_blob(xml.into_bytes());
            package.add_part(slide_part)?;

            slide_rel_ids
                .push(pres_rels.get_or_add(rt::SLIDE, &format!("slides/slide{}.xml", slide_number)));
        }

        package.add_part(Part::new(
            "/ppt/presProps.xml",
            ct::PML_PRES_PROPS,
            template::default_pres_props_xml().as_bytes().to_vec(),
        )?)?;
        package.add_part(Part::new(
            "/ppt/viewProps.xml",
            ct::PML_VIEW_PROPS,
            template::default_view_props_xml().as_bytes().to_vec(),
        )?)?;
        package.add_part(Part::new(
            "/ppt/tableStyles.xml",
            ct::PML_TABLE_STYLES,
            template::default_table_styles_xml().as_bytes().to_vec(),
        )?)?;
        pres_rels.get_or_add(rt::PRES_PROPS, "presProps.xml");
        pres_rels.get_or_add(rt::VIEW_PROPS, "viewProps.xml");
        pres_rels.get_or_add(rt::THEME, "theme/theme1.xml");
        pres_rels.get_or_add(rt::TABLE_STYLES, "tableStyles.xml");

        let pres_xml = self.generate_presentation_xml_with_rels(&slide_rel_ids)?;
        let pres_part = package.add_part(Part::new(
            PRESENTATION_PART,
            ct::PML_PRESENTATION_MAIN,
            pres_xml.into_bytes(),
        )?)?;
        *pres_part.rels_mut() = pres_rels;

        Ok(package)
    }

    /// Generate `ppt/presentation.xml` with the actual slide relationship IDs.
    pub(crate) fn generate_presentation_xml_with_rels(
        &self,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" saveSubsetFonts="1">"#);

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
            self.slide_width, self.slide_height
        )?;

        xml.push_str("<p:notesSz cx=\"6858000\" cy=\"9144000\"/>");
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9144000);
        assert_eq!(pres.slide_height(), 6858000);
    }

    #[test]
    fn test_add_slide() {
        let mut pres = MutablePresentation::new();
        assert_eq!(pres.add_slide().slide_id(), 256);
        assert_eq!(pres.add_slide().slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
    }

    #[test]
    fn test_add_text_box() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        slide.add_text_box("Hello", 100, 100, 500, 200);
        assert_eq!(slide.shape_count(), 1);
    }

    #[test]
    fn test_xml_generation() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        pres.add_slide();

        let ids = vec!["rId2".to_string(), "rId3".to_string()];
        let xml = pres.generate_presentation_xml_with_rels(&ids).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000""#));
    }

    #[test]
    fn test_package_parts() {
        let mut pres = MutablePresentation::new();
        pres.add_slide()
            .add_picture_from_bytes(PNG_MAGIC.to_vec(), 0, 0, 10, 10, None)
            .unwrap();
        pres.add_slide();

        let package = pres.to_package().unwrap();
        for name in [
            "/ppt/presentation.xml",
            "/ppt/slideMasters/slideMaster1.xml",
            "/ppt/slideLayouts/slideLayout1.xml",
            "/ppt/theme/theme1.xml",
            "/ppt/slides/slide1.xml",
            "/ppt/slides/slide2.xml",
            "/ppt/media/image1.png",
            "/docProps/core.xml",
            "/docProps/app.xml",
        ] {
            assert!(package.part(name).is_some(), "missing {}", name);
        }

        let pres_part = package.part("/ppt/presentation.xml").unwrap();
        let master_rel = pres_part.rels().get("rId1").unwrap();
        assert_eq!(master_rel.reltype(), rt::SLIDE_MASTER);
        assert_eq!(pres_part.rels().get("rId2").unwrap().target_ref(), "slides/slide1.xml");

        let slide1 = package.part("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(slide1.rels().get("rId1").unwrap().reltype(), rt::SLIDE_LAYOUT);
        assert_eq!(
            slide1.rels().get("rId2").unwrap().target_ref(),
            "../media/image1.png"
        );
        let xml = std::str::from_utf8(slide1.blob()).unwrap();
        assert!(xml.contains(r#"r:embed="rId2""#));
    }

    #[test]
    fn test_media_parts_keep_image_format() {
        let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0];
        let gif = b"GIF89a".to_vec();
        let bmp = vec![0x42, 0x4D, 0x00, 0x00];

        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        for data in [jpeg, gif, bmp] {
            slide.add_picture_from_bytes(data, 0, 0, 10, 10, None).unwrap();
        }

        let package = pres.to_package().unwrap();
        let expected = [
            ("/ppt/media/image1.jpeg", ct::JPEG),
            ("/ppt/media/image2.gif", ct::GIF),
            ("/ppt/media/image3.bmp", ct::BMP),
        ];
        for (name, content_type) in expected {
            let part = package.part(name).unwrap();
            assert_eq!(part.content_type(), content_type);
        }

        let slide1 = package.part("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(
            slide1.rels().get("rId4").unwrap().target_ref(),
            "../media/image3.bmp"
        );
    }

    #[test]
    fn test_to_bytes_is_deterministic() {
        let build = || {
            let mut pres = MutablePresentation::new();
            pres.set_title("Deck");
            pres.add_slide().add_text_box("Same", 0, 0, 10, 10);
            pres.to_bytes().unwrap()
        };
        assert_eq!(build(), build());
    }
}
