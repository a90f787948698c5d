//! Package writer for OPC packages.
//!
//! This module serializes an OPC package into a ZIP archive, writing the
//! [Content_Types].xml manifest, package relationships, and all parts with their
//! relationships.

use super::constants::content_type as ct;
use super::constants::namespace;
use super::error::Result;
use super::package::OpcPackage;
use crate::common::xml::escape_xml;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Archive member name of the content types manifest.
pub const CONTENT_TYPES_MEMBER: &str = "[Content_Types].xml";

/// Archive member name of the package-level relationships.
pub const PACKAGE_RELS_MEMBER: &str = "_rels/.rels";

/// Package writer that serializes an OPC package to a ZIP file.
///
/// # Example
///
/// ```no_run
/// use deckmint::ooxml::opc::{OpcPackage, PackageWriter, Part};
///
/// let mut pkg = OpcPackage::new();
/// pkg.add_part(Part::new("/data.xml", "application/xml", b"<root/>".to_vec())?)?;
/// PackageWriter::write("output.zip", &pkg)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    ///
    /// The file is written in place; a failure midway leaves a partial file.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        Self::write_to_stream(&mut cursor, package)?;
        Ok(cursor.into_inner())
    }

    /// Write an OPC package to a seekable stream.
    pub fn write_to_stream<W: Write + Seek>(writer: W, package: &OpcPackage) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        // [Content_Types].xml comes first, as Office writers do
        let content_types = ContentTypesItem::from_package(package).to_xml();
        zip.start_file(CONTENT_TYPES_MEMBER, options)?;
        zip.write_all(content_types.as_bytes())?;

        zip.start_file(PACKAGE_RELS_MEMBER, options)?;
        zip.write_all(package.rels().to_xml().as_bytes())?;

        for part in package.iter_parts() {
            zip.start_file(part.member_name(), options)?;
            zip.write_all(part.blob())?;

            if !part.rels().is_empty() {
                zip.start_file(part.rels_member_name(), options)?;
                zip.write_all(part.rels().to_xml().as_bytes())?;
            }
        }

        zip.finish()?;
        Ok(())
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();

        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();

        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.ext(), part.content_type());
        }

        cti
    }

    /// Uses a default mapping if the extension matches a well-known type,
    /// otherwise uses an override for the specific partname.
    fn add_content_type(&mut self, partname: &str, ext: &str, content_type: &str) {
        if Self::is_default_content_type(ext, content_type) {
            self.defaults
                .insert(ext.to_string(), content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!(
            (ext, content_type),
            ("rels", ct::OPC_RELATIONSHIPS)
                | ("xml", ct::XML)
                | ("png", ct::PNG)
                | ("jpg", ct::JPEG)
                | ("jpeg", ct::JPEG)
                | ("gif", ct::GIF)
                | ("bmp", ct::BMP)
        )
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        let _ = write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES);

        // BTreeMap keeps both lists sorted, so output is stable
        for (ext, content_type) in &self.defaults {
            let _ = write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            );
        }

        for (partname, content_type) in &self.overrides {
            let _ = write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            );
        }

        xml.push_str("</Types>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::Part;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use std::io::Read;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type("/ppt/media/image1.png", "png", ct::PNG);
        cti.add_content_type("/ppt/slides/slide1.xml", "xml", ct::PML_SLIDE);

        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
        assert!(!xml.contains(r#"PartName="/ppt/media/image1.png""#));
    }

    #[test]
    fn test_archive_members() {
        let mut pkg = OpcPackage::new();
        pkg.rels_mut()
            .get_or_add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        let part = pkg
            .add_part(
                Part::new(
                    "/ppt/presentation.xml",
                    ct::PML_PRESENTATION_MAIN,
                    b"<p:presentation/>".to_vec(),
                )
                .unwrap(),
            )
            .unwrap();
        part.rels_mut().get_or_add(rt::THEME, "theme/theme1.xml");

        let bytes = PackageWriter::to_bytes(&pkg).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert!(names.contains(&CONTENT_TYPES_MEMBER.to_string()));
        assert!(names.contains(&PACKAGE_RELS_MEMBER.to_string()));
        assert!(names.contains(&"ppt/presentation.xml".to_string()));
        assert!(names.contains(&"ppt/_rels/presentation.xml.rels".to_string()));

        let mut body = String::new();
        archive
            .by_name("ppt/presentation.xml")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        assert_eq!(body, "<p:presentation/>");
    }
}
