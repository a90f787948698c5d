/// Parts of an OPC package.
use super::error::{OpcError, Result};
use super::rel::Relationships;

/// A single part in an OPC package: a named blob with a content type and its
/// own outgoing relationships.
#[derive(Debug, Clone)]
pub struct Part {
    /// Absolute partname, e.g. `/ppt/slides/slide1.xml`
    partname: String,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    /// Create a part. The partname must be absolute (start with `/`).
    pub fn new(partname: &str, content_type: &str, blob: Vec<u8>) -> Result<Self> {
        if !partname.starts_with('/') || partname.len() < 2 || partname.ends_with('/') {
            return Err(OpcError::InvalidPartname(partname.to_string()));
        }
        Ok(Self {
            partname: partname.to_string(),
            content_type: content_type.to_string(),
            blob,
            rels: Relationships::new(),
        })
    }

    #[inline]
    pub fn partname(&self) -> &str {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    #[inline]
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }

    /// Replace the part's content.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    /// Extension of the partname, without the dot.
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        filename.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
    }

    /// Last segment of the partname.
    pub fn filename(&self) -> &str {
        self.partname
            .rsplit_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.partname)
    }

    /// Archive member name of this part's relationships, e.g.
    /// `ppt/slides/_rels/slide1.xml.rels`.
    pub fn rels_member_name(&self) -> String {
        let (dir, name) = self
            .partname
            .rsplit_once('/')
            .unwrap_or(("", self.partname.as_str()));
        let dir = dir.trim_start_matches('/');
        if dir.is_empty() {
            format!("_rels/{}.rels", name)
        } else {
            format!("{}/_rels/{}.rels", dir, name)
        }
    }

    /// Archive member name of the part itself (partname without the leading `/`).
    #[inline]
    pub fn member_name(&self) -> &str {
        &self.partname[1..]
    }
}
