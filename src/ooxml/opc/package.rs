/// In-memory OPC package assembled before serialization.
use super::error::{OpcError, Result};
use super::part::Part;
use super::rel::Relationships;

/// An OPC package under construction.
///
/// Holds the package-level relationships (`/_rels/.rels`) and the parts in the
/// order they were added; [`super::PackageWriter`] writes them in that order.
#[derive(Debug, Default)]
pub struct OpcPackage {
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part. Partnames must be unique within the package.
    pub fn add_part(&mut self, part: Part) -> Result<&mut Part> {
        if self.part(part.partname()).is_some() {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        let last = self.parts.len() - 1;
        Ok(&mut self.parts[last])
    }

    /// Look up a part by partname.
    pub fn part(&self, partname: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.partname() == partname)
    }

    /// Iterate over all parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Number of parts, excluding relationship parts and the content types manifest.
    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    #[inline]
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_partname_rejected() {
        let mut pkg = OpcPackage::new();
        pkg.add_part(Part::new("/a.xml", "application/xml", Vec::new()).unwrap())
            .unwrap();
        let dup = pkg.add_part(Part::new("/a.xml", "application/xml", Vec::new()).unwrap());
        assert!(matches!(dup, Err(OpcError::DuplicatePart(_))));
        assert_eq!(pkg.part_count(), 1);
    }
}
