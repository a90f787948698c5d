//! Open Packaging Conventions (OPC) writing.
//!
//! An OPC package is a ZIP archive of parts (XML or binary blobs) tied
//! together by relationship parts and a `[Content_Types].xml` manifest.

pub mod constants;
pub mod error;
pub mod package;
pub mod part;
pub mod pkgwriter;
pub mod rel;

pub use error::{OpcError, Result};
pub use package::OpcPackage;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
