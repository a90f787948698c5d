//! PowerPoint (.pptx) presentation support.
//!
//! - [`MutablePresentation`] builds a deck in memory and writes it as a
//!   PresentationML package with a single master, a blank layout and the
//!   default Office theme.
//! - [`reader::DeckSummary`] reads a package back for inspection.
//!
//! # Example
//!
//! ```no_run
//! use deckmint::ooxml::pptx::MutablePresentation;
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.add_rectangle(0, 0, 9144000, 6858000);
//! slide.add_text_box("Hello", 457200, 274320, 8229600, 914400)
//!     .font_size(36.0)
//!     .bold(true)
//!     .color("FFFFFF");
//! pres.save("hello.pptx")?;
//! # Ok::<(), deckmint::ooxml::OoxmlError>(())
//! ```

pub mod format;
pub mod reader;
pub mod template;
pub mod writer;

pub use format::{ImageFormat, TextFormat};
pub use reader::DeckSummary;
pub use writer::{MutablePresentation, MutableShape, MutableSlide, ShapeFill};
