//! Office Open XML (OOXML) presentation writing and inspection.
//!
//! The module is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): package assembly (parts, relationships, content
//!    types) and ZIP serialization
//! 2. **PresentationML** (`pptx`): the mutable slide model, its XML
//!    generation, and a small reader for verifying written decks
//!
//! # Example
//!
//! ```rust,no_run
//! use deckmint::ooxml::pptx::MutablePresentation;
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.add_text_box("Hello", 457200, 274320, 8229600, 914400);
//! pres.save("hello.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
