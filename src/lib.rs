//! Deckmint - a ten-slide PPTX generator with rendered icons, and an SVG rasterizer
//!
//! The crate backs two small programs:
//!
//! - `make-deck` renders ten numbered icons, composes ten slides from literal
//!   content and writes them as an Office Open XML presentation.
//! - `svg2png` downloads one SVG and rasterizes it at its intrinsic size.
//!
//! # Features
//!
//! - **Presentation writer**: OPC packaging with a slide master, blank layout
//!   and Office theme ([`ooxml`])
//! - **Deck reader**: read a written `.pptx` back for inspection
//!   ([`ooxml::pptx::reader`])
//! - **Icons**: system font labels through resvg, with a built-in bitmap
//!   font fallback ([`icons`])
//! - **Rasterizer**: SVG to PNG via resvg; fetching requires the `fetch`
//!   feature (on by default) ([`raster`])
//!
//! # Example - Building the deck
//!
//! ```no_run
//! use deckmint::deck::{DeckOptions, build_deck};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let output = build_deck(&DeckOptions::default().with_output("deck.pptx"))?;
//! println!("{}", output.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting a deck
//!
//! ```no_run
//! use deckmint::ooxml::pptx::DeckSummary;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deck = DeckSummary::from_path("deck.pptx")?;
//! for title in deck.titles() {
//!     println!("{}", title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod deck;
pub mod icons;
pub mod ooxml;
pub mod raster;

pub use common::{Error, Result};
