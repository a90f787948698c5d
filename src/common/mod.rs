//! Common types and utilities shared by the deck and raster pipelines.

pub mod error;
pub mod unit;
pub mod xml;

pub use error::{Error, Result};
