//! Generated slide icons: a coloured disc with a white numeral.
//!
//! ```no_run
//! use deckmint::icons::{IconOptions, IconRenderer, IconSpec, write_icon};
//!
//! let renderer = IconRenderer::new(&IconOptions::default());
//! write_icon("icons/icon_0.png", &IconSpec::new(0, [255, 102, 102]), &renderer)?;
//! # Ok::<(), deckmint::icons::IconError>(())
//! ```

mod bitmap;
mod font;

pub use font::{IconOptions, IconRenderer};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while producing icon files.
#[derive(Error, Debug)]
pub enum IconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// The label could not be rendered with the system font
    #[error("Label rendering error: {0}")]
    Render(String),
}

/// One icon: its index, fill colour and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub index: usize,
    pub color: [u8; 3],
    pub label: String,
}

impl IconSpec {
    /// Icon for `index`, labelled with the 1-based number.
    pub fn new(index: usize, color: [u8; 3]) -> Self {
        Self {
            index,
            color,
            label: (index + 1).to_string(),
        }
    }

    /// `icon_{index}.png`
    pub fn file_name(&self) -> String {
        format!("icon_{}.png", self.index)
    }
}

/// Render `spec` and write it as PNG to `path`. Returns `path`.
pub fn write_icon<P: AsRef<Path>>(
    path: P,
    spec: &IconSpec,
    renderer: &IconRenderer,
) -> Result<PathBuf, IconError> {
    let path = path.as_ref();
    let img = renderer.render(spec)?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    log::debug!("icon {} written to {}", spec.index, path.display());
    Ok(path.to_path_buf())
}

/// Write every icon into `dir`, creating it if needed.
///
/// Returns the written paths in the order of `specs`.
pub fn generate_icons<P: AsRef<Path>>(
    dir: P,
    specs: &[IconSpec],
    renderer: &IconRenderer,
) -> Result<Vec<PathBuf>, IconError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    specs
        .iter()
        .map(|spec| write_icon(dir.join(spec.file_name()), spec, renderer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_one_based() {
        assert_eq!(IconSpec::new(0, [0, 0, 0]).label, "1");
        assert_eq!(IconSpec::new(9, [0, 0, 0]).label, "10");
        assert_eq!(IconSpec::new(9, [0, 0, 0]).file_name(), "icon_9.png");
    }

    #[test]
    fn test_generate_icons_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("icons");
        let renderer = IconRenderer::new(&IconOptions::default());
        let specs = [IconSpec::new(0, [255, 0, 0]), IconSpec::new(1, [0, 255, 0])];

        let paths = generate_icons(&dir, &specs, &renderer).unwrap();
        assert_eq!(paths, vec![dir.join("icon_0.png"), dir.join("icon_1.png")]);

        // Idempotent
        generate_icons(&dir, &specs, &renderer).unwrap();
        let img = image::open(&paths[1]).unwrap();
        assert_eq!(img.width(), 100);
    }
}
