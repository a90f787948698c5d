//! Remote SVG to PNG conversion.
//!
//! The SVG is rendered at its intrinsic size (96 dpi, scale 1). Fetching is a
//! single blocking GET with the HTTP client defaults; nothing is retried.

mod options;

pub use options::{DEFAULT_OUTPUT, DEFAULT_URL, RasterOptions};

use image::RgbaImage;
use resvg::{tiny_skia, usvg};
use std::path::Path;
use thiserror::Error;

/// Errors raised while fetching or rasterizing an SVG.
#[derive(Error, Debug)]
pub enum RasterError {
    /// Transport failure: DNS, connection, TLS or body read
    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("SVG parse error: {0}")]
    Svg(#[from] usvg::Error),

    /// The document has no drawable area
    #[error("SVG has an empty canvas ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RasterError>;

/// Download the SVG document at `url`.
#[cfg(feature = "fetch")]
pub fn fetch_svg(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(RasterError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.bytes()?.to_vec();
    log::debug!("fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

/// Render SVG source to an RGBA image at its intrinsic size.
pub fn rasterize_svg(data: &[u8]) -> Result<RgbaImage> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_data(data, &opt)?;
    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RasterError::EmptyCanvas { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha
    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    RgbaImage::from_raw(width, height, data).ok_or(RasterError::EmptyCanvas { width, height })
}

/// Rasterize SVG source and write it as PNG.
pub fn svg_to_png<P: AsRef<Path>>(data: &[u8], output: P) -> Result<()> {
    let img = rasterize_svg(data)?;
    img.save_with_format(output.as_ref(), image::ImageFormat::Png)?;
    log::info!(
        "{}x{} PNG written to {}",
        img.width(),
        img.height(),
        output.as_ref().display()
    );
    Ok(())
}

/// Fetch the SVG at `url` and write it as PNG to `output`.
#[cfg(feature = "fetch")]
pub fn convert_url_to_png<P: AsRef<Path>>(url: &str, output: P) -> Result<()> {
    let data = fetch_svg(url)?;
    svg_to_png(&data, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
        <rect x="0" y="0" width="10" height="10" fill="#FF0000"/>
    </svg>"##;

    #[test]
    fn test_intrinsic_size() {
        let img = rasterize_svg(SQUARE.as_bytes()).unwrap();
        assert_eq!(img.dimensions(), (20, 10));
        assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(15, 5)[3], 0);
    }

    #[test]
    fn test_not_svg() {
        assert!(matches!(
            rasterize_svg(b"<html></html>"),
            Err(RasterError::Svg(_))
        ));
    }
}
