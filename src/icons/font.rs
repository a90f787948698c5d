//! Label font resolution and icon rendering.

use super::bitmap;
use super::{IconError, IconSpec};
use image::{Pixel, Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};
use std::sync::Arc;
use usvg::fontdb;

/// Options controlling how icons are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct IconOptions {
    /// Preferred label font family
    pub font_family: String,
    /// Label size in pixels
    pub font_size: f32,
    /// Width and height of the icon in pixels
    pub size: u32,
    /// Gap between the image edge and the circle, in pixels
    pub inset: u32,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 40.0,
            size: 100,
            inset: 10,
        }
    }
}

impl IconOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    #[inline]
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    #[inline]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub fn with_inset(mut self, inset: u32) -> Self {
        self.inset = inset;
        self
    }
}

/// Font used for icon labels.
enum LabelFont {
    /// A system face, drawn through the SVG text renderer
    System(usvg::Options<'static>),
    /// Built-in 5x7 bitmap font
    Bitmap,
}

/// Draws icons with a resolved label font.
///
/// Font resolution happens once, in [`IconRenderer::new`]. When the requested
/// family is not installed the bitmap font is used instead; this is not an error.
pub struct IconRenderer {
    options: IconOptions,
    font: LabelFont,
}

impl IconRenderer {
    pub fn new(options: &IconOptions) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self::with_font_database(options, db)
    }

    /// Resolve the label font against an explicit font database.
    pub fn with_font_database(options: &IconOptions, db: fontdb::Database) -> Self {
        let query = fontdb::Query {
            families: &[fontdb::Family::Name(&options.font_family)],
            ..fontdb::Query::default()
        };

        let font = match db.query(&query) {
            Some(_) => {
                log::debug!("label font '{}' resolved", options.font_family);
                let mut svg_options = usvg::Options::default();
                svg_options.font_family = options.font_family.clone();
                svg_options.fontdb = Arc::new(db);
                LabelFont::System(svg_options)
            },
            None => {
                log::debug!(
                    "label font '{}' not found, using built-in bitmap font",
                    options.font_family
                );
                LabelFont::Bitmap
            },
        };

        Self {
            options: options.clone(),
            font,
        }
    }

    /// Whether labels are drawn with a system font.
    pub fn uses_system_font(&self) -> bool {
        matches!(self.font, LabelFont::System(_))
    }

    pub fn options(&self) -> &IconOptions {
        &self.options
    }

    /// Render an icon: transparent background, filled circle, white label.
    pub fn render(&self, spec: &IconSpec) -> Result<RgbaImage, IconError> {
        let size = self.options.size;
        let mut img = RgbaImage::new(size, size);

        let [r, g, b] = spec.color;
        draw_circle(&mut img, self.options.inset, Rgba([r, g, b, 255]));

        let white = Rgba([255, 255, 255, 255]);
        match &self.font {
            LabelFont::System(svg_options) => {
                self.draw_svg_label(&mut img, &spec.label, svg_options)?
            },
            LabelFont::Bitmap => bitmap::draw_text_centered(
                &mut img,
                &spec.label,
                size / 2,
                size / 2,
                bitmap::scale_for(self.options.font_size),
                white,
            ),
        }

        Ok(img)
    }

    fn draw_svg_label(
        &self,
        img: &mut RgbaImage,
        label: &str,
        svg_options: &usvg::Options<'static>,
    ) -> Result<(), IconError> {
        let size = self.options.size;
        let center = size as f32 / 2.0;
        let svg = format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}">"#,
                r#"<text x="{c}" y="{c}" font-family="{family}" font-size="{font_size}" "#,
                r##"fill="#FFFFFF" text-anchor="middle" dominant-baseline="central">{label}</text>"##,
                r#"</svg>"#,
            ),
            size = size,
            c = center,
            family = crate::common::xml::escape_xml(&self.options.font_family),
            font_size = self.options.font_size,
            label = crate::common::xml::escape_xml(label),
        );

        let tree = usvg::Tree::from_str(&svg, svg_options)
            .map_err(|e| IconError::Render(e.to_string()))?;
        let mut pixmap = tiny_skia::Pixmap::new(size, size)
            .ok_or_else(|| IconError::Render(format!("cannot allocate {0}x{0} pixmap", size)))?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        for (i, px) in pixmap.pixels().iter().enumerate() {
            if px.alpha() == 0 {
                continue;
            }
            let c = px.demultiply();
            let (x, y) = (i as u32 % size, i as u32 / size);
            img.get_pixel_mut(x, y)
                .blend(&Rgba([c.red(), c.green(), c.blue(), c.alpha()]));
        }

        Ok(())
    }
}

/// Fill the circle inscribed in the square inset by `inset` on every side.
fn draw_circle(img: &mut RgbaImage, inset: u32, color: Rgba<u8>) {
    let cx = img.width() as f32 / 2.0;
    let cy = img.height() as f32 / 2.0;
    let radius = (img.width().min(img.height()) as f32 / 2.0) - inset as f32;
    if radius <= 0.0 {
        return;
    }
    let r2 = radius * radius;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        if dx * dx + dy * dy <= r2 {
            *pixel = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap_renderer() -> IconRenderer {
        IconRenderer::with_font_database(&IconOptions::default(), fontdb::Database::new())
    }

    #[test]
    fn test_missing_family_falls_back() {
        let renderer = bitmap_renderer();
        assert!(!renderer.uses_system_font());
    }

    #[test]
    fn test_circle_and_corners() {
        let img = bitmap_renderer()
            .render(&IconSpec::new(0, [255, 102, 102]))
            .unwrap();

        assert_eq!(img.dimensions(), (100, 100));
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(99, 99)[3], 0);
        // Inside the circle, left of the label
        assert_eq!(*img.get_pixel(15, 50), Rgba([255, 102, 102, 255]));
        // Outside the inset square
        assert_eq!(img.get_pixel(5, 50)[3], 0);
    }

    #[test]
    fn test_label_is_white() {
        let img = bitmap_renderer()
            .render(&IconSpec::new(0, [102, 204, 255]))
            .unwrap();
        let white = img
            .pixels()
            .filter(|p| **p == Rgba([255, 255, 255, 255]))
            .count();
        assert!(white > 0);
    }

    #[test]
    fn test_inset_past_center_draws_nothing() {
        let options = IconOptions::default().with_inset(60);
        let renderer = IconRenderer::with_font_database(&options, fontdb::Database::new());
        let img = renderer.render(&IconSpec::new(0, [255, 0, 0])).unwrap();

        let red = img.pixels().filter(|p| **p == Rgba([255, 0, 0, 255])).count();
        assert_eq!(red, 0);
    }

    #[test]
    fn test_custom_size_scales_disc() {
        let options = IconOptions::default().with_size(64).with_inset(4);
        let renderer = IconRenderer::with_font_database(&options, fontdb::Database::new());
        let img = renderer.render(&IconSpec::new(2, [0, 0, 255])).unwrap();

        assert_eq!(img.dimensions(), (64, 64));
        // Radius 28 around (32, 32)
        assert_eq!(*img.get_pixel(5, 32), Rgba([0, 0, 255, 255]));
        assert_eq!(img.get_pixel(2, 32)[3], 0);
    }

    #[test]
    fn test_options_builder() {
        let opts = IconOptions::new().with_font_family("DejaVu Sans").with_font_size(32.0);
        assert_eq!(opts.font_family, "DejaVu Sans");
        assert_eq!(opts.font_size, 32.0);
        assert_eq!(opts.size, 100);
    }
}
