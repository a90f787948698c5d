//! Fixed-offset slide layout.

use crate::common::unit::inches_to_emu;
use crate::ooxml::Result;
use crate::ooxml::pptx::{MutablePresentation, TextFormat};
use std::path::Path;

const TITLE_COLOR: &str = "FFFFFF";
const BULLET_FILL: &str = "FFFFFF";
const BULLET_LINE: &str = "000000";
const BULLET_COLOR: &str = "505050";

/// Append a blank slide with a full-bleed background, a title and one boxed
/// row per bullet. `icon_paths[i]`, when present, is placed left of bullet `i`.
pub fn add_slide<P: AsRef<Path>>(
    pres: &mut MutablePresentation,
    title: &str,
    bullets: &[&str],
    icon_paths: &[P],
) -> Result<()> {
    let slide_width = pres.slide_width();
    let slide_height = pres.slide_height();
    let slide = pres.add_slide();

    slide
        .add_rectangle(0, 0, slide_width, slide_height)
        .name("Background");

    slide
        .add_text_box(
            title,
            inches_to_emu(0.5),
            inches_to_emu(0.3),
            slide_width - 1,
            inches_to_emu(1.0),
        )
        .name("Title")
        .set_text_format(
            TextFormat::new()
                .with_size(36.0)
                .with_bold(true)
                .with_color(TITLE_COLOR),
        );

    for (i, bullet) in bullets.iter().enumerate() {
        let top = inches_to_emu(1.5 + i as f64 * 1.2);

        slide
            .add_rectangle(
                inches_to_emu(0.5),
                top,
                slide_width - inches_to_emu(1.0),
                inches_to_emu(1.0),
            )
            .name(&format!("Bullet {}", i + 1))
            .fill_color(BULLET_FILL)
            .line_color(BULLET_LINE)
            .set_text(bullet)
            .font_size(18.0)
            .color(BULLET_COLOR);

        if let Some(icon) = icon_paths.get(i) {
            slide
                .add_picture(
                    icon,
                    inches_to_emu(0.2),
                    top,
                    inches_to_emu(0.8),
                    inches_to_emu(0.8),
                )?
                .name(&format!("Icon {}", i + 1));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::reader::{DeckSummary, ShapeKind};

    #[test]
    fn test_layout_without_icons() {
        let mut pres = MutablePresentation::new();
        add_slide::<&Path>(&mut pres, "I Keep Time", &["Reminders", "Organized"], &[]).unwrap();

        let slide = pres.slide(0).unwrap();
        // background, title, two bullets
        assert_eq!(slide.shape_count(), 4);
        assert_eq!(slide.shapes()[1].text(), Some("I Keep Time"));
        assert_eq!(slide.shapes()[3].text(), Some("Organized"));

        let mut xml = String::new();
        slide.shapes()[1].to_xml(&mut xml, None).unwrap();
        assert!(xml.contains(r#"sz="3600" b="1">"#));
        assert!(xml.contains(r#"<a:srgbClr val="FFFFFF"/>"#));
    }

    #[test]
    fn test_icon_next_to_first_bullet() {
        let tmp = tempfile::tempdir().unwrap();
        let icon = tmp.path().join("icon_0.png");
        image::RgbaImage::new(4, 4)
            .save_with_format(&icon, image::ImageFormat::Png)
            .unwrap();

        let mut pres = MutablePresentation::new();
        add_slide(&mut pres, "Title", &["one", "two"], &[&icon]).unwrap();

        let deck = DeckSummary::from_bytes(&pres.to_bytes().unwrap()).unwrap();
        let slide = &deck.slides[0];
        assert_eq!(slide.pictures().len(), 1);
        assert_eq!(slide.bullets().len(), 2);
        assert_eq!(slide.title().unwrap().kind, ShapeKind::TextBox);
        assert_eq!(slide.shapes[0].name, "Background");
    }
}
