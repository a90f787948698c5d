//! Built-in 5x7 bitmap font, used when no system font can be resolved.

use image::{Rgba, RgbaImage};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub(crate) const GLYPH_WIDTH: u32 = 5;
pub(crate) const GLYPH_HEIGHT: u32 = 7;

/// Rows top to bottom, bit 4 is the leftmost column.
type Glyph = [u8; GLYPH_HEIGHT as usize];

const HOLLOW_BOX: Glyph = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

static GLYPHS: Lazy<HashMap<char, Glyph>> = Lazy::new(|| {
    HashMap::from([
        ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
        ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
        ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
        ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
        ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
        ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
        ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
        ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
        ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ])
});

fn glyph(ch: char) -> &'static Glyph {
    GLYPHS.get(&ch).unwrap_or(&HOLLOW_BOX)
}

/// Integer scale that makes a glyph roughly `font_size` pixels tall.
pub(crate) fn scale_for(font_size: f32) -> u32 {
    ((font_size / GLYPH_HEIGHT as f32).floor() as u32).max(1)
}

/// Size in pixels of `text` at `scale`, one blank column between glyphs.
pub(crate) fn measure(text: &str, scale: u32) -> (u32, u32) {
    let count = text.chars().count() as u32;
    if count == 0 {
        return (0, 0);
    }
    let width = (count * GLYPH_WIDTH + (count - 1)) * scale;
    (width, GLYPH_HEIGHT * scale)
}

/// Draw `text` centred on (`cx`, `cy`). Pixels outside the image are clipped.
pub(crate) fn draw_text_centered(
    img: &mut RgbaImage,
    text: &str,
    cx: u32,
    cy: u32,
    scale: u32,
    color: Rgba<u8>,
) {
    let (width, height) = measure(text, scale);
    let left = cx as i64 - (width / 2) as i64;
    let top = cy as i64 - (height / 2) as i64;

    for (n, ch) in text.chars().enumerate() {
        let origin_x = left + (n as u32 * (GLYPH_WIDTH + 1) * scale) as i64;
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let x0 = origin_x + (col * scale) as i64;
                let y0 = top + (row as u32 * scale) as i64;
                fill_block(img, x0, y0, scale, color);
            }
        }
    }
}

fn fill_block(img: &mut RgbaImage, x0: i64, y0: i64, scale: u32, color: Rgba<u8>) {
    for dy in 0..scale as i64 {
        for dx in 0..scale as i64 {
            let (x, y) = (x0 + dx, y0 + dy);
            if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_two_digits() {
        assert_eq!(scale_for(40.0), 5);
        assert_eq!(measure("10", 5), (55, 35));
        assert_eq!(measure("", 5), (0, 0));
    }

    #[test]
    fn test_unknown_glyph_is_hollow_box() {
        let mut img = RgbaImage::new(7, 9);
        let white = Rgba([255, 255, 255, 255]);
        draw_text_centered(&mut img, "?", 3, 4, 1, white);

        // Box spans x 1..=5, y 1..=7
        assert_eq!(*img.get_pixel(1, 1), white);
        assert_eq!(*img.get_pixel(5, 7), white);
        assert_eq!(img.get_pixel(3, 4)[3], 0);
    }

    #[test]
    fn test_clipped_at_edges() {
        let mut img = RgbaImage::new(4, 4);
        draw_text_centered(&mut img, "8", 0, 0, 2, Rgba([0, 0, 0, 255]));
    }
}
