//! Bitmap lettering for page labels
//!
//! Glyphs are 3x5 font cells, each drawn as a square block of pixels. Only the
//! characters needed for page numbering are defined; anything else leaves a gap.

use image::{Rgba, RgbaImage};

/// Glyph width in font cells
pub const GLYPH_WIDTH: u32 = 3;
/// Glyph height in font cells
pub const GLYPH_HEIGHT: u32 = 5;

/// Rows of a glyph from the top; bit 2 is the leftmost cell
pub const fn glyph(ch: char) -> Option<[u8; 5]> {
    let rows = match ch.to_ascii_uppercase() {
        '0' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        ' ' => [0; 5],
        _ => return None,
    };
    Some(rows)
}

/// Text printed in the corner of every page
pub fn page_label(page_number: usize, page_count: usize) -> String {
    format!("PAGE {page_number} OF {page_count}")
}

/// Pixel size of `text` drawn with `scale` pixels per font cell
pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let characters = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    let advance = (GLYPH_WIDTH + 1) * scale;
    (
        characters.saturating_mul(advance).saturating_sub(scale),
        GLYPH_HEIGHT * scale,
    )
}

/// Draw `text` with its top-left corner at (`x`, `y`), clipped to the page
pub fn draw_text(page: &mut RgbaImage, x: u32, y: u32, text: &str, scale: u32, color: Rgba<u8>) {
    let advance = (GLYPH_WIDTH + 1) * scale;

    for (index, ch) in (0_u32..).zip(text.chars()) {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let left = x.saturating_add(index.saturating_mul(advance));

        for (row, bits) in (0_u32..).zip(rows) {
            for col in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                    fill_cell(
                        page,
                        left.saturating_add(col * scale),
                        y.saturating_add(row * scale),
                        scale,
                        color,
                    );
                }
            }
        }
    }
}

fn fill_cell(page: &mut RgbaImage, x: u32, y: u32, scale: u32, color: Rgba<u8>) {
    for dy in 0..scale {
        for dx in 0..scale {
            if let Some(pixel) = page.get_pixel_mut_checked(x.saturating_add(dx), y.saturating_add(dy)) {
                *pixel = color;
            }
        }
    }
}
