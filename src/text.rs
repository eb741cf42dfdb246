//! Bitmap Text Rendering
//!
//! Procedural text using a 5x7 bitmap font. Glyphs are drawn as filled
//! squares through a [`Painter`], so labels need no font files and scale to
//! any integer size. Lowercase input is drawn with the uppercase glyphs.

use sdl2::pixels::Color;
use sdl2::rect::Rect;

use crate::paint::Painter;

/// Glyph width in font pixels
const GLYPH_WIDTH: u32 = 5;
/// Glyph height in font pixels
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character (glyph plus one pixel of spacing)
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Shown for characters the font does not cover
const UNKNOWN_GLYPH: [u8; 7] = [0b11111; 7];

const GLYPHS: &[(char, [u8; 7])] = &[
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('I', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001]),
    ('X', [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    ('Y', [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    (':', [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000]),
    ('/', [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000]),
    ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
    ('+', [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]),
    ('.', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100]),
    ('!', [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100]),
    ('\'', [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000]),
    (' ', [0b00000; 7]),
];

fn glyph(c: char) -> [u8; 7] {
    let upper = c.to_ascii_uppercase();
    GLYPHS
        .iter()
        .find(|(g, _)| *g == upper)
        .map(|(_, rows)| *rows)
        .unwrap_or(UNKNOWN_GLYPH)
}

/// Horizontal placement of text inside a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Width in pixels of `text` at `scale`, without trailing spacing
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        0
    } else {
        (chars * ADVANCE - 1) * scale
    }
}

/// Height in pixels of a line of text at `scale`
pub fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

/// Capitalises the first letter of every word and lowercases the rest
///
/// Any non-alphabetic character starts a new word, so `"fire-imp"` becomes
/// `"Fire-Imp"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Draws `text` with its top-left corner at (`x`, `y`)
///
/// # Example
///
/// ```ignore
/// draw_simple_text(&mut canvas, "HELLO", 100, 50, Color::RGB(255, 255, 255), 2)?;
/// ```
pub fn draw_simple_text<I, P: Painter<I> + ?Sized>(
    painter: &mut P,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    let pixel = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + i as i32 * (ADVANCE * scale) as i32;

        for (row, &bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH as i32 {
                if (bits >> (GLYPH_WIDTH as i32 - 1 - col)) & 1 == 1 {
                    painter.fill_rect(
                        Rect::new(char_x + col * pixel, y + row as i32 * pixel, scale, scale),
                        color,
                    )?;
                }
            }
        }
    }

    Ok(())
}

/// Draws `text` inside a box of `box_width` starting at `x`
pub fn draw_aligned_text<I, P: Painter<I> + ?Sized>(
    painter: &mut P,
    text: &str,
    x: i32,
    y: i32,
    box_width: u32,
    align: TextAlign,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    let start_x = match align {
        TextAlign::Left => x,
        TextAlign::Center => x + (box_width as i32 - text_width(text, scale) as i32) / 2,
    };
    draw_simple_text::<I, P>(painter, text, start_x, y, color, scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::testing::RecordingPainter;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("AB", 1), 11);
        assert_eq!(text_width("AB", 3), 33);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("goblin"), "Goblin");
        assert_eq!(title_case("CAVE troll"), "Cave Troll");
        assert_eq!(title_case("fire-imp"), "Fire-Imp");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_lowercase_uses_uppercase_glyphs() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('~'), UNKNOWN_GLYPH);
    }

    #[test]
    fn test_draw_letter_i_pixels() {
        let mut painter: RecordingPainter<()> = RecordingPainter::new();
        let white = Color::RGB(255, 255, 255);
        draw_simple_text(&mut painter, "I", 10, 20, white, 2).unwrap();

        let fills = painter.fills_with(white);
        // 5 + 1 + 1 + 1 + 1 + 1 + 5 lit pixels
        assert_eq!(fills.len(), 15);
        assert!(fills.contains(&Rect::new(10, 20, 2, 2)));
        assert!(fills.contains(&Rect::new(14, 22, 2, 2)));
    }

    #[test]
    fn test_centered_text_offset() {
        let mut painter: RecordingPainter<()> = RecordingPainter::new();
        let black = Color::RGB(0, 0, 0);
        // "I" is 5px wide at scale 1, so it starts 5px into a 15px box
        draw_aligned_text(&mut painter, "I", 0, 0, 15, TextAlign::Center, black, 1).unwrap();

        let min_x = painter.fills_with(black).iter().map(|r| r.x()).min();
        assert_eq!(min_x, Some(5));
    }
}
