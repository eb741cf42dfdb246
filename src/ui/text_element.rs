use sdl2::pixels::Color;

use crate::paint::Painter;
use crate::text::{draw_simple_text, text_height, text_width};

/// A positioned line of bitmap text
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub scale: u32,
}

impl TextElement {
    pub fn new(text: impl Into<String>, x: i32, y: i32, color: Color, scale: u32) -> Self {
        TextElement {
            text: text.into(),
            x,
            y,
            color,
            scale,
        }
    }

    pub fn width(&self) -> u32 {
        text_width(&self.text, self.scale)
    }

    pub fn height(&self) -> u32 {
        text_height(self.scale)
    }

    /// Moves the element so its horizontal center sits on `x`
    pub fn center_on(&mut self, x: i32) {
        self.x = x - self.width() as i32 / 2;
    }

    /// Draws the same text and position in another color
    pub fn render_with_color<I, P: Painter<I> + ?Sized>(
        &self,
        painter: &mut P,
        color: Color,
    ) -> Result<(), String> {
        draw_simple_text::<I, P>(painter, &self.text, self.x, self.y, color, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_and_center() {
        let mut label = TextElement::new("Slime", 0, 40, Color::RGB(255, 255, 255), 2);
        assert_eq!(label.width(), 58);
        assert_eq!(label.height(), 14);

        label.center_on(100);
        assert_eq!(label.x, 71);
        assert_eq!(label.y, 40);
    }
}
