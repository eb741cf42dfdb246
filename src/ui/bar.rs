//! Progress bar element
//!
//! A bar is a filled rectangle whose width follows a percentage. Widgets
//! stack a full-width "missing" bar underneath a progress bar of the same
//! rect, so the dark remainder shows how much is gone.
//!
//! # Example
//!
//! ```ignore
//! let mut health = Bar::new(Rect::new(10, 10, 128, 8), BarStyle::default().health_color);
//! health.percent = 100.0 * current as f32 / max as f32;
//! health.render(&mut canvas)?;
//! ```

use sdl2::pixels::Color;
use sdl2::rect::Rect;

use crate::paint::Painter;

/// Colors used by a monster's bars
#[derive(Debug, Clone)]
pub struct BarStyle {
    pub health_color: Color,
    pub action_color: Color,
    /// Color of the background bar showing the depleted part
    pub missing_color: Color,
}

impl Default for BarStyle {
    fn default() -> Self {
        BarStyle {
            health_color: Color::RGB(116, 154, 104),
            action_color: Color::RGB(212, 196, 148),
            missing_color: Color::RGB(30, 30, 30),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub rect: Rect,
    pub color: Color,
    /// Fill amount, nominally 0-100; clamped when drawn
    pub percent: f32,
}

impl Bar {
    /// Creates a full bar
    pub fn new(rect: Rect, color: Color) -> Self {
        Bar {
            rect,
            color,
            percent: 100.0,
        }
    }

    /// Width of the filled part in pixels
    pub fn filled_width(&self) -> u32 {
        let fraction = if self.percent.is_nan() {
            0.0
        } else {
            self.percent.clamp(0.0, 100.0) / 100.0
        };
        (self.rect.width() as f32 * fraction) as u32
    }

    pub fn render<I, P: Painter<I> + ?Sized>(&self, painter: &mut P) -> Result<(), String> {
        let width = self.filled_width();
        if width == 0 {
            return Ok(());
        }

        let fill = Rect::new(self.rect.x(), self.rect.y(), width, self.rect.height());
        painter.fill_rect(fill, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::testing::RecordingPainter;

    #[test]
    fn test_default_bar_style() {
        let style = BarStyle::default();
        assert_eq!(style.health_color, Color::RGB(116, 154, 104));
        assert_eq!(style.action_color, Color::RGB(212, 196, 148));
        assert_eq!(style.missing_color, Color::RGB(30, 30, 30));
    }

    #[test]
    fn test_new_bar_is_full() {
        let bar = Bar::new(Rect::new(0, 0, 128, 8), Color::RGB(1, 2, 3));
        assert_eq!(bar.percent, 100.0);
        assert_eq!(bar.filled_width(), 128);
    }

    #[test]
    fn test_partial_fill() {
        let mut bar = Bar::new(Rect::new(5, 6, 128, 8), Color::RGB(1, 2, 3));
        bar.percent = 25.0;

        let mut painter: RecordingPainter<()> = RecordingPainter::new();
        bar.render(&mut painter).unwrap();
        assert_eq!(painter.fills_with(bar.color), vec![Rect::new(5, 6, 32, 8)]);
    }

    #[test]
    fn test_fill_is_clamped() {
        let mut bar = Bar::new(Rect::new(0, 0, 100, 4), Color::RGB(1, 2, 3));
        bar.percent = 150.0;
        assert_eq!(bar.filled_width(), 100);
        bar.percent = -20.0;
        assert_eq!(bar.filled_width(), 0);
    }

    #[test]
    fn test_empty_bar_draws_nothing() {
        let mut bar = Bar::new(Rect::new(0, 0, 100, 4), Color::RGB(1, 2, 3));
        bar.percent = 0.0;

        let mut painter: RecordingPainter<()> = RecordingPainter::new();
        bar.render(&mut painter).unwrap();
        assert!(painter.ops.is_empty());
    }
}
