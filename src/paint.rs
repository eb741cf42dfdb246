//! Drawing seam between widgets and SDL2
//!
//! Widgets draw through [`Painter`] instead of taking `&mut Canvas<Window>`
//! directly. The image handle type is a parameter so the same widget code
//! renders SDL2 textures on a real canvas and plain values in tests.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture};

/// Primitive drawing operations used by the UI
pub trait Painter<I> {
    /// Fills `rect` with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Draws a 1px outline of `rect`
    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Copies a whole image into `dst`, stretching it to fit
    fn draw_image(&mut self, image: &I, dst: Rect) -> Result<(), String>;
}

impl<'t, T: RenderTarget> Painter<Texture<'t>> for Canvas<T> {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        Canvas::fill_rect(self, rect)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        Canvas::draw_rect(self, rect)
    }

    fn draw_image(&mut self, image: &Texture<'t>, dst: Rect) -> Result<(), String> {
        self.copy(image, None, dst)
    }
}
