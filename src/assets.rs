//! Sprite loading with placeholder fallback
//!
//! Every sprite is resolved once, when its widget is built. A file that loads
//! becomes [`SpriteImage::Loaded`]; a missing path or a failed load becomes a
//! [`SpriteImage::Placeholder`] that draws a filled box with a text label, so
//! a battle never stops over a missing asset.

use std::path::Path;

use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use tracing::warn;

use crate::paint::Painter;
use crate::text::{draw_aligned_text, TextAlign};

/// An image and its natural size in pixels
#[derive(Debug)]
pub struct LoadedImage<I> {
    pub image: I,
    pub width: u32,
    pub height: u32,
}

/// Source of images for widgets
pub trait ImageLoader {
    type Image;

    fn load(&self, path: &Path) -> Result<LoadedImage<Self::Image>, String>;
}

/// Loads SDL2 textures from disk
pub struct TextureLoader<'a> {
    texture_creator: &'a TextureCreator<WindowContext>,
}

impl<'a> TextureLoader<'a> {
    pub fn new(texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        TextureLoader { texture_creator }
    }
}

impl<'a> ImageLoader for TextureLoader<'a> {
    type Image = Texture<'a>;

    fn load(&self, path: &Path) -> Result<LoadedImage<Texture<'a>>, String> {
        let texture = self
            .texture_creator
            .load_texture(path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
        let query = texture.query();

        Ok(LoadedImage {
            image: texture,
            width: query.width,
            height: query.height,
        })
    }
}

/// How a placeholder looks when an image is unavailable
#[derive(Debug, Clone)]
pub struct PlaceholderStyle {
    /// Size before scaling
    pub base_width: u32,
    pub base_height: u32,
    pub fill: Color,
    pub text_color: Color,
    /// Distance from the top edge to the label
    pub text_offset_y: i32,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        PlaceholderStyle {
            base_width: 70,
            base_height: 20,
            fill: Color::RGB(255, 255, 255),
            text_color: Color::RGB(0, 0, 0),
            text_offset_y: 10,
        }
    }
}

/// A sprite ready to draw: either a real image or a labelled placeholder
#[derive(Debug)]
pub enum SpriteImage<I> {
    Loaded {
        image: I,
        width: u32,
        height: u32,
    },
    Placeholder {
        label: String,
        width: u32,
        height: u32,
        fill: Color,
        text_color: Color,
        text_offset_y: i32,
        text_scale: u32,
    },
}

impl<I> SpriteImage<I> {
    /// Loads `path` at `scale` times its natural size, or builds a placeholder
    ///
    /// Both a `None` path and a load error fall back to the placeholder.
    pub fn load_or_placeholder<L: ImageLoader<Image = I>>(
        loader: &L,
        path: Option<&Path>,
        scale: u32,
        label: &str,
        style: &PlaceholderStyle,
        text_scale: u32,
    ) -> Self {
        let loaded = match path {
            Some(path) => loader.load(path).map_err(|e| {
                warn!(label, error = %e, "image load failed, using placeholder");
            }),
            None => {
                warn!(label, "no image path, using placeholder");
                Err(())
            }
        };

        match loaded {
            Ok(img) => SpriteImage::Loaded {
                image: img.image,
                width: img.width.saturating_mul(scale),
                height: img.height.saturating_mul(scale),
            },
            Err(()) => Self::placeholder(label, scale, style, text_scale),
        }
    }

    pub fn placeholder(label: &str, scale: u32, style: &PlaceholderStyle, text_scale: u32) -> Self {
        SpriteImage::Placeholder {
            label: label.to_string(),
            width: style.base_width.saturating_mul(scale),
            height: style.base_height.saturating_mul(scale),
            fill: style.fill,
            text_color: style.text_color,
            text_offset_y: style.text_offset_y,
            text_scale,
        }
    }

    /// Displayed width in pixels
    pub fn width(&self) -> u32 {
        match self {
            SpriteImage::Loaded { width, .. } | SpriteImage::Placeholder { width, .. } => *width,
        }
    }

    /// Displayed height in pixels
    pub fn height(&self) -> u32 {
        match self {
            SpriteImage::Loaded { height, .. } | SpriteImage::Placeholder { height, .. } => *height,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SpriteImage::Placeholder { .. })
    }

    /// Label drawn on a placeholder
    pub fn placeholder_label(&self) -> Option<&str> {
        match self {
            SpriteImage::Placeholder { label, .. } => Some(label),
            SpriteImage::Loaded { .. } => None,
        }
    }

    /// Draws the sprite with its top-left corner at (`x`, `y`)
    pub fn render<P: Painter<I> + ?Sized>(&self, painter: &mut P, x: i32, y: i32) -> Result<(), String> {
        match self {
            SpriteImage::Loaded { image, width, height } => {
                painter.draw_image(image, Rect::new(x, y, *width, *height))
            }
            SpriteImage::Placeholder {
                label,
                width,
                height,
                fill,
                text_color,
                text_offset_y,
                text_scale,
            } => {
                painter.fill_rect(Rect::new(x, y, *width, *height), *fill)?;
                draw_aligned_text::<I, P>(
                    painter,
                    label,
                    x,
                    y + text_offset_y,
                    *width,
                    TextAlign::Center,
                    *text_color,
                    *text_scale,
                )
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// Loader backed by a table of known paths; everything else fails
    #[derive(Debug, Default)]
    pub struct FakeLoader {
        pub files: HashMap<PathBuf, (u32, u32)>,
    }

    impl FakeLoader {
        pub fn with(mut self, path: &str, width: u32, height: u32) -> Self {
            self.files.insert(PathBuf::from(path), (width, height));
            self
        }
    }

    impl ImageLoader for FakeLoader {
        type Image = String;

        fn load(&self, path: &Path) -> Result<LoadedImage<String>, String> {
            self.files
                .get(path)
                .map(|&(width, height)| LoadedImage {
                    image: path.display().to_string(),
                    width,
                    height,
                })
                .ok_or_else(|| format!("Failed to load {}: not found", path.display()))
        }
    }
}
