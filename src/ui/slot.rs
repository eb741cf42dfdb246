//! Move slot widget
//!
//! A square button showing one move's icon. Clicking it picks the move for
//! the selected player. Follows the hotbar slot look: dark background, icon,
//! and a border whose color reports hover and selection.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use tracing::trace;

use crate::assets::{ImageLoader, PlaceholderStyle, SpriteImage};
use crate::battle::{BattleControl, BattleView, Move};
use crate::config::UiConfig;
use crate::paint::Painter;

use super::zone::{Interactive, Zone};

/// Slot edge length in pixels
pub const SLOT_SIZE: u32 = 50;
/// Gap between the border and the icon
const ICON_PADDING: u32 = 4;

#[derive(Debug, Clone)]
pub struct SlotStyle {
    pub slot_color: Color,
    pub border_color: Color,
    pub hover_border_color: Color,
    pub selected_border_color: Color,
    pub placeholder: PlaceholderStyle,
}

impl Default for SlotStyle {
    fn default() -> Self {
        SlotStyle {
            slot_color: Color::RGB(50, 50, 60),
            border_color: Color::RGB(80, 80, 100),
            hover_border_color: Color::RGB(255, 255, 100),
            selected_border_color: Color::RGB(120, 170, 255),
            placeholder: PlaceholderStyle {
                base_width: SLOT_SIZE - 2 * ICON_PADDING,
                base_height: SLOT_SIZE - 2 * ICON_PADDING,
                fill: Color::RGB(90, 90, 110),
                text_color: Color::RGB(255, 255, 255),
                text_offset_y: 14,
            },
        }
    }
}

pub struct Slot<I> {
    mv: Move,
    rect: Rect,
    icon: SpriteImage<I>,
    style: SlotStyle,
    pub highlight: bool,
}

impl<I> Slot<I> {
    pub fn new<L: ImageLoader<Image = I>>(loader: &L, mv: Move, x: i32, y: i32, config: &UiConfig) -> Self {
        Self::with_style(loader, mv, x, y, config, SlotStyle::default())
    }

    pub fn with_style<L: ImageLoader<Image = I>>(
        loader: &L,
        mv: Move,
        x: i32,
        y: i32,
        config: &UiConfig,
        style: SlotStyle,
    ) -> Self {
        let label = slot_label(&mv.name);
        // Icons are fitted to the slot when drawn, so load them unscaled
        let icon = SpriteImage::load_or_placeholder(
            loader,
            mv.icon.as_deref(),
            1,
            &label,
            &style.placeholder,
            config.effective_text_scale(),
        );

        Slot {
            mv,
            rect: Rect::new(x, y, SLOT_SIZE, SLOT_SIZE),
            icon,
            style,
            highlight: false,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn icon(&self) -> &SpriteImage<I> {
        &self.icon
    }

    /// Zone covering the whole slot
    pub fn zone(&self) -> Zone {
        Zone::new(self.rect)
    }

    /// Picks this slot's move for the selected player
    pub fn on_click<G: BattleControl + ?Sized>(&mut self, game: &mut G) {
        if !game.select_move(&self.mv) {
            trace!(move_name = %self.mv.name, "slot clicked without a selected player");
        }
    }

    pub fn render<P, G>(&self, painter: &mut P, game: &G) -> Result<(), String>
    where
        P: Painter<I> + ?Sized,
        G: BattleView + ?Sized,
    {
        painter.fill_rect(self.rect, self.style.slot_color)?;

        let inner = Rect::new(
            self.rect.x() + ICON_PADDING as i32,
            self.rect.y() + ICON_PADDING as i32,
            self.rect.width() - 2 * ICON_PADDING,
            self.rect.height() - 2 * ICON_PADDING,
        );
        match &self.icon {
            SpriteImage::Loaded { image, .. } => painter.draw_image(image, inner)?,
            placeholder => placeholder.render(painter, inner.x(), inner.y())?,
        }

        let selected = game.selected_move().is_some_and(|m| m.name == self.mv.name);
        let border = if self.highlight {
            self.style.hover_border_color
        } else if selected {
            self.style.selected_border_color
        } else {
            self.style.border_color
        };
        painter.draw_rect(self.rect, border)
    }
}

/// Short label that fits a placeholder icon
fn slot_label(name: &str) -> String {
    name.chars().take(3).collect()
}

impl<I, G: BattleControl + ?Sized> Interactive<G> for Slot<I> {
    fn set_highlight(&mut self, highlight: bool) {
        self.highlight = highlight;
    }

    fn on_click(&mut self, game: &mut G) {
        Slot::on_click(self, game);
    }
}
