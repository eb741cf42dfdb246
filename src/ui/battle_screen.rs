//! Battle screen layout
//!
//! Spreads one [`MonsterManager`] per encounter monster evenly across the
//! screen on a common baseline, and lines the move [`Slot`]s up along the
//! bottom edge. Each widget gets its own [`Zone`].

use std::collections::HashMap;

use sdl2::rect::Rect;
use tracing::debug;

use crate::assets::ImageLoader;
use crate::battle::{BattleControl, BattleView, Move, MonsterId, MonsterStatus};
use crate::config::UiConfig;
use crate::error::UiError;
use crate::paint::Painter;

use super::monster_manager::MonsterManager;
use super::slot::{Slot, SLOT_SIZE};
use super::zone::{PointerState, Zone};

/// Fraction of the screen height where monster sprites stand
const BASELINE_RATIO: f32 = 0.6;
const SLOT_GAP: i32 = 8;
const SLOT_MARGIN_BOTTOM: i32 = 20;

pub struct BattleScreen<I> {
    monsters: Vec<(Zone, MonsterManager<I>)>,
    slots: Vec<(Zone, Slot<I>)>,
    index: HashMap<MonsterId, usize>,
}

impl<I> BattleScreen<I> {
    /// Lays out `monsters` (in order) and `moves` for a screen of the configured size
    pub fn new<'m, L, M>(
        loader: &L,
        monsters: impl IntoIterator<Item = (MonsterId, &'m M)>,
        moves: &[Move],
        config: &UiConfig,
    ) -> Self
    where
        L: ImageLoader<Image = I>,
        M: MonsterStatus + 'm,
    {
        let screen_w = config.window.width as i32;
        let screen_h = config.window.height as i32;
        let baseline = (screen_h as f32 * BASELINE_RATIO) as i32;

        let monsters: Vec<_> = monsters.into_iter().collect();
        let column = screen_w / (monsters.len() as i32 + 1);

        let mut index = HashMap::with_capacity(monsters.len());
        let monsters: Vec<_> = monsters
            .into_iter()
            .enumerate()
            .map(|(i, (id, monster))| {
                let x = column * (i as i32 + 1);
                let manager = MonsterManager::new(loader, id, monster, x, baseline, config);
                index.insert(id, i);
                (column_zone(&manager, x, column), manager)
            })
            .collect();

        let row_width = moves.len() as i32 * (SLOT_SIZE as i32 + SLOT_GAP) - SLOT_GAP;
        let start_x = (screen_w - row_width) / 2;
        let slot_y = screen_h - SLOT_SIZE as i32 - SLOT_MARGIN_BOTTOM;
        let slots = moves
            .iter()
            .enumerate()
            .map(|(i, mv)| {
                let x = start_x + i as i32 * (SLOT_SIZE as i32 + SLOT_GAP);
                let slot = Slot::new(loader, mv.clone(), x, slot_y, config);
                (slot.zone(), slot)
            })
            .collect();

        debug!(monsters = monsters.len(), moves = moves.len(), "battle screen laid out");

        BattleScreen {
            monsters,
            slots,
            index,
        }
    }

    /// Widget for a monster, looked up by id rather than by name
    pub fn manager(&self, id: MonsterId) -> Option<&MonsterManager<I>> {
        self.index.get(&id).map(|&i| &self.monsters[i].1)
    }

    pub fn managers(&self) -> impl Iterator<Item = &MonsterManager<I>> {
        self.monsters.iter().map(|(_, manager)| manager)
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot<I>> {
        self.slots.iter().map(|(_, slot)| slot)
    }

    /// Dispatches the pointer to every zone, then refreshes the monster bars
    ///
    /// At most one monster is hovered or clicked per frame: the topmost one,
    /// which is the last drawn.
    pub fn update<G: BattleControl>(&mut self, pointer: &PointerState, game: &mut G) -> Result<(), UiError> {
        for (zone, slot) in &mut self.slots {
            zone.update(pointer, slot, game);
        }

        let mut claimed = false;
        for (zone, manager) in self.monsters.iter_mut().rev() {
            let signal = zone.poll(pointer);
            let hit = signal.hovered && !claimed;
            claimed |= hit;

            manager.highlight = hit;
            if hit && signal.clicked {
                manager.on_click(game);
            }
        }
        for (_, manager) in &mut self.monsters {
            manager.update(game)?;
        }
        Ok(())
    }

    pub fn render<P, G>(&self, painter: &mut P, game: &G) -> Result<(), String>
    where
        P: Painter<I> + ?Sized,
        G: BattleView,
    {
        for (_, slot) in &self.slots {
            slot.render(painter, game)?;
        }
        for (_, manager) in &self.monsters {
            manager.render(painter, game)?;
        }
        Ok(())
    }
}

/// Sprite hit area trimmed to the monster's column
///
/// Wide sprites may spill into the next column when drawn, but their zones
/// never overlap.
fn column_zone<I>(manager: &MonsterManager<I>, x: i32, column: i32) -> Zone {
    let sprite = manager.zone().rect;
    let cell = Rect::new(x - column / 2, sprite.y(), column.max(1) as u32, sprite.height());
    Zone::new(sprite.intersection(cell).unwrap_or(cell))
}
