//! Battle-screen widget for one monster
//!
//! Draws the monster's sprite, its title-cased name, a health bar and an
//! action bar above it, and a red outline when the active player has picked
//! it as a target. Clicking the monster asks the selected move whether it may
//! be added to the target list.
//!
//! All offsets are measured from an anchor at the bottom center of the
//! sprite:
//!
//! ```text
//!         +-------------------+   anchor.y - H - 80  selection outline
//!              Name               anchor.y - H - 75
//!         [=====health=====]      anchor.y - H - 40
//!         [=====action=====]      anchor.y - H - 25
//!         +------sprite-----+     anchor.y - H
//!                  x              anchor
//! ```

use std::hash::{Hash, Hasher};

use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use tracing::{debug, trace};

use crate::assets::{ImageLoader, PlaceholderStyle, SpriteImage};
use crate::battle::{BattleControl, BattleView, GraphicKind, MonsterId, MonsterStatus, StatKind};
use crate::config::UiConfig;
use crate::error::UiError;
use crate::paint::Painter;
use crate::text::title_case;

use super::bar::{Bar, BarStyle};
use super::text_element::TextElement;
use super::zone::{Interactive, Zone};

/// Bar size before scaling
const BAR_BASE_WIDTH: u32 = 32;
const BAR_BASE_HEIGHT: u32 = 2;
/// Distance above the sprite top
const HEALTH_BAR_OFFSET: i32 = 40;
const ACTION_BAR_OFFSET: i32 = 25;
const NAME_OFFSET: i32 = 75;
const SELECTION_OFFSET: i32 = 80;
/// Extra room around the sprite for the selection outline
const SELECTION_PAD_X: u32 = 10;
const SELECTION_PAD_Y: u32 = 85;

#[derive(Debug, Clone)]
pub struct MonsterStyle {
    pub name_color: Color,
    pub hover_name_color: Color,
    pub selection_color: Color,
    pub neutral_placeholder: PlaceholderStyle,
    pub hover_placeholder: PlaceholderStyle,
    pub bars: BarStyle,
}

impl Default for MonsterStyle {
    fn default() -> Self {
        MonsterStyle {
            name_color: Color::RGB(255, 255, 255),
            hover_name_color: Color::RGB(255, 255, 0),
            selection_color: Color::RGB(255, 0, 0),
            neutral_placeholder: PlaceholderStyle::default(),
            hover_placeholder: PlaceholderStyle {
                fill: Color::RGB(255, 255, 0),
                ..Default::default()
            },
            bars: BarStyle::default(),
        }
    }
}

/// UI controller for one monster on the battle screen
pub struct MonsterManager<I> {
    monster: MonsterId,
    name: String,
    /// Mirrors pointer hover; set by the monster's zone every frame
    pub highlight: bool,
    neutral_image: SpriteImage<I>,
    hover_image: SpriteImage<I>,
    image_pos: Point,
    name_label: TextElement,
    hover_name_color: Color,
    selection: Rect,
    selection_color: Color,
    health_bar: Bar,
    action_bar: Bar,
    health_missing: Bar,
    action_missing: Bar,
}

impl<I> MonsterManager<I> {
    pub fn new<L, M>(loader: &L, id: MonsterId, monster: &M, x: i32, y: i32, config: &UiConfig) -> Self
    where
        L: ImageLoader<Image = I>,
        M: MonsterStatus + ?Sized,
    {
        Self::with_style(loader, id, monster, x, y, config, &MonsterStyle::default())
    }

    pub fn with_style<L, M>(
        loader: &L,
        id: MonsterId,
        monster: &M,
        x: i32,
        y: i32,
        config: &UiConfig,
        style: &MonsterStyle,
    ) -> Self
    where
        L: ImageLoader<Image = I>,
        M: MonsterStatus + ?Sized,
    {
        let scale = config.effective_scale();
        let name = monster.name().to_string();

        let neutral_image = SpriteImage::load_or_placeholder(
            loader,
            monster.graphic(GraphicKind::Neutral),
            scale,
            &name,
            &style.neutral_placeholder,
            config.effective_text_scale(),
        );
        let hover_image = SpriteImage::load_or_placeholder(
            loader,
            monster.graphic(GraphicKind::Hover),
            scale,
            &name,
            &style.hover_placeholder,
            config.effective_text_scale(),
        );

        // Layout follows the neutral sprite; the hover sprite reuses its origin
        let width = neutral_image.width();
        let height = neutral_image.height() as i32;
        let sprite_top = y - height;
        let image_pos = Point::new(x - width as i32 / 2, sprite_top);

        let selection = Rect::new(
            image_pos.x() - SELECTION_PAD_X as i32 / 2,
            sprite_top - SELECTION_OFFSET,
            width + SELECTION_PAD_X,
            neutral_image.height() + SELECTION_PAD_Y,
        );

        let mut name_label = TextElement::new(
            title_case(&name),
            x,
            sprite_top - NAME_OFFSET,
            style.name_color,
            config.effective_text_scale(),
        );
        name_label.center_on(x);

        let bar_x = x - (BAR_BASE_WIDTH * scale) as i32 / 2;
        let bar_rect = |offset: i32| {
            Rect::new(
                bar_x,
                sprite_top - offset,
                BAR_BASE_WIDTH * scale,
                BAR_BASE_HEIGHT * scale,
            )
        };

        debug!(
            monster = %name,
            id = %id,
            placeholder = neutral_image.is_placeholder(),
            "monster widget built"
        );

        MonsterManager {
            monster: id,
            name,
            highlight: false,
            neutral_image,
            hover_image,
            image_pos,
            name_label,
            hover_name_color: style.hover_name_color,
            selection,
            selection_color: style.selection_color,
            health_bar: Bar::new(bar_rect(HEALTH_BAR_OFFSET), style.bars.health_color),
            action_bar: Bar::new(bar_rect(ACTION_BAR_OFFSET), style.bars.action_color),
            health_missing: Bar::new(bar_rect(HEALTH_BAR_OFFSET), style.bars.missing_color),
            action_missing: Bar::new(bar_rect(ACTION_BAR_OFFSET), style.bars.missing_color),
        }
    }

    pub fn monster_id(&self) -> MonsterId {
        self.monster
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn neutral_image(&self) -> &SpriteImage<I> {
        &self.neutral_image
    }

    pub fn hover_image(&self) -> &SpriteImage<I> {
        &self.hover_image
    }

    pub fn health_bar(&self) -> &Bar {
        &self.health_bar
    }

    pub fn action_bar(&self) -> &Bar {
        &self.action_bar
    }

    pub fn selection_rect(&self) -> Rect {
        self.selection
    }

    /// Hit area covering the neutral sprite
    pub fn zone(&self) -> Zone {
        Zone::new(Rect::new(
            self.image_pos.x(),
            self.image_pos.y(),
            self.neutral_image.width(),
            self.neutral_image.height(),
        ))
    }

    /// Refreshes both bars from the monster's current stats
    ///
    /// A zero maximum leaves only the affected bar unchanged; the other bar
    /// is still refreshed before [`UiError::ZeroMaxStat`] is returned.
    pub fn update<G: BattleView + ?Sized>(&mut self, game: &G) -> Result<(), UiError> {
        let monster = game
            .monster(self.monster)
            .ok_or(UiError::UnknownMonster(self.monster))?;

        let health = percent_of(monster, monster.current_health(), StatKind::Health);
        let action = percent_of(monster, monster.current_action(), StatKind::Action);
        if let Ok(percent) = health {
            self.health_bar.percent = percent;
        }
        if let Ok(percent) = action {
            self.action_bar.percent = percent;
        }

        health?;
        action?;
        Ok(())
    }

    /// Offers this monster as a target for the selected player's move
    pub fn on_click<G: BattleControl + ?Sized>(&mut self, game: &mut G) {
        let standing = game.monster(self.monster).is_some_and(|m| !m.is_fallen());
        if !standing || game.selected_move().is_none() {
            return;
        }
        let Some(targets) = game.selected_targets() else {
            return;
        };

        let mut candidates = targets.to_vec();
        candidates.push(self.monster);

        if game.is_valid_target(&candidates) {
            game.add_target(self.monster);
        } else {
            trace!(monster = %self.name, "target rejected by move");
        }
    }

    /// Draws the widget; fallen or unknown monsters draw nothing
    pub fn render<P, G>(&self, painter: &mut P, game: &G) -> Result<(), String>
    where
        P: Painter<I> + ?Sized,
        G: BattleView + ?Sized,
    {
        let standing = game.monster(self.monster).is_some_and(|m| !m.is_fallen());
        if !standing {
            return Ok(());
        }

        let (image, name_color) = if self.highlight {
            (&self.hover_image, self.hover_name_color)
        } else {
            (&self.neutral_image, self.name_label.color)
        };
        image.render(painter, self.image_pos.x(), self.image_pos.y())?;
        self.name_label.render_with_color::<I, P>(painter, name_color)?;

        self.health_missing.render::<I, P>(painter)?;
        self.action_missing.render::<I, P>(painter)?;
        self.health_bar.render::<I, P>(painter)?;
        self.action_bar.render::<I, P>(painter)?;

        let targeted = game
            .selected_targets()
            .is_some_and(|targets| targets.contains(&self.monster));
        if targeted {
            painter.draw_rect(self.selection, self.selection_color)?;
        }

        Ok(())
    }
}

fn percent_of<M: MonsterStatus + ?Sized>(monster: &M, current: u32, stat: StatKind) -> Result<f32, UiError> {
    let max = monster.stat(stat);
    if max == 0 {
        return Err(UiError::ZeroMaxStat {
            monster: monster.name().to_string(),
            stat,
        });
    }
    Ok(100.0 * current as f32 / max as f32)
}

impl<I, G: BattleControl + ?Sized> Interactive<G> for MonsterManager<I> {
    fn set_highlight(&mut self, highlight: bool) {
        self.highlight = highlight;
    }

    fn on_click(&mut self, game: &mut G) {
        MonsterManager::on_click(self, game);
    }
}

/// Managers compare by monster name
///
/// Two different monsters that share a display name are equal here and hash
/// alike. Code that must tell them apart keys on [`MonsterManager::monster_id`].
impl<I> PartialEq for MonsterManager<I> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<I> Eq for MonsterManager<I> {}

impl<I> Hash for MonsterManager<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::testing::FakeLoader;
    use crate::battle::{Encounter, Game, Graphics, Monster, Move, Party, Player, PlayerId, StatBlock, TargetRule};
    use crate::paint::testing::RecordingPainter;
    use std::hash::DefaultHasher;
    use std::path::PathBuf;

    const SLIME: MonsterId = MonsterId(1);
    const BAT: MonsterId = MonsterId(2);

    fn stats(health: u32, action: u32) -> StatBlock {
        StatBlock {
            health,
            action,
            attack: 3,
            defense: 1,
            speed: 4,
        }
    }

    fn game() -> Game {
        let party = Party {
            players: vec![Player::new(PlayerId(1), "ayla")],
        };
        let slime_graphics = Graphics {
            neutral: Some(PathBuf::from("slime.png")),
            hover: Some(PathBuf::from("slime_hover.png")),
        };
        let encounter = Encounter::new(vec![
            Monster::new(SLIME, "slime", slime_graphics, stats(20, 10)),
            Monster::new(BAT, "bat", Graphics::default(), stats(8, 4)),
        ]);
        Game::new(party, encounter)
    }

    fn loader() -> FakeLoader {
        FakeLoader::default()
            .with("slime.png", 16, 12)
            .with("slime_hover.png", 16, 13)
    }

    fn manager(game: &Game, id: MonsterId) -> MonsterManager<String> {
        let monster = game.monster(id).unwrap();
        MonsterManager::new(&loader(), id, monster, 400, 300, &UiConfig::default())
    }

    fn targeting(game: &mut Game, max_targets: usize) {
        game.select_player(PlayerId(1));
        game.select_move(&Move::new("slash", TargetRule::up_to(max_targets)));
    }

    #[test]
    fn test_layout_from_anchor() {
        let game = game();
        let widget = manager(&game, SLIME);

        // 16x12 sprite at scale 4 is 64x48
        assert_eq!(widget.image_pos, Point::new(368, 252));
        assert_eq!(widget.selection_rect(), Rect::new(363, 172, 74, 133));
        assert_eq!(widget.health_bar().rect, Rect::new(336, 212, 128, 8));
        assert_eq!(widget.action_bar().rect, Rect::new(336, 227, 128, 8));
        assert_eq!(widget.health_missing.rect, widget.health_bar().rect);
        assert_eq!(widget.action_missing.rect, widget.action_bar().rect);
        assert_eq!(widget.name_label.text, "Slime");
        assert_eq!(widget.name_label.y, 177);
        assert_eq!(widget.name_label.x, 400 - 29);
        assert_eq!(widget.zone().rect, Rect::new(368, 252, 64, 48));
    }

    #[test]
    fn test_unloadable_graphics_use_named_placeholder() {
        let game = game();
        let widget = manager(&game, BAT);

        assert_eq!(widget.neutral_image().placeholder_label(), Some("bat"));
        assert_eq!(widget.hover_image().placeholder_label(), Some("bat"));
        assert_eq!(widget.neutral_image().width(), 280);
        assert_eq!(widget.neutral_image().height(), 80);

        let mut painter = RecordingPainter::new();
        widget.render(&mut painter, &game).unwrap();
        assert_eq!(
            painter.fills_with(Color::RGB(255, 255, 255)).first(),
            Some(&Rect::new(260, 220, 280, 80))
        );
    }

    #[test]
    fn test_update_sets_percentages() {
        let mut game = game();
        game.encounter.monster_mut(SLIME).unwrap().apply_damage(5);
        game.encounter.monster_mut(SLIME).unwrap().charge(4);

        let mut widget = manager(&game, SLIME);
        widget.update(&game).unwrap();
        assert_eq!(widget.health_bar().percent, 75.0);
        assert_eq!(widget.action_bar().percent, 40.0);
    }

    #[test]
    fn test_update_zero_max_is_an_error() {
        let mut game = game();
        game.encounter.monster_mut(BAT).unwrap().stats.action = 0;

        let mut widget = manager(&game, BAT);
        let err = widget.update(&game).unwrap_err();
        assert_eq!(
            err,
            UiError::ZeroMaxStat {
                monster: "bat".to_string(),
                stat: StatKind::Action,
            }
        );
        assert_eq!(widget.action_bar().percent, 100.0);
    }

    #[test]
    fn test_zero_max_health_still_refreshes_action() {
        let mut game = game();
        let bat = game.encounter.monster_mut(BAT).unwrap();
        bat.charge(2);
        bat.stats.health = 0;

        let mut widget = manager(&game, BAT);
        let err = widget.update(&game).unwrap_err();
        assert_eq!(
            err,
            UiError::ZeroMaxStat {
                monster: "bat".to_string(),
                stat: StatKind::Health,
            }
        );
        assert_eq!(widget.health_bar().percent, 100.0);
        assert_eq!(widget.action_bar().percent, 50.0);
    }

    #[test]
    fn test_update_unknown_monster() {
        let game = game();
        let monster = Monster::new(MonsterId(9), "ghost", Graphics::default(), stats(1, 1));
        let mut widget = MonsterManager::new(&loader(), MonsterId(9), &monster, 0, 0, &UiConfig::default());
        assert_eq!(widget.update(&game), Err(UiError::UnknownMonster(MonsterId(9))));
    }

    #[test]
    fn test_click_adds_valid_target() {
        let mut game = game();
        targeting(&mut game, 2);
        let mut slime = manager(&game, SLIME);
        let mut bat = manager(&game, BAT);

        slime.on_click(&mut game);
        bat.on_click(&mut game);
        assert_eq!(game.selected_targets(), Some(&[SLIME, BAT][..]));
    }

    #[test]
    fn test_click_rejected_by_predicate() {
        let mut game = game();
        targeting(&mut game, 1);
        let mut slime = manager(&game, SLIME);
        let mut bat = manager(&game, BAT);

        slime.on_click(&mut game);
        bat.on_click(&mut game);
        // Second pick would exceed the move's single target, and a repeat is a duplicate
        slime.on_click(&mut game);
        assert_eq!(game.selected_targets(), Some(&[SLIME][..]));
    }

    #[test]
    fn test_click_without_move_does_nothing() {
        let mut game = game();
        let mut slime = manager(&game, SLIME);

        slime.on_click(&mut game);
        game.select_player(PlayerId(1));
        slime.on_click(&mut game);
        assert_eq!(game.selected_targets(), Some(&[][..]));
    }

    #[test]
    fn test_fallen_monster_ignores_click_and_render() {
        let mut game = game();
        targeting(&mut game, 2);
        let mut slime = manager(&game, SLIME);
        game.encounter.monster_mut(SLIME).unwrap().apply_damage(100);

        slime.on_click(&mut game);
        assert_eq!(game.selected_targets(), Some(&[][..]));

        slime.highlight = true;
        let mut painter = RecordingPainter::new();
        slime.render(&mut painter, &game).unwrap();
        assert!(painter.ops.is_empty());
    }

    #[test]
    fn test_render_swaps_hover_image() {
        let game = game();
        let mut slime = manager(&game, SLIME);

        let mut painter = RecordingPainter::new();
        slime.render(&mut painter, &game).unwrap();
        assert_eq!(painter.images()[0].0, "slime.png");
        assert!(painter.fills_with(Color::RGB(255, 255, 0)).is_empty());

        slime.highlight = true;
        let mut painter = RecordingPainter::new();
        slime.render(&mut painter, &game).unwrap();
        assert_eq!(painter.images()[0], (&"slime_hover.png".to_string(), Rect::new(368, 252, 64, 52)));
        assert!(!painter.fills_with(Color::RGB(255, 255, 0)).is_empty());
    }

    #[test]
    fn test_render_draws_bars_in_order() {
        let mut game = game();
        game.encounter.monster_mut(SLIME).unwrap().apply_damage(10);
        let mut slime = manager(&game, SLIME);
        slime.update(&game).unwrap();

        let mut painter = RecordingPainter::new();
        slime.render(&mut painter, &game).unwrap();

        let style = BarStyle::default();
        assert_eq!(
            painter.fills_with(style.missing_color),
            vec![Rect::new(336, 212, 128, 8), Rect::new(336, 227, 128, 8)]
        );
        assert_eq!(painter.fills_with(style.health_color), vec![Rect::new(336, 212, 64, 8)]);
        // Action charge starts empty
        assert!(painter.fills_with(style.action_color).is_empty());
    }

    #[test]
    fn test_selection_outline_only_when_targeted() {
        let mut game = game();
        let mut slime = manager(&game, SLIME);

        let mut painter = RecordingPainter::new();
        slime.render(&mut painter, &game).unwrap();
        assert!(painter.outlines().is_empty());

        targeting(&mut game, 1);
        slime.on_click(&mut game);
        let mut painter = RecordingPainter::new();
        slime.render(&mut painter, &game).unwrap();
        assert_eq!(painter.outlines(), vec![(slime.selection_rect(), Color::RGB(255, 0, 0))]);
    }

    #[test]
    fn test_same_name_managers_are_equal() {
        let loader = loader();
        let config = UiConfig::default();
        let first = Monster::new(MonsterId(1), "slime", Graphics::default(), stats(10, 10));
        let second = Monster::new(MonsterId(2), "slime", Graphics::default(), stats(30, 5));

        let a: MonsterManager<String> = MonsterManager::new(&loader, first.id, &first, 100, 100, &config);
        let b: MonsterManager<String> = MonsterManager::new(&loader, second.id, &second, 500, 100, &config);
        assert_ne!(a.monster_id(), b.monster_id());
        assert!(a == b);

        let hash = |m: &MonsterManager<String>| {
            let mut hasher = DefaultHasher::new();
            m.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&b));
    }
}
