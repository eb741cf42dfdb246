//! Slot render harness
//!
//! Manual visual smoke test for the battle UI. Opens a window and renders one
//! widget every frame at a fixed tick rate until the window is closed or
//! Escape is pressed.
//!
//! - `--widget slot` (default): one move slot bound to the zone (300, 300, 50, 50)
//! - `--widget battle`: every monster of the battle setup plus the move slots;
//!   click a slot to pick a move for the first player, then click monsters to
//!   target them
//!
//! `assets/config/ui.json` is a starting point for `--config`; copy it to the
//! per-user config directory to make it the default.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;
use tracing::{info, warn};

use monster_battle_ui::assets::TextureLoader;
use monster_battle_ui::battle::{BattleSetup, Game, Move, TargetRule};
use monster_battle_ui::clock::FrameClock;
use monster_battle_ui::config::UiConfig;
use monster_battle_ui::logging;
use monster_battle_ui::ui::{BattleScreen, PointerState, Slot};

const SLOT_X: i32 = 300;
const SLOT_Y: i32 = 300;
/// Action charge gained by every monster per frame in battle mode
const ACTION_CHARGE_PER_FRAME: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Widget {
    Slot,
    Battle,
}

/// Renders one battle UI widget for visual inspection
#[derive(Parser, Debug)]
#[command(name = "slot_render_test")]
#[command(version)]
struct Args {
    /// Widget to exercise
    #[arg(long, value_enum, default_value_t = Widget::Slot)]
    widget: Widget,

    /// UI config file, e.g. assets/config/ui.json (defaults to the per-user
    /// config, then built-in values)
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Battle setup providing the party, monsters and moves
    #[arg(long, value_name = "BATTLE_FILE", default_value = "assets/data/demo_battle.json")]
    battle: PathBuf,
}

/// Everything the frame loop needs from SDL2
struct Frame<'a> {
    canvas: &'a mut Canvas<Window>,
    event_pump: &'a mut EventPump,
    clock: FrameClock,
}

impl Frame<'_> {
    /// Drains pending events; false once the user asked to quit
    fn keep_running(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return false,
                _ => {}
            }
        }
        true
    }

    fn pointer(&self) -> PointerState {
        PointerState::from(self.event_pump.mouse_state())
    }

    fn clear(&mut self) {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
    }

    fn finish(&mut self) {
        self.canvas.present();
        self.clock.tick();
    }
}

fn main() -> Result<(), String> {
    logging::init("info");
    let args = Args::parse();

    let config = UiConfig::locate(args.config.as_deref())?;
    let setup = BattleSetup::load_from_file(&args.battle)?;
    let mut game = setup.to_game();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let loader = TextureLoader::new(&texture_creator);
    let mut event_pump = sdl_context.event_pump()?;

    let mut frame = Frame {
        canvas: &mut canvas,
        event_pump: &mut event_pump,
        clock: FrameClock::new(config.target_fps),
    };

    info!(widget = ?args.widget, fps = config.target_fps, "harness running");
    match args.widget {
        Widget::Slot => run_slot(&mut frame, &loader, &setup, &mut game, &config)?,
        Widget::Battle => run_battle(&mut frame, &loader, &setup, &mut game, &config)?,
    }
    info!("harness closed");

    Ok(())
}

fn run_slot(
    frame: &mut Frame<'_>,
    loader: &TextureLoader<'_>,
    setup: &BattleSetup,
    game: &mut Game,
    config: &UiConfig,
) -> Result<(), String> {
    let mv = setup.moves.first().cloned().unwrap_or_else(|| {
        warn!("battle setup has no moves, showing a stand-in");
        Move::new("slash", TargetRule::default())
    });

    let mut slot = Slot::new(loader, mv, SLOT_X, SLOT_Y, config);
    let mut zone = slot.zone();

    while frame.keep_running() {
        let pointer = frame.pointer();
        frame.clear();
        zone.update(&pointer, &mut slot, &mut *game);
        slot.render(&mut *frame.canvas, &*game)?;
        frame.finish();
    }

    Ok(())
}

fn run_battle(
    frame: &mut Frame<'_>,
    loader: &TextureLoader<'_>,
    setup: &BattleSetup,
    game: &mut Game,
    config: &UiConfig,
) -> Result<(), String> {
    if let Some(first) = game.party.players.first().map(|p| p.id) {
        game.select_player(first);
    }

    let monsters = game.encounter.monsters.iter().map(|m| (m.id, m));
    let mut screen = BattleScreen::new(loader, monsters, &setup.moves, config);

    while frame.keep_running() {
        for monster in &mut game.encounter.monsters {
            if monster.action() >= monster.stats.action {
                monster.reset_action();
            } else {
                monster.charge(ACTION_CHARGE_PER_FRAME);
            }
        }

        let pointer = frame.pointer();
        frame.clear();
        screen.update(&pointer, &mut *game)?;
        screen.render(&mut *frame.canvas, &*game)?;
        frame.finish();
    }

    Ok(())
}
