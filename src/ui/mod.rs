//! Battle-Screen UI Components
//!
//! Widgets that draw battle state and react to the pointer.
//!
//! # Architecture
//!
//! - Elements ([`Bar`], [`TextElement`]) are plain positioned drawables
//! - Managers ([`MonsterManager`], [`Slot`]) own their elements, read game
//!   state through `BattleView` and mutate it through `BattleControl`
//! - A [`Zone`] binds a screen rectangle to one manager and forwards hover
//!   and clicks to it
//! - [`BattleScreen`] lays out every manager for an encounter
//!
//! # Example Usage
//!
//! ```ignore
//! let loader = TextureLoader::new(&texture_creator);
//! let mut slot = Slot::new(&loader, slash, 300, 300, &config);
//! let mut zone = slot.zone();
//!
//! // In the frame loop
//! zone.update(&pointer, &mut slot, &mut game);
//! slot.render(&mut canvas, &game)?;
//! ```

pub mod bar;
pub mod battle_screen;
pub mod monster_manager;
pub mod slot;
pub mod text_element;
pub mod zone;

pub use bar::{Bar, BarStyle};
pub use battle_screen::BattleScreen;
pub use monster_manager::{MonsterManager, MonsterStyle};
pub use slot::{Slot, SlotStyle};
pub use text_element::TextElement;
pub use zone::{Interactive, PointerState, Zone, ZoneSignal};
