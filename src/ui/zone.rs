//! Pointer hit-testing
//!
//! A [`Zone`] is a screen rectangle bound to one [`Interactive`] widget. Each
//! frame the zone is fed the pointer state; it sets the widget's highlight
//! while the pointer is inside and fires `on_click` once per left-button
//! press that starts inside.

use sdl2::rect::Rect;

/// Pointer position and buttons for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    pub x: i32,
    pub y: i32,
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl PointerState {
    pub fn at(x: i32, y: i32) -> Self {
        PointerState {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn pressed(mut self) -> Self {
        self.left = true;
        self
    }
}

impl From<sdl2::mouse::MouseState> for PointerState {
    fn from(state: sdl2::mouse::MouseState) -> Self {
        PointerState {
            x: state.x(),
            y: state.y(),
            left: state.left(),
            middle: state.middle(),
            right: state.right(),
        }
    }
}

/// A widget that reacts to hover and click
pub trait Interactive<C: ?Sized> {
    fn set_highlight(&mut self, highlight: bool);

    fn on_click(&mut self, ctx: &mut C);
}

/// What happened in a zone this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneSignal {
    pub hovered: bool,
    pub clicked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub rect: Rect,
    was_pressed: bool,
}

impl Zone {
    pub fn new(rect: Rect) -> Self {
        Zone {
            rect,
            was_pressed: false,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point((x, y))
    }

    /// Hit-tests the pointer without touching any widget
    pub fn poll(&mut self, pointer: &PointerState) -> ZoneSignal {
        let hovered = self.contains(pointer.x, pointer.y);
        let just_pressed = pointer.left && !self.was_pressed;
        self.was_pressed = pointer.left;

        ZoneSignal {
            hovered,
            clicked: hovered && just_pressed,
        }
    }

    /// Hit-tests the pointer and forwards hover and click to `widget`
    pub fn update<C: ?Sized, W: Interactive<C> + ?Sized>(
        &mut self,
        pointer: &PointerState,
        widget: &mut W,
        ctx: &mut C,
    ) -> ZoneSignal {
        let signal = self.poll(pointer);
        widget.set_highlight(signal.hovered);
        if signal.clicked {
            widget.on_click(ctx);
        }
        signal
    }
}
