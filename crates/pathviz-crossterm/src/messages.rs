//! Input messages: [`Key`], [`MouseAction`], [`Msg`].

use pathviz_core::Point;

/// A keyboard key the visualizer cares about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
}

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Secondary (right) button pressed.
    Secondary,
    /// Button released.
    Release,
    /// Mouse moved, with or without a button held.
    Move,
}

/// An input message delivered to the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// A key was pressed.
    KeyDown { key: Key },
    /// A mouse event at terminal cell `pos`.
    Mouse { action: MouseAction, pos: Point },
    /// The terminal was resized.
    Screen { width: i32, height: i32 },
    /// Sent once when the loop starts.
    Init,
    /// Sent after every poll so a running search keeps animating.
    Tick,
}

impl Msg {
    pub fn key(key: Key) -> Self {
        Self::KeyDown { key }
    }

    pub fn char(c: char) -> Self {
        Self::KeyDown { key: Key::Char(c) }
    }

    pub fn mouse(action: MouseAction, x: i32, y: i32) -> Self {
        Self::Mouse {
            action,
            pos: Point::new(x, y),
        }
    }
}
