//! Decoded input events
//!
//! The host translates raw device input into these before each tick. The
//! core never polls devices.

use glam::Vec2;

use crate::sim::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable key, as typed
    Char(char),
    Escape,
}

impl Key {
    /// WASD movement mapping
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::Char(c) => match c.to_ascii_lowercase() {
                'w' => Some(Direction::Up),
                'a' => Some(Direction::Left),
                's' => Some(Direction::Down),
                'd' => Some(Direction::Right),
                _ => None,
            },
            Key::Escape => None,
        }
    }

    pub fn is_pause(&self) -> bool {
        matches!(self, Key::Char(c) if c.eq_ignore_ascii_case(&'p'))
    }
}

/// One input event for the current tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved(Vec2),
    PointerDown { pos: Vec2, button: PointerButton },
    PointerUp { pos: Vec2, button: PointerButton },
    KeyDown(Key),
    KeyUp(Key),
    /// Window closed by the platform
    CloseRequested,
}

impl InputEvent {
    /// Left click at `pos`
    pub fn click(pos: Vec2) -> Self {
        InputEvent::PointerDown {
            pos,
            button: PointerButton::Primary,
        }
    }

    /// Pointer position carried by the event, if any
    pub fn pointer(&self) -> Option<Vec2> {
        match self {
            InputEvent::PointerMoved(pos)
            | InputEvent::PointerDown { pos, .. }
            | InputEvent::PointerUp { pos, .. } => Some(*pos),
            _ => None,
        }
    }
}
