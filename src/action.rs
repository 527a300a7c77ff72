use macroquad::input::{is_key_down, is_key_pressed, is_quit_requested, KeyCode};

/// Keyboard state sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub restart: bool,
    pub quit: bool,
}

impl Controls {
    /// Reads the window's keyboard. Only valid inside the macroquad frame loop.
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            restart: is_key_pressed(KeyCode::Enter),
            quit: is_key_pressed(KeyCode::Escape) || is_quit_requested(),
        }
    }

    /// Steering sign: -1 left, +1 right, 0 when neither or both are held.
    pub const fn direction(&self) -> i8 {
        match (self.left, self.right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}
