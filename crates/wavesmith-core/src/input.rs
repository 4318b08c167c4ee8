//! Held-key input state.

use serde::{Deserialize, Serialize};

/// Keys currently held down. Sampled by the engine every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Sword swing (space bar).
    pub melee: bool,
}

impl InputState {
    /// Build the held set from raw key names as a browser reports them.
    pub fn from_held_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut input = Self::default();
        for key in keys {
            match key {
                "w" | "W" | "ArrowUp" => input.up = true,
                "s" | "S" | "ArrowDown" => input.down = true,
                "a" | "A" | "ArrowLeft" => input.left = true,
                "d" | "D" | "ArrowRight" => input.right = true,
                " " => input.melee = true,
                _ => {}
            }
        }
        input
    }

    /// Movement direction as unit steps per axis. Diagonals are not
    /// normalized.
    pub fn axis(&self) -> (f64, f64) {
        let mut x = 0.0;
        let mut y = 0.0;
        if self.up {
            y -= 1.0;
        }
        if self.down {
            y += 1.0;
        }
        if self.left {
            x -= 1.0;
        }
        if self.right {
            x += 1.0;
        }
        (x, y)
    }
}
