//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const TRACKED_KEYS: [KeyCode; 6] =
    [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right, KeyCode::F5, KeyCode::F9];

pub fn capture_frame_input() -> Vec<KeyCode> {
    TRACKED_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect()
}
