//! Input polling
//!
//! Reads macroquad's keyboard and window state once per frame and turns it
//! into the world's discrete input events.
//!
//! Keys:
//! - Space = jump / start
//! - Q = quit
//! - Window close button = quit

use macroquad::prelude::{is_key_pressed, is_quit_requested, KeyCode};
use crate::game::InputEvent;

/// Keyboard binding for each input event
pub fn key_for(event: InputEvent) -> KeyCode {
    match event {
        InputEvent::Jump => KeyCode::Space,
        InputEvent::Quit => KeyCode::Q,
    }
}

/// Collect everything pressed since the last frame
pub fn poll() -> Vec<InputEvent> {
    // Needs prevent_quit() at startup, otherwise the window just closes
    collect(
        is_key_pressed(key_for(InputEvent::Jump)),
        is_key_pressed(key_for(InputEvent::Quit)),
        is_quit_requested(),
    )
}

/// Turn this frame's raw key and window state into input events.
/// Window close counts as quit; quit is reported at most once per frame.
fn collect(jump_pressed: bool, quit_pressed: bool, close_requested: bool) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if jump_pressed {
        events.push(InputEvent::Jump);
    }
    if quit_pressed || close_requested {
        events.push(InputEvent::Quit);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_pressed() {
        assert!(collect(false, false, false).is_empty());
    }

    #[test]
    fn test_space_jumps() {
        assert_eq!(key_for(InputEvent::Jump), KeyCode::Space);
        assert_eq!(collect(true, false, false), vec![InputEvent::Jump]);
    }

    #[test]
    fn test_q_quits() {
        assert_eq!(key_for(InputEvent::Quit), KeyCode::Q);
        assert_eq!(collect(false, true, false), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_window_close_quits() {
        assert_eq!(collect(false, false, true), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_q_and_close_quit_once() {
        assert_eq!(collect(false, true, true), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_jump_before_quit() {
        assert_eq!(collect(true, false, true), vec![InputEvent::Jump, InputEvent::Quit]);
    }
}
