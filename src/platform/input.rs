//! Input events, batched per frame
//!
//! winit delivers events one callback at a time; the runtime collects them
//! into a batch that the game drains once per frame.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::{KeyAction, PaddleKey};

/// Keys the programs care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Escape,
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::ArrowUp => Key::Up,
            KeyCode::ArrowDown => Key::Down,
            KeyCode::Escape => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

impl InputEvent {
    /// Window close, or Escape pressed
    pub fn is_quit(&self) -> bool {
        matches!(self, InputEvent::Quit | InputEvent::KeyDown(Key::Escape))
    }

    /// The paddle key edge this event stands for, if any
    pub fn paddle_action(&self) -> Option<KeyAction> {
        let paddle_key = |key: &Key| match key {
            Key::Up => Some(PaddleKey::Up),
            Key::Down => Some(PaddleKey::Down),
            _ => None,
        };
        match self {
            InputEvent::KeyDown(key) => paddle_key(key).map(KeyAction::Press),
            InputEvent::KeyUp(key) => paddle_key(key).map(KeyAction::Release),
            InputEvent::Quit => None,
        }
    }
}

/// Map a winit window event to an input event, if it is one we use
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::Quit),
        WindowEvent::KeyboardInput { event, .. } => {
            let key = match event.physical_key {
                PhysicalKey::Code(code) => Key::from(code),
                PhysicalKey::Unidentified(_) => Key::Other,
            };
            Some(match event.state {
                ElementState::Pressed => InputEvent::KeyDown(key),
                ElementState::Released => InputEvent::KeyUp(key),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from(KeyCode::ArrowUp), Key::Up);
        assert_eq!(Key::from(KeyCode::ArrowDown), Key::Down);
        assert_eq!(Key::from(KeyCode::Escape), Key::Escape);
        assert_eq!(Key::from(KeyCode::Space), Key::Other);
    }

    #[test]
    fn test_quit_events() {
        assert!(InputEvent::Quit.is_quit());
        assert!(InputEvent::KeyDown(Key::Escape).is_quit());
        assert!(!InputEvent::KeyUp(Key::Escape).is_quit());
        assert!(!InputEvent::KeyDown(Key::Up).is_quit());
    }

    #[test]
    fn test_paddle_actions() {
        assert_eq!(
            InputEvent::KeyDown(Key::Up).paddle_action(),
            Some(KeyAction::Press(PaddleKey::Up))
        );
        assert_eq!(
            InputEvent::KeyUp(Key::Down).paddle_action(),
            Some(KeyAction::Release(PaddleKey::Down))
        );
        assert_eq!(InputEvent::KeyDown(Key::Other).paddle_action(), None);
        assert_eq!(InputEvent::Quit.paddle_action(), None);
    }

    #[test]
    fn test_close_request_is_quit() {
        assert_eq!(
            translate_window_event(&WindowEvent::CloseRequested),
            Some(InputEvent::Quit)
        );
        assert_eq!(translate_window_event(&WindowEvent::Focused(true)), None);
    }
}
