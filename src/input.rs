//! Input System
//!
//! Translates raw SDL2 events into toolkit-free input events. The shell
//! resolves clicks against the current page's buttons and maps them to
//! [`MenuAction`]s, so no handler closure ever captures the page stack:
//! input flows as plain data from here to the shell's dispatch table.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// High-level actions a menu button (or key) can trigger
///
/// Decouples input handling from action execution: buttons carry one of
/// these, and the shell dispatches on them exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start a new game (extension point, not yet implemented)
    NewGame,
    /// Load a saved game (extension point, not yet implemented)
    LoadFile,
    /// Switch to the help page
    ShowHelp,
    /// Switch back to the main menu
    BackToMenu,
    /// Exit the application
    Quit,
}

/// A raw input event, stripped of SDL details the shell doesn't need
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Left mouse button pressed at logical coordinates
    Click(i32, i32),
    /// Mouse moved to logical coordinates (drives hover highlighting)
    MouseMove(i32, i32),
    /// A key was pressed
    KeyPress(Keycode),
    /// Window close requested
    Quit,
}

/// InputSystem polls SDL2 events and produces InputEvents
///
/// Mouse coordinates arrive already in logical-size space (SDL scales
/// them when a logical size is set on the canvas), so hit-testing works
/// in page coordinates at any window resolution.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Poll all pending SDL2 events and translate them
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<InputEvent> {
        event_pump
            .poll_iter()
            .filter_map(Self::translate)
            .collect()
    }

    /// Translate one SDL2 event, dropping events the shell ignores
    fn translate(event: Event) -> Option<InputEvent> {
        match event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(InputEvent::Click(x, y)),
            Event::MouseMotion { x, y, .. } => Some(InputEvent::MouseMove(x, y)),
            Event::KeyDown {
                keycode: Some(key), ..
            } => Some(InputEvent::KeyPress(key)),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
