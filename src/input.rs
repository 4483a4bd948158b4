use glam::DVec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Logical pointer button role, mapped by the host from its input system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Pointer gesture event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed {
        button: PointerButton,
        position: DVec2,
    },
    Released {
        button: PointerButton,
        position: DVec2,
    },
    /// Reported only while a recognized button is held
    Moved {
        button: PointerButton,
        position: DVec2,
    },
}

/// Adapter that bridges winit window events to logical pointer events.
///
/// Tracks the cursor position and the currently held button. The first
/// recognized button pressed wins until it is released, so a drag is a
/// single-button gesture. The host feeds `Pressed` events (augmented with
/// its scene pick result) into [`Trackball::on_pointer_press`] and `Moved`
/// events into [`Trackball::on_pointer_move`].
///
/// [`Trackball::on_pointer_press`]: crate::Trackball::on_pointer_press
/// [`Trackball::on_pointer_move`]: crate::Trackball::on_pointer_move
#[derive(Debug, Clone)]
pub struct WinitPointerAdapter {
    /// Current cursor position (relative to window)
    cursor: Option<DVec2>,
    /// Button held since the last unmatched press, if any
    active_button: Option<PointerButton>,
}

impl WinitPointerAdapter {
    /// Create a new adapter with no cursor position and no held button
    pub fn new() -> Self {
        Self {
            cursor: None,
            active_button: None,
        }
    }

    /// Process a winit WindowEvent and return the resulting pointer event, if any
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let button = Self::map_button(*button)?;
                let position = self.cursor.unwrap_or(DVec2::ZERO);
                match state {
                    ElementState::Pressed => {
                        if self.active_button.is_some() {
                            return None;
                        }
                        self.active_button = Some(button);
                        Some(PointerEvent::Pressed { button, position })
                    }
                    ElementState::Released => {
                        if self.active_button != Some(button) {
                            return None;
                        }
                        self.active_button = None;
                        Some(PointerEvent::Released { button, position })
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = DVec2::new(position.x, position.y);
                self.cursor = Some(position);
                self.active_button
                    .map(|button| PointerEvent::Moved { button, position })
            }
            _ => None,
        }
    }

    /// Get current cursor position (if the cursor has entered the window)
    pub fn cursor_position(&self) -> Option<DVec2> {
        self.cursor
    }

    /// Get the button currently held, if any
    pub fn active_button(&self) -> Option<PointerButton> {
        self.active_button
    }

    /// Map winit MouseButton to the logical button role
    fn map_button(button: MouseButton) -> Option<PointerButton> {
        match button {
            MouseButton::Left => Some(PointerButton::Primary),
            MouseButton::Right => Some(PointerButton::Secondary),
            MouseButton::Middle => Some(PointerButton::Middle),
            _ => None,
        }
    }
}

impl Default for WinitPointerAdapter {
    fn default() -> Self {
        Self::new()
    }
}
