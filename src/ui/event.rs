use bitflags::bitflags;
use smol_str::SmolStr;

use crate::geometry::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
        const BACK = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
    }
}

bitflags! {
    /// Pointer and focus state an element tracks for itself.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InteractionState: u8 {
        const HOVERED = 1 << 0;
        const PRESSED = 1 << 1;
        const FOCUSED = 1 << 2;
    }
}

impl From<MouseButton> for MouseButtons {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => MouseButtons::LEFT,
            MouseButton::Right => MouseButtons::RIGHT,
            MouseButton::Middle => MouseButtons::MIDDLE,
            MouseButton::Back => MouseButtons::BACK,
            MouseButton::Forward => MouseButtons::FORWARD,
            MouseButton::Other(_) => MouseButtons::empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub position: Vec2,
    pub button: Option<MouseButton>,
    pub buttons: MouseButtons,
    pub modifiers: KeyModifiers,
}

impl MouseEvent {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            button: None,
            buttons: MouseButtons::empty(),
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub position: Vec2,
    pub delta: Vec2,
    pub modifiers: KeyModifiers,
}

impl ScrollEvent {
    pub fn new(position: Vec2, delta: Vec2) -> Self {
        Self {
            position,
            delta,
            modifiers: KeyModifiers::empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub key: SmolStr,
    pub code: SmolStr,
    pub repeat: bool,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(key: &str) -> Self {
        Self {
            key: SmolStr::new(key),
            code: SmolStr::new(key),
            repeat: false,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = SmolStr::new(code);
        self
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Device state accumulated from the events the screen has seen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    pub mouse_position: Vec2,
    pub buttons: MouseButtons,
    pub modifiers: KeyModifiers,
}

impl InputState {
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        let flag = MouseButtons::from(button);
        !flag.is_empty() && self.buttons.contains(flag)
    }

    pub(crate) fn track_mouse(&mut self, event: &MouseEvent) {
        self.mouse_position = event.position;
        self.modifiers = event.modifiers;
    }

    pub(crate) fn track_press(&mut self, event: &mut MouseEvent) {
        self.track_mouse(event);
        if let Some(button) = event.button {
            self.buttons.insert(button.into());
        }
        event.buttons = self.buttons;
    }

    pub(crate) fn track_release(&mut self, event: &mut MouseEvent) {
        self.track_mouse(event);
        if let Some(button) = event.button {
            self.buttons.remove(button.into());
        }
        event.buttons = self.buttons;
    }

    pub(crate) fn track_key(&mut self, event: &KeyEvent) {
        self.modifiers = event.modifiers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_update_button_mask() {
        let mut input = InputState::default();
        let mut down = MouseEvent::new(Vec2::new(3.0, 4.0)).with_button(MouseButton::Left);
        input.track_press(&mut down);
        assert!(input.is_pressed(MouseButton::Left));
        assert_eq!(down.buttons, MouseButtons::LEFT);
        assert_eq!(input.mouse_position, Vec2::new(3.0, 4.0));

        let mut up = MouseEvent::new(Vec2::new(5.0, 4.0)).with_button(MouseButton::Left);
        input.track_release(&mut up);
        assert!(!input.is_pressed(MouseButton::Left));
        assert!(up.buttons.is_empty());
    }

    #[test]
    fn other_buttons_have_no_flag() {
        let mut input = InputState::default();
        let mut down = MouseEvent::new(Vec2::ZERO).with_button(MouseButton::Other(9));
        input.track_press(&mut down);
        assert!(input.buttons.is_empty());
        assert!(!input.is_pressed(MouseButton::Other(9)));
    }

    #[test]
    fn key_events_carry_modifiers_into_state() {
        let mut input = InputState::default();
        input.track_key(&KeyEvent::new("z").with_modifiers(KeyModifiers::CONTROL));
        assert!(input.modifiers.contains(KeyModifiers::CONTROL));
    }
}
