//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit keyboard events into backend-neutral InputEvents.
//
// Architecture:
//   Winit KeyEvent → InputProcessor → InputEvent → InputBuffer
//
// Modifier state is cached from ModifiersChanged events and stamped onto
// every later key event. Keys the game has no name for are dropped.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, Modifiers};

//=== InputProcessor ======================================================

/// Stateful winit → `InputEvent` converter.
pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
        }
    }

    //--- Modifier State Management ----------------------------------------

    /// Updates cached modifier state (applied to subsequent events).
    pub(crate) fn update_modifiers(&mut self, modifiers_state: ModifiersState) {
        self.current_modifiers = Modifiers::from(modifiers_state);
    }

    pub(crate) fn current_modifiers(&self) -> Modifiers {
        self.current_modifiers
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a winit `KeyEvent`, or `None` for keys with no name here.
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let key_code = match key_event.physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        if matches!(key_code, KeyCode::Unidentified) {
            return None;
        }

        Some(self.create_key_input_event(key_code, key_event.state))
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_key_input_event(&self, key: KeyCode, state: ElementState) -> InputEvent {
        match state {
            ElementState::Pressed => InputEvent::KeyDown {
                key,
                modifiers: self.current_modifiers,
            },
            ElementState::Released => InputEvent::KeyUp {
                key,
                modifiers: self.current_modifiers,
            },
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Winit already folds macOS Cmd into Ctrl and Option into Alt.
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Maps the arrows, `R` and `Space`; everything else is
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        match code {
            WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
            WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
            WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
            WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
            WinitKeyCode::KeyR => KeyCode::KeyR,
            WinitKeyCode::Space => KeyCode::Space,
            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_modifiers(shift: bool, ctrl: bool, alt: bool) -> ModifiersState {
        let mut state = ModifiersState::empty();
        if shift { state.insert(ModifiersState::SHIFT); }
        if ctrl { state.insert(ModifiersState::CONTROL); }
        if alt { state.insert(ModifiersState::ALT); }
        state
    }

    #[test]
    fn starts_with_no_modifiers() {
        let processor = InputProcessor::new();
        assert_eq!(processor.current_modifiers(), Modifiers::NONE);
    }

    #[test]
    fn update_modifiers_works() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(make_modifiers(true, false, true));

        let mods = processor.current_modifiers();
        assert!(mods.shift && !mods.ctrl && mods.alt);
    }

    #[test]
    fn key_down_carries_modifiers() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(make_modifiers(false, true, false));

        let event = processor.create_key_input_event(KeyCode::KeyR, ElementState::Pressed);

        assert_eq!(
            event,
            InputEvent::KeyDown {
                key: KeyCode::KeyR,
                modifiers: Modifiers { ctrl: true, ..Modifiers::NONE },
            }
        );
    }

    #[test]
    fn key_up_is_kept() {
        let processor = InputProcessor::new();
        let event = processor.create_key_input_event(KeyCode::ArrowLeft, ElementState::Released);
        assert_eq!(event, InputEvent::release(KeyCode::ArrowLeft));
    }

    #[test]
    fn modifiers_persist_until_changed() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(make_modifiers(true, false, false));

        let first = processor.create_key_input_event(KeyCode::Space, ElementState::Pressed);
        let second = processor.create_key_input_event(KeyCode::KeyR, ElementState::Pressed);
        assert!(matches!(first, InputEvent::KeyDown { modifiers, .. } if modifiers.shift));
        assert!(matches!(second, InputEvent::KeyDown { modifiers, .. } if modifiers.shift));

        processor.update_modifiers(ModifiersState::empty());
        let third = processor.create_key_input_event(KeyCode::KeyR, ElementState::Pressed);
        assert_eq!(third, InputEvent::press(KeyCode::KeyR));
    }

    #[test]
    fn keycode_conversion_arrows() {
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowUp), KeyCode::ArrowUp);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowRight), KeyCode::ArrowRight);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowDown), KeyCode::ArrowDown);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
    }

    #[test]
    fn keycode_conversion_game_keys() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyR), KeyCode::KeyR);
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
    }

    #[test]
    fn keycode_conversion_filters_unknown() {
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::Digit1), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Unidentified);
    }
}
