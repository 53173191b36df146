//=========================================================================
// Input Event Types
//
// Backend-neutral representation of keyboard input.
//
// The platform layer converts OS key events into these types; the action
// mapper turns them into game commands. Nothing here depends on winit.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    ActionMapper (binding lookup)
//         ↓
//    GameCommand
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Only the keys the game reacts to are named. `KeyR` is the physical
/// location, so it is the same key on QWERTY and AZERTY layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowUp,
    ArrowRight,
    ArrowDown,
    ArrowLeft,
    KeyR,
    Space,

    /// Any key the input layer does not name.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier keys held when a key event fired.
///
/// Carried for diagnostics only; bindings ignore them, so `Shift+Right`
/// still moves right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };
}

//=== InputEvent ==========================================================

/// Low-level key event from the platform layer.
///
/// OS auto-repeat arrives as repeated `KeyDown`s; each one counts as a
/// separate press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed (or auto-repeated).
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Key released.
    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },
}

impl InputEvent {
    /// Shorthand for an unmodified key press.
    #[inline]
    pub const fn press(key: KeyCode) -> Self {
        Self::KeyDown { key, modifiers: Modifiers::NONE }
    }

    /// Shorthand for an unmodified key release.
    #[inline]
    pub const fn release(key: KeyCode) -> Self {
        Self::KeyUp { key, modifiers: Modifiers::NONE }
    }

    /// The key this event refers to.
    pub fn key(&self) -> KeyCode {
        match *self {
            Self::KeyDown { key, .. } | Self::KeyUp { key, .. } => key,
        }
    }

    pub fn is_press(&self) -> bool {
        matches!(self, Self::KeyDown { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn press_and_release_differ() {
        assert_ne!(InputEvent::press(KeyCode::KeyR), InputEvent::release(KeyCode::KeyR));
    }

    #[test]
    fn modifiers_distinguish_events() {
        let plain = InputEvent::press(KeyCode::KeyR);
        let ctrl = InputEvent::KeyDown {
            key: KeyCode::KeyR,
            modifiers: Modifiers { ctrl: true, ..Modifiers::NONE },
        };
        assert_ne!(plain, ctrl);

        let set: HashSet<_> = [plain, ctrl, plain].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn key_accessor() {
        assert_eq!(InputEvent::press(KeyCode::ArrowUp).key(), KeyCode::ArrowUp);
        assert_eq!(InputEvent::release(KeyCode::Space).key(), KeyCode::Space);
    }

    #[test]
    fn is_press_only_for_key_down() {
        assert!(InputEvent::press(KeyCode::Space).is_press());
        assert!(!InputEvent::release(KeyCode::Space).is_press());
    }

    #[test]
    fn default_modifiers_are_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }
}
