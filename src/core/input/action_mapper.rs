//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps key presses to actions based on configured bindings.
//
// Architecture:
//   key → HashMap → Action
//
// Lookup is by key alone: modifiers held at the time do not change which
// action fires. Releases and unbound keys map to nothing.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::Action,
    event::{InputEvent, KeyCode},
};

//=== ActionMapper ========================================================

/// Maps key presses to actions, one action per key.
pub(crate) struct ActionMapper<A: Action> {
    key_bindings: HashMap<KeyCode, A>,
}

impl<A: Action> ActionMapper<A> {
    pub(crate) fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
        }
    }

    /// Binds a key to an action, replacing any previous binding.
    pub(crate) fn bind_key(&mut self, key: KeyCode, action: A) {
        self.key_bindings.insert(key, action);
    }

    /// Maps an input event to an action. Only presses map.
    pub(crate) fn map_event(&self, event: &InputEvent) -> Option<A> {
        match *event {
            InputEvent::KeyDown { key, .. } => self.key_bindings.get(&key).copied(),
            InputEvent::KeyUp { .. } => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Modifiers;
    use crate::game::GameCommand;

    fn key_down_with_mods(key: KeyCode, modifiers: Modifiers) -> InputEvent {
        InputEvent::KeyDown { key, modifiers }
    }

    #[test]
    fn bind_and_map_simple_key() {
        let mut mapper = ActionMapper::<GameCommand>::new();
        mapper.bind_key(KeyCode::ArrowUp, GameCommand::MoveUp);

        let action = mapper.map_event(&InputEvent::press(KeyCode::ArrowUp));
        assert_eq!(action, Some(GameCommand::MoveUp));
    }

    #[test]
    fn unbound_key_maps_to_none() {
        let mut mapper = ActionMapper::<GameCommand>::new();
        mapper.bind_key(KeyCode::KeyR, GameCommand::Regenerate);

        assert_eq!(mapper.map_event(&InputEvent::press(KeyCode::Space)), None);
        assert_eq!(mapper.map_event(&InputEvent::press(KeyCode::Unidentified)), None);
    }

    #[test]
    fn release_never_maps() {
        let mut mapper = ActionMapper::<GameCommand>::new();
        mapper.bind_key(KeyCode::Space, GameCommand::ResetToStart);

        assert_eq!(mapper.map_event(&InputEvent::release(KeyCode::Space)), None);
    }

    /// Held modifiers do not hide a binding.
    #[test]
    fn modifiers_are_ignored() {
        let mut mapper = ActionMapper::<GameCommand>::new();
        mapper.bind_key(KeyCode::KeyR, GameCommand::Regenerate);
        mapper.bind_key(KeyCode::ArrowRight, GameCommand::MoveRight);

        let ctrl_r = key_down_with_mods(KeyCode::KeyR, Modifiers { ctrl: true, ..Modifiers::NONE });
        let shift_right =
            key_down_with_mods(KeyCode::ArrowRight, Modifiers { shift: true, ..Modifiers::NONE });
        let all_held = key_down_with_mods(
            KeyCode::ArrowRight,
            Modifiers { shift: true, ctrl: true, alt: true },
        );

        assert_eq!(mapper.map_event(&ctrl_r), Some(GameCommand::Regenerate));
        assert_eq!(mapper.map_event(&shift_right), Some(GameCommand::MoveRight));
        assert_eq!(mapper.map_event(&all_held), Some(GameCommand::MoveRight));
    }

    #[test]
    fn rebinding_replaces_action() {
        let mut mapper = ActionMapper::<GameCommand>::new();
        mapper.bind_key(KeyCode::ArrowUp, GameCommand::MoveUp);
        mapper.bind_key(KeyCode::ArrowUp, GameCommand::MoveDown);

        let action = mapper.map_event(&InputEvent::press(KeyCode::ArrowUp));
        assert_eq!(action, Some(GameCommand::MoveDown));
    }
}
