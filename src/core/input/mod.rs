//=========================================================================
// Input System
//
// Turns each frame's key events into an ordered list of game actions.
//
// Responsibilities:
// - Own the key bindings (via `ActionMapper`)
// - Consume input batches collected from the platform each tick
// - Expose the actions produced this tick, in press order
//
// Notes:
// This system is owned and updated by the CoreSystemsOrchestrator on the
// logic thread. Unbound keys and key releases produce no actions.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod action;
mod action_mapper;

//=== Public API ==========================================================

pub use action::Action;
pub use event::{InputEvent, KeyCode, Modifiers};

//=== Internal Imports ====================================================

use action_mapper::ActionMapper;

//=== External Crates =====================================================

use log::trace;

//=== InputSystem =========================================================

/// Key bindings plus the actions mapped during the current tick.
pub struct InputSystem<A: Action> {
    mapper: ActionMapper<A>,
    actions: Vec<A>,
}

impl<A: Action> InputSystem<A> {
    //--- Construction -----------------------------------------------------

    /// Creates a system with no bindings.
    pub fn new() -> Self {
        Self {
            mapper: ActionMapper::new(),
            actions: Vec::with_capacity(8),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key press to `action`, whatever modifiers are held.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        self.mapper.bind_key(key, action);
    }

    //--- process_frame() --------------------------------------------------
    //
    // Replaces last tick's actions with the ones mapped from `batches`.
    // Batch order and in-batch order are preserved.
    //
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) {
        self.actions.clear();

        for event in batches.iter().flatten() {
            match self.mapper.map_event(event) {
                Some(action) => self.actions.push(action),
                None if event.is_press() => {
                    trace!(target: "core::input", "Unbound key ignored: {:?}", event.key());
                }
                None => {}
            }
        }
    }

    //--- Query Methods ----------------------------------------------------

    /// Actions mapped during the last `process_frame` call.
    pub fn actions(&self) -> &[A] {
        &self.actions
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
