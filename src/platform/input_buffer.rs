//=========================================================================
// Input Buffer
//
// Transient store for key events between two frame boundaries.
//
// Responsibilities:
// - Keep events in arrival order
// - Hand the whole batch over in one `drain()` call
//
// Notes:
// Auto-repeated presses are kept as separate events. Each one is a move.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    //--- Event Handling ---------------------------------------------------
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events, or `None` if nothing arrived.
    //
    pub fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.events))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
