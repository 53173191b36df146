//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use perfect_maze::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Game facade
pub use crate::engine::{Game, GameBuilder};
pub use crate::PlatformError;

// Maze model
pub use crate::maze::{generate, Cell, Direction, Grid, Position};

// Game rules
pub use crate::game::{GameCommand, GamePhase, GameState, MazeSnapshot, Outcome};

// Input system
pub use crate::core::input::{Action, InputEvent, KeyCode, Modifiers};
