//=========================================================================
// Maze Snapshot
//=========================================================================
//
// Read-only view of the game state handed from the logic thread to the
// renderer. The grid is shared, not copied; it never changes after
// generation.
//
//=========================================================================

use std::sync::Arc;

use super::GamePhase;
use crate::maze::{Grid, Position};

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeSnapshot {
    pub grid: Arc<Grid>,
    pub player: Position,
    pub goal: Position,
    pub won: bool,
}

impl MazeSnapshot {
    /// Start cell marker position.
    #[inline]
    pub fn start(&self) -> Position {
        Position::ORIGIN
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        if self.won {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    /// One-line status text for the window title.
    pub fn status_line(&self) -> &'static str {
        match self.phase() {
            GamePhase::Playing => "Arrows move; R regenerates; Space returns to start",
            GamePhase::Won => "Solved! R regenerates; Space returns to start",
        }
    }
}
