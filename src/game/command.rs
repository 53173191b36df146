//=========================================================================
// Game Commands
//=========================================================================
//
// The complete input vocabulary of the game. Each command is produced by
// exactly one key binding; everything else is ignored upstream.
//
//=========================================================================

use crate::core::input::Action;
use crate::maze::Direction;

/// A discrete player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCommand {
    MoveUp,
    MoveRight,
    MoveDown,
    MoveLeft,
    /// Build a fresh maze with the same dimensions.
    Regenerate,
    /// Put the player back on the start cell.
    ResetToStart,
}

impl Action for GameCommand {}

impl From<Direction> for GameCommand {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Self::MoveUp,
            Direction::Right => Self::MoveRight,
            Direction::Down => Self::MoveDown,
            Direction::Left => Self::MoveLeft,
        }
    }
}
