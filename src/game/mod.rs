//=========================================================================
// Game State & Movement Rules
//=========================================================================
//
// The single mutable aggregate of the game: grid, player, goal, win flag.
//
// State machine:
// ```text
//             move onto goal
//   Playing ─────────────────► Won
//     ▲  │ other / blocked      │
//     │  └──────┘               │
//     └─────────────────────────┘
//        reset-to-start / regenerate (from either state)
// ```
//
// Movement commands are ignored while Won. Walls are checked on the
// player's current cell only; the bounds clamp after a step is a guard
// that a correct grid never triggers.
//
//=========================================================================

//=== Module Declarations =================================================

mod command;
mod snapshot;

//=== Public API ==========================================================

pub use command::GameCommand;
pub use snapshot::MazeSnapshot;

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::{debug, info, warn};
use rand::Rng;

//=== Internal Dependencies ===============================================

use crate::maze::{self, Direction, Grid, Position};

//=== GamePhase ===========================================================

/// Coarse game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Playing,
    Won,
}

//=== Outcome =============================================================

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player stepped through an open passage.
    Moved,
    /// Player stepped onto the goal.
    Won,
    /// A wall was in the way; nothing changed.
    Blocked,
    /// Movement arrived after the maze was solved; nothing changed.
    Ignored,
    /// Player returned to the start cell.
    Reset,
    /// A new maze replaced the old one.
    Regenerated,
}

impl Outcome {
    /// Returns `true` if the snapshot changed and a redraw is due.
    pub fn changed_state(self) -> bool {
        !matches!(self, Self::Blocked | Self::Ignored)
    }
}

//=== GameState ===========================================================

/// Grid, player, goal and win flag, owned by one controller.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Arc<Grid>,
    player: Position,
    goal: Position,
    won: bool,
}

impl GameState {
    //--- Construction -----------------------------------------------------

    /// Generates a fresh maze and places the player on the start cell.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is 2 or less.
    pub fn new<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        Self::with_grid(maze::generate(rows, cols, rng))
    }

    /// Starts a game on an existing grid.
    pub fn with_grid(grid: Grid) -> Self {
        let goal = grid.far_corner();
        Self {
            grid: Arc::new(grid),
            player: Position::ORIGIN,
            goal,
            won: false,
        }
    }

    //--- Queries ----------------------------------------------------------

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn player(&self) -> Position {
        self.player
    }

    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn phase(&self) -> GamePhase {
        if self.won {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    /// Read-only view for the renderer. Shares the grid.
    pub fn snapshot(&self) -> MazeSnapshot {
        MazeSnapshot {
            grid: Arc::clone(&self.grid),
            player: self.player,
            goal: self.goal,
            won: self.won,
        }
    }

    //--- Commands ---------------------------------------------------------

    /// Dispatches one command. `rng` is only drawn from on regenerate.
    pub fn handle<R: Rng + ?Sized>(&mut self, command: GameCommand, rng: &mut R) -> Outcome {
        let outcome = match command {
            GameCommand::Regenerate => self.regenerate(rng),
            GameCommand::ResetToStart => self.reset_to_start(),
            GameCommand::MoveUp => self.apply_move(Direction::Up),
            GameCommand::MoveRight => self.apply_move(Direction::Right),
            GameCommand::MoveDown => self.apply_move(Direction::Down),
            GameCommand::MoveLeft => self.apply_move(Direction::Left),
        };

        debug!(target: "game", "{:?} -> {:?} (player at {:?})", command, outcome, self.player);
        outcome
    }

    /// Moves the player one cell if the wall on that side is open.
    pub fn apply_move(&mut self, dir: Direction) -> Outcome {
        if self.won {
            return Outcome::Ignored;
        }

        if !self.grid.is_open(self.player, dir) {
            return Outcome::Blocked;
        }

        let (next, clamped) = self.step_within_bounds(self.player, dir);
        debug_assert!(!clamped, "open wall at {:?} {:?} leads off the grid", self.player, dir);
        if clamped {
            warn!(target: "game", "Clamped move {:?} from {:?}; grid has an open border", dir, self.player);
        }

        self.player = next;
        if self.player == self.goal {
            self.won = true;
            info!(target: "game", "Goal reached at {:?}", self.goal);
            Outcome::Won
        } else {
            Outcome::Moved
        }
    }

    /// Returns the player to the start cell. The grid is untouched.
    pub fn reset_to_start(&mut self) -> Outcome {
        self.player = Position::ORIGIN;
        self.won = false;
        Outcome::Reset
    }

    /// Replaces the grid with a new maze of the same size.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        let grid = maze::generate(self.grid.rows(), self.grid.cols(), rng);
        info!(target: "game", "Regenerated {}x{} maze", grid.rows(), grid.cols());

        *self = Self::with_grid(grid);
        Outcome::Regenerated
    }

    //--- Internal Helpers -------------------------------------------------

    /// Applies the step offset and clamps to the grid.
    ///
    /// The flag reports whether clamping changed the result.
    fn step_within_bounds(&self, from: Position, dir: Direction) -> (Position, bool) {
        let step = dir.step();
        let row = from.y as isize + step.d_row;
        let col = from.x as isize + step.d_col;

        let max_row = self.grid.rows() as isize - 1;
        let max_col = self.grid.cols() as isize - 1;
        let clamped_row = row.clamp(0, max_row);
        let clamped_col = col.clamp(0, max_col);

        let clamped = clamped_row != row || clamped_col != col;
        (Position::new(clamped_col as usize, clamped_row as usize), clamped)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
