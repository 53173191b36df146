//=========================================================================
// Perfect Maze Game
//
// Main entry point and coordinator.
//
// Architecture:
// ```text
//     GameBuilder  ──build()──>  Game  ──run()──>  [Runtime]
//         │                        │
//         ├─ with_dimensions()     └─ spawns logic thread
//         ├─ with_seed()              runs platform
//         └─ with_tps() ...           blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::CoreSystemsOrchestrator;
use crate::game::{GameState, MazeSnapshot};
use crate::maze::MIN_DIMENSION;
use crate::platform::Platform;
use crate::render::{MazePainter, RenderConfig};

//=== GameBuilder =========================================================

/// Builder for configuring and constructing a [`Game`].
///
/// # Default Values
///
/// - **Maze**: 21 rows x 31 columns
/// - **Cell size**: 24 px, **wall thickness**: 2 px
/// - **Seed**: none (OS entropy)
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
///
/// # Examples
///
/// ```no_run
/// use perfect_maze::GameBuilder;
///
/// GameBuilder::new()
///     .with_dimensions(15, 25)
///     .with_seed(42)
///     .build()
///     .run()
///     .expect("platform failure");
/// ```
#[derive(Debug, Clone)]
pub struct GameBuilder {
    rows: usize,
    cols: usize,
    render: RenderConfig,
    seed: Option<u64>,
    tps: f64,
    channel_capacity: usize,
}

impl GameBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            rows: 21,
            cols: 31,
            render: RenderConfig::default(),
            seed: None,
            tps: 60.0,
            channel_capacity: 128,
        }
    }

    /// Sets the maze size in cells.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is 2 or less.
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        assert!(rows >= MIN_DIMENSION, "Rows must be greater than 2, got {}", rows);
        assert!(cols >= MIN_DIMENSION, "Cols must be greater than 2, got {}", cols);
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Sets the side of one cell in pixels.
    ///
    /// Default: 24
    ///
    /// # Panics
    ///
    /// Panics if `cell_size == 0`.
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        assert!(cell_size > 0, "Cell size must be positive");
        self.render.cell_size = cell_size;
        self
    }

    /// Sets the wall stroke width in pixels.
    ///
    /// Must stay below the cell size; checked in [`build`](Self::build) so
    /// the setters can be called in any order.
    ///
    /// # Panics
    ///
    /// Panics if `thickness == 0`.
    pub fn with_wall_thickness(mut self, thickness: u32) -> Self {
        assert!(thickness > 0, "Wall thickness must be positive");
        self.render.wall_thickness = thickness;
        self
    }

    /// Fixes the random seed; the same seed always yields the same
    /// sequence of mazes.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds the game, generating the first maze immediately.
    ///
    /// # Panics
    ///
    /// Panics if the wall thickness is not smaller than the cell size.
    pub fn build(self) -> Game {
        assert!(
            self.render.wall_thickness < self.render.cell_size,
            "Wall thickness ({}) must be smaller than cell size ({})",
            self.render.wall_thickness,
            self.render.cell_size
        );

        info!(
            "Building game ({}x{}, seed: {:?}, TPS: {}, channel: {})",
            self.rows, self.cols, self.seed, self.tps, self.channel_capacity
        );

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = GameState::new(self.rows, self.cols, &mut rng);

        Game {
            orchestrator: CoreSystemsOrchestrator::new(state, rng),
            window_size: self.render.window_size(self.rows, self.cols),
            painter: MazePainter::new(self.render),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Game ================================================================

/// Perfect maze game runtime.
///
/// # Architecture
///
/// ```text
/// Game (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem → GameState → MazeSnapshot
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling, Presentation
///
/// Communication: PlatformEvent channel (bounded) one way,
///                MazeSnapshot channel the other
/// ```
pub struct Game {
    orchestrator: CoreSystemsOrchestrator,
    painter: MazePainter,
    window_size: (u32, u32),
    tps: f64,
    channel_capacity: usize,
}

impl Game {
    /// The game as it will look on the first frame.
    pub fn state(&self) -> &GameState {
        self.orchestrator.game()
    }

    /// Inner window size in pixels, status bar included.
    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and blocks until it is closed.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the input and snapshot channels
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: `WindowClosed` is sent, the logic thread exits
    ///    and is joined
    ///
    /// # Errors
    ///
    /// Returns the [`PlatformError`] that stopped the event loop, if any.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting game runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        let (event_tx, event_rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (frame_tx, frame_rx): (Sender<MazeSnapshot>, Receiver<MazeSnapshot>) = unbounded();

        info!("Channels created (input capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(event_rx, frame_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(event_tx, frame_rx, self.painter, self.window_size);
        info!("Platform initialized, entering event loop");

        let result = platform.run();
        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: wait for the logic thread -------------------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Game shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Position;

    //=====================================================================
    // GameBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = GameBuilder::new();
        assert_eq!((builder.rows, builder.cols), (21, 31));
        assert_eq!(builder.render, RenderConfig::default());
        assert_eq!(builder.seed, None);
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
    }

    #[test]
    fn builder_with_dimensions() {
        let builder = GameBuilder::new().with_dimensions(3, 40);
        assert_eq!((builder.rows, builder.cols), (3, 40));
    }

    #[test]
    #[should_panic(expected = "Rows must be greater than 2")]
    fn builder_rejects_two_rows() {
        GameBuilder::new().with_dimensions(2, 10);
    }

    #[test]
    #[should_panic(expected = "Cols must be greater than 2")]
    fn builder_rejects_two_cols() {
        GameBuilder::new().with_dimensions(10, 2);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        GameBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        GameBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        GameBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Cell size must be positive")]
    fn builder_rejects_zero_cell_size() {
        GameBuilder::new().with_cell_size(0);
    }

    #[test]
    #[should_panic(expected = "must be smaller than cell size")]
    fn build_rejects_wall_as_thick_as_cell() {
        GameBuilder::new().with_cell_size(4).with_wall_thickness(4).build();
    }

    #[test]
    fn wall_and_cell_setters_are_order_independent() {
        let game = GameBuilder::new()
            .with_wall_thickness(6)
            .with_cell_size(30)
            .with_dimensions(3, 3)
            .build();
        assert_eq!(game.window_size(), (3 * 30 + 6 + 1, 3 * 30 + 6 + 1 + 40));
    }

    //=====================================================================
    // Game Tests
    //=====================================================================

    #[test]
    fn build_generates_initial_maze() {
        let game = GameBuilder::new().with_dimensions(5, 7).with_seed(1).build();
        let state = game.state();

        assert_eq!(state.grid().rows(), 5);
        assert_eq!(state.grid().cols(), 7);
        assert_eq!(state.grid().passage_count(), 5 * 7 - 1);
        assert_eq!(state.player(), Position::ORIGIN);
        assert_eq!(state.goal(), Position::new(6, 4));
        assert!(!state.is_won());
    }

    #[test]
    fn same_seed_builds_same_maze() {
        let a = GameBuilder::new().with_seed(99).build();
        let b = GameBuilder::new().with_seed(99).build();
        assert_eq!(a.state().grid(), b.state().grid());
    }

    #[test]
    fn fluent_api_chaining() {
        let game = GameBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .build();

        assert_eq!(game.tps, 120.0);
        assert_eq!(game.channel_capacity, 256);
        assert_eq!(game.window_size(), (31 * 24 + 3, 21 * 24 + 3 + 40));
    }
}
