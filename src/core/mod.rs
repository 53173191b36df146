//=========================================================================
// Core Systems Orchestrator
//
// Logic-thread owner of the game.
//
// Responsibilities:
// - Own the `GameState` aggregate and the random source exclusively
// - Receive platform input batches via channel and map them to commands
// - Apply commands in order, one at a time
// - Publish a `MazeSnapshot` to the platform whenever state changes
// - Keep a fixed tick rate (TPS)
//
// Notes:
// All state mutation happens on this thread. The platform only ever sees
// immutable snapshots, so no locking is involved anywhere.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::{info, warn};
use rand::rngs::StdRng;

//=== Internal Modules ====================================================

pub mod input;
pub(crate) mod platform_bridge;

use crate::game::{GameCommand, GameState, MazeSnapshot};
use input::{InputEvent, InputSystem, KeyCode};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== Default Bindings ====================================================

/// Arrow keys move, `R` regenerates, `Space` returns to start.
pub const DEFAULT_BINDINGS: [(KeyCode, GameCommand); 6] = [
    (KeyCode::ArrowUp, GameCommand::MoveUp),
    (KeyCode::ArrowRight, GameCommand::MoveRight),
    (KeyCode::ArrowDown, GameCommand::MoveDown),
    (KeyCode::ArrowLeft, GameCommand::MoveLeft),
    (KeyCode::KeyR, GameCommand::Regenerate),
    (KeyCode::Space, GameCommand::ResetToStart),
];

//=== CoreSystemsOrchestrator =============================================

pub(crate) struct CoreSystemsOrchestrator {
    input: InputSystem<GameCommand>,
    game: GameState,
    rng: StdRng,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Takes ownership of the initial game and the rng that will drive all
    // later regenerations. Default key bindings are installed.
    //
    pub fn new(game: GameState, rng: StdRng) -> Self {
        let mut input = InputSystem::new();
        for (key, command) in DEFAULT_BINDINGS {
            input.bind_key(key, command);
        }

        Self { input, game, rng }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    //--- tick() -----------------------------------------------------------
    //
    // Maps one tick's input batches to commands and applies them in order.
    // Returns `true` if any command changed the visible state.
    //
    pub fn tick(&mut self, batches: &[Vec<InputEvent>]) -> bool {
        self.input.process_frame(batches);

        let mut dirty = false;
        for &command in self.input.actions() {
            dirty |= self.game.handle(command, &mut self.rng).changed_state();
        }
        dirty
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread. Each tick:
    //  1. Drains platform events (exit on close/disconnect)
    //  2. Applies mapped commands to the game
    //  3. Publishes a snapshot if anything changed
    //  4. Sleeps out the rest of the tick
    //
    // The initial snapshot is published before the first tick.
    //
    pub fn spawn_core_thread(
        mut self,
        receiver: Receiver<PlatformEvent>,
        frames: Sender<MazeSnapshot>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut collector = EventCollector::new(receiver);

            if Self::publish(&frames, self.game.snapshot()) == TickControl::Exit {
                return;
            }

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!(target: "core", "Core thread exiting.");
                    break;
                }

                //--- Step 2: Apply commands --------------------------------
                let dirty = self.tick(collector.batches());

                //--- Step 3: Publish ---------------------------------------
                if dirty && Self::publish(&frames, self.game.snapshot()) == TickControl::Exit {
                    break;
                }

                //--- Step 4: Maintain pacing -------------------------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- publish() --------------------------------------------------------
    //
    // A disconnected renderer means the platform is gone; stop ticking.
    //
    fn publish(frames: &Sender<MazeSnapshot>, snapshot: MazeSnapshot) -> TickControl {
        match frames.send(snapshot) {
            Ok(()) => TickControl::Continue,
            Err(_) => {
                warn!(target: "core", "Render channel disconnected, stopping core thread");
                TickControl::Exit
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
