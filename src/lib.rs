//=========================================================================
// Perfect Maze: Library Root
//
// Public API surface of the maze game.
//
// Responsibilities:
// - Expose the game facade (`GameBuilder`, `Game`)
// - Expose the pure game model (`maze`, `game`) and renderer (`render`)
//   so they can be driven and tested without a window
// - Keep OS integration (`platform`) hidden
//
// Typical usage:
// ```no_run
// use perfect_maze::GameBuilder;
//
// fn main() {
//     GameBuilder::new().build().run().ok();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `maze` is the grid model and generator, `game` the rules applied on
// top of it. `core` owns the logic thread and input mapping. `render`
// turns snapshots into pixels.
//
pub mod core;
pub mod game;
pub mod maze;
pub mod prelude;
pub mod render;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains winit integration and presentation and is not part
// of the public API surface. `engine` wires the threads together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use engine::{Game, GameBuilder};
