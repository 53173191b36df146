//=========================================================================
// Action Trait
//=========================================================================
//
// Game-defined command enums routed by the input system.
//
//=========================================================================

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for game-defined action enums.
///
/// Actions are high-level commands (move, regenerate, reset) produced from
/// key bindings. The input system routes them without interpreting them.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: Cheap passing and use as map values
/// - `Debug`: Logging support
/// - `Send + 'static`: Owned by the logic thread
///
/// # Example
///
/// ```
/// use perfect_maze::core::input::Action;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum MenuAction { Confirm, Back }
///
/// impl Action for MenuAction {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameCommand;

    #[test]
    fn game_command_is_action() {
        fn assert_action<T: Action>() {}
        assert_action::<GameCommand>();
    }

    #[test]
    fn action_is_send_and_static() {
        fn assert_send_static<T: Send + 'static>() {}
        assert_send_static::<GameCommand>();
    }
}
