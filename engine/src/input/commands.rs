//! One-Shot Commands
//!
//! Discrete debug/escape-hatch commands fired on key press, as opposed to
//! the held-key movement state. Teleports bypass collision checks entirely:
//! they are recovery tools, not user-facing movement.

use super::KeyCode;

/// A one-shot command triggered by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Snap the eye to the ground-floor height preset (no collision check)
    TeleportGroundFloor,
    /// Snap the eye to the upper-floor height preset (no collision check)
    TeleportUpperFloor,
    /// Log the current eye position
    PrintPosition,
}

impl Command {
    /// Map a pressed key to its command, if any.
    ///
    /// Only meaningful on the press edge; callers should not re-fire on
    /// key repeat or release.
    pub fn from_key(key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::G => Some(Command::TeleportGroundFloor),
            KeyCode::U => Some(Command::TeleportUpperFloor),
            KeyCode::P => Some(Command::PrintPosition),
            _ => None,
        }
    }
}
