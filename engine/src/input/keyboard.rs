//! Keyboard Input Module
//!
//! Held-key state tracking for movement. Decoupled from any windowing
//! system: the host translates its own key events into the generic
//! [`KeyCode`] before handing them to the engine.

/// Generic key codes for walkthrough input, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    ShiftLeft,
    ShiftRight,

    // One-shot command keys
    /// Teleport to ground-floor eye height
    G,
    /// Teleport to upper-floor eye height
    U,
    /// Print the current eye position
    P,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which movement keys are currently held.
///
/// Forward/backward/left/right are independent flags and may combine
/// (e.g. forward + left walks diagonally). Read once per frame by the
/// movement resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - strafe left
    pub left: bool,
    /// D key - strafe right
    pub right: bool,
    /// Shift - sprint
    pub sprint: bool,
}

impl MovementKeys {
    /// Create a movement key state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update held state from a key press/release event.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise (the caller may then try the command mapping).
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.forward = pressed;
                true
            }
            KeyCode::S => {
                self.backward = pressed;
                true
            }
            KeyCode::A => {
                self.left = pressed;
                true
            }
            KeyCode::D => {
                self.right = pressed;
                true
            }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.sprint = pressed;
                true
            }
            _ => false,
        }
    }

    /// Whether any directional key is currently held.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Reset all keys to released (e.g. on pointer unlock or focus loss).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
