//! Input Module
//!
//! Platform-agnostic input handling for the walkthrough. Decoupled from any
//! specific windowing system: the host feeds key press/release events in
//! and reads nothing back - held state is consumed by the movement resolver
//! once per frame, one-shot commands are dispatched on the press edge.
//!
//! # Example
//!
//! ```rust,ignore
//! use roomwalk_engine::input::{Command, KeyCode, MovementKeys};
//!
//! let mut keys = MovementKeys::new();
//!
//! // On a key event from the host:
//! if !keys.handle_key(KeyCode::W, true) {
//!     if let Some(cmd) = Command::from_key(KeyCode::W) {
//!         // dispatch to the session
//!     }
//! }
//! ```

pub mod commands;
pub mod keyboard;

pub use commands::Command;
pub use keyboard::{KeyCode, MovementKeys};
