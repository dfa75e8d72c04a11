//! Camera Module
//!
//! Camera orientation for the walkthrough. This module is window-system
//! agnostic - it only deals with yaw/pitch state, pointer-lock gating and
//! direction math; the host wires actual pointer-lock events into it.

pub mod look;

pub use look::LookController;
