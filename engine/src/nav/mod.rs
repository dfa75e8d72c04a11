//! Navigation Module
//!
//! The collision and movement resolution core. Control flow per frame:
//! input -> movement resolver -> collision oracle (horizontal) -> eye
//! update -> vertical snap resolver -> floor/ceiling rays + oracle
//! (vertical) -> eye update -> render.
//!
//! # Components
//!
//! - [`oracle`] - the two collision query modes and the floor/ceiling rays
//! - [`movement`] - WASD displacement with axis-sliding resolution
//! - [`vertical`] - gravity-free floor/ceiling snapping and unstick nudge
//! - [`session`] - [`WalkSession`], the per-walkthrough context object

pub mod movement;
pub mod oracle;
pub mod session;
pub mod vertical;

pub use movement::{MoveResolution, resolve_movement, try_slide};
pub use oracle::{
    Direction8, WallProbe, cast_ceiling, cast_floor, collides_horizontal, collides_vertical,
    probe_walls,
};
pub use session::WalkSession;
pub use vertical::resolve_vertical;
