//! Walkthrough - Headless Demo Driver
//!
//! Run with: `cargo run --bin walkthrough [scene.json]`
//!
//! Simulates a first-person walkthrough without a renderer: builds a small
//! two-floor demo environment (or loads a scene JSON given on the command
//! line), then drives the session through a scripted sequence of held keys
//! and one-shot commands at a fixed 60 Hz tick, printing the committed eye
//! position along the way. This is the stand-in for the excluded
//! renderer/pointer-lock collaborators; it exercises the exact per-frame
//! path a windowed host would.

use std::env;
use std::fs;

use anyhow::Context;
use glam::Vec3;

use roomwalk_engine::input::KeyCode;
use roomwalk_engine::nav::WalkSession;
use roomwalk_engine::world::{SceneDescription, TriangleMesh};

/// Mesh names ignored for collision in the demo scene (visual-only panes,
/// named the way the original environment asset names them).
const EXCLUDED_MESH_NAMES: [&str; 2] = ["Plane.002", "Plane.005"];

/// Fixed simulation tick (seconds), a steady 60 Hz frame.
const TICK: f32 = 1.0 / 60.0;

/// A small two-floor interior: ground slab, upper slab with a stairwell
/// opening, perimeter walls, a dividing wall and two visual-only panes
/// that the exclusion list drops.
fn demo_scene() -> Vec<TriangleMesh> {
    vec![
        TriangleMesh::cuboid("Floor", Vec3::new(-8.0, -0.2, -8.0), Vec3::new(8.0, 0.0, 10.0)),
        TriangleMesh::cuboid("UpperFloor", Vec3::new(-8.0, 2.0, -8.0), Vec3::new(2.0, 2.2, 10.0)),
        TriangleMesh::cuboid("Ceiling", Vec3::new(-8.0, 4.2, -8.0), Vec3::new(8.0, 4.4, 10.0)),
        TriangleMesh::cuboid("WallWest", Vec3::new(-8.2, 0.0, -8.0), Vec3::new(-8.0, 4.2, 10.0)),
        TriangleMesh::cuboid("WallEast", Vec3::new(8.0, 0.0, -8.0), Vec3::new(8.2, 4.2, 10.0)),
        TriangleMesh::cuboid("WallSouth", Vec3::new(-8.2, 0.0, -8.2), Vec3::new(8.2, 4.2, -8.0)),
        TriangleMesh::cuboid("WallNorth", Vec3::new(-8.2, 0.0, 10.0), Vec3::new(8.2, 4.2, 10.2)),
        TriangleMesh::cuboid("Divider", Vec3::new(2.0, 0.0, -8.0), Vec3::new(2.2, 1.8, 10.0)),
        // Visual-only glass panes, excluded from collision
        TriangleMesh::cuboid("Plane.002", Vec3::new(-2.0, 0.0, 2.0), Vec3::new(-1.9, 1.8, 4.0)),
        TriangleMesh::cuboid("Plane.005", Vec3::new(4.0, 0.0, 2.0), Vec3::new(4.1, 1.8, 4.0)),
    ]
}

fn load_scene(path: &str) -> anyhow::Result<Vec<TriangleMesh>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading scene file {path}"))?;
    let scene = SceneDescription::from_json(&text).context("parsing scene JSON")?;
    let meshes = scene.into_meshes().context("validating scene meshes")?;
    Ok(meshes)
}

/// Hold a set of keys for a number of ticks, then release them.
fn walk(session: &mut WalkSession, keys: &[KeyCode], ticks: u32, label: &str) {
    for &key in keys {
        session.handle_key(key, true);
    }
    for _ in 0..ticks {
        session.update(TICK);
    }
    for &key in keys {
        session.handle_key(key, false);
    }
    let eye = session.eye();
    println!(
        "{label:<28} eye: x={:6.2} y={:5.2} z={:6.2}  resolution: {:?}",
        eye.x,
        eye.y,
        eye.z,
        session.last_resolution()
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let meshes = match env::args().nth(1) {
        Some(path) => load_scene(&path)?,
        None => demo_scene(),
    };

    let mut session = WalkSession::default();
    session.registry.populate(meshes, &EXCLUDED_MESH_NAMES);

    // Click-to-lock in the browser; here the script just locks
    session.look.lock();

    println!("surfaces: {}", session.registry.surface_count());
    println!("spawn                        eye: {:?}", session.eye());

    // Face +X (east) and cross the room toward the divider wall
    session.look.yaw = std::f32::consts::FRAC_PI_2;
    walk(&mut session, &[KeyCode::W], 90, "walk east");
    walk(&mut session, &[KeyCode::W, KeyCode::ShiftLeft], 90, "sprint east into divider");

    // Sliding: keep pushing diagonally against the divider
    walk(&mut session, &[KeyCode::W, KeyCode::A], 60, "push diagonally along wall");

    // Up to the landing and back down via the teleport presets
    session.handle_key(KeyCode::U, true);
    session.handle_key(KeyCode::U, false);
    walk(&mut session, &[], 30, "settle on upper floor");

    session.handle_key(KeyCode::G, true);
    session.handle_key(KeyCode::G, false);
    walk(&mut session, &[], 30, "settle on ground floor");

    session.handle_key(KeyCode::P, true);

    let probe = session.wall_probe();
    println!("wall probe at rest: {:?}", probe.blocked);

    Ok(())
}
