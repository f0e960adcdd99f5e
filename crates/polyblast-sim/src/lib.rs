//! Simulation engine for POLYBLAST.
//!
//! Owns the entity store, runs the per-frame systems in a fixed order,
//! and produces `FrameSnapshot`s for the renderer.

pub mod engine;
pub mod entity_manager;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{Game, GameSettings, InputSource};
pub use entity_manager::EntityManager;
pub use polyblast_core as core;
