//! Systems that operate on the entity store each frame.
//!
//! Systems are plain functions over `&mut EntityManager` plus whatever
//! orchestrator state they need, passed explicitly. They never hold entity
//! references across calls.

pub mod collision;
pub mod enemy_spawner;
pub mod input;
pub mod lifespan;
pub mod movement;
pub mod player_input;
pub mod snapshot;
