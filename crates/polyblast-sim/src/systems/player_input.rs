//! Player input processing: turns held controls into this frame's velocity.
//!
//! A control that would carry the player's centre to within one shape
//! radius of the matching window edge is released (the stored flag is
//! cleared). The resulting velocity is a per-axis direction in {-1, 0, 1};
//! the movement system scales it by the configured speed.

use polyblast_core::config::{PlayerConfig, WindowConfig};
use polyblast_core::entity::EntityId;

use crate::entity_manager::EntityManager;

pub fn run(entities: &mut EntityManager, player: EntityId, window: &WindowConfig, config: &PlayerConfig) {
    let Some(entity) = entities.get_mut(player) else {
        return;
    };
    if !entity.is_active() {
        return;
    }
    let Some(pos) = entity.transform().map(|t| t.pos) else {
        return;
    };
    let radius = entity
        .shape()
        .map_or(config.shape_radius as f32, |shape| shape.radius);
    let speed = config.speed;
    let width = window.width as f32;
    let height = window.height as f32;

    let Some(input) = entity.input_mut() else {
        return;
    };
    if input.up && pos.y - speed < radius {
        input.up = false;
    }
    if input.down && pos.y + speed > height - radius {
        input.down = false;
    }
    if input.left && pos.x - speed < radius {
        input.left = false;
    }
    if input.right && pos.x + speed > width - radius {
        input.right = false;
    }
    let direction = input.direction();

    if let Some(transform) = entity.transform_mut() {
        transform.velocity = direction;
    }
}
