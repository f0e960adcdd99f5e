//! Kinematic integration: `pos += velocity` once per frame.
//!
//! Applies to every active entity with a transform and either a collision
//! radius or the player role. The player's velocity is a unit direction set
//! by the player input system, scaled here by the configured speed; all
//! other entities carry pre-scaled velocities. Every moved entity also spins
//! by a fixed angle for display.

use polyblast_core::constants::SPIN_DEGREES_PER_FRAME;
use polyblast_core::entity::EntityId;

use crate::entity_manager::EntityManager;

pub fn run(entities: &mut EntityManager, player: EntityId, player_speed: f32) {
    let ids = entities.all_entities().to_vec();
    for id in ids {
        let Some(entity) = entities.get_mut(id) else {
            continue;
        };
        let is_player = id == player;
        if !entity.is_active() || (!is_player && entity.collision().is_none()) {
            continue;
        }
        let Some(transform) = entity.transform_mut() else {
            continue;
        };
        let step = if is_player {
            transform.velocity * player_speed
        } else {
            transform.velocity
        };
        transform.pos += step;
        transform.angle += SPIN_DEGREES_PER_FRAME;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyblast_core::components::{Collision, Transform};
    use polyblast_core::entity::Tag;
    use polyblast_core::types::Vec2;

    fn spawn(entities: &mut EntityManager, tag: Tag, pos: Vec2, velocity: Vec2, collides: bool) -> EntityId {
        let id = entities.add_entity(tag);
        let entity = entities.get_mut(id).unwrap();
        entity.set_transform(Transform::new(pos, velocity, 0.0));
        if collides {
            entity.set_collision(Collision { radius: 8.0 });
        }
        id
    }

    fn pos(entities: &EntityManager, id: EntityId) -> Vec2 {
        entities.get(id).unwrap().transform().unwrap().pos
    }

    #[test]
    fn non_player_moves_at_stored_velocity() {
        let mut entities = EntityManager::new();
        let player = spawn(&mut entities, Tag::Player, Vec2::ZERO, Vec2::ZERO, true);
        let enemy = spawn(&mut entities, Tag::Enemy, Vec2::new(10.0, 10.0), Vec2::new(1.0, -1.0), true);
        entities.sync();

        run(&mut entities, player, 3.0);
        assert_eq!(pos(&entities, enemy), Vec2::new(11.0, 9.0));
        run(&mut entities, player, 3.0);
        assert_eq!(pos(&entities, enemy), Vec2::new(12.0, 8.0));
    }

    #[test]
    fn player_velocity_scaled_by_speed() {
        let mut entities = EntityManager::new();
        let player = spawn(&mut entities, Tag::Player, Vec2::new(100.0, 100.0), Vec2::new(0.0, -1.0), false);
        entities.sync();

        run(&mut entities, player, 3.0);
        assert_eq!(pos(&entities, player), Vec2::new(100.0, 97.0));
    }

    #[test]
    fn entities_without_collision_stay_put() {
        let mut entities = EntityManager::new();
        let player = spawn(&mut entities, Tag::Player, Vec2::ZERO, Vec2::ZERO, true);
        let decor = spawn(&mut entities, Tag::Enemy, Vec2::new(5.0, 5.0), Vec2::new(1.0, 0.0), false);
        entities.sync();

        run(&mut entities, player, 1.0);
        assert_eq!(pos(&entities, decor), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn pending_and_destroyed_entities_do_not_move() {
        let mut entities = EntityManager::new();
        let player = spawn(&mut entities, Tag::Player, Vec2::ZERO, Vec2::ZERO, true);
        let dead = spawn(&mut entities, Tag::Bullet, Vec2::ZERO, Vec2::new(5.0, 0.0), true);
        entities.sync();
        entities.destroy(dead);
        let pending = spawn(&mut entities, Tag::Bullet, Vec2::ZERO, Vec2::new(5.0, 0.0), true);

        run(&mut entities, player, 1.0);
        assert_eq!(pos(&entities, dead), Vec2::ZERO);
        assert_eq!(pos(&entities, pending), Vec2::ZERO);
    }

    #[test]
    fn moving_entities_spin() {
        let mut entities = EntityManager::new();
        let player = spawn(&mut entities, Tag::Player, Vec2::ZERO, Vec2::ZERO, true);
        entities.sync();
        run(&mut entities, player, 1.0);
        run(&mut entities, player, 1.0);
        let angle = entities.get(player).unwrap().transform().unwrap().angle;
        assert_eq!(angle, 2.0 * SPIN_DEGREES_PER_FRAME);
    }

    #[test]
    fn nan_velocity_does_not_panic() {
        let mut entities = EntityManager::new();
        let player = spawn(&mut entities, Tag::Player, Vec2::ZERO, Vec2::ZERO, true);
        let lost = spawn(&mut entities, Tag::Bullet, Vec2::ZERO, Vec2::new(f32::NAN, f32::NAN), true);
        entities.sync();
        run(&mut entities, player, 1.0);
        assert!(pos(&entities, lost).x.is_nan());
    }
}
