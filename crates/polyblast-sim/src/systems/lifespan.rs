//! Lifespan system: counts down, fades, and finally deactivates.
//!
//! While frames remain, one is consumed and the fill and outline alpha are
//! set to `255 * remaining / total`. The entity is destroyed on the tick
//! that uses up its last frame, so it never takes part in a collision pass
//! at zero. Entities are never reactivated.

use crate::entity_manager::EntityManager;

pub fn run(entities: &mut EntityManager) {
    let ids = entities.all_entities().to_vec();
    for id in ids {
        let Some(entity) = entities.get_mut(id) else {
            continue;
        };
        if !entity.is_active() {
            continue;
        }
        let Some(lifespan) = entity.lifespan_mut() else {
            continue;
        };

        let ticked = lifespan.tick();
        let expired = lifespan.is_expired();
        let alpha = lifespan.alpha();

        if ticked {
            if let Some(shape) = entity.shape_mut() {
                shape.fill = shape.fill.with_alpha(alpha);
                shape.outline = shape.outline.with_alpha(alpha);
            }
        }
        if expired {
            entity.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyblast_core::components::{Lifespan, Shape};
    use polyblast_core::entity::{EntityId, Tag};
    use polyblast_core::types::Rgba;

    fn spawn_fading(entities: &mut EntityManager, total: u32) -> EntityId {
        let id = entities.add_entity(Tag::SmallEnemy);
        let entity = entities.get_mut(id).unwrap();
        entity.set_shape(Shape {
            radius: 8.0,
            vertex_count: 5,
            fill: Rgba::rgb(200, 100, 50),
            outline: Rgba::WHITE,
            outline_thickness: 1.0,
        });
        entity.set_lifespan(Lifespan::new(total));
        id
    }

    fn shape(entities: &EntityManager, id: EntityId) -> Shape {
        *entities.get(id).unwrap().shape().unwrap()
    }

    #[test]
    fn fade_after_four_ticks() {
        let mut entities = EntityManager::new();
        let id = spawn_fading(&mut entities, 10);
        entities.sync();

        for _ in 0..4 {
            run(&mut entities);
        }

        let expected = (255 * 6 / 10) as u8;
        let s = shape(&entities, id);
        assert_eq!(s.fill.a, expected);
        assert_eq!(s.outline.a, expected);
        assert_eq!((s.fill.r, s.fill.g, s.fill.b), (200, 100, 50));
        assert_eq!(entities.get(id).unwrap().lifespan().unwrap().remaining(), 6);
        assert!(entities.is_active(id));
    }

    #[test]
    fn expires_on_the_tick_reaching_zero() {
        let mut entities = EntityManager::new();
        let id = spawn_fading(&mut entities, 2);
        entities.sync();

        run(&mut entities);
        assert!(entities.is_active(id));

        run(&mut entities);
        assert!(!entities.is_active(id));
        assert_eq!(shape(&entities, id).fill.a, 0);

        entities.sync();
        assert!(entities.get(id).is_none());
    }

    #[test]
    fn zero_lifespan_dies_on_first_tick() {
        let mut entities = EntityManager::new();
        let id = spawn_fading(&mut entities, 0);
        entities.sync();
        run(&mut entities);
        assert!(!entities.is_active(id));
    }

    #[test]
    fn entities_without_lifespan_are_untouched() {
        let mut entities = EntityManager::new();
        let id = entities.add_entity(Tag::Enemy);
        entities.sync();
        for _ in 0..100 {
            run(&mut entities);
        }
        assert!(entities.is_active(id));
    }

    #[test]
    fn remaining_never_exceeds_total() {
        let mut entities = EntityManager::new();
        let id = spawn_fading(&mut entities, 3);
        entities.sync();
        for _ in 0..3 {
            run(&mut entities);
            let life = *entities.get(id).unwrap().lifespan().unwrap();
            assert!(life.remaining() <= life.total());
        }
    }
}
