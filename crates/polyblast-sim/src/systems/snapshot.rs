//! Snapshot system: builds the renderer's view of the current frame.
//!
//! Read-only. Lists active, synced entities that have both a transform and a
//! shape, in master-list order.

use polyblast_core::state::{EntityView, FrameSnapshot, GamePhase};

use crate::entity_manager::EntityManager;
use crate::score::ScoreState;

pub fn build_snapshot(entities: &EntityManager, frame: u64, score: &ScoreState, phase: GamePhase) -> FrameSnapshot {
    let views = entities
        .iter()
        .filter(|e| e.is_active())
        .filter_map(|e| {
            let transform = e.transform()?;
            let shape = e.shape()?;
            Some(EntityView {
                id: e.id(),
                tag: e.tag(),
                position: transform.pos,
                angle: transform.angle,
                radius: shape.radius,
                vertex_count: shape.vertex_count,
                fill: shape.fill,
                outline: shape.outline,
                outline_thickness: shape.outline_thickness,
            })
        })
        .collect();

    FrameSnapshot {
        frame,
        score: score.score,
        phase,
        entities: views,
    }
}
