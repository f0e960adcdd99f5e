//! Frame snapshot: the complete drawable state handed to the renderer each frame.

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, Tag};
use crate::types::{Rgba, Vec2};

/// Run state of the frame loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Systems run every frame.
    #[default]
    Active,
    /// Only sync, input and snapshot run.
    Paused,
    /// A close signal arrived; the loop stops before the next frame.
    Closed,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Simulated frames so far (does not advance while paused).
    pub frame: u64,
    pub score: u32,
    pub phase: GamePhase,
    /// Active entities in master-list order.
    pub entities: Vec<EntityView>,
}

/// A single drawable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub tag: Tag,
    pub position: Vec2,
    /// Rotation in degrees.
    pub angle: f32,
    pub radius: f32,
    pub vertex_count: u32,
    /// Fill colour with lifespan fade applied.
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_thickness: f32,
}

impl FrameSnapshot {
    /// Number of entities carrying `tag`.
    pub fn count(&self, tag: Tag) -> usize {
        self.entities.iter().filter(|e| e.tag == tag).count()
    }
}
