//! Entity record: identity, role tag, liveness, and optional components.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::{Collision, Input, Lifespan, Shape, Transform};

/// Unique, monotonically assigned entity identifier. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// Role of an entity, used by systems to query the entities they act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tag {
    Player,
    Enemy,
    /// Fragment spawned when a bullet destroys an enemy.
    SmallEnemy,
    Bullet,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Player => "player",
            Tag::Enemy => "enemy",
            Tag::SmallEnemy => "smallEnemy",
            Tag::Bullet => "bullet",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged record carrying at most one of each component kind.
///
/// `active` starts true and only ever goes false. Components can be attached
/// (or replaced) but never detached; the entity as a whole is deactivated
/// instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    tag: Tag,
    active: bool,
    transform: Option<Transform>,
    shape: Option<Shape>,
    collision: Option<Collision>,
    lifespan: Option<Lifespan>,
    input: Option<Input>,
}

impl Entity {
    pub fn new(id: EntityId, tag: Tag) -> Self {
        Self {
            id,
            tag,
            active: true,
            transform: None,
            shape: None,
            collision: None,
            lifespan: None,
            input: None,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the entity dead. It is purged at the next sync point.
    pub fn destroy(&mut self) {
        self.active = false;
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn transform_mut(&mut self) -> Option<&mut Transform> {
        self.transform.as_mut()
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = Some(transform);
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn shape_mut(&mut self) -> Option<&mut Shape> {
        self.shape.as_mut()
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = Some(shape);
    }

    pub fn collision(&self) -> Option<&Collision> {
        self.collision.as_ref()
    }

    pub fn set_collision(&mut self, collision: Collision) {
        self.collision = Some(collision);
    }

    pub fn lifespan(&self) -> Option<&Lifespan> {
        self.lifespan.as_ref()
    }

    pub fn lifespan_mut(&mut self) -> Option<&mut Lifespan> {
        self.lifespan.as_mut()
    }

    pub fn set_lifespan(&mut self, lifespan: Lifespan) {
        self.lifespan = Some(lifespan);
    }

    pub fn input(&self) -> Option<&Input> {
        self.input.as_ref()
    }

    pub fn input_mut(&mut self) -> Option<&mut Input> {
        self.input.as_mut()
    }

    pub fn set_input(&mut self, input: Input) {
        self.input = Some(input);
    }
}
