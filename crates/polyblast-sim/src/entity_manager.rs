//! Entity store with deferred insertion and removal.
//!
//! Entities are owned by the manager and referred to by `EntityId`. New
//! entities are buffered and only become visible to `all_entities` /
//! `entities_by_tag` at the next `sync`; destroyed entities stay visible
//! (flagged inactive) until the `sync` after that. Systems can therefore
//! iterate a snapshot of ids while spawning and destroying freely.

use std::collections::{BTreeMap, HashMap};

use polyblast_core::entity::{Entity, EntityId, Tag};

/// Owns every entity and the tag index over them.
#[derive(Debug, Default)]
pub struct EntityManager {
    /// Backing storage for live and pending entities.
    store: HashMap<EntityId, Entity>,
    /// Synced entities in insertion order.
    entities: Vec<EntityId>,
    /// Created since the last sync.
    pending: Vec<EntityId>,
    by_tag: BTreeMap<Tag, Vec<EntityId>>,
    next_id: u64,
}

impl EntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity with the next sequential id.
    ///
    /// The entity is immediately reachable through `get_mut` so components
    /// can be attached, but stays out of the query lists until `sync`.
    pub fn add_entity(&mut self, tag: Tag) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.store.insert(id, Entity::new(id, tag));
        self.pending.push(id);
        id
    }

    /// The once-per-frame sync point: promote pending entities, then purge
    /// inactive ones from the master list and every tag bucket.
    pub fn sync(&mut self) {
        for id in self.pending.drain(..) {
            let Some(entity) = self.store.get(&id) else {
                continue;
            };
            self.entities.push(id);
            self.by_tag.entry(entity.tag()).or_default().push(id);
        }

        let store = &mut self.store;
        self.entities.retain(|id| {
            let alive = store.get(id).is_some_and(Entity::is_active);
            if !alive {
                store.remove(id);
            }
            alive
        });
        for bucket in self.by_tag.values_mut() {
            bucket.retain(|id| store.contains_key(id));
        }
    }

    /// All synced entities, in creation order.
    pub fn all_entities(&self) -> &[EntityId] {
        &self.entities
    }

    /// Synced entities carrying `tag`, in creation order. Empty if none.
    pub fn entities_by_tag(&self, tag: Tag) -> &[EntityId] {
        self.by_tag.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up an entity, including pending and not-yet-purged ones.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.store.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.store.get_mut(&id)
    }

    /// True if the entity exists and has not been destroyed.
    pub fn is_active(&self, id: EntityId) -> bool {
        self.get(id).is_some_and(Entity::is_active)
    }

    /// Mark an entity inactive. No-op for unknown ids.
    pub fn destroy(&mut self, id: EntityId) {
        if let Some(entity) = self.get_mut(id) {
            entity.destroy();
        }
    }

    /// Number of entities waiting for the next sync.
    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Iterate synced entities in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter_map(|id| self.store.get(id))
    }
}
