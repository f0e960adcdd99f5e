//! Scripted pilot: an `InputSource` that plays the game from snapshots.
//!
//! Every `fire_every` polls it clicks at the enemy nearest to the player.
//! When a threat gets within `DODGE_DISTANCE` it holds the keys that move
//! away from it, and releases them once clear. A respawned player starts
//! with nothing held, so the pilot forgets its keys when the player changes.
//! After `close_after` polls it sends a close request.

use polyblast_core::commands::{InputEvent, Key, MouseButton};
use polyblast_core::entity::{EntityId, Tag};
use polyblast_core::state::{EntityView, FrameSnapshot};
use polyblast_sim::InputSource;

/// Threats closer than this make the pilot move away.
pub const DODGE_DISTANCE: f32 = 150.0;

#[derive(Debug, Clone)]
pub struct ScriptedPilot {
    fire_every: u64,
    close_after: u64,
    polled: u64,
    /// Player the held keys were pressed for.
    player: Option<EntityId>,
    /// Direction keys currently held down.
    held: Vec<Key>,
}

impl ScriptedPilot {
    pub fn new(fire_every: u64, close_after: u64) -> Self {
        Self {
            fire_every: fire_every.max(1),
            close_after,
            polled: 0,
            player: None,
            held: Vec::new(),
        }
    }

    /// Emit press/release events so exactly `wanted` ends up held.
    fn steer(&mut self, wanted: &[Key], events: &mut Vec<InputEvent>) {
        for &key in &self.held {
            if !wanted.contains(&key) {
                events.push(InputEvent::KeyReleased { key });
            }
        }
        for &key in wanted {
            if !self.held.contains(&key) {
                events.push(InputEvent::KeyPressed { key });
            }
        }
        self.held = wanted.to_vec();
    }
}

impl InputSource for ScriptedPilot {
    fn poll(&mut self, last: &FrameSnapshot) -> Vec<InputEvent> {
        self.polled += 1;
        if self.polled > self.close_after {
            return vec![InputEvent::Close];
        }

        let mut events = Vec::new();
        let Some(player) = last.entities.iter().find(|v| v.tag == Tag::Player) else {
            self.steer(&[], &mut events);
            return events;
        };
        if self.player != Some(player.id) {
            self.player = Some(player.id);
            self.held.clear();
        }

        let mut wanted = Vec::new();
        if let Some(threat) = nearest_threat(last, player) {
            if self.polled % self.fire_every == 0 {
                events.push(InputEvent::MouseClicked {
                    button: MouseButton::Left,
                    target: threat.position,
                });
            }
            if threat.position.dist(&player.position) < DODGE_DISTANCE {
                let away = player.position - threat.position;
                wanted.push(if away.x < 0.0 { Key::Left } else { Key::Right });
                wanted.push(if away.y < 0.0 { Key::Up } else { Key::Down });
            }
        }
        self.steer(&wanted, &mut events);
        events
    }
}

/// The enemy or fragment closest to the player.
fn nearest_threat<'a>(snapshot: &'a FrameSnapshot, player: &EntityView) -> Option<&'a EntityView> {
    snapshot
        .entities
        .iter()
        .filter(|v| matches!(v.tag, Tag::Enemy | Tag::SmallEnemy))
        .min_by(|a, b| {
            let da = a.position.dist(&player.position);
            let db = b.position.dist(&player.position);
            da.total_cmp(&db)
        })
}
