//! Input-read phase: applies queued platform events to the game.
//!
//! Directional keys write the player's Input flags; the player input system
//! turns them into velocity on the next simulated frame. Pause toggles
//! between active and paused, a left click fires a bullet (not while paused)
//! and a close request ends the run. Events after a close are dropped.

use polyblast_core::commands::{InputEvent, Key, MouseButton};
use polyblast_core::config::BulletConfig;
use polyblast_core::entity::EntityId;
use polyblast_core::state::GamePhase;

use crate::entity_manager::EntityManager;
use crate::score::ScoreState;
use crate::world_setup;

pub fn run(
    entities: &mut EntityManager,
    events: impl IntoIterator<Item = InputEvent>,
    player: EntityId,
    bullet: &BulletConfig,
    phase: &mut GamePhase,
    score: &mut ScoreState,
) {
    for event in events {
        if *phase == GamePhase::Closed {
            break;
        }
        match event {
            InputEvent::KeyPressed { key: Key::Pause } => {
                *phase = match *phase {
                    GamePhase::Active => GamePhase::Paused,
                    _ => GamePhase::Active,
                };
                log::info!("game {}", if *phase == GamePhase::Paused { "paused" } else { "resumed" });
            }
            InputEvent::KeyReleased { key: Key::Pause } => {}
            InputEvent::KeyPressed { key } => set_direction(entities, player, key, true),
            InputEvent::KeyReleased { key } => set_direction(entities, player, key, false),
            InputEvent::MouseClicked { button, target } => {
                if *phase == GamePhase::Paused {
                    continue;
                }
                match button {
                    MouseButton::Left => {
                        let Some(origin) = entities
                            .get(player)
                            .filter(|e| e.is_active())
                            .and_then(|e| e.transform())
                            .map(|t| t.pos)
                        else {
                            continue;
                        };
                        world_setup::spawn_bullet(entities, bullet, origin, target);
                        score.bullets_fired += 1;
                    }
                    MouseButton::Right => {
                        log::debug!("special weapon not available, ignoring right click");
                    }
                }
            }
            InputEvent::Close => {
                *phase = GamePhase::Closed;
                log::info!("close requested");
            }
        }
    }
}

fn set_direction(entities: &mut EntityManager, player: EntityId, key: Key, held: bool) {
    let Some(input) = entities.get_mut(player).and_then(|e| e.input_mut()) else {
        return;
    };
    match key {
        Key::Up => input.up = held,
        Key::Down => input.down = held,
        Key::Left => input.left = held,
        Key::Right => input.right = held,
        Key::Pause => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyblast_core::components::Input;
    use polyblast_core::config::GameConfig;
    use polyblast_core::entity::Tag;
    use polyblast_core::types::Vec2;

    struct Fixture {
        entities: EntityManager,
        config: GameConfig,
        player: EntityId,
        phase: GamePhase,
        score: ScoreState,
    }

    impl Fixture {
        fn new() -> Self {
            let config = GameConfig::default();
            let mut entities = EntityManager::new();
            let player = world_setup::setup_world(&mut entities, &config);
            entities.sync();
            Self {
                entities,
                config,
                player,
                phase: GamePhase::Active,
                score: ScoreState::default(),
            }
        }

        fn apply(&mut self, events: impl IntoIterator<Item = InputEvent>) {
            run(
                &mut self.entities,
                events,
                self.player,
                &self.config.bullet,
                &mut self.phase,
                &mut self.score,
            );
        }

        fn input(&self) -> Input {
            *self.entities.get(self.player).unwrap().input().unwrap()
        }
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::KeyPressed { key }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::KeyReleased { key }
    }

    fn click(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::MouseClicked {
            button,
            target: Vec2::new(x, y),
        }
    }

    #[test]
    fn direction_keys_set_and_clear_flags() {
        let mut f = Fixture::new();
        f.apply([press(Key::Up), press(Key::Left)]);
        assert_eq!(
            f.input(),
            Input {
                up: true,
                left: true,
                ..Input::default()
            }
        );

        f.apply([release(Key::Up), press(Key::Down), press(Key::Right)]);
        assert_eq!(
            f.input(),
            Input {
                up: false,
                down: true,
                left: true,
                right: true,
            }
        );
    }

    #[test]
    fn pause_press_toggles() {
        let mut f = Fixture::new();
        f.apply([press(Key::Pause), release(Key::Pause)]);
        assert_eq!(f.phase, GamePhase::Paused);
        f.apply([press(Key::Pause), release(Key::Pause)]);
        assert_eq!(f.phase, GamePhase::Active);
    }

    #[test]
    fn keys_still_update_while_paused() {
        let mut f = Fixture::new();
        f.apply([press(Key::Pause), press(Key::Right)]);
        assert!(f.input().right);
    }

    #[test]
    fn left_click_fires_from_player_toward_target() {
        let mut f = Fixture::new();
        let center = f.config.window.center();
        f.apply([click(MouseButton::Left, center.x + 100.0, center.y)]);
        assert_eq!(f.score.bullets_fired, 1);
        assert_eq!(f.entities.pending_count(), 1);

        f.entities.sync();
        let bullet = f.entities.entities_by_tag(Tag::Bullet)[0];
        let t = *f.entities.get(bullet).unwrap().transform().unwrap();
        assert_eq!(t.pos, center);
        assert_eq!(t.velocity, Vec2::new(f.config.bullet.speed, 0.0));
    }

    #[test]
    fn clicks_ignored_while_paused() {
        let mut f = Fixture::new();
        f.apply([press(Key::Pause), click(MouseButton::Left, 0.0, 0.0)]);
        assert_eq!(f.entities.pending_count(), 0);
        assert_eq!(f.score.bullets_fired, 0);
    }

    #[test]
    fn right_click_does_nothing() {
        let mut f = Fixture::new();
        f.apply([click(MouseButton::Right, 10.0, 10.0)]);
        assert_eq!(f.entities.pending_count(), 0);
    }

    #[test]
    fn dead_player_cannot_fire() {
        let mut f = Fixture::new();
        f.entities.destroy(f.player);
        f.apply([click(MouseButton::Left, 10.0, 10.0)]);
        assert_eq!(f.entities.pending_count(), 0);
    }

    #[test]
    fn close_ends_the_run_and_drops_later_events() {
        let mut f = Fixture::new();
        f.apply([InputEvent::Close, press(Key::Up), press(Key::Pause)]);
        assert_eq!(f.phase, GamePhase::Closed);
        assert!(!f.input().up);
    }
}
