//! Game orchestrator.
//!
//! `Game` owns the entity store, configuration, RNG, score and frame counter.
//! Each call to `frame` runs one pass of the fixed system order and returns
//! the snapshot for the renderer. Completely headless and deterministic for a
//! given seed and input sequence.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use polyblast_core::commands::InputEvent;
use polyblast_core::config::GameConfig;
use polyblast_core::constants::DEFAULT_SEED;
use polyblast_core::entity::EntityId;
use polyblast_core::state::{FrameSnapshot, GamePhase};

use crate::entity_manager::EntityManager;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::enemy_spawner::EnemySpawner;
use crate::world_setup;

/// Runtime settings that are not part of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// RNG seed for determinism. Same seed and inputs = same game.
    pub seed: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

/// Supplies input events to the run loop.
///
/// Polled once per frame with the previous frame's snapshot, so scripted
/// sources can react to what is on screen.
pub trait InputSource {
    fn poll(&mut self, last: &FrameSnapshot) -> Vec<InputEvent>;
}

impl<F> InputSource for F
where
    F: FnMut(&FrameSnapshot) -> Vec<InputEvent>,
{
    fn poll(&mut self, last: &FrameSnapshot) -> Vec<InputEvent> {
        self(last)
    }
}

pub struct Game {
    entities: EntityManager,
    config: GameConfig,
    rng: ChaCha8Rng,
    /// Current player. Replaced on every respawn.
    player: EntityId,
    phase: GamePhase,
    current_frame: u64,
    spawner: EnemySpawner,
    score: ScoreState,
    input_queue: VecDeque<InputEvent>,
}

impl Game {
    /// Set up a new game: the player is spawned and becomes visible at the
    /// first frame's sync.
    pub fn new(config: GameConfig, settings: GameSettings) -> Self {
        let mut entities = EntityManager::new();
        let player = world_setup::setup_world(&mut entities, &config);
        log::info!(
            "new game {}x{} seed {}",
            config.window.width,
            config.window.height,
            settings.seed
        );
        Self {
            entities,
            config,
            rng: ChaCha8Rng::seed_from_u64(settings.seed),
            player,
            phase: GamePhase::default(),
            current_frame: 0,
            spawner: EnemySpawner::default(),
            score: ScoreState::default(),
            input_queue: VecDeque::new(),
        }
    }

    /// Queue an input event for the next frame's input-read phase.
    pub fn queue_input(&mut self, event: InputEvent) {
        self.input_queue.push_back(event);
    }

    pub fn queue_inputs(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.input_queue.extend(events);
    }

    /// Run one frame and return what the renderer should draw.
    ///
    /// Order: sync, then (unless paused) spawn, player input, movement,
    /// lifespan and collision, then the queued input events, then the
    /// snapshot. The frame counter only advances on simulated frames.
    pub fn frame(&mut self) -> FrameSnapshot {
        self.entities.sync();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.current_frame += 1;
        }

        systems::input::run(
            &mut self.entities,
            self.input_queue.drain(..),
            self.player,
            &self.config.bullet,
            &mut self.phase,
            &mut self.score,
        );

        self.snapshot()
    }

    fn run_systems(&mut self) {
        systems::enemy_spawner::run(&mut self.entities, &mut self.rng, &self.config, &mut self.spawner);
        systems::player_input::run(&mut self.entities, self.player, &self.config.window, &self.config.player);
        systems::movement::run(&mut self.entities, self.player, self.config.player.speed);
        systems::lifespan::run(&mut self.entities);
        systems::collision::run(&mut self.entities, &self.config, &mut self.player, &mut self.score);
    }

    /// Drive frames until a close signal arrives.
    ///
    /// Each iteration checks the running flag, polls `source` with the last
    /// snapshot, runs a frame and hands the result to `render`. Returns the
    /// final snapshot.
    pub fn run<S, R>(&mut self, source: &mut S, mut render: R) -> FrameSnapshot
    where
        S: InputSource + ?Sized,
        R: FnMut(&FrameSnapshot),
    {
        let mut last = self.snapshot();
        while self.is_running() {
            let events = source.poll(&last);
            self.queue_inputs(events);
            last = self.frame();
            render(&last);
        }
        log::info!("game over after {} frames, score {}", self.current_frame, self.score.score);
        last
    }

    /// Snapshot of the current state without advancing anything.
    pub fn snapshot(&self) -> FrameSnapshot {
        systems::snapshot::build_snapshot(&self.entities, self.current_frame, &self.score, self.phase)
    }

    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }

    /// The current player handle.
    pub fn player(&self) -> EntityId {
        self.player
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Simulated frames so far.
    pub fn current_frame(&self) -> u64 {
        self.current_frame
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.phase != GamePhase::Closed
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Direct store access for test setups.
    #[cfg(test)]
    pub fn entities_mut(&mut self) -> &mut EntityManager {
        &mut self.entities
    }
}
