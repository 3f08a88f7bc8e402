//! Round controller: the core of the game.
//!
//! `RoundController` owns the hecs world of live targets, the round state,
//! both repeating timers and the HUD. It processes player commands, runs
//! all systems on a fixed tick, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gallery_core::commands::PlayerCommand;
use gallery_core::components::Target;
use gallery_core::config::RoundConfig;
use gallery_core::enums::{Category, EffectKind, GamePhase, TimerKind};
use gallery_core::error::ConfigResult;
use gallery_core::events::SceneEvent;
use gallery_core::state::GameStateSnapshot;
use gallery_core::types::{Point, SimTime};

use crate::hud::Hud;
use crate::round::RoundState;
use crate::schedule::RepeatingTimer;
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same round.
    pub seed: u64,
    pub round: RoundConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            round: RoundConfig::default(),
        }
    }
}

/// The round controller. Owns the ECS world and all round state.
pub struct RoundController {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: RoundConfig,
    rng: ChaCha8Rng,
    round: RoundState,
    hud: Hud,
    spawn_timer: RepeatingTimer,
    countdown_timer: RepeatingTimer,
    next_target_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SceneEvent>,
}

impl RoundController {
    /// Create a controller in the `Ready` phase. Fails on an invalid round config.
    pub fn new(config: SimConfig) -> ConfigResult<Self> {
        config.round.validate()?;
        let round_config = config.round;

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            round: RoundState::new(round_config.round_secs, round_config.ammo_capacity),
            hud: Hud::new(),
            spawn_timer: RepeatingTimer::new(
                TimerKind::Spawn,
                round_config.spawn_period_secs,
                round_config.spawn_tolerance_secs,
            ),
            countdown_timer: RepeatingTimer::new(
                TimerKind::Countdown,
                round_config.countdown_period_secs,
                round_config.countdown_tolerance_secs,
            ),
            config: round_config,
            next_target_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase != GamePhase::Ready {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.round,
            &self.hud,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current round state.
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn spawn_timer(&self) -> &RepeatingTimer {
        &self.spawn_timer
    }

    pub fn countdown_timer(&self) -> &RepeatingTimer {
        &self.countdown_timer
    }

    /// Number of live targets, fading ones included.
    pub fn live_target_count(&self) -> usize {
        let mut query = self.world.query::<&Target>();
        query.iter().count()
    }

    /// Get a read-only reference to the ECS world.
    #[cfg(test)]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a target with fixed attributes and endpoints (for tests).
    #[cfg(test)]
    pub fn spawn_test_target(
        &mut self,
        traits: systems::spawner::TargetTraits,
        from: Point,
        to: Point,
    ) -> u32 {
        let target_id = self.next_target_id;
        self.next_target_id += 1;
        systems::spawner::spawn_target_between(
            &mut self.world,
            target_id,
            traits,
            from,
            to,
            &mut self.events,
        );
        target_id
    }

    /// Overwrite ammo (for tests), keeping the HUD in sync.
    #[cfg(test)]
    pub fn set_ammo(&mut self, ammo: u32) {
        self.round.ammo = ammo;
        self.hud.sync(&self.round, &mut self.events);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRound => {
                if self.phase == GamePhase::Ready {
                    self.start();
                }
            }
            PlayerCommand::Touch { points } => {
                // Only the first touch of a multi-touch event counts.
                if let Some(&point) = points.first() {
                    self.on_tap(point);
                }
            }
        }
    }

    /// Reset round state, lay out the HUD and start both timers.
    fn start(&mut self) {
        self.round = RoundState::new(self.config.round_secs, self.config.ammo_capacity);
        self.hud
            .lay_out(&self.config.view_bounds, &self.round, &mut self.events);
        self.spawn_timer.start(self.time.tick);
        self.countdown_timer.start(self.time.tick);
        self.phase = GamePhase::Active;
        self.events.push(SceneEvent::RoundStarted {
            round_secs: self.round.time_remaining,
            ammo: self.round.ammo,
        });
        log::info!(
            "Round started: {}s, {} rounds, spawn every {} ticks",
            self.round.time_remaining,
            self.round.ammo,
            self.spawn_timer.period_ticks()
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.time.dt();

        // 1. Animations keep running after game over.
        systems::traversal::run(
            &mut self.world,
            dt,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        systems::effects::run(
            &mut self.world,
            dt,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        self.hud.advance(dt);

        // 2. Timers. Countdown first, so the tick that ends the round
        // also cancels a spawn due on the same tick.
        let now = self.time.tick;
        if self.countdown_timer.poll(now) {
            self.on_countdown();
        }
        if self.spawn_timer.poll(now) {
            self.on_spawn();
        }

        // 3. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// One second of the countdown.
    fn on_countdown(&mut self) {
        let ended = self.round.count_down();
        self.hud.sync(&self.round, &mut self.events);
        log::trace!("Countdown: {}s remaining", self.round.time_remaining);

        if ended {
            self.end_round();
        }
    }

    fn end_round(&mut self) {
        for timer in [&mut self.spawn_timer, &mut self.countdown_timer] {
            timer.cancel();
            self.events.push(SceneEvent::TimerCancelled { timer: timer.kind });
        }
        self.phase = GamePhase::GameOver;
        self.hud
            .show_game_over(&self.config.view_bounds, &mut self.events);
        self.events.push(SceneEvent::GameOver {
            final_score: self.round.score,
        });
        log::info!("Game over! Final score: {}", self.round.score);
    }

    /// Spawn one target with freshly rolled attributes.
    fn on_spawn(&mut self) {
        let traits = systems::spawner::roll_traits(&mut self.rng, &self.config);
        let target_id = self.next_target_id;
        self.next_target_id += 1;
        systems::spawner::spawn_target(
            &mut self.world,
            target_id,
            traits,
            &self.config.view_bounds,
            &mut self.events,
        );
        log::debug!(
            "Spawned target {} ({:?} {:?} {}) on {:?} lane for {:.2}s",
            target_id,
            traits.size_class,
            traits.category,
            traits.glyph,
            traits.lane,
            traits.traversal_secs
        );
    }

    /// Route a tap to the reload control or a shot.
    ///
    /// Reload is checked before the round-activity guard, so it still
    /// refills the magazine after game over.
    fn on_tap(&mut self, point: Point) {
        if self.hud.reload_hit(point) {
            self.round.reload();
            self.hud.sync(&self.round, &mut self.events);
            log::debug!("Reloaded to {}", self.round.ammo);
            return;
        }

        if self.phase != GamePhase::Active || !self.round.is_active() {
            return;
        }

        // The shot is spent whether or not it hits anything.
        if !self.round.try_fire() {
            log::debug!("Click: magazine empty");
            return;
        }
        self.hud.sync(&self.round, &mut self.events);

        let Some(entity) = systems::hit_test::topmost_target_at(&self.world, point) else {
            log::debug!("Missed at ({:.0}, {:.0})", point.x, point.y);
            return;
        };

        let (target_id, category, size_class) = match self.world.get::<&Target>(entity) {
            Ok(target) => (target.target_id, target.category, target.size_class),
            Err(_) => return,
        };
        let position = match self.world.get::<&Point>(entity) {
            Ok(pos) => *pos,
            Err(_) => return,
        };

        match category {
            Category::Friendly => {
                self.round.add_score(-self.config.friendly_penalty);
                systems::effects::spawn_effect(
                    &mut self.world,
                    EffectKind::FriendlyHit,
                    position,
                    &mut self.events,
                );
                self.hud.sync(&self.round, &mut self.events);
                self.hud.flash_score(&mut self.events);
                log::debug!("Friendly target {target_id} hit, score {}", self.round.score);
            }
            Category::Hostile => {
                self.round.add_score(size_class.score_multiplier());
                systems::effects::spawn_effect(
                    &mut self.world,
                    EffectKind::Explosion,
                    position,
                    &mut self.events,
                );
                systems::effects::start_fade(&mut self.world, entity, &mut self.events);
                self.hud.sync(&self.round, &mut self.events);
                log::debug!(
                    "Hostile target {target_id} ({size_class:?}) hit, score {}",
                    self.round.score
                );
            }
        }
    }
}
