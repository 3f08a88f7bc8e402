//! Scripted shooter that plays a round from snapshots alone.
//!
//! It sees exactly what a renderer sees: target views, label views and
//! scene events. That keeps it honest about hit testing and reloads.

use serde::{Deserialize, Serialize};

use gallery_core::commands::PlayerCommand;
use gallery_core::constants::RELOAD_CONTROL_HEIGHT;
use gallery_core::enums::*;
use gallery_core::events::SceneEvent;
use gallery_core::state::{GameStateSnapshot, TargetView};
use gallery_core::types::{Point, ViewBounds};
use gallery_sim::RoundController;

/// Ticks the shooter waits between actions by default (0.25 s).
pub const DEFAULT_REACTION_TICKS: u32 = 15;

/// Taps the best visible hostile target, reloading when empty.
#[derive(Debug, Clone)]
pub struct AutoShooter {
    reaction_ticks: u32,
    cooldown: u32,
    bounds: ViewBounds,
}

impl AutoShooter {
    /// `bounds` should be the round's view bounds; targets outside them
    /// are ignored.
    pub fn new(reaction_ticks: u32, bounds: ViewBounds) -> Self {
        Self {
            reaction_ticks,
            cooldown: 0,
            bounds,
        }
    }

    /// Decide what to do after seeing `snapshot`. At most one command per
    /// reaction window.
    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        if snapshot.phase == GamePhase::Ready {
            return Some(PlayerCommand::StartRound);
        }
        if !snapshot.round.active {
            return None;
        }
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }

        let point = if snapshot.round.ammo == 0 {
            reload_point(snapshot)?
        } else {
            self.pick_target(&snapshot.targets)?.position
        };
        self.cooldown = self.reaction_ticks;
        Some(PlayerCommand::tap(point))
    }

    /// Highest-value hostile target that is on screen and not fading.
    fn pick_target<'a>(&self, targets: &'a [TargetView]) -> Option<&'a TargetView> {
        targets
            .iter()
            .filter(|t| t.category == Category::Hostile && t.alpha >= 1.0)
            .filter(|t| self.on_screen(t.position))
            .max_by_key(|t| (t.size_class.score_multiplier(), t.target_id))
    }

    fn on_screen(&self, position: Point) -> bool {
        position.x >= self.bounds.min_x()
            && position.x <= self.bounds.max_x()
            && position.y >= self.bounds.min_y()
            && position.y <= self.bounds.max_y()
    }
}

impl Default for AutoShooter {
    fn default() -> Self {
        Self::new(DEFAULT_REACTION_TICKS, ViewBounds::default())
    }
}

/// Center of the reload control, derived from its label anchor.
fn reload_point(snapshot: &GameStateSnapshot) -> Option<Point> {
    snapshot
        .labels
        .iter()
        .find(|l| l.label == HudLabel::Reload)
        .map(|l| l.position + Point::new(0.0, RELOAD_CONTROL_HEIGHT / 2.0))
}

/// Outcome of one played round, tallied from scene events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub seed: u64,
    pub final_score: i32,
    pub shots: u32,
    pub reloads: u32,
    pub hostile_hits: u32,
    pub friendly_hits: u32,
    pub targets_spawned: u32,
    pub ticks: u64,
}

impl RoundSummary {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Fold one snapshot's events into the tally.
    pub fn observe(&mut self, snapshot: &GameStateSnapshot) {
        self.ticks = snapshot.time.tick;
        for event in &snapshot.events {
            match event {
                SceneEvent::TargetSpawned { .. } => self.targets_spawned += 1,
                SceneEvent::EffectSpawned { kind, .. } => match kind {
                    EffectKind::Explosion => self.hostile_hits += 1,
                    EffectKind::FriendlyHit => self.friendly_hits += 1,
                },
                SceneEvent::GameOver { final_score } => self.final_score = *final_score,
                _ => {}
            }
        }
    }
}

/// Play one round to completion without wall-clock pacing.
///
/// Commands are applied at the start of the following tick, before any
/// system runs, so the ammo seen in a snapshot is the ammo the tap meets.
pub fn play_round(engine: &mut RoundController, shooter: &mut AutoShooter, seed: u64) -> RoundSummary {
    let mut summary = RoundSummary::new(seed);

    loop {
        let snapshot = engine.tick();
        summary.observe(&snapshot);
        if snapshot.phase == GamePhase::GameOver {
            break;
        }

        if let Some(command) = shooter.decide(&snapshot) {
            if let PlayerCommand::Touch { .. } = command {
                if snapshot.round.ammo == 0 {
                    summary.reloads += 1;
                } else {
                    summary.shots += 1;
                }
            }
            engine.queue_command(command);
        }
    }

    log::info!(
        "Round finished: score {} after {} shots ({} reloads)",
        summary.final_score,
        summary.shots,
        summary.reloads
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::state::{LabelView, RoundView};
    use gallery_core::types::Color;
    use gallery_sim::SimConfig;

    fn engine(seed: u64) -> RoundController {
        RoundController::new(SimConfig {
            seed,
            ..Default::default()
        })
        .unwrap()
    }

    fn active_snapshot(ammo: u32, targets: Vec<TargetView>) -> GameStateSnapshot {
        GameStateSnapshot {
            phase: GamePhase::Active,
            round: RoundView {
                score: 0,
                ammo,
                time_remaining: 30,
                active: true,
            },
            targets,
            labels: vec![LabelView {
                label: HudLabel::Reload,
                text: "Reload".into(),
                position: Point::new(-447.0, -374.0),
                font_size: 28.0,
                color: Color::WHITE,
            }],
            ..Default::default()
        }
    }

    fn target(id: u32, category: Category, size_class: SizeClass, x: f32, alpha: f32) -> TargetView {
        TargetView {
            target_id: id,
            glyph: "🎯".into(),
            category,
            size_class,
            lane: Lane::Middle,
            position: Point::new(x, 0.0),
            scale: size_class.scale(),
            font_size: 80.0 * size_class.scale(),
            alpha,
        }
    }

    fn tapped_point(command: Option<PlayerCommand>) -> Point {
        match command {
            Some(PlayerCommand::Touch { points }) => points[0],
            other => panic!("expected a tap, got {:?}", other),
        }
    }

    #[test]
    fn test_starts_round_when_ready() {
        let mut shooter = AutoShooter::default();
        let snapshot = GameStateSnapshot::default();
        assert!(matches!(
            shooter.decide(&snapshot),
            Some(PlayerCommand::StartRound)
        ));
    }

    #[test]
    fn test_prefers_small_hostile_targets() {
        let mut shooter = AutoShooter::new(0, ViewBounds::default());
        let snapshot = active_snapshot(
            6,
            vec![
                target(1, Category::Hostile, SizeClass::Big, -100.0, 1.0),
                target(2, Category::Hostile, SizeClass::Mini, 100.0, 1.0),
                target(3, Category::Friendly, SizeClass::Mini, 200.0, 1.0),
            ],
        );
        assert_eq!(tapped_point(shooter.decide(&snapshot)), Point::new(100.0, 0.0));
    }

    #[test]
    fn test_ignores_fading_and_offscreen_targets() {
        let mut shooter = AutoShooter::new(0, ViewBounds::default());
        let snapshot = active_snapshot(
            6,
            vec![
                target(1, Category::Hostile, SizeClass::Mini, 0.0, 0.5),
                target(2, Category::Hostile, SizeClass::Mini, 700.0, 1.0),
                target(3, Category::Friendly, SizeClass::Normal, 50.0, 1.0),
            ],
        );
        assert!(shooter.decide(&snapshot).is_none());
    }

    #[test]
    fn test_on_screen_follows_configured_bounds() {
        let wide = ViewBounds::centered(1600.0, 768.0);
        let snapshot = active_snapshot(
            6,
            vec![target(1, Category::Hostile, SizeClass::Mini, 700.0, 1.0)],
        );

        let mut shooter = AutoShooter::new(0, wide);
        assert_eq!(tapped_point(shooter.decide(&snapshot)), Point::new(700.0, 0.0));

        let mut narrow = AutoShooter::new(0, ViewBounds::centered(800.0, 600.0));
        let snapshot = active_snapshot(
            6,
            vec![target(1, Category::Hostile, SizeClass::Mini, 450.0, 1.0)],
        );
        assert!(narrow.decide(&snapshot).is_none());
    }

    #[test]
    fn test_play_round_with_small_magazine() {
        let round = gallery_core::config::RoundConfig {
            ammo_capacity: 2,
            ..Default::default()
        };
        let mut engine = RoundController::new(SimConfig { seed: 5, round }).unwrap();
        let bounds = engine.config().view_bounds;
        let summary = play_round(&mut engine, &mut AutoShooter::new(5, bounds), 5);

        assert!(summary.reloads > 0);
        assert_eq!(2 + summary.reloads * 2 - summary.shots, engine.round().ammo);
    }

    #[test]
    fn test_reloads_when_empty() {
        let mut shooter = AutoShooter::new(0, ViewBounds::default());
        let snapshot = active_snapshot(
            0,
            vec![target(1, Category::Hostile, SizeClass::Mini, 0.0, 1.0)],
        );
        let point = tapped_point(shooter.decide(&snapshot));
        assert_eq!(point, Point::new(-447.0, -374.0 + RELOAD_CONTROL_HEIGHT / 2.0));
    }

    #[test]
    fn test_waits_out_reaction_window() {
        let mut shooter = AutoShooter::new(2, ViewBounds::default());
        let snapshot = active_snapshot(
            6,
            vec![target(1, Category::Hostile, SizeClass::Normal, 0.0, 1.0)],
        );
        assert!(shooter.decide(&snapshot).is_some());
        assert!(shooter.decide(&snapshot).is_none());
        assert!(shooter.decide(&snapshot).is_none());
        assert!(shooter.decide(&snapshot).is_some());
    }

    #[test]
    fn test_idle_after_round_ends() {
        let mut shooter = AutoShooter::new(0, ViewBounds::default());
        let mut snapshot = active_snapshot(
            6,
            vec![target(1, Category::Hostile, SizeClass::Normal, 0.0, 1.0)],
        );
        snapshot.phase = GamePhase::GameOver;
        snapshot.round.active = false;
        assert!(shooter.decide(&snapshot).is_none());
    }

    #[test]
    fn test_reload_point_lands_on_reload_control() {
        let mut engine = engine(3);
        engine.queue_command(PlayerCommand::StartRound);
        let snapshot = engine.tick();
        let point = reload_point(&snapshot).unwrap();
        assert!(engine.hud().reload_hit(point));
    }

    #[test]
    fn test_play_round_scores_and_finishes() {
        let mut engine = engine(7);
        let mut shooter = AutoShooter::default();
        let summary = play_round(&mut engine, &mut shooter, 7);

        assert_eq!(engine.phase(), GamePhase::GameOver);
        assert_eq!(summary.seed, 7);
        assert_eq!(summary.targets_spawned, 74);
        assert_eq!(summary.final_score, engine.round().score);
        assert!(summary.hostile_hits > 0);
        assert!(summary.shots >= summary.hostile_hits + summary.friendly_hits);
        // Reloads only happen on an empty magazine, so each one adds a full magazine.
        let capacity = engine.config().ammo_capacity;
        assert_eq!(
            capacity + summary.reloads * capacity - summary.shots,
            engine.round().ammo
        );
    }

    #[test]
    fn test_play_round_is_deterministic() {
        let first = play_round(&mut engine(11), &mut AutoShooter::default(), 11);
        let second = play_round(&mut engine(11), &mut AutoShooter::default(), 11);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = RoundSummary {
            seed: 1,
            final_score: 12,
            shots: 9,
            reloads: 1,
            hostile_hits: 5,
            friendly_hits: 0,
            targets_spawned: 74,
            ticks: 3601,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let back: RoundSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
