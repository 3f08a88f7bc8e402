//! HUD presenter: label text, layout and color animations.
//!
//! Round state never formats its own text. After each mutation the
//! controller calls `Hud::sync`, which recomputes the dynamic labels and
//! emits a `LabelText` event for each one that changed.

use std::collections::BTreeMap;

use glam::Vec2;

use gallery_core::constants::*;
use gallery_core::enums::HudLabel;
use gallery_core::events::SceneEvent;
use gallery_core::state::LabelView;
use gallery_core::types::{Color, HitBox, Point, ViewBounds};

use crate::round::RoundState;

/// One step of a label color animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorStep {
    /// Blend linearly from the current color to `to`.
    Tween { to: Color, duration_secs: f64 },
    /// Keep the current color.
    Hold { duration_secs: f64 },
}

impl ColorStep {
    fn duration_secs(&self) -> f64 {
        match *self {
            ColorStep::Tween { duration_secs, .. } | ColorStep::Hold { duration_secs } => {
                duration_secs
            }
        }
    }
}

/// A running sequence of color steps.
#[derive(Debug, Clone)]
pub struct ColorAnimation {
    steps: Vec<ColorStep>,
    index: usize,
    elapsed_secs: f64,
    /// Color at the start of the current step.
    from: Color,
}

impl ColorAnimation {
    pub fn new(steps: Vec<ColorStep>, from: Color) -> Self {
        Self {
            steps,
            index: 0,
            elapsed_secs: 0.0,
            from,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.steps.len()
    }

    /// Advance by `dt` seconds and return the resulting color.
    pub fn advance(&mut self, current: Color, dt: f64) -> Color {
        let mut color = current;
        let mut remaining = dt;

        while let Some(step) = self.steps.get(self.index).copied() {
            let duration = step.duration_secs();
            let take = (duration - self.elapsed_secs).min(remaining).max(0.0);
            self.elapsed_secs += take;
            remaining -= take;

            if let ColorStep::Tween { to, .. } = step {
                color = if duration > 0.0 {
                    self.from.lerp(to, (self.elapsed_secs / duration) as f32)
                } else {
                    to
                };
            }

            if self.elapsed_secs + 1e-9 < duration {
                break;
            }
            if let ColorStep::Tween { to, .. } = step {
                color = to;
            }
            self.index += 1;
            self.elapsed_secs = 0.0;
            self.from = color;
        }

        color
    }
}

/// Score label flash for a friendly hit: red then white, repeated.
pub fn score_flash_steps() -> Vec<ColorStep> {
    let cycle = [
        ColorStep::Tween {
            to: Color::RED,
            duration_secs: FLASH_COLORIZE_SECS,
        },
        ColorStep::Hold {
            duration_secs: FLASH_HOLD_SECS,
        },
        ColorStep::Tween {
            to: Color::WHITE,
            duration_secs: FLASH_COLORIZE_SECS,
        },
    ];
    cycle.iter().copied().cycle().take(cycle.len() * FLASH_REPEATS).collect()
}

#[derive(Debug, Clone)]
pub struct LabelState {
    pub text: String,
    pub position: Point,
    pub font_size: f32,
    pub color: Color,
    pub animation: Option<ColorAnimation>,
}

impl LabelState {
    fn new(text: String, position: Point, font_size: f32) -> Self {
        Self {
            text,
            position,
            font_size,
            color: Color::WHITE,
            animation: None,
        }
    }
}

/// All HUD labels for the round. Empty until `lay_out` runs.
#[derive(Debug, Clone, Default)]
pub struct Hud {
    labels: BTreeMap<HudLabel, LabelState>,
    reload_control: Option<HitBox>,
}

pub fn score_text(score: i32) -> String {
    format!("Score: {score}")
}

pub fn ammo_text(ammo: u32) -> String {
    format!("Ammo: {ammo}")
}

pub fn countdown_text(time_remaining: u32) -> String {
    time_remaining.to_string()
}

pub fn friendly_legend_text() -> String {
    format!("Don't shoot: {}", FRIENDLY_GLYPHS.join(" "))
}

pub const RELOAD_TEXT: &str = "Reload";
pub const GAME_OVER_TEXT: &str = "Game over!";

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the round labels against the view edges.
    pub fn lay_out(&mut self, bounds: &ViewBounds, round: &RoundState, events: &mut Vec<SceneEvent>) {
        let top = bounds.max_y();
        let reload_origin = Vec2::new(bounds.min_x() + HUD_PADDING, bounds.min_y() + HUD_PADDING);

        let labels = [
            (
                HudLabel::Score,
                score_text(round.score),
                Vec2::new(bounds.min_x(), top - DEFAULT_FONT_SIZE - HUD_PADDING),
                DEFAULT_FONT_SIZE,
            ),
            (
                HudLabel::Reload,
                RELOAD_TEXT.to_string(),
                Vec2::new(reload_origin.x + RELOAD_CONTROL_WIDTH / 2.0, reload_origin.y),
                DEFAULT_FONT_SIZE,
            ),
            (
                HudLabel::Countdown,
                countdown_text(round.time_remaining),
                Vec2::new(bounds.mid_x(), top - COUNTDOWN_FONT_SIZE - HUD_PADDING),
                COUNTDOWN_FONT_SIZE,
            ),
            (
                HudLabel::Ammo,
                ammo_text(round.ammo),
                Vec2::new(
                    bounds.mid_x(),
                    top - COUNTDOWN_FONT_SIZE - DEFAULT_FONT_SIZE - 15.0,
                ),
                DEFAULT_FONT_SIZE,
            ),
            (
                HudLabel::FriendlyLegend,
                friendly_legend_text(),
                Vec2::new(
                    bounds.max_x() - FRIENDLY_LEGEND_WIDTH / 2.0 - HUD_PADDING,
                    top - DEFAULT_FONT_SIZE / 2.0 - 15.0,
                ),
                DEFAULT_FONT_SIZE,
            ),
        ];

        for (label, text, position, font_size) in labels {
            events.push(SceneEvent::LabelText {
                label,
                text: text.clone(),
            });
            self.labels
                .insert(label, LabelState::new(text, position, font_size));
        }

        self.reload_control = Some(HitBox::from_corner(
            reload_origin,
            RELOAD_CONTROL_WIDTH,
            RELOAD_CONTROL_HEIGHT,
        ));
    }

    /// Bring label text in line with the round state.
    pub fn sync(&mut self, round: &RoundState, events: &mut Vec<SceneEvent>) {
        self.set_text(HudLabel::Score, score_text(round.score), events);
        self.set_text(
            HudLabel::Countdown,
            countdown_text(round.time_remaining),
            events,
        );
        if self.set_text(HudLabel::Ammo, ammo_text(round.ammo), events) {
            let color = if round.ammo == 0 {
                Color::RED
            } else {
                Color::WHITE
            };
            self.animate(
                HudLabel::Ammo,
                vec![ColorStep::Tween {
                    to: color,
                    duration_secs: AMMO_RECOLOR_SECS,
                }],
            );
            events.push(SceneEvent::LabelRecolor {
                label: HudLabel::Ammo,
                color,
                duration_secs: AMMO_RECOLOR_SECS,
            });
        }
    }

    /// Restart the friendly-hit flash on the score label.
    pub fn flash_score(&mut self, events: &mut Vec<SceneEvent>) {
        if self.animate(HudLabel::Score, score_flash_steps()) {
            events.push(SceneEvent::ScoreFlash {
                repeats: FLASH_REPEATS,
            });
        }
    }

    /// Add the centered game-over message.
    pub fn show_game_over(&mut self, bounds: &ViewBounds, events: &mut Vec<SceneEvent>) {
        self.labels.insert(
            HudLabel::GameOver,
            LabelState::new(
                GAME_OVER_TEXT.to_string(),
                bounds.center(),
                GAME_OVER_FONT_SIZE,
            ),
        );
        events.push(SceneEvent::LabelText {
            label: HudLabel::GameOver,
            text: GAME_OVER_TEXT.to_string(),
        });
    }

    /// True if `point` lands on the reload control.
    pub fn reload_hit(&self, point: Point) -> bool {
        self.reload_control
            .is_some_and(|control| control.contains(point))
    }

    /// Step every running color animation.
    pub fn advance(&mut self, dt: f64) {
        for state in self.labels.values_mut() {
            if let Some(animation) = state.animation.as_mut() {
                state.color = animation.advance(state.color, dt);
                if animation.is_finished() {
                    state.animation = None;
                }
            }
        }
    }

    pub fn label(&self, label: HudLabel) -> Option<&LabelState> {
        self.labels.get(&label)
    }

    pub fn views(&self) -> Vec<LabelView> {
        self.labels
            .iter()
            .map(|(&label, state)| LabelView {
                label,
                text: state.text.clone(),
                position: state.position,
                font_size: state.font_size,
                color: state.color,
            })
            .collect()
    }

    /// Returns true if the text changed.
    fn set_text(&mut self, label: HudLabel, text: String, events: &mut Vec<SceneEvent>) -> bool {
        let Some(state) = self.labels.get_mut(&label) else {
            return false;
        };
        if state.text == text {
            return false;
        }
        state.text = text.clone();
        events.push(SceneEvent::LabelText { label, text });
        true
    }

    /// Replace whatever animation the label is running.
    fn animate(&mut self, label: HudLabel, steps: Vec<ColorStep>) -> bool {
        let Some(state) = self.labels.get_mut(&label) else {
            return false;
        };
        state.animation = Some(ColorAnimation::new(steps, state.color));
        true
    }
}
