//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{TICK_RATE, VIEW_HEIGHT, VIEW_WIDTH};

/// A point in scene coordinates (origin at the view center, y up).
pub type Point = Vec2;

/// The visible play field in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub min: Point,
    pub max: Point,
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self::centered(VIEW_WIDTH, VIEW_HEIGHT)
    }
}

impl ViewBounds {
    /// Bounds of a `width` x `height` view centered on the origin.
    pub fn centered(width: f32, height: f32) -> Self {
        let half = Vec2::new(width / 2.0, height / 2.0);
        Self {
            min: -half,
            max: half,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.min.x
    }

    pub fn max_x(&self) -> f32 {
        self.max.x
    }

    pub fn min_y(&self) -> f32 {
        self.min.y
    }

    pub fn max_y(&self) -> f32 {
        self.max.y
    }

    pub fn mid_x(&self) -> f32 {
        (self.min.x + self.max.x) / 2.0
    }

    pub fn center(&self) -> Point {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Axis-aligned rectangle used for tap hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitBox {
    pub center: Point,
    pub half_extents: Vec2,
}

impl HitBox {
    /// Square box of side `size` centered on `center`.
    pub fn square(center: Point, size: f32) -> Self {
        Self {
            center,
            half_extents: Vec2::splat(size / 2.0),
        }
    }

    /// Box whose lower-left corner is `origin`.
    pub fn from_corner(origin: Point, width: f32, height: f32) -> Self {
        let half_extents = Vec2::new(width / 2.0, height / 2.0);
        Self {
            center: origin + half_extents,
            half_extents,
        }
    }

    /// Edges are inclusive.
    pub fn contains(&self, point: Point) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y
    }
}

/// Label tint, each channel in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `other`; `t` is clamped to 0..=1.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * self.dt();
    }
}

/// Convert a duration in seconds to whole ticks, rounding to nearest.
pub fn secs_to_ticks(secs: f64) -> u64 {
    (secs * TICK_RATE as f64).round().max(0.0) as u64
}
