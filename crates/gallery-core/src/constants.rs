//! Gameplay constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Round ---

/// Length of a round in seconds.
pub const ROUND_SECS: u32 = 60;

/// Magazine size. Reload always refills to exactly this.
pub const AMMO_CAPACITY: u32 = 6;

/// Score lost for shooting a friendly target.
pub const FRIENDLY_PENALTY: i32 = 5;

// --- Timers ---

/// Seconds between target spawns.
pub const SPAWN_PERIOD_SECS: f64 = 0.8;

/// Allowed lateness of the spawn timer.
pub const SPAWN_TOLERANCE_SECS: f64 = 0.1;

/// Seconds between countdown ticks.
pub const COUNTDOWN_PERIOD_SECS: f64 = 1.0;

/// Allowed lateness of the countdown timer.
pub const COUNTDOWN_TOLERANCE_SECS: f64 = 0.1;

// --- Targets ---

/// Friendly targets appear with probability NUMERATOR / DENOMINATOR.
pub const FRIENDLY_ODDS_NUMERATOR: u32 = 1;
pub const FRIENDLY_ODDS_DENOMINATOR: u32 = 3;

/// Traversal duration range, half-open: [MIN, MAX).
pub const TRAVERSAL_MIN_SECS: f64 = 3.0;
pub const TRAVERSAL_MAX_SECS: f64 = 7.5;

/// Font size of a Normal target; the other size classes scale from it.
pub const TARGET_BASE_SIZE: f32 = 80.0;

/// Margin beyond the view edge where targets enter.
pub const LANE_ENTRY_MARGIN: f32 = 100.0;

/// Margin beyond the opposite view edge where targets leave.
pub const LANE_EXIT_MARGIN: f32 = 300.0;

/// Horizontal margin used by the out-of-bounds check.
pub const OOB_MARGIN: f32 = 200.0;

pub const HOSTILE_GLYPHS: [&str; 6] = ["👾", "🤖", "☠️", "👹", "👽", "🎃"];
pub const FRIENDLY_GLYPHS: [&str; 2] = ["🧚‍♀️", "👻"];

// --- Effects ---

/// Fade-out applied to a hostile target after it is hit.
pub const FADE_OUT_SECS: f64 = 0.2;

/// Lifetime of a particle effect before it is removed.
pub const EFFECT_LIFETIME_SECS: f64 = 1.0;

/// Ammo label color transition.
pub const AMMO_RECOLOR_SECS: f64 = 0.2;

/// Score label flash: colorize, hold, restore.
pub const FLASH_COLORIZE_SECS: f64 = 0.1;
pub const FLASH_HOLD_SECS: f64 = 0.2;

/// Number of red-then-white cycles in a score flash.
pub const FLASH_REPEATS: usize = 2;

// --- HUD layout ---

pub const DEFAULT_FONT_SIZE: f32 = 28.0;
pub const COUNTDOWN_FONT_SIZE: f32 = 44.0;
pub const GAME_OVER_FONT_SIZE: f32 = 80.0;

/// Padding between labels and the view edge.
pub const HUD_PADDING: f32 = 10.0;

/// Extent of the tappable reload control.
pub const RELOAD_CONTROL_WIDTH: f32 = 110.0;
pub const RELOAD_CONTROL_HEIGHT: f32 = 34.0;

/// Approximate width of the friendly legend, used to right-align it.
pub const FRIENDLY_LEGEND_WIDTH: f32 = 260.0;

// --- View ---

/// Default scene size, centered on the origin.
pub const VIEW_WIDTH: f32 = 1024.0;
pub const VIEW_HEIGHT: f32 = 768.0;
