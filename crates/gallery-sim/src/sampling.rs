//! Random selection over small fixed tables.
//!
//! Every draw goes through one of three primitives so the sequence of RNG
//! calls per spawn is fixed and a seeded generator reproduces a round exactly.

use rand::Rng;

use gallery_core::constants::{FRIENDLY_GLYPHS, HOSTILE_GLYPHS};
use gallery_core::enums::{Category, Lane, SizeClass};

/// Pick one element with equal probability. `options` must not be empty.
pub fn uniform_choice<T: Copy, R: Rng + ?Sized>(rng: &mut R, options: &[T]) -> T {
    options[rng.gen_range(0..options.len())]
}

/// True with probability `numerator / denominator`.
pub fn weighted_coin<R: Rng + ?Sized>(rng: &mut R, numerator: u32, denominator: u32) -> bool {
    rng.gen_range(0..denominator) < numerator
}

/// Uniform duration in `[min_secs, max_secs)`.
pub fn uniform_duration<R: Rng + ?Sized>(rng: &mut R, min_secs: f64, max_secs: f64) -> f64 {
    rng.gen_range(min_secs..max_secs)
}

pub fn sample_size_class<R: Rng + ?Sized>(rng: &mut R) -> SizeClass {
    uniform_choice(rng, &SizeClass::ALL)
}

pub fn sample_lane<R: Rng + ?Sized>(rng: &mut R) -> Lane {
    uniform_choice(rng, &Lane::ALL)
}

pub fn sample_category<R: Rng + ?Sized>(rng: &mut R, odds: (u32, u32)) -> Category {
    if weighted_coin(rng, odds.0, odds.1) {
        Category::Friendly
    } else {
        Category::Hostile
    }
}

/// Glyph table keyed by category.
pub fn glyphs_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Hostile => &HOSTILE_GLYPHS,
        Category::Friendly => &FRIENDLY_GLYPHS,
    }
}

pub fn sample_glyph<R: Rng + ?Sized>(rng: &mut R, category: Category) -> &'static str {
    uniform_choice(rng, glyphs_for(category))
}
