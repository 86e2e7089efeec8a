//! Ephemeral visual-effect descriptors generated for a celebration.

use rand::Rng;
use serde::Serialize;
use std::ops::Range;

/// Horizontal position range, in percent of the viewport width.
pub const LEFT_RANGE: Range<f64> = 0.0..100.0;
/// Animation start delay range, in seconds.
pub const DELAY_RANGE: Range<f64> = 0.0..2.0;
/// Animation duration range, in seconds.
pub const DURATION_RANGE: Range<f64> = 2.0..4.0;
/// Colour hue range, in degrees.
pub const HUE_RANGE: Range<f64> = 0.0..360.0;

/// One falling particle. Opaque to the core; the presentation layer decides
/// how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectDescriptor {
    /// Position in the batch.
    pub index: usize,
    /// Horizontal position in `[0, 100)` percent.
    pub left_percent: f64,
    /// Animation delay in `[0, 2)` seconds.
    pub delay_secs: f64,
    /// Animation duration in `[2, 4)` seconds.
    pub duration_secs: f64,
    /// Colour hue in `[0, 360)` degrees.
    pub hue: f64,
}

impl EffectDescriptor {
    /// Draws one descriptor from `rng`.
    pub fn random(index: usize, rng: &mut impl Rng) -> Self {
        Self {
            index,
            left_percent: rng.gen_range(LEFT_RANGE),
            delay_secs: rng.gen_range(DELAY_RANGE),
            duration_secs: rng.gen_range(DURATION_RANGE),
            hue: rng.gen_range(HUE_RANGE),
        }
    }

    /// Draws a batch of `count` descriptors, indexed from zero.
    pub fn batch(count: usize, rng: &mut impl Rng) -> Vec<Self> {
        (0..count).map(|index| Self::random(index, rng)).collect()
    }
}
