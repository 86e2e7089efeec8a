//! Domain model for celebrations.

mod effect;
mod phase;

pub use effect::{DELAY_RANGE, DURATION_RANGE, EffectDescriptor, HUE_RANGE, LEFT_RANGE};
pub use phase::CelebrationPhase;
