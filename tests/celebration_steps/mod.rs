//! Step definitions for celebration behaviour scenarios.

pub mod given;
pub mod when;
