//! Application services for celebration detection.

mod detector;

pub use detector::CelebrationDetector;
