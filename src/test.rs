//! Shared test fixtures.

use image::RgbImage;

use crate::engine::{HandEngine, HandsConfig};
use crate::landmark::{HandLandmarks, Position, NUM_HAND_LANDMARKS};

pub fn blank_frame() -> RgbImage {
    RgbImage::new(64, 48)
}

/// A full 21-landmark hand with every X coordinate set to `x` and the Y coordinates
/// spread evenly over `0.0..1.0`.
pub fn full_hand(x: f32) -> Vec<Position> {
    (0..NUM_HAND_LANDMARKS)
        .map(|i| [x, i as f32 / NUM_HAND_LANDMARKS as f32])
        .collect()
}

/// Engine that reports the same canned hands on every frame.
pub struct StaticEngine {
    hands: Vec<HandLandmarks>,
}

impl StaticEngine {
    pub fn new(hands: Vec<Vec<Position>>) -> Self {
        Self {
            hands: hands.into_iter().map(HandLandmarks::new).collect(),
        }
    }
}

impl HandEngine for StaticEngine {
    fn create(_config: &HandsConfig) -> anyhow::Result<Self> {
        Ok(Self::new(Vec::new()))
    }

    fn process(&mut self, _frame: &RgbImage) -> anyhow::Result<Vec<HandLandmarks>> {
        Ok(self.hands.clone())
    }
}

/// Engine that range-checks its configuration like the real thing, but never sees a
/// hand.
pub struct ValidatingEngine;

impl HandEngine for ValidatingEngine {
    fn create(config: &HandsConfig) -> anyhow::Result<Self> {
        anyhow::ensure!(config.max_hands() >= 1, "max_hands must be at least 1");
        for (name, value) in [
            ("min_detection_confidence", config.min_detection_confidence()),
            ("min_tracking_confidence", config.min_tracking_confidence()),
        ] {
            anyhow::ensure!(
                (0.0..=1.0).contains(&value),
                "{name} must be in [0, 1], got {value}"
            );
        }
        Ok(Self)
    }

    fn process(&mut self, _frame: &RgbImage) -> anyhow::Result<Vec<HandLandmarks>> {
        Ok(Vec::new())
    }
}

#[test]
fn logger_init_is_idempotent() {
    crate::init_logger!();
    crate::init_logger!();
}

/// Engine that rejects every frame.
pub struct BrokenEngine;

impl HandEngine for BrokenEngine {
    fn create(_config: &HandsConfig) -> anyhow::Result<Self> {
        Ok(Self)
    }

    fn process(&mut self, _frame: &RgbImage) -> anyhow::Result<Vec<HandLandmarks>> {
        anyhow::bail!("engine does not support this frame")
    }
}
