//! The detection engine seam.
//!
//! A [`HandEngine`] is the external capability that actually locates hands and
//! regresses their landmarks. This crate treats it as an opaque, exclusively-owned
//! handle: it is constructed once from a [`HandsConfig`] and then queried one frame
//! at a time.

use image::RgbImage;

use crate::landmark::HandLandmarks;

/// Configuration passed to [`HandEngine::create`].
///
/// The values are forwarded to the engine as-is; range validation is the engine's
/// job, not this crate's.
#[derive(Debug, Clone, PartialEq)]
pub struct HandsConfig {
    max_hands: usize,
    min_detection_confidence: f32,
    min_tracking_confidence: f32,
}

impl HandsConfig {
    /// Creates a configuration from the engine's three tuning parameters.
    ///
    /// # Parameters
    ///
    /// - `max_hands`: maximum number of hands to detect per frame (engines expect
    ///   at least 1).
    /// - `min_detection_confidence`: minimum confidence (`0.0..=1.0`) for a hand
    ///   detection to be reported.
    /// - `min_tracking_confidence`: minimum confidence (`0.0..=1.0`) for hand
    ///   tracking to be considered successful across frames.
    pub fn new(
        max_hands: usize,
        min_detection_confidence: f32,
        min_tracking_confidence: f32,
    ) -> Self {
        Self {
            max_hands,
            min_detection_confidence,
            min_tracking_confidence,
        }
    }

    #[inline]
    pub fn max_hands(&self) -> usize {
        self.max_hands
    }

    #[inline]
    pub fn min_detection_confidence(&self) -> f32 {
        self.min_detection_confidence
    }

    #[inline]
    pub fn min_tracking_confidence(&self) -> f32 {
        self.min_tracking_confidence
    }
}

/// The defaults of MediaPipe-style hand engines: up to 2 hands, both confidence
/// thresholds at 0.5.
impl Default for HandsConfig {
    fn default() -> Self {
        Self::new(2, 0.5, 0.5)
    }
}

/// Trait implemented by hand-landmark detection engines.
///
/// Engines are not assumed to be thread-safe; the trait deliberately carries no
/// [`Send`] or [`Sync`] bound. Callers that need parallel throughput use one engine
/// (and one [`LandmarkDetector`][crate::detector::LandmarkDetector]) per thread.
pub trait HandEngine {
    /// Constructs an engine configured with `config`.
    ///
    /// The engine validates the configuration itself; out-of-range values are
    /// reported as errors from here.
    fn create(config: &HandsConfig) -> anyhow::Result<Self>
    where
        Self: Sized;

    /// Runs hand detection on `frame`, returning one landmark list per detected
    /// hand.
    ///
    /// Returns an empty list when no hands are detected. Landmark coordinates are
    /// normalized to the frame's width and height. Any engine-internal failure
    /// (malformed frame, unsupported format) is returned unmodified; the call
    /// blocks until the engine completes.
    fn process(&mut self, frame: &RgbImage) -> anyhow::Result<Vec<HandLandmarks>>;
}
