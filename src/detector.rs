//! Hand landmark fetching over a configured engine.

use image::RgbImage;

use crate::engine::{HandEngine, HandsConfig};
use crate::landmark::{LandmarkId, LandmarkMap, Position};

/// Runs a hand-landmark engine on RGB frames and reshapes its per-hand output into
/// a flat [`LandmarkMap`].
///
/// The detector is constructed once and reused across frames; it owns its engine
/// for its entire lifetime. Frames are borrowed read-only and never retained.
///
/// The detector is as thread-safe as its engine, which is to say not at all by
/// default: use one detector per thread.
pub struct LandmarkDetector {
    engine: Box<dyn HandEngine>,
}

impl LandmarkDetector {
    /// Constructs a detector owning a freshly created engine of type `E`.
    ///
    /// Configuration errors reported by [`HandEngine::create`] (for example an
    /// out-of-range confidence threshold) are returned unchanged; this layer does
    /// no validation of its own.
    pub fn new<E: HandEngine + 'static>(config: HandsConfig) -> anyhow::Result<Self> {
        let engine = E::create(&config)?;
        Ok(Self::with_engine(engine))
    }

    /// Constructs a detector around an already-created engine.
    pub fn with_engine<E: HandEngine + 'static>(engine: E) -> Self {
        Self {
            engine: Box::new(engine),
        }
    }

    /// Runs detection on `frame` and returns the flattened landmark mapping.
    ///
    /// Returns an empty map when no hands are detected. When multiple hands are
    /// detected, their landmark lists are merged in engine enumeration order, so
    /// the last hand's position wins for every landmark ID both hands report.
    ///
    /// Engine failures propagate unmodified and are fatal to this call only.
    pub fn fetch_landmarks(&mut self, frame: &RgbImage) -> anyhow::Result<LandmarkMap> {
        let hands = self.engine.process(frame)?;
        log::trace!("engine reported {} hand(s)", hands.len());

        let mut map = LandmarkMap::default();
        for hand in &hands {
            for (id, position) in hand.iter() {
                map.insert(id, position);
            }
        }
        Ok(map)
    }

    /// Runs detection on `frame` and returns the position of the landmark
    /// identified by `id`.
    ///
    /// Equivalent to `fetch_landmarks(frame)?.get(id)`: an ID no detected hand
    /// reported yields `Ok(None)`, not an error.
    pub fn fetch_landmark_position(
        &mut self,
        frame: &RgbImage,
        id: LandmarkId,
    ) -> anyhow::Result<Option<Position>> {
        Ok(self.fetch_landmarks(frame)?.get(id))
    }
}
