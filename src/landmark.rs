//! Hand landmark data model.

use std::collections::{btree_map, BTreeMap};

/// Index identifying one anatomical landmark on a detected hand.
///
/// The engine defines the landmark cardinality; for MediaPipe-style hand engines it
/// is [`NUM_HAND_LANDMARKS`], with the named indices listed in [`LandmarkIdx`].
pub type LandmarkId = usize;

/// A normalized landmark position: `[x, y]` as fractions of the frame's width and
/// height, in `0.0..=1.0`.
pub type Position = [f32; 2];

/// Number of landmarks a MediaPipe-style hand engine reports per hand.
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Names for the hand pose landmarks.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl From<LandmarkIdx> for LandmarkId {
    #[inline]
    fn from(idx: LandmarkIdx) -> Self {
        idx as LandmarkId
    }
}

/// The ordered landmark positions of a single detected hand, as produced by a
/// [`HandEngine`][crate::engine::HandEngine].
///
/// Landmarks are stored in engine enumeration order, so the position at index `i`
/// belongs to [`LandmarkId`] `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    positions: Box<[Position]>,
}

impl HandLandmarks {
    /// Creates a hand's landmark list from its positions, in engine enumeration
    /// order.
    pub fn new(positions: impl Into<Box<[Position]>>) -> Self {
        Self {
            positions: positions.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the position of the landmark identified by `id`, or [`None`] if `id`
    /// is outside the engine's landmark cardinality.
    pub fn get(&self, id: LandmarkId) -> Option<Position> {
        self.positions.get(id).copied()
    }

    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Iterates over `(id, position)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (LandmarkId, Position)> + Clone + '_ {
        self.positions.iter().copied().enumerate()
    }
}

/// A flattened mapping from [`LandmarkId`] to [`Position`] across all hands detected
/// in one frame.
///
/// When multiple hands share a landmark ID, the later-enumerated hand's position is
/// kept. Iteration yields entries in ascending ID order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkMap {
    map: BTreeMap<LandmarkId, Position>,
}

impl LandmarkMap {
    /// Returns the position recorded for `id`, or [`None`] if no detected hand had
    /// that landmark.
    pub fn get(&self, id: LandmarkId) -> Option<Position> {
        self.map.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over `(id, position)` entries in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (LandmarkId, Position)> + '_ {
        self.map.iter().map(|(&id, &pos)| (id, pos))
    }

    /// Records `position` for `id`, overwriting any earlier hand's entry.
    pub(crate) fn insert(&mut self, id: LandmarkId, position: Position) {
        self.map.insert(id, position);
    }
}

impl IntoIterator for LandmarkMap {
    type Item = (LandmarkId, Position);
    type IntoIter = btree_map::IntoIter<LandmarkId, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}
