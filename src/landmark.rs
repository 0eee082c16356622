//! MediaPipe-style hand landmark topology and per-frame observations.
//!
//! Models the 21 landmarks per hand reported by the upstream hand tracker.
//! An observation is sparse: the tracker may deliver any subset of the 21
//! points in a given frame, and downstream classification decides which
//! absences are tolerable.

// ── Landmark definitions ───────────────────────────────────

/// The 21 hand landmarks of the MediaPipe hand topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Total number of landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

impl HandLandmark {
    /// Convert landmark enum to array index (0-20).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Landmark for a tracker-reported id, if in range.
    pub fn from_index(index: usize) -> Option<HandLandmark> {
        ALL_LANDMARKS.get(index).copied()
    }

    /// String representation for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrist => "wrist",
            Self::ThumbCmc => "thumb-cmc",
            Self::ThumbMcp => "thumb-mcp",
            Self::ThumbIp => "thumb-ip",
            Self::ThumbTip => "thumb-tip",
            Self::IndexMcp => "index-mcp",
            Self::IndexPip => "index-pip",
            Self::IndexDip => "index-dip",
            Self::IndexTip => "index-tip",
            Self::MiddleMcp => "middle-mcp",
            Self::MiddlePip => "middle-pip",
            Self::MiddleDip => "middle-dip",
            Self::MiddleTip => "middle-tip",
            Self::RingMcp => "ring-mcp",
            Self::RingPip => "ring-pip",
            Self::RingDip => "ring-dip",
            Self::RingTip => "ring-tip",
            Self::PinkyMcp => "pinky-mcp",
            Self::PinkyPip => "pinky-pip",
            Self::PinkyDip => "pinky-dip",
            Self::PinkyTip => "pinky-tip",
        }
    }
}

/// All landmarks in order, matching HandLandmark enum indices.
const ALL_LANDMARKS: [HandLandmark; LANDMARK_COUNT] = [
    HandLandmark::Wrist,
    HandLandmark::ThumbCmc,
    HandLandmark::ThumbMcp,
    HandLandmark::ThumbIp,
    HandLandmark::ThumbTip,
    HandLandmark::IndexMcp,
    HandLandmark::IndexPip,
    HandLandmark::IndexDip,
    HandLandmark::IndexTip,
    HandLandmark::MiddleMcp,
    HandLandmark::MiddlePip,
    HandLandmark::MiddleDip,
    HandLandmark::MiddleTip,
    HandLandmark::RingMcp,
    HandLandmark::RingPip,
    HandLandmark::RingDip,
    HandLandmark::RingTip,
    HandLandmark::PinkyMcp,
    HandLandmark::PinkyPip,
    HandLandmark::PinkyDip,
    HandLandmark::PinkyTip,
];

/// The five landmarks whose centroid defines the palm center:
/// wrist plus the four non-thumb knuckles (indices 0, 5, 9, 13, 17).
pub const PALM_LANDMARKS: [HandLandmark; 5] = [
    HandLandmark::Wrist,
    HandLandmark::IndexMcp,
    HandLandmark::MiddleMcp,
    HandLandmark::RingMcp,
    HandLandmark::PinkyMcp,
];

/// Fingertip/PIP pairs compared for curl detection (thumb excluded).
pub const FINGER_PAIRS: [(HandLandmark, HandLandmark); 4] = [
    (HandLandmark::IndexTip, HandLandmark::IndexPip),
    (HandLandmark::MiddleTip, HandLandmark::MiddlePip),
    (HandLandmark::RingTip, HandLandmark::RingPip),
    (HandLandmark::PinkyTip, HandLandmark::PinkyPip),
];

// ── Landmark point ─────────────────────────────────────────

/// One tracked point as delivered by the hand tracker.
///
/// Coordinates are integer pixels in the camera frame; larger y is lower
/// on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    /// Landmark id (0-20).
    pub id: u8,
    /// X position in pixels.
    pub x: i32,
    /// Y position in pixels.
    pub y: i32,
}

// ── Observation ────────────────────────────────────────────

/// Sparse set of landmark positions for one hand in one frame.
///
/// Rebuilt every frame from tracker output; never persisted across frames.
#[derive(Debug, Clone, Default)]
pub struct HandObservation {
    points: [Option<(i32, i32)>; LANDMARK_COUNT],
}

impl HandObservation {
    /// Create an empty observation (no landmarks seen).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an observation from tracker-reported landmark points.
    ///
    /// Out-of-range ids are ignored; a repeated id keeps the last position.
    pub fn from_landmarks<I>(landmarks: I) -> Self
    where
        I: IntoIterator<Item = Landmark>,
    {
        let mut obs = Self::new();
        for lm in landmarks {
            obs.insert(lm.id, lm.x, lm.y);
        }
        obs
    }

    /// Record a landmark position. Out-of-range ids are ignored.
    pub fn insert(&mut self, id: u8, x: i32, y: i32) {
        if let Some(slot) = self.points.get_mut(id as usize) {
            *slot = Some((x, y));
        }
    }

    /// Position of a landmark, if seen this frame.
    pub fn get(&self, landmark: HandLandmark) -> Option<(i32, i32)> {
        self.points[landmark.index()]
    }

    /// Number of landmarks seen this frame.
    pub fn len(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }

    /// Whether no landmarks were seen this frame.
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(|p| p.is_none())
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_indices() {
        assert_eq!(HandLandmark::Wrist.index(), 0);
        assert_eq!(HandLandmark::IndexMcp.index(), 5);
        assert_eq!(HandLandmark::IndexPip.index(), 6);
        assert_eq!(HandLandmark::IndexTip.index(), 8);
        assert_eq!(HandLandmark::MiddleMcp.index(), 9);
        assert_eq!(HandLandmark::RingMcp.index(), 13);
        assert_eq!(HandLandmark::PinkyMcp.index(), 17);
        assert_eq!(HandLandmark::PinkyTip.index(), 20);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(HandLandmark::from_index(0), Some(HandLandmark::Wrist));
        assert_eq!(HandLandmark::from_index(20), Some(HandLandmark::PinkyTip));
        assert_eq!(HandLandmark::from_index(21), None);
    }

    #[test]
    fn test_palm_landmark_ids() {
        let ids: Vec<usize> = PALM_LANDMARKS.iter().map(|l| l.index()).collect();
        assert_eq!(ids, vec![0, 5, 9, 13, 17]);
    }

    #[test]
    fn test_finger_pair_ids() {
        let ids: Vec<(usize, usize)> = FINGER_PAIRS
            .iter()
            .map(|(tip, pip)| (tip.index(), pip.index()))
            .collect();
        assert_eq!(ids, vec![(8, 6), (12, 10), (16, 14), (20, 18)]);
    }

    #[test]
    fn test_observation_insert_get() {
        let mut obs = HandObservation::new();
        assert!(obs.is_empty());

        obs.insert(0, 10, 20);
        obs.insert(8, 30, 40);
        assert_eq!(obs.get(HandLandmark::Wrist), Some((10, 20)));
        assert_eq!(obs.get(HandLandmark::IndexTip), Some((30, 40)));
        assert_eq!(obs.get(HandLandmark::ThumbTip), None);
        assert_eq!(obs.len(), 2);
        assert!(!obs.is_empty());
    }

    #[test]
    fn test_observation_out_of_range_id_ignored() {
        let mut obs = HandObservation::new();
        obs.insert(21, 1, 1);
        obs.insert(200, 1, 1);
        assert!(obs.is_empty());
    }

    #[test]
    fn test_observation_repeated_id_keeps_last() {
        let obs = HandObservation::from_landmarks([
            Landmark { id: 4, x: 1, y: 1 },
            Landmark { id: 4, x: 9, y: 9 },
        ]);
        assert_eq!(obs.get(HandLandmark::ThumbTip), Some((9, 9)));
        assert_eq!(obs.len(), 1);
    }

    #[test]
    fn test_landmark_as_str() {
        assert_eq!(HandLandmark::Wrist.as_str(), "wrist");
        assert_eq!(HandLandmark::ThumbTip.as_str(), "thumb-tip");
        assert_eq!(HandLandmark::IndexPip.as_str(), "index-pip");
        assert_eq!(HandLandmark::PinkyTip.as_str(), "pinky-tip");
    }
}
