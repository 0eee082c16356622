//! Hand pose classification from landmark observations.
//!
//! Derives a palm center and a binary open/fist status from one hand's
//! landmark set. Pure per-frame function: no state is carried between
//! frames, and a frame with incomplete palm data yields no pose at all
//! rather than a biased partial centroid.

use tracing::debug;

use crate::landmark::{HandObservation, FINGER_PAIRS, PALM_LANDMARKS};

// ── Pose types ─────────────────────────────────────────────

/// Binary hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandStatus {
    /// Fingers extended; hovers without clicking.
    Open,
    /// Fingers curled; commits a press when over a key.
    Fist,
}

impl HandStatus {
    /// String representation for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Fist => "fist",
        }
    }
}

/// Classified pose for one hand in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandPose {
    /// Palm center in pixel coordinates.
    pub palm: (i32, i32),
    /// Open or fist.
    pub status: HandStatus,
}

// ── Config ─────────────────────────────────────────────────

/// Configuration for pose classification thresholds.
#[derive(Debug, Clone)]
pub struct PoseConfig {
    /// Minimum number of curled fingers (out of the 4 compared) for a fist.
    pub min_curled_fingers: usize,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            min_curled_fingers: 3,
        }
    }
}

// ── Classification ─────────────────────────────────────────

/// Classify one hand's observation into a pose.
///
/// The palm center is the centroid of the wrist and the four non-thumb
/// knuckles; if any of those five landmarks is missing, classification
/// fails and `None` is returned. A finger counts as curled when its tip
/// sits below its PIP joint on screen (`tip.y > pip.y`); pairs with a
/// missing tip or PIP are excluded from the count rather than treated as
/// curled.
pub fn classify(obs: &HandObservation, config: &PoseConfig) -> Option<HandPose> {
    let mut sum_x = 0i64;
    let mut sum_y = 0i64;
    for landmark in PALM_LANDMARKS {
        let (x, y) = obs.get(landmark)?;
        sum_x += x as i64;
        sum_y += y as i64;
    }
    let n = PALM_LANDMARKS.len() as i64;
    let palm = ((sum_x / n) as i32, (sum_y / n) as i32);

    let mut curled = 0usize;
    for (tip, pip) in FINGER_PAIRS {
        if let (Some((_, tip_y)), Some((_, pip_y))) = (obs.get(tip), obs.get(pip)) {
            if tip_y > pip_y {
                curled += 1;
            }
        }
    }

    let status = if curled >= config.min_curled_fingers {
        HandStatus::Fist
    } else {
        HandStatus::Open
    };

    debug!(
        "pose: palm=({}, {}) curled={} status={}",
        palm.0,
        palm.1,
        curled,
        status.as_str(),
    );

    Some(HandPose { palm, status })
}

// ── Tests ──────────────────────────────────────────────────
