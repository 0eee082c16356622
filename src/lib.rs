//! aircalc — gesture-driven calculator core.
//!
//! Converts a per-frame stream of hand landmark positions into debounced
//! key presses on a virtual 4x4 keypad and accumulates an arithmetic
//! expression. A closed fist held over a key acts as a click; `=`
//! evaluates the expression. Camera capture, landmark inference, and
//! rendering are external collaborators; this crate only consumes their
//! per-frame output and exposes the expression and key layout back.

pub mod calculator;
pub mod eval;
pub mod keypad;
pub mod landmark;
pub mod pose;
pub mod session;

pub use calculator::{Calculator, CalculatorConfig};
pub use keypad::{Key, KeypadConfig};
pub use landmark::{HandLandmark, HandObservation, Landmark, LANDMARK_COUNT};
pub use pose::{classify, HandPose, HandStatus, PoseConfig};
