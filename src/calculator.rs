//! Gesture input state machine.
//!
//! Maps per-frame hand poses onto debounced key presses and maintains the
//! accumulated expression. One call per frame; every failure mode is a
//! local state transition (a skipped frame or the `"Error"` display) and
//! nothing propagates out.

use tracing::debug;

use crate::eval;
use crate::keypad::{self, Key, KeypadConfig};
use crate::pose::{HandPose, HandStatus, PoseConfig};

// ── Config ─────────────────────────────────────────────────

/// Configuration for the calculator session.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Keypad geometry.
    pub keypad: KeypadConfig,
    /// Pose classification thresholds.
    pub pose: PoseConfig,
    /// Cooldown in frames after an accepted press.
    pub debounce_frames: u32,
}

/// Default press cooldown in frames.
pub const DEFAULT_DEBOUNCE_FRAMES: u32 = 20;

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            keypad: KeypadConfig::default(),
            pose: PoseConfig::default(),
            debounce_frames: DEFAULT_DEBOUNCE_FRAMES,
        }
    }
}

// ── State ──────────────────────────────────────────────────

/// Central calculator state, exclusively owned by the frame loop.
pub struct Calculator {
    /// Configuration.
    pub config: CalculatorConfig,
    /// Static key layout, built once at construction.
    keys: Vec<Key>,
    /// Accumulated expression text.
    expression: String,
    /// True iff the last committed action was `=` and nothing was
    /// pressed since; the next press starts a fresh expression.
    result_pending: bool,
    /// Remaining cooldown frames; no press is accepted while > 0.
    debounce_ticks: u32,
}

impl Calculator {
    /// Create a calculator with default geometry and thresholds.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Create a calculator with the given configuration.
    pub fn with_config(config: CalculatorConfig) -> Self {
        let keys = keypad::generate_layout(&config.keypad);
        Self {
            config,
            keys,
            expression: String::new(),
            result_pending: false,
            debounce_ticks: 0,
        }
    }

    /// Current expression text, for the rendering collaborator.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Static key list, for the rendering collaborator. Never mutated
    /// after construction, so repeated fetches are identical.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Whether the display currently shows a result (or `"Error"`).
    pub fn result_pending(&self) -> bool {
        self.result_pending
    }

    /// Remaining cooldown frames.
    pub fn debounce_ticks(&self) -> u32 {
        self.debounce_ticks
    }

    /// Process one frame's pose and return the committed key value, if any.
    ///
    /// The cooldown is a drop filter, not a queue: gestures arriving while
    /// it runs are discarded. A fist outside every key spends no cooldown.
    pub fn process_gesture(&mut self, pose: Option<&HandPose>) -> Option<char> {
        if self.debounce_ticks > 0 {
            self.debounce_ticks -= 1;
            return None;
        }

        let pose = pose?;
        if pose.status != HandStatus::Fist {
            return None;
        }

        let (px, py) = pose.palm;
        let value = keypad::hit_test(&self.keys, px, py)?.value;
        self.press(value);
        self.debounce_ticks = self.config.debounce_frames;
        Some(value)
    }

    /// Apply a committed key value to the expression state.
    fn press(&mut self, value: char) {
        if self.result_pending {
            self.expression.clear();
            self.result_pending = false;
        }

        if value == '=' {
            self.expression = match eval::evaluate(&self.expression) {
                Ok(result) => eval::format_result(result),
                Err(err) => {
                    debug!("evaluation of {:?} failed: {}", self.expression, err);
                    "Error".to_string()
                }
            };
            self.result_pending = true;
        } else {
            // Plain concatenation; grammar is only checked at '='.
            self.expression.push(value);
        }

        debug!("pressed '{}' -> expression {:?}", value, self.expression);
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

// ── Test helpers ───────────────────────────────────────────

/// A fist pose at the center of the key with the given value.
#[cfg(test)]
fn fist_over(calc: &Calculator, value: char) -> HandPose {
    let key = calc
        .keys()
        .iter()
        .find(|k| k.value == value)
        .expect("key exists");
    HandPose {
        palm: ((key.x1 + key.x2) / 2, (key.y1 + key.y2) / 2),
        status: HandStatus::Fist,
    }
}

/// Commit a sequence of key values, expiring the cooldown between each.
#[cfg(test)]
fn press_sequence(calc: &mut Calculator, values: &str) {
    for value in values.chars() {
        let pose = fist_over(calc, value);
        assert_eq!(calc.process_gesture(Some(&pose)), Some(value));
        while calc.debounce_ticks() > 0 {
            assert_eq!(calc.process_gesture(Some(&pose)), None);
        }
    }
}

// ── Tests ──────────────────────────────────────────────────
