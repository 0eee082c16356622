//! Frame-synchronous session loop over a textual landmark stream.
//!
//! Stands in for the camera/tracker collaborator: each input line is one
//! frame of tracker output for a single hand, as whitespace-separated
//! `id:x:y` triples. An empty line or `-` is a frame with no hand; `q`
//! ends the session. Per frame the loop runs classify then process in
//! strict sequence and reports each committed press to the output sink.
//!
//! Malformed tracker data never aborts the session: bad lines are logged
//! and treated as carrying no pose, matching how every other failure in
//! the core degrades to a skipped frame.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::calculator::{Calculator, CalculatorConfig};
use crate::landmark::{HandObservation, Landmark};
use crate::pose;

/// Parse one frame line into landmark points.
///
/// Returns `None` for a frame with no hand ("-" or blank) and `Some`
/// with the parsed points otherwise. Any malformed triple invalidates
/// the whole frame.
pub fn parse_frame(line: &str) -> Option<Vec<Landmark>> {
    let line = line.trim();
    if line.is_empty() || line == "-" {
        return None;
    }

    let mut landmarks = Vec::new();
    for triple in line.split_whitespace() {
        let mut parts = triple.split(':');
        let id = parts.next()?.parse::<u8>().ok()?;
        let x = parts.next()?.parse::<i32>().ok()?;
        let y = parts.next()?.parse::<i32>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        landmarks.push(Landmark { id, x, y });
    }
    Some(landmarks)
}

/// Run the session loop until `q` or end of input.
///
/// Only sink I/O errors propagate; everything else is a per-frame state
/// transition inside the calculator.
pub fn run_session<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    config: CalculatorConfig,
) -> anyhow::Result<()> {
    let mut calc = Calculator::with_config(config);
    let mut frames = 0u64;
    let mut presses = 0u64;

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed == "q" {
            info!("termination signal received");
            break;
        }

        frames += 1;

        let observation = match parse_frame(trimmed) {
            Some(landmarks) => Some(HandObservation::from_landmarks(landmarks)),
            None if trimmed.is_empty() || trimmed == "-" => None,
            None => {
                warn!("frame {}: malformed line {:?}, no pose this frame", frames, trimmed);
                None
            }
        };

        let hand_pose = observation
            .as_ref()
            .and_then(|obs| pose::classify(obs, &calc.config.pose));

        if let Some(value) = calc.process_gesture(hand_pose.as_ref()) {
            presses += 1;
            writeln!(writer, "pressed '{}'  expression: {}", value, calc.expression())?;
        }
    }

    debug!("session: {} frames, {} presses", frames, presses);
    writeln!(writer, "final expression: {}", calc.expression())?;
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────
