//! aircalc — drive the gesture calculator from a landmark frame stream.
//!
//! Reads one tracker frame per line (`id:x:y` triples, `-` for no hand,
//! `q` to quit) from stdin or a file and reports committed key presses.

use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use tracing::info;

use aircalc::calculator::CalculatorConfig;
use aircalc::keypad::KeypadConfig;
use aircalc::pose::PoseConfig;
use aircalc::session;

#[derive(Parser, Debug)]
#[command(name = "aircalc", about = "Gesture-driven calculator core")]
struct Cli {
    /// Read frame lines from a file instead of stdin
    #[arg(long)]
    frames: Option<String>,

    /// Keypad top-left x in pixels
    #[arg(long, default_value_t = 800)]
    origin_x: i32,

    /// Keypad top-left y in pixels
    #[arg(long, default_value_t = 150)]
    origin_y: i32,

    /// Key side length in pixels
    #[arg(long, default_value_t = 100)]
    key_size: i32,

    /// Cooldown in frames after an accepted press
    #[arg(long, default_value_t = 20)]
    debounce: u32,

    /// Curled fingers (out of 4) required for a fist
    #[arg(long, default_value_t = 3)]
    min_curled: usize,

    /// Show version and exit
    #[arg(long)]
    version: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("aircalc {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aircalc=info".into()),
        )
        .init();

    let config = CalculatorConfig {
        keypad: KeypadConfig {
            origin: (cli.origin_x, cli.origin_y),
            key_size: cli.key_size,
        },
        pose: PoseConfig {
            min_curled_fingers: cli.min_curled,
        },
        debounce_frames: cli.debounce,
    };

    info!(
        "aircalc v{} starting (keypad at ({}, {}), key size {}, debounce {} frames)",
        env!("CARGO_PKG_VERSION"),
        cli.origin_x,
        cli.origin_y,
        cli.key_size,
        cli.debounce,
    );

    let stdout = io::stdout().lock();
    match cli.frames {
        Some(path) => {
            let file = File::open(&path)
                .map_err(|e| anyhow::anyhow!("failed to open frame file {:?}: {}", path, e))?;
            session::run_session(BufReader::new(file), stdout, config)
        }
        None => {
            let stdin = io::stdin().lock();
            session::run_session(stdin, stdout, config)
        }
    }
}
