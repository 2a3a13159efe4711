//! Paper Catcher entry point
//!
//! Native builds run a headless autopilot session and print a summary. The
//! browser build drives the library directly from its frame callback.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;
    use serde::Serialize;

    use paper_catcher::consts::TICK_RATE;
    use paper_catcher::persistence::FileStore;
    use paper_catcher::platform::{FrameClock, KeyboardState};
    use paper_catcher::sim::{GameEvent, GamePhase, GameState, TargetKind, tick};
    use paper_catcher::{HighScoreStore, MemoryStore, Settings, Variant};

    #[derive(Parser, Debug)]
    #[command(author, version, about)]
    struct Cli {
        /// classic or arcade
        #[arg(long, default_value = "arcade")]
        variant: String,
        #[arg(long)]
        seed: Option<u64>,
        /// Maximum ticks to simulate (60 per second)
        #[arg(long, default_value_t = 60 * 60 * 5)]
        ticks: u64,
        /// Settings JSON (overrides --variant)
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Persist the high score in this file
        #[arg(long)]
        highscore_file: Option<PathBuf>,
        /// Write the run summary as JSON here
        #[arg(long)]
        summary_json: Option<PathBuf>,
    }

    #[derive(Debug, Default, Serialize)]
    struct Summary {
        variant: String,
        seed: u64,
        ticks: u64,
        score: u64,
        high_score: u64,
        new_high_score: bool,
        game_over: bool,
        final_speed: f32,
        papers_caught: u32,
        stacks_caught: u32,
        papers_missed: u32,
        stacks_missed: u32,
    }

    impl Summary {
        fn record(&mut self, event: &GameEvent) {
            match event {
                GameEvent::Caught { kind: TargetKind::Paper, .. } => self.papers_caught += 1,
                GameEvent::Caught { kind: TargetKind::Stack, .. } => self.stacks_caught += 1,
                GameEvent::Missed { kind: TargetKind::Paper } => self.papers_missed += 1,
                GameEvent::Missed { kind: TargetKind::Stack } => self.stacks_missed += 1,
                _ => {}
            }
        }
    }

    pub fn run() {
        let cli = Cli::parse();

        let mut settings = match &cli.settings {
            Some(path) => Settings::load_from(path),
            None => {
                let variant = Variant::from_str(&cli.variant).unwrap_or_else(|| {
                    log::warn!("Unknown variant '{}', using arcade", cli.variant);
                    Variant::Arcade
                });
                Settings::from_variant(variant)
            }
        };
        if let Some(seed) = cli.seed {
            settings.seed = seed;
        }

        let mut store: Box<dyn HighScoreStore> = match &cli.highscore_file {
            Some(path) => Box::new(FileStore::open(path)),
            None => Box::new(MemoryStore::default()),
        };

        log::info!(
            "Paper Catcher (headless, {}) seed {} for up to {} ticks",
            settings.variant.as_str(),
            settings.seed,
            cli.ticks
        );

        let mut summary = Summary {
            variant: settings.variant.as_str().to_string(),
            seed: settings.seed,
            ..Default::default()
        };
        let mut state = GameState::new(settings, store.high_score());
        let mut keys = KeyboardState::new();
        keys.idle_mode = true;
        keys.key_down("Enter");

        // Feed the frame clock a steady 60 fps so the loop mirrors the browser build
        let mut clock = FrameClock::new();
        let frame_ms = 1000.0 / TICK_RATE as f64;
        let mut time_ms = 0.0;
        clock.frame(time_ms);
        'frames: loop {
            time_ms += frame_ms;
            for _ in 0..clock.frame(time_ms) {
                let input = keys.take_input(state.phase);
                tick(&mut state, &input, store.as_mut());
                for event in &state.events {
                    summary.record(event);
                }
                if state.phase == GamePhase::GameOver || state.frame_count >= cli.ticks {
                    break 'frames;
                }
            }
        }

        summary.ticks = state.frame_count;
        summary.score = state.score;
        summary.high_score = state.high_score;
        summary.new_high_score = state.new_high_score;
        summary.game_over = state.phase == GamePhase::GameOver;
        summary.final_speed = state.speed;

        println!(
            "score {} | high {}{} | {} ticks | speed {:.1} | caught {} papers, {} stacks | missed {} papers",
            summary.score,
            summary.high_score,
            if summary.new_high_score { " (new!)" } else { "" },
            summary.ticks,
            summary.final_speed,
            summary.papers_caught,
            summary.stacks_caught,
            summary.papers_missed
        );

        if let Some(path) = &cli.summary_json {
            let written = serde_json::to_string_pretty(&summary)
                .map_err(std::io::Error::from)
                .and_then(|json| std::fs::write(path, json));
            match written {
                Ok(()) => log::info!("Summary written to {}", path.display()),
                Err(err) => log::warn!("Failed to write summary {}: {}", path.display(), err),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser build uses the library crate; nothing to do here
}
