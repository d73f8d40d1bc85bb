//! Brickfall entry point
//!
//! Plays a headless match with the autopilot on the pointer and prints the
//! final frame.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::Context;
    use brickfall::{Autopilot, FrameLoop, TextRenderer, Tuning};
    use clap::Parser;

    #[derive(Parser)]
    #[command(name = "brickfall", about = "Headless brick-breaker match")]
    struct Cli {
        /// Tuning JSON file (defaults apply for missing fields)
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Stop after this many ticks if the match is still running
        #[arg(short, long, default_value = "20000")]
        ticks: u64,
        /// Autopilot RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Autopilot aim error in pixels
        #[arg(long, default_value_t = brickfall::autopilot::DEFAULT_AIM_ERROR)]
        aim_error: f32,
        /// Enable debug logging
        #[arg(short, long)]
        verbose: bool,
    }

    pub fn run() -> anyhow::Result<()> {
        let cli = Cli::parse();

        let filter = if cli.verbose { "debug" } else { "info" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
        log::info!("Brickfall (native) starting...");

        let tuning = match &cli.tuning {
            Some(path) => Tuning::load(path)
                .with_context(|| format!("loading tuning from {}", path.display()))?,
            None => Tuning::default(),
        };

        let mut frames = FrameLoop::new(tuning, TextRenderer::default());
        let mut pilot = Autopilot::new(cli.seed, cli.aim_error);

        let mut snapshot = frames.core().snapshot();
        while !snapshot.is_terminal() && snapshot.tick < cli.ticks {
            frames.on_pointer_move(pilot.pointer_x(&snapshot));
            snapshot = frames.frame();
        }

        print!("{}", frames.renderer().frame());
        let result = if snapshot.game_won {
            "won"
        } else if snapshot.game_over {
            "lost"
        } else {
            "unfinished"
        };
        println!(
            "Match {} after {} ticks: score {}, {} bricks left",
            result,
            snapshot.tick,
            snapshot.score,
            snapshot.visible_bricks()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive the library directly
}
