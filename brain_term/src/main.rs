// main.rs - Brian's Brain in the terminal
// Draw, advance, sleep; stops on Ctrl-C or when every cell stays put

use std::error::Error;
use std::process::ExitCode;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::AsyncWriteExt;
use tokio::time::MissedTickBehavior;

use brians_brain::BrainEngine;
use brians_brain::config::{Config, USAGE};

mod draw;

use draw::{CLEAR_SCREEN, Frame};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut engine = match BrainEngine::new(config.rows, config.cols, &mut rng) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match run(&mut engine, config.interval).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(engine: &mut BrainEngine, interval: Duration) -> Result<(), Box<dyn Error>> {
    let mut stdout = tokio::io::stdout();
    let mut frame = Frame::default();

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    stdout.write_all(CLEAR_SCREEN.as_bytes()).await?;
    loop {
        tokio::select! {
            result = &mut ctrl_c => {
                result?;
                log::info!("Bye.");
                return Ok(());
            }
            _ = ticker.tick() => {
                let grid = engine.current_generation()?;
                stdout.write_all(frame.render(grid).as_bytes()).await?;
                stdout.flush().await?;

                engine.advance()?;
                if engine.is_frozen() {
                    log::info!("lives are frozen at generation {}, game stopped!", engine.generation());
                    return Ok(());
                }
            }
        }
    }
}
