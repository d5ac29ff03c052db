//! Gap Runner entry point
//!
//! Headless native runner: lets the idle autopilot play for a fixed number
//! of ticks and logs what happened. Usage:
//!
//! ```text
//! gap-runner [tuning.json] [seed]
//! ```

#[cfg(not(target_arch = "wasm32"))]
use gap_runner::Tuning;

/// One minute of play at the default rate
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICKS: u32 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use gap_runner::Game;
    use gap_runner::sim::GameEvent;

    env_logger::init();
    log::info!("Gap Runner (native) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(err) => {
                log::error!("Failed to load tuning from {}: {}", path, err);
                return std::process::ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);

    let mut game = match Game::new(tuning, seed) {
        Ok(game) => game,
        Err(err) => {
            log::error!("Invalid tuning: {}", err);
            return std::process::ExitCode::FAILURE;
        }
    };
    game.set_idle_mode(true);

    let mut best = 0;
    let mut runs = 1;
    for _ in 0..DEMO_TICKS {
        game.tick();
        for event in game.drain_events() {
            match event {
                GameEvent::Collided { with } => {
                    best = best.max(game.current_score());
                    log::info!("Run {} ended on {:?}: {}", runs, with, game.score_label());
                }
                GameEvent::Restarted => runs += 1,
                _ => {}
            }
        }
    }
    best = best.max(game.current_score());

    println!(
        "{} ticks, {} runs, best score {}, final {}",
        DEMO_TICKS,
        runs,
        best,
        game.score_label()
    );
    std::process::ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library; there is no standalone web entry point
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> Result<Tuning, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(Tuning::from_json(&json)?)
}
