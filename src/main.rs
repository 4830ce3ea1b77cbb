use std::path::PathBuf;

use clap::Parser;
use ggez::{event, GameResult};
use log::{info, LevelFilter};

use grid_snake::app::SnakeApp;
use grid_snake::{logger, GameConfig};

#[derive(Parser, Debug)]
#[command(name = "grid_snake", about = "Classic snake on a 20x15 grid")]
struct Args {
    /// JSON file overriding board size, tick interval, score increment or seed
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> GameResult {
    let args = Args::parse();
    logger::init(args.log_level);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    info!(
        "starting {}x{} board, tick {} ms, seed {:?}",
        config.width, config.height, config.tick_interval_ms, config.seed
    );

    let (width, height) = config.screen_size();
    let window_setup = ggez::conf::WindowSetup::default()
        .title("Snake")
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(width, height)
        .resizable(false);

    let (ctx, event_loop) = ggez::ContextBuilder::new("grid_snake", "grid_snake")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    let app = SnakeApp::new(&config);
    event::run(ctx, event_loop, app)
}
