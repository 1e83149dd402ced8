use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use connect_four::config::AppConfig;
use connect_four::game::Player;
use connect_four::ui::{render, App};

/// Config file picked up from the working directory when `--config` is not given.
const DEFAULT_CONFIG: &str = "connect_four.toml";

/// Connect Four, aka. Four Up, Plot Four, Find Four, Four in a Row, Drop Four.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four in the terminal")]
struct Cli {
    /// Play against the computer
    #[arg(short = 's', long)]
    single_player: bool,

    /// Width of the board, 0 for the terminal width [default: 7]
    #[arg(short = 'x', long)]
    width: Option<usize>,

    /// Height of the board, 0 for the terminal height [default: 6]
    #[arg(short = 'y', long)]
    height: Option<usize>,

    /// Connect length, how many must line up to win [default: 4]
    #[arg(short = 'c', long, value_parser = clap::value_parser!(u8).range(3..=15))]
    length: Option<u8>,

    /// Show how to play and exit
    #[arg(short = 'r', long)]
    how_to_play: bool,

    /// Log the computer's reasoning and keep earlier turns on screen
    #[arg(long)]
    debug: bool,

    /// Let the computer play both sides
    #[arg(long = "self")]
    self_play: bool,

    /// Path to TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Play one game and return the process exit code.
fn run(cli: Cli) -> Result<i32> {
    if cli.how_to_play {
        print!("{}", render::how_to_play());
        return Ok(0);
    }

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::load_or_default(Path::new(DEFAULT_CONFIG))
            .with_context(|| format!("loading config from {}", DEFAULT_CONFIG))?,
    };

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(length) = cli.length {
        config.board.connect_length = usize::from(length);
    }
    config.game.single_player |= cli.single_player || cli.self_play;
    config.game.self_play |= cli.self_play;
    config.game.debug |= cli.debug;
    config.validate()?;

    let settings = config
        .board
        .resolve(crossterm::terminal::size)
        .context("sizing the board")?;

    let first = if rand::random::<bool>() {
        Player::Red
    } else {
        Player::Blue
    };
    log::debug!(
        "{}x{} board, connect {}, {} starts",
        settings.width,
        settings.height,
        settings.connect_length,
        first.name()
    );

    let stdout = io::stdout();
    let colour = stdout.is_terminal();
    let mut app = App::new(settings, &config.game, first, io::stdin().lock(), stdout.lock());
    app.set_colour(colour);

    let end = app.run().context("running the game")?;
    Ok(end.exit_code())
}
