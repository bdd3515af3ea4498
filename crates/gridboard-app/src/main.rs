//! Main application entry point.

use clap::{Parser, ValueEnum};
use gridboard_app::{Session, SessionError, ShortcutRegistry};
use gridboard_core::EngineConfig;
use gridboard_render::GridStyle;
use kurbo::Size;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "gridboard",
    about = "Replay a GridBoard session script and print the resulting shapes"
)]
struct Cli {
    /// JSON-lines event script; reads stdin when omitted.
    script: Option<PathBuf>,

    /// Engine configuration file (JSON).
    #[arg(long, env = "GRIDBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Build the final frame for a viewport of this width.
    #[arg(long, requires = "height")]
    width: Option<f64>,

    #[arg(long, requires = "width")]
    height: Option<f64>,

    /// Grid style used when rendering the final frame.
    #[arg(long, value_enum, default_value_t = Grid::Lines)]
    grid: Grid,

    /// Print the keyboard shortcuts and exit.
    #[arg(long)]
    shortcuts: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Grid {
    None,
    Lines,
    Dots,
}

impl From<Grid> for GridStyle {
    fn from(grid: Grid) -> Self {
        match grid {
            Grid::None => GridStyle::None,
            Grid::Lines => GridStyle::Lines,
            Grid::Dots => GridStyle::Dots,
        }
    }
}

fn run(cli: Cli) -> Result<(), SessionError> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let mut session = Session::new(config);
    match &cli.script {
        Some(path) => session.run(BufReader::new(File::open(path)?))?,
        None => session.run(io::stdin().lock())?,
    }

    let draw_commands = match (cli.width, cli.height) {
        (Some(width), Some(height)) => {
            let list = session.render(Size::new(width, height), cli.grid.into())?;
            Some(list.commands().len())
        }
        _ => None,
    };

    println!("{}", session.summary_json(draw_commands)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting GridBoard");

    let cli = Cli::parse();
    if cli.shortcuts {
        ShortcutRegistry::print_all();
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
