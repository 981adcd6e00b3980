use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use quiz_core::model::GameSettings;
use services::{Clock, GameLoopService};
use ui::context::build_app_context;
use ui::{App, UiApp};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidTurns { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidTurns { raw } => write!(f, "invalid --turns value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    game_loop: Arc<GameLoopService>,
}

impl UiApp for DesktopApp {
    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

struct Args {
    seed: Option<u64>,
    turns: Option<u32>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app [-- --seed <u64>] [--turns <n>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed <u64>   pin the shuffle so every game replays the same rounds");
    eprintln!("  --turns <n>    questions per game, 1..=1000 (default: 8)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLAGS_SEED, FLAGS_TURNS");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut seed = std::env::var("FLAGS_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());
        let mut turns = std::env::var("FLAGS_TURNS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--turns" => {
                    let value = require_value(args, "--turns")?;
                    let parsed: u32 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidTurns { raw: value.clone() })?;
                    turns = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { seed, turns })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let mut settings = GameSettings::classic();
    if let Some(turns) = parsed.turns {
        settings = settings.with_turns_per_game(turns)?;
    }

    let mut game_loop = GameLoopService::new(Clock::default(), settings);
    if let Some(seed) = parsed.seed {
        game_loop = game_loop.with_seed(seed);
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        game_loop: Arc::new(game_loop),
    });
    let context = build_app_context(&app);

    // The whole game is one fixed screen, so the window stays at phone-ish
    // proportions and is not resizable. On macOS, Dioxus/tao can default to
    // an always-on-top window in some dev setups; disable it explicitly.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Fun with Flags")
            .with_inner_size(LogicalSize::new(420.0, 640.0))
            .with_resizable(false)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
