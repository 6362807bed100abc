use anyhow::{bail, Context};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::LevelFilter;
use minigames::arcade::Arcade;
use minigames::build_info;
use minigames::config::{ArcadeConfig, ConfigSource, CONFIG_FILE};
use minigames::core::FrameClock;
use minigames::games::GameKind;
use minigames::input::{handle_key, InputResult};
use minigames::ui::draw_ui;
use minigames::utils::{logging, persistence};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct Cli {
    config: Option<PathBuf>,
    game: Option<GameKind>,
    seed: Option<u64>,
    dump_config: bool,
    init_config: bool,
}

enum Action {
    Run(Cli),
    Help,
    Version,
}

fn print_help() {
    println!("Minigames - Terminal Arcade\n");
    println!("Usage: minigames [options]\n");
    println!("Options:");
    println!("  --config <path>  Load settings from <path> instead of ~/.minigames/{CONFIG_FILE}");
    println!("  --dump-config    Print the effective settings as JSON and exit");
    println!("  --init-config    Write the default settings to ~/.minigames/{CONFIG_FILE}");
    println!("  --game <name>    Open snake, flappy, racer, helix or puzzle directly");
    println!("  --seed <n>       Seed the random number generator");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Action> {
    let mut cli = Cli::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Action::Help),
            "--version" | "-v" => return Ok(Action::Version),
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                cli.config = Some(PathBuf::from(path));
            }
            "--game" => {
                let name = args.next().context("--game needs a name")?;
                match GameKind::from_slug(&name) {
                    Some(kind) => cli.game = Some(kind),
                    None => bail!("unknown game: {name}"),
                }
            }
            "--seed" => {
                let seed = args.next().context("--seed needs a number")?;
                cli.seed = Some(seed.parse().with_context(|| format!("invalid seed: {seed}"))?);
            }
            "--dump-config" => cli.dump_config = true,
            "--init-config" => cli.init_config = true,
            other => bail!("unknown option: {other}\nRun 'minigames --help' for usage."),
        }
    }
    Ok(Action::Run(cli))
}

fn load_config(cli: &Cli) -> anyhow::Result<ArcadeConfig> {
    let (config, source) = match &cli.config {
        Some(path) => (ArcadeConfig::load(path)?, ConfigSource::File(path.clone())),
        None => ArcadeConfig::load_default()?,
    };
    match source {
        ConfigSource::Defaults => log::info!("using default settings"),
        ConfigSource::File(path) => log::info!("settings loaded from {}", path.display()),
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = match parse_args(std::env::args().skip(1))? {
        Action::Help => {
            print_help();
            return Ok(());
        }
        Action::Version => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Action::Run(cli) => cli,
    };

    if cli.init_config {
        let path = persistence::save_json(CONFIG_FILE, &ArcadeConfig::default(), false)
            .context("could not write default settings")?;
        println!("Wrote default settings to {}", path.display());
        return Ok(());
    }

    let log_path = logging::init(LevelFilter::Info).context("could not open log file")?;
    log::info!("{} starting", build_info::version_line());

    let config = load_config(&cli)?;
    if cli.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let rng = match cli.seed {
        Some(seed) => {
            log::info!("rng seeded with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut arcade = Arcade::new(config, rng);
    if let Some(kind) = cli.game {
        arcade.open(kind);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut arcade);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("exiting with error: {e:#}");
        eprintln!("Log: {}", log_path.display());
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    arcade: &mut Arcade,
) -> anyhow::Result<()> {
    let mut clock = FrameClock::new(Instant::now());
    loop {
        terminal.draw(|frame| draw_ui(frame, arcade))?;

        if event::poll(arcade.poll_timeout())? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press
                    && handle_key(key, arcade) == InputResult::Quit
                {
                    log::info!("quit");
                    return Ok(());
                }
            }
        }

        arcade.pump(clock.elapsed_ms(Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_runs_menu() {
        match parse_args(args(&[])).unwrap() {
            Action::Run(cli) => assert_eq!(cli, Cli::default()),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_game_and_seed() {
        match parse_args(args(&["--game", "helix", "--seed", "42"])).unwrap() {
            Action::Run(cli) => {
                assert_eq!(cli.game, Some(GameKind::Helix));
                assert_eq!(cli.seed, Some(42));
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_help_wins() {
        assert!(matches!(
            parse_args(args(&["--seed", "1", "--help"])).unwrap(),
            Action::Help
        ));
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(args(&["--game", "tetris"])).is_err());
        assert!(parse_args(args(&["--seed", "abc"])).is_err());
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["--frobnicate"])).is_err());
    }
}
