use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dragonflap::assets::{AssetSet, FsAssetProvider, GateStatus, StartupGate};
use dragonflap::build_info;
use dragonflap::input::{map_key, DriverCommand, InputAction};
use dragonflap::ui::{self, compute_layout, screens, TerminalGeometry};
use dragonflap::utils::logging;
use dragonflap::{Driver, GameConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

type Term = Terminal<CrosstermBackend<Stdout>>;

struct CliOptions {
    assets_dir: Option<PathBuf>,
    seed: Option<u64>,
    write_config: bool,
}

enum Outcome {
    Quit,
    StartupFailed(String),
}

fn print_help() {
    println!("Dragonflap - guide a dragon through the pillars\n");
    println!("Usage: dragonflap [options]\n");
    println!("Options:");
    println!("  --assets DIR   Load sprites from DIR (default: assets)");
    println!("  --seed N       Fixed seed for pillar placement");
    println!("  --write-config Save the active settings to ~/.dragonflap/config.json");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
    println!();
    println!("Keys: Space/Up flap, Enter begin/restart, P pause, Esc quit");
}

fn parse_args() -> CliOptions {
    let mut options = CliOptions {
        assets_dir: None,
        seed: None,
        write_config: false,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--assets" => match args.next() {
                Some(dir) => options.assets_dir = Some(PathBuf::from(dir)),
                None => {
                    eprintln!("--assets needs a directory");
                    std::process::exit(1);
                }
            },
            "--seed" => match args.next().and_then(|s| s.parse().ok()) {
                Some(seed) => options.seed = Some(seed),
                None => {
                    eprintln!("--seed needs a non-negative integer");
                    std::process::exit(1);
                }
            },
            "--write-config" => options.write_config = true,
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'dragonflap --help' for usage.");
                std::process::exit(1);
            }
        }
    }
    options
}

fn main() -> io::Result<()> {
    let options = parse_args();

    let log_path = match logging::init() {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };
    log::info!("{}", build_info::version_string());

    let mut config = GameConfig::load_or_default();
    if let Some(dir) = options.assets_dir {
        config.assets_dir = dir;
    }
    if options.write_config {
        return write_config(&config);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;

    let outcome = run(&mut terminal, config, options.seed);

    // Restore the terminal before reporting anything
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match outcome? {
        Outcome::Quit => {
            log::info!("quit");
            Ok(())
        }
        Outcome::StartupFailed(message) => {
            eprintln!("{}", message);
            if let Some(path) = log_path {
                eprintln!("Details in {}", path.display());
            }
            std::process::exit(1);
        }
    }
}

fn write_config(config: &GameConfig) -> io::Result<()> {
    let path = GameConfig::default_path()?;
    match config.save_to(&path) {
        Ok(()) => {
            println!("Wrote {}", path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(terminal: &mut Term, config: GameConfig, seed: Option<u64>) -> io::Result<Outcome> {
    let assets = match wait_for_assets(terminal, &config)? {
        Ok(assets) => assets,
        Err(outcome) => return Ok(outcome),
    };

    let rng = match seed {
        Some(seed) => {
            log::info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let layout = compute_layout(terminal.size()?);
    let geometry = TerminalGeometry::new(layout.play, &config);
    let mut driver = Driver::new(config.clone(), &geometry, rng);
    let frame_budget = Duration::from_millis(config.tick_interval_ms);
    let mut last_frame = Instant::now();

    loop {
        let layout = compute_layout(terminal.size()?);
        let geometry = TerminalGeometry::new(layout.play, &config);
        let too_small = screens::is_too_small(layout.outer);
        driver.set_suspended(too_small);

        // Gather every key that arrived since the last frame
        if event::poll(frame_budget)? {
            loop {
                if let Event::Key(key) = event::read()? {
                    for action in map_key(key) {
                        driver.handle(action);
                    }
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
        if driver.should_quit() {
            return Ok(Outcome::Quit);
        }

        let now = Instant::now();
        driver.frame(now - last_frame, &geometry);
        last_frame = now;

        let snapshot = driver.snapshot();
        let paused = driver.is_paused();
        terminal.draw(|f| {
            if too_small {
                screens::render_too_small(f);
            } else {
                ui::render_game(f, &layout, &geometry, &snapshot, &assets, paused);
            }
        })?;
    }
}

/// Show the loading screen until the background load finishes.
///
/// On failure the error is shown until a key is pressed and the outcome to
/// return is handed back instead of the assets.
fn wait_for_assets(
    terminal: &mut Term,
    config: &GameConfig,
) -> io::Result<Result<AssetSet, Outcome>> {
    let mut gate = StartupGate::spawn(FsAssetProvider::new(config.assets_dir.clone()));
    loop {
        match gate.poll() {
            GateStatus::Loading => {
                let elapsed = gate.elapsed();
                terminal.draw(|f| screens::render_loading(f, elapsed))?;
                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key) = event::read()? {
                        let quit = map_key(key)
                            .contains(&InputAction::Driver(DriverCommand::Quit));
                        if quit {
                            return Ok(Err(Outcome::Quit));
                        }
                    }
                }
            }
            GateStatus::Ready(assets) => return Ok(Ok(assets)),
            GateStatus::Failed(e) => {
                let message = e.to_string();
                terminal.draw(|f| screens::render_load_failed(f, &message))?;
                loop {
                    if let Event::Key(_) = event::read()? {
                        break;
                    }
                }
                return Ok(Err(Outcome::StartupFailed(message)));
            }
        }
    }
}
