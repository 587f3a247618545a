use clap::{Args, Parser, Subcommand};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use flappy::audio::{self, AudioSink};
use flappy::config::ConfigSource;
use flappy::game::{FrameClock, Session};
use flappy::input::{self, InputAction};
use flappy::simulator::{run_simulation, SimConfig};
use flappy::{build_info, logging, ui, AppResult, GameConfig, Viewport};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(
    name = "flappy",
    version = build_info::VERSION,
    about = "Terminal side-scrolling reflex game"
)]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play the game (default)
    Play,
    /// Run headless autopilot games and print a report
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct SimulateArgs {
    /// Number of runs
    #[arg(short = 'n', long, default_value_t = 100)]
    runs: u32,
    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Frames after which a run is cut off
    #[arg(long, default_value_t = 20_000)]
    max_frames: u64,
    /// Viewport width in logical pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Viewport height in logical pixels
    #[arg(long, default_value_t = 480.0)]
    height: f64,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_game(cli.config.as_deref()),
        Command::Simulate(args) => run_simulate(cli.config.as_deref(), &args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("flappy: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_game(config_path: Option<&Path>) -> AppResult<()> {
    let (config, source) = GameConfig::load_with_source(config_path)?;

    match logging::init_file(&config.log_level) {
        Ok(path) => {
            tracing::info!(log = %path.display(), version = build_info::VERSION, "starting")
        }
        Err(e) => eprintln!("Warning: {}", e),
    }
    log_config_source(&source);

    let audio = audio::open_sink(config.sound);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = game_loop(&mut terminal, &config, audio);
    let restored = restore_terminal(&mut terminal);
    result.and(restored)
}

fn log_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::File(path) => tracing::info!(path = %path.display(), "config loaded"),
        ConfigSource::Defaults { missing: Some(path) } => {
            tracing::warn!(path = %path.display(), "no config file, using defaults")
        }
        ConfigSource::Defaults { missing: None } => {
            tracing::warn!("no platform config directory, using defaults")
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> AppResult<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Play-field viewport for the current terminal size. `None` while the
/// terminal is too small to play in.
fn viewport_for(size: Rect, config: &GameConfig) -> Option<Viewport> {
    ui::play_area(size).map(|area| {
        Viewport::from_cells(
            area.width,
            area.height,
            config.cell_width_px,
            config.cell_height_px,
        )
    })
}

fn game_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &GameConfig,
    audio: Box<dyn AudioSink>,
) -> AppResult<()> {
    let initial = viewport_for(terminal.size()?, config).unwrap_or_default();
    let mut session = Session::new(config.physics, initial, audio);
    let mut clock = FrameClock::new(config.frame_ms);
    let frame_len = Duration::from_millis(clock.frame_ms());
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    loop {
        let viewport = viewport_for(terminal.size()?, config);
        if let Some(viewport) = viewport {
            session.resize(viewport);
        }

        let snapshot = session.snapshot();
        terminal.draw(|f| ui::render_game(f, &snapshot))?;

        let timeout = frame_len.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match input::map_event(&event::read()?) {
                Some(InputAction::Primary) => session.handle_input(),
                Some(InputAction::Quit) => break,
                Some(InputAction::Other) | None => {}
            }
        }

        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_frame).as_millis() as u64;
        if elapsed_ms < clock.frame_ms() {
            continue;
        }
        last_frame = now;

        // Hold the simulation while the play field can't be shown
        let frames = clock.advance(elapsed_ms);
        if viewport.is_some() {
            for _ in 0..frames {
                session.tick(&mut rng);
            }
        }
    }

    tracing::info!(score = session.score(), "quit");
    Ok(())
}

fn run_simulate(config_path: Option<&Path>, args: &SimulateArgs) -> AppResult<()> {
    let (config, source) = GameConfig::load_with_source(config_path)?;
    logging::init_stderr("warn")?;
    log_config_source(&source);

    let sim = SimConfig {
        num_runs: args.runs,
        seed: args.seed,
        max_frames_per_run: args.max_frames,
        viewport: Viewport::new(args.width, args.height),
        tuning: config.physics,
    };

    let report = run_simulation(&sim);

    if args.json {
        println!("{}", report.to_json());
        return Ok(());
    }

    println!("Flappy autopilot simulation");
    println!();
    println!("Configuration:");
    println!("  Runs:        {}", sim.num_runs);
    println!("  Max frames:  {}", sim.max_frames_per_run);
    println!(
        "  Viewport:    {}x{}",
        sim.viewport.width, sim.viewport.height
    );
    if let Some(seed) = sim.seed {
        println!("  Seed:        {}", seed);
    }
    println!();
    println!("{}", report.to_text());
    Ok(())
}
