use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use funlearn::app::App;
use funlearn::build_info;
use funlearn::config::{self, QuizConfig};
use funlearn::constants::TICK_INTERVAL_MS;
use funlearn::input::{handle_input, map_key, InputResult};
use funlearn::logging;
use funlearn::ui::{self, celebration::Celebrations};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Parsed command-line options.
#[derive(Debug, Default)]
struct Options {
    seed: Option<u64>,
    config_path: Option<PathBuf>,
}

fn print_help() {
    println!("Fun Learning - quiz games for little ones\n");
    println!("Usage: funlearn [options]\n");
    println!("Options:");
    println!("  --seed <n>       Use a fixed random seed");
    println!("  --config <path>  Read settings from <path> instead of ~/.funlearn/config.json");
    println!("  --version, -v    Show version information");
    println!("  --help, -h       Show this help message");
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'funlearn --help' for usage.");
    std::process::exit(1);
}

fn parse_args() -> Options {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => match args.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => options.seed = Some(seed),
                _ => usage_error("--seed needs a number"),
            },
            "--config" => match args.next() {
                Some(path) => options.config_path = Some(PathBuf::from(path)),
                None => usage_error("--config needs a path"),
            },
            other => usage_error(&format!("Unknown option: {}", other)),
        }
    }

    options
}

fn load_config(options: &Options) -> QuizConfig {
    let path = options
        .config_path
        .clone()
        .or_else(config::default_config_path);

    let Some(path) = path else {
        return QuizConfig::default();
    };

    match QuizConfig::load_from(&path) {
        Ok(config) => {
            log::debug!("config: {:?}", config);
            config
        }
        Err(e) => {
            log::error!("config load failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() -> io::Result<()> {
    let options = parse_args();

    if let Some(dir) = config::data_dir() {
        if let Err(e) = logging::init_logging(&dir) {
            eprintln!("Warning: could not start logging: {}", e);
        }
    }

    let config = load_config(&options);
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!("starting {} (seed: {:?})", build_info::version_line(), options.seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, App::new(config), &mut rng);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    println!("Goodbye! 👋");
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut celebrations = Celebrations::new();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app, &celebrations))?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                let input = map_key(key);
                match handle_input(&mut app, input, rng) {
                    Ok(InputResult::Quit) => break,
                    Ok(InputResult::Continue) => {}
                    Err(e) => {
                        log::error!("could not start session: {}", e);
                        app.back_to_menu();
                    }
                }
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_tick);
        last_tick = now;

        app.tick(elapsed);
        celebrations.trigger(app.take_celebrations(), rng);
        celebrations.update(elapsed.as_secs_f64());
    }

    log::info!(
        "exiting after {} games ({} stars)",
        app.totals().games_played,
        app.totals().cumulative_score
    );
    Ok(())
}
