//! menudrawer — bottom-sheet drill-down menu in the terminal.
//!
//! Commands:
//! - (none) — run the drawer UI
//! - `check <file>` — validate a menu file and print its outline

use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use menudrawer_core::loader;
use menudrawer_tui::{input, logging, outline, sample_menu, ui, AppState, Config, Theme};

#[derive(Parser)]
#[command(
    name = "menudrawer",
    about = "Bottom-sheet drill-down menu for the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Menu file (.toml or .json). Defaults to the built-in menu.
    #[arg(long, global = true)]
    menu: Option<PathBuf>,

    /// Config file. Defaults to <config_dir>/menudrawer/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a menu file and print its outline.
    Check {
        /// Menu file to check.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let matches = Cli::command().after_long_help(input::help_text()).get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let config = load_config(cli.config.as_deref())?;
    let log_file = cli.log_file.clone().or_else(|| config.log.file.clone());
    logging::init(log_file.as_deref(), &config.log.level)?;

    if let Some(Commands::Check { path }) = &cli.command {
        return check(path);
    }

    let tree = match cli.menu.as_ref().or(config.menu.path.as_ref()) {
        Some(path) => loader::load(path)
            .with_context(|| format!("loading menu {}", path.display()))?,
        None => sample_menu::tree(),
    };
    info!(nodes = tree.len(), "starting drawer");

    let mut app = AppState::new(tree, config.drawer.clone(), Theme::from_mode(&config.theme.mode));
    run(&mut app)
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            anyhow::ensure!(path.exists(), "config file {} does not exist", path.display());
            Ok(Config::load(path)?)
        }
        None => match Config::default_path() {
            Some(path) => Ok(Config::load(&path)?),
            None => Ok(Config::default()),
        },
    }
}

fn check(path: &Path) -> Result<()> {
    let tree = loader::load(path).with_context(|| format!("checking menu {}", path.display()))?;
    print!("{}", outline::outline(&tree));
    println!("\n{}: {}, OK", path.display(), outline::summary(&tree));
    Ok(())
}

fn run(app: &mut AppState) -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render, remembering the area for mouse hit-testing.
        terminal.draw(|f| {
            app.viewport = f.area();
            ui::draw(f, app);
        })?;

        // 2. Wait for input (50ms timeout keeps resizes responsive).
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
