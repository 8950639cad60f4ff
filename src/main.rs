mod app;
mod report;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mortgage_explorer::config::LoanArgs;
use mortgage_explorer::{amortization_schedule, evaluate};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::EnvFilter;

use app::App;

/// Mortgage affordability explorer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Tracing filter, e.g. "info" or "mortgage_explorer=debug"
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    loan: LoanArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive slider screen (default)
    Explore,
    /// Evaluate once and print the figures
    Report {
        #[arg(long)]
        json: bool,
    },
    /// Print the amortization schedule
    Schedule {
        /// Write the schedule as CSV to this path instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn init_tracing(level: &str, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = match (log_file, interactive) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        // Anything written to the terminal would corrupt the alternate screen.
        (None, true) => builder.with_writer(io::sink).try_init(),
        (None, false) => builder.with_writer(io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Explore);
    let interactive = matches!(command, Command::Explore);
    init_tracing(&cli.log_level, cli.log_file.as_deref(), interactive)?;

    let params = cli.loan.to_params();
    match command {
        Command::Explore => run_tui(App::new(params)),
        Command::Report { json } => {
            let result = evaluate(&params)?;
            let stdout = io::stdout().lock();
            if json {
                report::write_json(stdout, &params, &result)
            } else {
                report::write_text(stdout, &params, &result)
            }
        }
        Command::Schedule { csv } => {
            let rows = amortization_schedule(&params)?;
            match csv {
                Some(path) => {
                    report::export_schedule_csv(&rows, &path)?;
                    tracing::info!(path = %path.display(), rows = rows.len(), "exported schedule");
                    Ok(())
                }
                None => report::write_schedule_text(io::stdout().lock(), &rows),
            }
        }
    }
}

fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, &mut app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
            if app.should_quit {
                return Ok(());
            }
        }
    }
}
