use std::{
    io::{self, stdin},
    path::PathBuf,
    time::Instant,
};

use anyhow::Context;
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use wordrun::{
    app::{App, UI_REFRESH},
    config::{ConfigStore, FileConfigStore, Overrides},
    logging,
    runtime::{AppEventSource, CrosstermEventSource, FixedTicker, Runner, Ticker},
    word_set::WordMode,
    Error,
};

/// countdown typing trainer: type the words before the clock runs out
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {
    /// number of words to type
    #[clap(short = 'w', long = "words", value_enum)]
    mode: Option<WordMode>,

    /// countdown length in seconds [default: 30]
    #[clap(short = 's', long = "seconds")]
    duration_secs: Option<u32>,

    /// custom word list, one word per line
    #[clap(long)]
    vocabulary: Option<PathBuf>,

    /// read settings from this file instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    /// store the effective settings as the new defaults, then start
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            mode: self.mode,
            duration_secs: self.duration_secs,
            vocabulary_path: self.vocabulary.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let _log_guard = logging::init();

    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let config = store
        .load()
        .with_context(|| format!("loading {}", store.path().display()))?
        .with_overrides(cli.overrides());

    let mut app = App::from_config(&config).context("preparing session")?;

    if cli.save_config {
        store.save(&config).context("saving config")?;
        tracing::info!(path = %store.path().display(), "config saved");
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::new(UI_REFRESH));
    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(%err, "event loop failed");
    }
    result.context("running the typing session")
}

fn start_tui<B: Backend, E: AppEventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> wordrun::Result<()> {
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    while !app.should_quit() {
        let event = runner.step(app.wakeup(Instant::now()));
        if app.handle_event(event, Instant::now()) {
            terminal.draw(|f| f.render_widget(&*app, f.area()))?;
        }
    }

    if app.input_closed() {
        return Err(Error::Terminal(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "terminal event stream closed",
        )));
    }
    Ok(())
}
