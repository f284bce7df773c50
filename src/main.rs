use clap::Parser;
use std::fs::OpenOptions;
use std::io;
use std::process::ExitCode;
use std::sync::Mutex;
use stepform::AppState;
use stepform::Wizard;
use stepform::config::{self, Cli, ConfigError};
use stepform::runtime::Runtime;
use stepform::sink::LogSink;
use stepform::terminal::Terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&cli) {
        eprintln!("Error: failed to open log file: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) -> io::Result<()> {
    // The UI owns the terminal, so logs only go to a file.
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut wizard = Wizard::default();
    if let Some(path) = &cli.prefill {
        let prefill = config::load_prefill(path)?;
        config::apply_prefill(&mut wizard, &prefill)?;
        info!(path = %path.display(), "applied prefill");
    }

    let state = AppState::new(wizard, Box::new(LogSink::new()))
        .with_exit_on_submit(cli.exit_on_submit);
    let mut runtime = Runtime::new(state, Terminal::new()?);
    runtime.run()?;

    let mut state = runtime.into_state();
    if let Some(payload) = state.take_last_submission() {
        let rendered = config::render_output(&payload, cli.format)?;
        println!("{}", rendered.trim_end());
    }
    Ok(())
}
