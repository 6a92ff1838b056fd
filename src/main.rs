use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{poll as event_poll, read as event_read, Event as CrosstermEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use std::{path::PathBuf, time::Duration};
use tabletop::{app::App, config::Config, provider, services::tracing_setup};

/// Browse and edit tabular data in the terminal
#[derive(Parser, Debug)]
#[command(name = "tabletop")]
#[command(about = "Browse tables, schema and indices; edit cells in place", long_about = None)]
#[command(version)]
struct Args {
    /// JSON dataset to open instead of the built-in sample data
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Maximum number of rows fetched per table
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Path to log file (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

/// Config file (explicit path or default location) with CLI overrides applied
fn load_config(args: &Args) -> AnyhowResult<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_or_default(),
    };

    if let Some(data) = &args.data {
        config.data_file = Some(data.clone());
    }
    if let Some(limit) = args.limit {
        config.row_limit = limit;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        let config = load_config(&args)?;
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(tracing_setup::default_log_path);
    tracing_setup::init_global(&log_file);
    tracing::info!("tabletop starting");

    let config = load_config(&args)?;
    let loaded = provider::open_configured(&config);

    let mut terminal = ratatui::try_init().context("Failed to initialize terminal")?;
    let result = run(&mut terminal, config, loaded);
    ratatui::restore();

    match &result {
        Ok(()) => tracing::info!("tabletop exiting"),
        Err(e) => tracing::error!("tabletop exiting with error: {:#}", e),
    }
    result
}

fn run(
    terminal: &mut DefaultTerminal,
    config: Config,
    loaded: provider::LoadedWorkspace,
) -> AnyhowResult<()> {
    let size = terminal.size().context("Failed to query terminal size")?;
    tracing::info!("Terminal size: {}x{}", size.width, size.height);

    let mut app = App::new(
        loaded.workspace,
        config,
        loaded.source_label,
        size.width,
        size.height,
    )
    .with_status_message(loaded.notice);

    let mut needs_render = true;
    loop {
        if needs_render {
            terminal
                .draw(|frame| app.render(frame))
                .context("Failed to draw frame")?;
            needs_render = false;
        }

        if app.should_quit() {
            break;
        }

        if event_poll(Duration::from_millis(250))? {
            match event_read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code, key.modifiers);
                    needs_render = true;
                }
                CrosstermEvent::Resize(width, height) => {
                    app.handle_resize(width, height);
                    needs_render = true;
                }
                _ => {}
            }
        }
    }
    Ok(())
}
