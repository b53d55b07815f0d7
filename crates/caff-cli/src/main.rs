use std::path::Path;

use anyhow::{Context, Result};
use caff_core::Session;
use caff_store::SnapshotStore;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use caff_cli::commands::{add, clear, duplicate, edit, probe, remove, series, set, status};
use caff_cli::{Cli, Commands, Config, SetCommand};

/// Load config and rehydrate the session from the persisted snapshot,
/// starting fresh when none exists or it fails to parse.
fn load_session(config_path: Option<&Path>) -> Result<(Session, SnapshotStore)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let store = SnapshotStore::new(&config.snapshot_path);
    let session = match store.load() {
        Ok(Some(snapshot)) => Session::from_snapshot(&snapshot, config.time_basis),
        Ok(None) => fresh_session(&config),
        Err(e) => {
            // The load boundary degrades gracefully: a broken snapshot is
            // ignored rather than fatal, matching the original surface.
            tracing::warn!(error = %e, "ignoring unreadable snapshot");
            fresh_session(&config)
        }
    };
    Ok((session, store))
}

fn fresh_session(config: &Config) -> Session {
    Session::new(config.time_basis, chrono::Local::now().date_naive())
}

fn save(store: &SnapshotStore, session: &Session) -> Result<()> {
    store
        .save(&session.snapshot())
        .context("failed to save snapshot")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Add { fields }) => {
            let (mut session, store) = load_session(cli.config.as_deref())?;
            add::run(&mut session, fields)?;
            save(&store, &session)?;
        }
        Some(Commands::Duplicate { id }) => {
            let (mut session, store) = load_session(cli.config.as_deref())?;
            duplicate::run(&mut session, *id)?;
            save(&store, &session)?;
        }
        Some(Commands::Remove { id }) => {
            let (mut session, store) = load_session(cli.config.as_deref())?;
            remove::run(&mut session, *id)?;
            save(&store, &session)?;
        }
        Some(Commands::Edit { id, fields }) => {
            let (mut session, store) = load_session(cli.config.as_deref())?;
            edit::run(&mut session, *id, fields)?;
            save(&store, &session)?;
        }
        Some(Commands::Set { setting }) => {
            let (mut session, store) = load_session(cli.config.as_deref())?;
            match setting {
                SetCommand::HalfLife { selection, hours } => {
                    set::half_life(&mut session, *selection, *hours)?;
                }
                SetCommand::StartDate { date } => {
                    set::start_date(&mut session, *date)?;
                }
            }
            save(&store, &session)?;
        }
        Some(Commands::Status) => {
            let (session, _store) = load_session(cli.config.as_deref())?;
            status::run(&session)?;
        }
        Some(Commands::Series { json }) => {
            let (session, _store) = load_session(cli.config.as_deref())?;
            series::run(&session, *json)?;
        }
        Some(Commands::Probe { time, date, day }) => {
            let (session, _store) = load_session(cli.config.as_deref())?;
            probe::run(&session, *time, *date, *day)?;
        }
        Some(Commands::Clear) => {
            let (mut session, store) = load_session(cli.config.as_deref())?;
            clear::run(&mut session)?;
            save(&store, &session)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
