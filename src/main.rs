//! Lined - A minimal interactive line editor.
//!
//! # Usage
//!
//! ```bash
//! lined notes.txt
//! lined --line-size 256 notes.txt
//! lined --quiet
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use lined::app::App;
use lined::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use lined::perf;

/// A minimal interactive line editor
#[derive(Parser, Debug)]
#[command(name = "lined", version, about, long_about = None)]
struct Cli {
    /// File to load into the buffer at startup
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Longest line in bytes before a forced break is reported
    #[arg(long, value_name = "BYTES")]
    line_size: Option<usize>,

    /// Buffer capacity allocated at startup
    #[arg(long, value_name = "BYTES")]
    initial_capacity: Option<usize>,

    /// Bytes added each time the buffer grows
    #[arg(long, value_name = "BYTES")]
    grow_step: Option<usize>,

    /// Do not print first-run hints
    #[arg(short, long)]
    quiet: bool,

    /// Print the time taken by each command
    #[arg(long)]
    perf: bool,

    /// Append session events (commands, growth, file I/O) to a file
    #[arg(long, value_name = "PATH")]
    session_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            line_size: self.line_size,
            initial_capacity: self.initial_capacity,
            grow_step: self.grow_step,
            quiet: self.quiet,
            perf: self.perf,
            session_log: self.session_log.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging; stdout carries editor output only
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    let limits = effective.limits()?;

    perf::set_enabled(effective.perf);
    if let Err(err) = perf::set_session_log_path(effective.session_log.as_deref()) {
        eprintln!(
            "[warn] Failed to open session log {}: {}",
            effective
                .session_log
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    let mut app = App::new(limits)
        .context("Failed to allocate the edit buffer")?
        .with_quiet(effective.quiet)
        .with_startup_file(cli.file);

    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(stdin.lock(), stdout.lock(), io::stderr())
        .context("Editor error")
}
