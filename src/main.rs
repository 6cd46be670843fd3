mod cli;
mod output;

use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cclean::logfile::{self, MAX_LOG_SIZE};
use cclean::{
    disk_info, utils, AuditEvent, AuditSink, CleanupEngine, CleanupOutcome, LocalFileSystem,
    Mode, PathConfig, TracingAudit,
};

use cli::{Cli, Command, Target};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("Fatal error: {err:#}");
            eprintln!("Fatal error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let log_file = logfile::open(&cli.log, MAX_LOG_SIZE)
        .with_context(|| format!("cannot open log file {}", cli.log.display()))?;

    let default_filter = if cli.verbose { "cclean=debug" } else { "cclean=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(log_file));

    let console_layer = (!cli.quiet).then(|| {
        let level = if cli.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        };
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(level)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode> {
    init_logging(&cli)?;

    let (target, mode, dry_run, skip_confirm) = match cli.command {
        Command::Scan { category } => (category, Mode::Scan, false, true),
        Command::Clean {
            category,
            dry_run,
            yes,
        } => (category, Mode::Clean, dry_run, yes || dry_run || cli.quiet),
    };

    let elevated = utils::is_elevated();
    if !cli.quiet {
        output::print_banner();
        let disk = disk_info::get_disk_info(&disk_info::system_volume());
        output::print_system_info(elevated, &cli.log, disk.as_ref(), dry_run);
    }

    let audit: Arc<dyn AuditSink> = Arc::new(TracingAudit);
    let started = Instant::now();
    audit.record(AuditEvent::SessionStarted {
        version: cclean::VERSION,
        elevated,
    });

    let mut engine = CleanupEngine::new(
        Box::new(LocalFileSystem::new()),
        Arc::clone(&audit),
        PathConfig::builtin(),
    );
    engine.set_dry_run(dry_run);
    engine.set_verbose(cli.verbose);
    engine.set_jobs(cli.jobs);
    let display = output::ProgressDisplay::new();
    if !cli.quiet {
        engine.set_progress_sink(display.clone());
    }

    let finish = |code: ExitCode| {
        audit.record(AuditEvent::SessionEnded {
            elapsed: started.elapsed(),
        });
        code
    };

    if mode == Mode::Clean && !dry_run {
        if !elevated && !cli.quiet {
            output::print_warning(
                "Running without administrator privileges may limit cleanup effectiveness. \
                 Some system files may not be accessible.",
            );
            println!();
        }

        if !skip_confirm {
            output::print_info("Performing initial scan...");
            let scan = execute(&engine, target, Mode::Scan);
            display.finish();
            if scan.files_scanned() == 0 {
                println!("No files found to clean.");
                return Ok(finish(ExitCode::SUCCESS));
            }
            if !output::confirm_cleanup(&scan).context("cannot read confirmation")? {
                println!("Cleanup cancelled by user.");
                return Ok(finish(ExitCode::SUCCESS));
            }
        }
    }

    let outcome = execute(&engine, target, mode);
    display.finish();
    let operation = match (mode, dry_run) {
        (Mode::Scan, _) => "Scan",
        (Mode::Clean, true) => "Dry Run",
        (Mode::Clean, false) => "Cleanup",
    };

    if !cli.quiet {
        output::print_result(&outcome, operation);
    }

    let code = if outcome.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };
    Ok(finish(code))
}

/// Run the selected category, or all of them.
fn execute(engine: &CleanupEngine, target: Target, mode: Mode) -> CleanupOutcome {
    match target.category() {
        Some(category) => engine.run(category, mode),
        None => engine.run_all(mode),
    }
}
