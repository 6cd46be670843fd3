use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::rc::Rc;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cclean::disk_info::DiskInfo;
use cclean::utils::{display_path, format_size};
use cclean::{CleanupOutcome, ProgressSink};

pub fn print_banner() {
    println!(
        "{}",
        format!("cclean - Disk Cleanup Tool v{}", cclean::VERSION)
            .bold()
            .cyan()
    );
    println!();
}

pub fn print_system_info(elevated: bool, log_file: &Path, disk: Option<&DiskInfo>, dry_run: bool) {
    println!("{}", "System Information:".bold().white());
    println!(
        "  Admin Rights: {}",
        if elevated { "Yes".green() } else { "No".yellow() }
    );
    println!("  Log File: {}", display_path(log_file).dimmed());
    match disk {
        Some(disk) => println!(
            "  Free Space: {} of {} ({:.1}% used)",
            format_size(disk.available).green(),
            format_size(disk.total),
            disk.usage_percent()
        ),
        None => println!("  Free Space: {}", "unknown".dimmed()),
    }
    if dry_run {
        println!(
            "  Mode: {}",
            "DRY RUN (no files will be deleted)".yellow().bold()
        );
    }
    println!();
}

/// Console progress for engine runs, one bar per run.
///
/// Clones share the same bar, so the binary can keep a handle after giving
/// one to the engine.
#[derive(Clone, Default)]
pub struct ProgressDisplay {
    bar: Rc<RefCell<Option<ProgressBar>>>,
}

impl ProgressDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish whatever bar is still open, e.g. after a run that never
    /// reported 100%.
    pub fn finish(&self) {
        if let Some(bar) = self.bar.borrow_mut().take() {
            bar.finish();
        }
    }
}

impl ProgressSink for ProgressDisplay {
    fn on_progress(&self, label: &str, percent: u8) {
        let mut slot = self.bar.borrow_mut();
        let bar = slot.get_or_insert_with(new_bar);
        bar.set_position(u64::from(percent.min(100)));
        bar.set_message(label.to_string());
        if percent >= 100 {
            bar.finish();
            *slot = None;
        }
    }
}

fn new_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    let style = ProgressStyle::default_bar()
        .template("[{bar:50.green/white}] {pos:>3}% - {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█░");
    bar.set_style(style);
    bar
}

pub fn print_result(outcome: &CleanupOutcome, operation: &str) {
    println!();
    println!("{}", format!("=== {operation} Results ===").bold().white());
    println!("  {:<16} {}", "Files Scanned:", outcome.files_scanned());
    if outcome.files_deleted() > 0 {
        println!("  {:<16} {}", "Files Deleted:", outcome.files_deleted());
    }
    println!(
        "  {:<16} {}",
        "Space Freed:",
        format_size(outcome.bytes_freed()).green().bold()
    );
    if let Some(errors) = outcome.error_summary() {
        println!("  {} {}", "Warnings:".red().bold(), errors.red());
    }
    println!();
}

/// Show what a scan found and ask whether to go ahead with the cleanup.
pub fn confirm_cleanup(scan: &CleanupOutcome) -> io::Result<bool> {
    println!();
    println!("{}", "Scan Summary:".bold().white());
    println!("  Files Found: {}", scan.files_scanned());
    println!(
        "  Space to Free: {}",
        format_size(scan.bytes_freed()).yellow()
    );
    println!();
    print!("Do you want to proceed with cleanup? (y/N): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(matches!(input.trim_start().chars().next(), Some('y' | 'Y')))
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "Warning:".red().bold(), msg.red());
}

pub fn print_info(msg: &str) {
    println!("{} {}", "Info:".cyan().bold(), msg);
}
