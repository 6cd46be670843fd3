use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use cclean::logfile::DEFAULT_LOG_FILE;
use cclean::Category;

#[derive(Parser)]
#[command(
    name = "cclean",
    about = "Find and remove temporary files, browser caches, system logs and recycle bin contents",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log every file found or deleted
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress console output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log file to append to
    #[arg(short, long, global = true, default_value = DEFAULT_LOG_FILE)]
    pub log: PathBuf,

    /// Locations of a category processed at once
    #[arg(short, long, global = true, default_value_t = 1)]
    pub jobs: usize,
}

#[derive(Subcommand)]
pub enum Command {
    /// Measure reclaimable space without deleting anything
    Scan {
        /// Only scan a specific category
        #[arg(long, short, value_enum, default_value_t = Target::All)]
        category: Target,
    },

    /// Delete reclaimable files
    Clean {
        /// Only clean a specific category
        #[arg(long, short, value_enum, default_value_t = Target::All)]
        category: Target,

        /// Show what would be deleted without deleting
        #[arg(long, short)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// Temporary files
    Temp,
    /// Browser caches
    Browser,
    /// OS logs, dumps and reports
    System,
    /// Recycle bin contents
    RecycleBin,
    /// Every category
    All,
}

impl Target {
    /// The single category selected, or `None` for all of them.
    pub fn category(self) -> Option<Category> {
        match self {
            Target::Temp => Some(Category::TempFiles),
            Target::Browser => Some(Category::BrowserCache),
            Target::System => Some(Category::SystemFiles),
            Target::RecycleBin => Some(Category::RecycleBin),
            Target::All => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_flag_selects_one_category() {
        let cli = Cli::try_parse_from(["cclean", "clean", "--category", "recycle-bin", "--dry-run"])
            .unwrap();
        match cli.command {
            Command::Clean {
                category, dry_run, ..
            } => {
                assert_eq!(category.category(), Some(Category::RecycleBin));
                assert!(dry_run);
            }
            Command::Scan { .. } => panic!("expected clean"),
        }
    }

    #[test]
    fn category_defaults_to_all() {
        let cli = Cli::try_parse_from(["cclean", "scan"]).unwrap();
        let Command::Scan { category } = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(category, Target::All);
        assert_eq!(category.category(), None);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["cclean", "-v", "-q", "scan"]).is_err());
    }
}
