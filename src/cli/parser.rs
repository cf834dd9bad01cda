use crate::core::classify::BulkSelection;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "sweep")]
#[command(about = "Git branch cleanup helper")]
#[command(
    version,
    long_about = "When run without any command, analyzes local branches and walks through an interactive cleanup"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze branches and interactively delete the selected ones
    Clean(CleanArgs),
    /// Show the branch classification without deleting anything
    #[command(alias = "show")]
    Preview(PreviewArgs),
    /// Inspect or reset configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default)]
pub struct CleanArgs {
    /// Only show what would be deleted (dry run)
    #[arg(long, help = "Only show what would be deleted (dry run)")]
    pub dry_run: bool,

    /// Skip confirmation prompts and force-delete unmerged branches
    #[arg(
        long,
        short,
        help = "Skip confirmation prompts and force-delete unmerged branches (destructive)"
    )]
    pub force: bool,

    /// Bulk category to delete without prompting
    #[arg(long, value_enum, help = "Bulk category to delete without prompting")]
    pub select: Option<BulkCategory>,

    /// Days after which a branch counts as stale
    #[arg(
        long,
        help = "Days after which a branch counts as stale (overrides config and SWEEP_STALE_DAYS)"
    )]
    pub stale_days: Option<u32>,

    /// Skip the remote prune step
    #[arg(long, help = "Skip the git fetch --prune step")]
    pub no_fetch: bool,
}

#[derive(Args, Debug, Default)]
pub struct PreviewArgs {
    /// Days after which a branch counts as stale
    #[arg(
        long,
        help = "Days after which a branch counts as stale (overrides config and SWEEP_STALE_DAYS)"
    )]
    pub stale_days: Option<u32>,

    /// Skip the remote prune step
    #[arg(long, help = "Skip the git fetch --prune step")]
    pub no_fetch: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print configuration file path
    Path,
    /// Reset configuration to defaults
    Reset,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkCategory {
    /// Branches fully merged into the base branch
    Merged,
    /// Merged branches plus branches whose upstream was deleted
    MergedGone,
}

impl From<BulkCategory> for BulkSelection {
    fn from(category: BulkCategory) -> Self {
        match category {
            BulkCategory::Merged => BulkSelection::Merged,
            BulkCategory::MergedGone => BulkSelection::MergedAndGone,
        }
    }
}

impl CleanArgs {
    pub fn validate(&self) -> crate::utils::Result<()> {
        if let Some(0) = self.stale_days {
            return Err(crate::utils::SweepError::invalid_args(
                "--stale-days must be at least 1",
            ));
        }

        if self.dry_run && self.select.is_some() {
            return Err(crate::utils::SweepError::invalid_args(
                "--select has no effect with --dry-run",
            ));
        }

        Ok(())
    }
}

impl PreviewArgs {
    pub fn validate(&self) -> crate::utils::Result<()> {
        if let Some(0) = self.stale_days {
            return Err(crate::utils::SweepError::invalid_args(
                "--stale-days must be at least 1",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["sweep"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_clean_flags() {
        let cli = Cli::try_parse_from([
            "sweep",
            "clean",
            "--dry-run",
            "--stale-days",
            "14",
            "--no-fetch",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Clean(args)) => {
                assert!(args.dry_run);
                assert!(!args.force);
                assert_eq!(args.stale_days, Some(14));
                assert!(args.no_fetch);
            }
            _ => panic!("expected clean command"),
        }
    }

    #[test]
    fn test_parse_select_category() {
        let cli = Cli::try_parse_from(["sweep", "clean", "--select", "merged-gone", "--force"])
            .unwrap();

        match cli.command {
            Some(Commands::Clean(args)) => {
                assert_eq!(args.select, Some(BulkCategory::MergedGone));
                assert!(args.force);
            }
            _ => panic!("expected clean command"),
        }
    }

    #[test]
    fn test_preview_alias_show() {
        let cli = Cli::try_parse_from(["sweep", "show"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Preview(_))));
    }

    #[test]
    fn test_validate_rejects_zero_stale_days() {
        let args = CleanArgs {
            stale_days: Some(0),
            ..CleanArgs::default()
        };
        assert!(args.validate().is_err());

        let args = PreviewArgs {
            stale_days: Some(0),
            ..PreviewArgs::default()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_bulk_category_maps_to_selection() {
        assert_eq!(
            BulkSelection::from(BulkCategory::Merged),
            BulkSelection::Merged
        );
        assert_eq!(
            BulkSelection::from(BulkCategory::MergedGone),
            BulkSelection::MergedAndGone
        );
    }

    #[test]
    fn test_validate_rejects_select_with_dry_run() {
        let args = CleanArgs {
            dry_run: true,
            select: Some(BulkCategory::Merged),
            ..CleanArgs::default()
        };
        assert!(args.validate().is_err());
    }
}
