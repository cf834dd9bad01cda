use crate::config::Config;
use crate::core::classify::{classify, Classification, ProtectedNames};
use crate::core::git::{BranchLister, GitRepository};
use crate::utils::Result;
use chrono::Utc;

pub struct RepositoryAnalysis {
    pub base_branch: String,
    pub current_branch: String,
    pub protected: ProtectedNames,
    pub classification: Classification,
    pub stale_threshold_days: u32,
}

/// Shared list -> classify pipeline for the clean and preview commands.
pub fn analyze_repository(
    repo: &GitRepository,
    config: &Config,
    stale_days_override: Option<u32>,
    no_fetch: bool,
) -> Result<RepositoryAnalysis> {
    let stale_threshold_days = stale_days_override.unwrap_or_else(|| config.stale_threshold_days());

    if !no_fetch && config.git.fetch_prune {
        println!("Refreshing remote tracking data...");
        if let Err(e) = repo.fetch_prune() {
            eprintln!(
                "warning: could not reach the remote, using cached tracking data ({})",
                e
            );
        }
    }

    let current_branch = repo.current_branch()?;
    let base_branch = repo.detect_base_branch();
    let protected = ProtectedNames::new(&config.git.protected_branches, &current_branch);

    let branches = BranchLister::new(repo).list(&base_branch)?;
    let classification = classify(&branches, &protected, stale_threshold_days, Utc::now());

    Ok(RepositoryAnalysis {
        base_branch,
        current_branch,
        protected,
        classification,
        stale_threshold_days,
    })
}

pub fn is_non_interactive() -> bool {
    std::env::var("SWEEP_NON_INTERACTIVE").is_ok()
        || std::env::var("CI").is_ok()
        || !atty::is(atty::Stream::Stdin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::default_config;
    use crate::test_utils::test_helpers::*;

    #[test]
    fn test_analyze_repository_without_remote() {
        let (temp_dir, repo) = setup_test_repo();
        create_branch(temp_dir.path(), "feature/done");
        let _guard = WorkingDirGuard::new(temp_dir.path());

        let mut config = default_config();
        config.git.fetch_prune = false;

        let analysis = analyze_repository(&repo, &config, None, false).unwrap();

        assert_eq!(analysis.base_branch, "main");
        assert_eq!(analysis.current_branch, "main");
        assert_eq!(analysis.stale_threshold_days, 30);
        assert_eq!(analysis.classification.merged.len(), 1);
        assert_eq!(analysis.classification.merged[0].name, "feature/done");
    }

    #[test]
    fn test_analyze_repository_stale_days_override() {
        let (temp_dir, repo) = setup_test_repo();
        let _guard = WorkingDirGuard::new(temp_dir.path());

        let mut config = default_config();
        config.git.fetch_prune = false;

        let analysis = analyze_repository(&repo, &config, Some(7), false).unwrap();
        assert_eq!(analysis.stale_threshold_days, 7);
    }

    #[test]
    fn test_stale_days_flag_beats_env_override() {
        let (temp_dir, repo) = setup_test_repo();
        let _guard = WorkingDirGuard::new(temp_dir.path());

        let mut config = default_config();
        config.git.fetch_prune = false;

        std::env::set_var("SWEEP_STALE_DAYS", "14");
        let env_only = analyze_repository(&repo, &config, None, false).unwrap();
        let with_flag = analyze_repository(&repo, &config, Some(7), false).unwrap();
        std::env::remove_var("SWEEP_STALE_DAYS");

        assert_eq!(env_only.stale_threshold_days, 14);
        assert_eq!(with_flag.stale_threshold_days, 7);
    }

    #[test]
    fn test_analyze_repository_survives_failed_prune() {
        // No remote configured, so the prune step fails; analysis continues.
        let (_temp_dir, repo) = setup_test_repo();
        let config = default_config();

        let analysis = analyze_repository(&repo, &config, None, false).unwrap();
        assert_eq!(analysis.base_branch, "main");
    }
}
