use super::common::analyze_repository;
use crate::cli::parser::PreviewArgs;
use crate::config::Config;
use crate::core::git::GitRepository;
use crate::ui::Presenter;
use crate::utils::Result;

/// Classification-only flow: list, classify, present. Never prompts and
/// never deletes.
pub fn execute(config: Config, args: PreviewArgs) -> Result<()> {
    let repo = GitRepository::discover()?;

    let analysis = analyze_repository(&repo, &config, args.stale_days, args.no_fetch)?;

    let presenter = Presenter::new(analysis.stale_threshold_days);
    print!(
        "{}",
        presenter.render(
            &analysis.classification,
            &analysis.base_branch,
            &analysis.current_branch
        )
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::default_config;
    use crate::test_utils::test_helpers::*;
    use crate::utils::SweepError;

    #[test]
    fn test_preview_leaves_all_branches_alone() {
        let (temp_dir, repo) = setup_test_repo();
        create_branch(temp_dir.path(), "feature/done");
        let _guard = WorkingDirGuard::new(temp_dir.path());

        let mut config = default_config();
        config.git.fetch_prune = false;

        execute(config, PreviewArgs::default()).unwrap();

        assert!(repo.branch_exists("feature/done").unwrap());
        assert!(repo.branch_exists("main").unwrap());
    }

    #[test]
    fn test_preview_outside_repository_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let _guard = WorkingDirGuard::new(temp_dir.path());

        let result = execute(default_config(), PreviewArgs::default());
        assert!(matches!(result, Err(SweepError::NoRepository { .. })));
    }
}
