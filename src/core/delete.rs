use crate::core::classify::ProtectedNames;
use crate::core::git::{execute_git_command, GitRepository};
use std::fmt;

/// Why a single branch could not be deleted. The batch always continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFailure {
    /// Unmerged work, non-forced delete refused. Recoverable with --force.
    NeedsForce,
    Other(String),
}

impl fmt::Display for DeleteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteFailure::NeedsForce => {
                write!(f, "needs force (unmerged changes, re-run with --force)")
            }
            DeleteFailure::Other(reason) => write!(f, "{}", reason),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct DeletionOutcome {
    pub deleted: Vec<String>,
    pub failed: Vec<(String, DeleteFailure)>,
    /// Protected or current-branch names the caller passed in anyway.
    pub skipped: Vec<String>,
}

pub struct DeletionExecutor<'a> {
    repo: &'a GitRepository,
    protected: &'a ProtectedNames,
}

impl<'a> DeletionExecutor<'a> {
    pub fn new(repo: &'a GitRepository, protected: &'a ProtectedNames) -> Self {
        Self { repo, protected }
    }

    /// Deletes the requested branches one by one. Protected and current-branch
    /// names are filtered out again here regardless of what the caller
    /// selected. In dry-run mode no destructive git call is made and
    /// `deleted` holds the names that would have been removed.
    pub fn delete(&self, names: &[String], force: bool, dry_run: bool) -> DeletionOutcome {
        let mut outcome = DeletionOutcome::default();

        for name in names {
            if self.protected.contains(name) {
                outcome.skipped.push(name.clone());
                continue;
            }

            if dry_run {
                outcome.deleted.push(name.clone());
                continue;
            }

            let flag = if force { "-D" } else { "-d" };
            match execute_git_command(self.repo, &["branch", flag, name]) {
                Ok(_) => outcome.deleted.push(name.clone()),
                Err(e) => {
                    let reason = e.to_string();
                    let failure = if !force && reason.contains("not fully merged") {
                        DeleteFailure::NeedsForce
                    } else {
                        DeleteFailure::Other(reason)
                    };
                    outcome.failed.push((name.clone(), failure));
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::*;

    fn protected_for(repo: &GitRepository) -> ProtectedNames {
        let current = repo.current_branch().unwrap();
        ProtectedNames::new(&[], &current)
    }

    #[test]
    fn test_delete_merged_branch() {
        let (temp_dir, repo) = setup_test_repo();
        create_branch(temp_dir.path(), "feature/done");

        let protected = protected_for(&repo);
        let executor = DeletionExecutor::new(&repo, &protected);
        let outcome = executor.delete(&["feature/done".to_string()], false, false);

        assert_eq!(outcome.deleted, vec!["feature/done"]);
        assert!(outcome.failed.is_empty());
        assert!(!repo.branch_exists("feature/done").unwrap());
    }

    #[test]
    fn test_dry_run_never_deletes() {
        let (temp_dir, repo) = setup_test_repo();
        create_branch(temp_dir.path(), "feature/keep");

        let protected = protected_for(&repo);
        let executor = DeletionExecutor::new(&repo, &protected);
        let outcome = executor.delete(&["feature/keep".to_string()], true, true);

        assert_eq!(outcome.deleted, vec!["feature/keep"]);
        assert!(repo.branch_exists("feature/keep").unwrap());
    }

    #[test]
    fn test_protected_and_current_are_skipped() {
        let (temp_dir, repo) = setup_test_repo();
        create_branch(temp_dir.path(), "develop");

        let protected = protected_for(&repo);
        let executor = DeletionExecutor::new(&repo, &protected);
        let outcome = executor.delete(
            &["main".to_string(), "develop".to_string()],
            true,
            false,
        );

        assert!(outcome.deleted.is_empty());
        assert_eq!(outcome.skipped, vec!["main", "develop"]);
        assert!(repo.branch_exists("main").unwrap());
        assert!(repo.branch_exists("develop").unwrap());
    }

    #[test]
    fn test_unmerged_branch_needs_force_and_batch_continues() {
        let (temp_dir, repo) = setup_test_repo();

        create_branch(temp_dir.path(), "feature/merged");
        checkout_new_branch(temp_dir.path(), "feature/unmerged");
        commit_file(temp_dir.path(), "unmerged.txt", "data", "Unmerged work");
        checkout(temp_dir.path(), "main");

        let protected = protected_for(&repo);
        let executor = DeletionExecutor::new(&repo, &protected);
        let outcome = executor.delete(
            &["feature/unmerged".to_string(), "feature/merged".to_string()],
            false,
            false,
        );

        assert_eq!(outcome.deleted, vec!["feature/merged"]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].0, "feature/unmerged");
        assert_eq!(outcome.failed[0].1, DeleteFailure::NeedsForce);
        assert!(repo.branch_exists("feature/unmerged").unwrap());
    }

    #[test]
    fn test_forced_delete_of_unmerged_branch() {
        let (temp_dir, repo) = setup_test_repo();

        checkout_new_branch(temp_dir.path(), "feature/unmerged");
        commit_file(temp_dir.path(), "unmerged.txt", "data", "Unmerged work");
        checkout(temp_dir.path(), "main");

        let protected = protected_for(&repo);
        let executor = DeletionExecutor::new(&repo, &protected);
        let outcome = executor.delete(&["feature/unmerged".to_string()], true, false);

        assert_eq!(outcome.deleted, vec!["feature/unmerged"]);
        assert!(!repo.branch_exists("feature/unmerged").unwrap());
    }

    #[test]
    fn test_missing_branch_reports_other_failure() {
        let (_temp_dir, repo) = setup_test_repo();

        let protected = protected_for(&repo);
        let executor = DeletionExecutor::new(&repo, &protected);
        let outcome = executor.delete(&["no-such-branch".to_string()], false, false);

        assert!(outcome.deleted.is_empty());
        assert_eq!(outcome.failed.len(), 1);
        assert!(matches!(outcome.failed[0].1, DeleteFailure::Other(_)));
    }

    #[test]
    fn test_failure_reason_display() {
        assert_eq!(
            DeleteFailure::NeedsForce.to_string(),
            "needs force (unmerged changes, re-run with --force)"
        );
        assert_eq!(
            DeleteFailure::Other("checked out elsewhere".to_string()).to_string(),
            "checked out elsewhere"
        );
    }
}
