use crate::utils::error::{Result, SweepError};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct GitRepository {
    pub root: PathBuf,
}

impl GitRepository {
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            SweepError::git_operation(format!("Failed to get current directory: {}", e))
        })?;

        Self::discover_from(&current_dir)
    }

    pub fn discover_from(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .current_dir(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SweepError::no_repository(stderr.trim().to_string()));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();

        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    /// Branch currently checked out, or an empty string on a detached HEAD.
    pub fn current_branch(&self) -> Result<String> {
        execute_git_command(self, &["branch", "--show-current"])
    }

    /// Base branch for merge analysis: the remote's default branch if the
    /// symbolic ref is available, `main` otherwise.
    pub fn detect_base_branch(&self) -> String {
        if let Ok(branch_ref) = execute_git_command(
            self,
            &["symbolic-ref", "--quiet", "--short", "refs/remotes/origin/HEAD"],
        ) {
            if let Some(branch_name) = branch_ref.strip_prefix("origin/") {
                if !branch_name.is_empty() {
                    return branch_name.to_string();
                }
            }
        }

        "main".to_string()
    }

    /// Best-effort refresh of remote tracking refs so `gone` detection is
    /// current. Callers treat a failure as a warning, not an error.
    pub fn fetch_prune(&self) -> Result<()> {
        execute_git_command(self, &["fetch", "--prune"]).map(|_| ())
    }

    pub fn branch_exists(&self, name: &str) -> Result<bool> {
        let result = execute_git_command(
            self,
            &["rev-parse", "--verify", &format!("refs/heads/{}", name)],
        );
        Ok(result.is_ok())
    }

    pub fn ref_exists(&self, name: &str) -> Result<bool> {
        let result = execute_git_command(self, &["rev-parse", "--verify", "--quiet", name]);
        Ok(result.is_ok())
    }

    /// Ancestor test backing the merged classification. Exit code 1 means
    /// "not an ancestor"; anything else non-zero is a real failure.
    pub fn is_ancestor(&self, branch: &str, base: &str) -> Result<bool> {
        let output = Command::new("git")
            .current_dir(&self.root)
            .args(["merge-base", "--is-ancestor", branch, base])
            .output()
            .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

        match output.status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(SweepError::git_operation(format!(
                    "merge-base --is-ancestor {} {} failed: {}",
                    branch,
                    base,
                    stderr.trim()
                )))
            }
        }
    }
}

pub fn execute_git_command(repo: &GitRepository, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .current_dir(&repo.root)
        .args(args)
        .output()
        .map_err(|e| SweepError::git_operation(format!("Failed to execute git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SweepError::git_operation(format!(
            "Git command failed ({}): {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.trim().to_string())
}
