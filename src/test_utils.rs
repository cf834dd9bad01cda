pub mod test_helpers {
    use crate::core::git::GitRepository;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process::Command;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    pub fn run_git(path: &Path, args: &[&str]) {
        let status = Command::new("git")
            .current_dir(path)
            .args(args)
            .status()
            .expect("Failed to execute git");
        assert!(status.success(), "git {:?} failed in {:?}", args, path);
    }

    pub fn setup_test_repo() -> (TempDir, GitRepository) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo_path = temp_dir.path();

        run_git(repo_path, &["init", "--initial-branch=main"]);
        configure_user(repo_path);

        fs::write(repo_path.join("README.md"), "# Test Repository")
            .expect("Failed to write README");
        run_git(repo_path, &["add", "README.md"]);
        run_git(repo_path, &["commit", "-m", "Initial commit"]);

        let repo = GitRepository::discover_from(repo_path).expect("Failed to discover repo");
        (temp_dir, repo)
    }

    /// A bare `origin.git` plus a working clone at `<temp>/work`, with `main`
    /// pushed and the remote HEAD pointing at it.
    pub fn setup_repo_with_remote() -> (TempDir, GitRepository) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let origin_path = temp_dir.path().join("origin.git");
        fs::create_dir(&origin_path).expect("Failed to create origin dir");
        run_git(&origin_path, &["init", "--bare", "--initial-branch=main"]);

        run_git(
            temp_dir.path(),
            &["clone", origin_path.to_str().unwrap(), "work"],
        );
        let work = temp_dir.path().join("work");
        configure_user(&work);

        // The clone starts on an unborn branch whose name depends on the git
        // version; pin it to main before the first commit.
        run_git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        fs::write(work.join("README.md"), "# Test Repository").expect("Failed to write README");
        run_git(&work, &["add", "README.md"]);
        run_git(&work, &["commit", "-m", "Initial commit"]);
        run_git(&work, &["push", "-u", "origin", "main"]);
        run_git(&work, &["remote", "set-head", "origin", "--auto"]);

        let repo = GitRepository::discover_from(&work).expect("Failed to discover repo");
        (temp_dir, repo)
    }

    pub fn commit_file(repo_path: &Path, file: &str, content: &str, message: &str) {
        fs::write(repo_path.join(file), content).expect("Failed to write file");
        run_git(repo_path, &["add", file]);
        run_git(repo_path, &["commit", "-m", message]);
    }

    pub fn commit_file_dated(repo_path: &Path, file: &str, content: &str, message: &str, date: &str) {
        fs::write(repo_path.join(file), content).expect("Failed to write file");
        run_git(repo_path, &["add", file]);

        let status = Command::new("git")
            .current_dir(repo_path)
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_DATE", date)
            .args(["commit", "-m", message])
            .status()
            .expect("Failed to execute git");
        assert!(status.success(), "dated commit failed in {:?}", repo_path);
    }

    pub fn create_branch(repo_path: &Path, name: &str) {
        run_git(repo_path, &["branch", name]);
    }

    pub fn checkout_new_branch(repo_path: &Path, name: &str) {
        run_git(repo_path, &["checkout", "-b", name]);
    }

    pub fn checkout(repo_path: &Path, name: &str) {
        run_git(repo_path, &["checkout", name]);
    }

    pub fn push_upstream(repo_path: &Path, branch: &str) {
        run_git(repo_path, &["push", "-u", "origin", branch]);
    }

    pub fn delete_remote_branch(repo_path: &Path, branch: &str) {
        run_git(repo_path, &["push", "origin", "--delete", branch]);
        run_git(repo_path, &["fetch", "--prune"]);
    }

    fn configure_user(repo_path: &Path) {
        run_git(repo_path, &["config", "user.name", "Test User"]);
        run_git(repo_path, &["config", "user.email", "test@example.com"]);
    }

    static CWD_LOCK: Mutex<()> = Mutex::new(());

    /// Changes the process working directory for a test and restores it on
    /// drop. The working directory and environment are process-global, so
    /// tests holding a guard are serialized through a shared lock.
    pub struct WorkingDirGuard {
        original_dir: PathBuf,
        _lock: MutexGuard<'static, ()>,
    }

    impl WorkingDirGuard {
        pub fn new(path: &Path) -> Self {
            let lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let original_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/tmp"));
            std::env::set_current_dir(path).expect("Failed to change working directory");
            Self {
                original_dir,
                _lock: lock,
            }
        }
    }

    impl Drop for WorkingDirGuard {
        fn drop(&mut self) {
            if std::env::set_current_dir(&self.original_dir).is_err() {
                let _ = std::env::set_current_dir("/tmp");
            }
        }
    }
}
