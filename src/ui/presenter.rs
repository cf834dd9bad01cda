use crate::core::classify::Classification;
use crate::core::git::Branch;
use std::fmt::Write;

/// Renders the five classification sections in fixed order. Empty sections
/// stay visible with a `(none)` placeholder so output stays parseable by
/// section header.
pub struct Presenter {
    stale_threshold_days: u32,
}

impl Presenter {
    pub fn new(stale_threshold_days: u32) -> Self {
        Self {
            stale_threshold_days,
        }
    }

    pub fn render(
        &self,
        classification: &Classification,
        base_branch: &str,
        current_branch: &str,
    ) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Base branch: {}", base_branch);
        if current_branch.is_empty() {
            let _ = writeln!(out, "Current branch: (detached HEAD)");
        } else {
            let _ = writeln!(out, "Current branch: {}", current_branch);
        }
        out.push('\n');

        self.render_section(&mut out, "Deletable (merged)", &classification.merged);
        self.render_section(&mut out, "Remote deleted", &classification.remote_gone);
        self.render_ahead_section(&mut out, &classification.ahead_of_upstream);
        self.render_stale_section(&mut out, &classification.stale);
        self.render_section(&mut out, "Active (unmerged)", &classification.active_unmerged);

        out
    }

    fn render_section(&self, out: &mut String, title: &str, branches: &[Branch]) {
        let _ = writeln!(out, "### {}", title);
        if branches.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for branch in branches {
            let _ = writeln!(
                out,
                "  - {} ({}) - {}",
                branch.name, branch.relative_age, branch.last_subject
            );
        }
        out.push('\n');
    }

    fn render_ahead_section(&self, out: &mut String, branches: &[Branch]) {
        let _ = writeln!(out, "### ⚠️  Ahead of upstream (do not delete)");
        if branches.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for branch in branches {
            let _ = writeln!(
                out,
                "  - {} ({}) - {} unpushed commit(s)",
                branch.name,
                branch.relative_age,
                branch.unpushed_commits()
            );
        }
        out.push('\n');
    }

    fn render_stale_section(&self, out: &mut String, branches: &[Branch]) {
        let _ = writeln!(
            out,
            "### Stale (older than {} days)",
            self.stale_threshold_days
        );
        if branches.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for branch in branches {
            let merge_state = if branch.merged_into_base {
                "merged"
            } else {
                "unmerged"
            };
            let _ = writeln!(
                out,
                "  - {} ({}) - {} - {}",
                branch.name, branch.relative_age, merge_state, branch.last_subject
            );
        }
        out.push('\n');
    }
}
