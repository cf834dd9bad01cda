use crate::core::git::{Branch, TrackingState};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

/// Branch names that are never eligible for deletion.
pub const PROTECTED_BRANCHES: [&str; 5] = ["main", "master", "trunk", "develop", "development"];

/// The built-in protected names, configured extras, and the branch currently
/// checked out.
#[derive(Debug, Clone)]
pub struct ProtectedNames {
    names: HashSet<String>,
}

impl ProtectedNames {
    pub fn new(extra: &[String], current_branch: &str) -> Self {
        let mut names: HashSet<String> = PROTECTED_BRANCHES
            .iter()
            .map(|name| name.to_string())
            .collect();
        names.extend(extra.iter().cloned());
        if !current_branch.is_empty() {
            names.insert(current_branch.to_string());
        }

        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        name.is_empty() || self.names.contains(name)
    }
}

/// Bulk deletion sets the user can pick with one choice. Ahead-of-upstream
/// branches are never part of either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkSelection {
    Merged,
    MergedAndGone,
}

/// Category lists for one classification run. A branch may appear in more
/// than one list (stale and unmerged, for example); membership is recomputed
/// from scratch on every run.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub merged: Vec<Branch>,
    pub remote_gone: Vec<Branch>,
    pub ahead_of_upstream: Vec<Branch>,
    pub stale: Vec<Branch>,
    pub active_unmerged: Vec<Branch>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
            && self.remote_gone.is_empty()
            && self.ahead_of_upstream.is_empty()
            && self.stale.is_empty()
            && self.active_unmerged.is_empty()
    }

    /// Names deletable for the given bulk choice, deduplicated and ordered
    /// most-recently-committed first. Ahead-flagged branches never enter the
    /// merged or gone lists, so they can never leak into a bulk set.
    pub fn bulk_safe(&self, selection: BulkSelection) -> Vec<String> {
        let mut lists = vec![&self.merged];
        if selection == BulkSelection::MergedAndGone {
            lists.push(&self.remote_gone);
        }

        let mut seen = HashSet::new();
        let mut names = Vec::new();

        for list in lists {
            for branch in list.iter() {
                if seen.insert(branch.name.clone()) {
                    names.push(branch.name.clone());
                }
            }
        }

        names
    }

    /// Candidates offered for individual selection. Ahead-of-upstream
    /// branches are advisory-only and deliberately absent.
    pub fn selectable(&self) -> Vec<&Branch> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for list in [
            &self.merged,
            &self.remote_gone,
            &self.stale,
            &self.active_unmerged,
        ] {
            for branch in list.iter() {
                if seen.insert(branch.name.as_str()) {
                    candidates.push(branch);
                }
            }
        }

        candidates.sort_by(|a, b| b.last_commit_time.cmp(&a.last_commit_time));
        candidates
    }
}

/// Partitions branches into the category lists. Pure: the same branch records
/// and `now` always produce the same classification.
///
/// Protected names and the current branch never appear in any list. A branch
/// with unpushed commits is only reported as ahead-of-upstream; that flag
/// overrides every other membership so it can never end up in a deletable set.
pub fn classify(
    branches: &[Branch],
    protected: &ProtectedNames,
    stale_threshold_days: u32,
    now: DateTime<Utc>,
) -> Classification {
    let stale_cutoff = now - Duration::days(i64::from(stale_threshold_days));
    let mut classification = Classification::default();

    for branch in branches {
        if protected.contains(&branch.name) || branch.is_current {
            continue;
        }

        if matches!(branch.tracking, TrackingState::Ahead { unpushed } if unpushed > 0) {
            classification.ahead_of_upstream.push(branch.clone());
            continue;
        }

        if branch.tracking == TrackingState::Gone {
            classification.remote_gone.push(branch.clone());
        }

        if branch.merged_into_base {
            classification.merged.push(branch.clone());
        } else {
            classification.active_unmerged.push(branch.clone());
        }

        if branch.last_commit_time < stale_cutoff {
            classification.stale.push(branch.clone());
        }
    }

    for list in [
        &mut classification.merged,
        &mut classification.remote_gone,
        &mut classification.ahead_of_upstream,
        &mut classification.stale,
        &mut classification.active_unmerged,
    ] {
        list.sort_by(|a, b| b.last_commit_time.cmp(&a.last_commit_time));
    }

    classification
}
