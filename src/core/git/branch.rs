use super::repository::{execute_git_command, GitRepository};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Upstream tracking state derived from `%(upstream:track)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingState {
    /// No upstream configured.
    None,
    /// Upstream configured and in sync.
    InSync,
    /// Unpushed commits relative to the upstream.
    Ahead { unpushed: u32 },
    /// Behind the upstream, nothing unpushed.
    Behind,
    /// Upstream was configured but its ref no longer exists.
    Gone,
}

#[derive(Debug, Clone)]
pub struct Branch {
    pub name: String,
    pub last_commit_time: DateTime<Utc>,
    pub relative_age: String,
    pub last_subject: String,
    pub upstream: Option<String>,
    pub tracking: TrackingState,
    pub is_current: bool,
    pub merged_into_base: bool,
}

impl Branch {
    pub fn unpushed_commits(&self) -> u32 {
        match self.tracking {
            TrackingState::Ahead { unpushed } => unpushed,
            _ => 0,
        }
    }
}

/// Reads all local branches with one structured `for-each-ref` query plus a
/// per-branch ancestor test against the base branch. No porcelain scraping.
pub struct BranchLister<'a> {
    repo: &'a GitRepository,
}

// Subject comes last so embedded tabs cannot shift the fixed fields.
const LIST_FORMAT: &str = "%(refname:short)\t%(committerdate:unix)\t%(committerdate:relative)\t%(upstream:short)\t%(upstream:track)\t%(HEAD)\t%(contents:subject)";

impl<'a> BranchLister<'a> {
    pub fn new(repo: &'a GitRepository) -> Self {
        Self { repo }
    }

    pub fn list(&self, base_branch: &str) -> Result<Vec<Branch>> {
        let base_ref = self.resolve_base_ref(base_branch)?;

        let format = format!("--format={}", LIST_FORMAT);
        let output = execute_git_command(
            self.repo,
            &["for-each-ref", "--sort=-committerdate", "refs/heads", &format],
        )?;

        let mut branches = Vec::new();
        for line in output.lines() {
            let Some(mut branch) = parse_branch_line(line) else {
                continue;
            };

            branch.merged_into_base = match &base_ref {
                Some(base) if branch.name != *base => {
                    self.repo.is_ancestor(&branch.name, base)?
                }
                // The base is trivially contained in itself.
                Some(_) => true,
                None => false,
            };

            branches.push(branch);
        }

        Ok(branches)
    }

    fn resolve_base_ref(&self, base_branch: &str) -> Result<Option<String>> {
        if self.repo.branch_exists(base_branch)? {
            return Ok(Some(base_branch.to_string()));
        }

        let remote_ref = format!("origin/{}", base_branch);
        if self.repo.ref_exists(&remote_ref)? {
            return Ok(Some(remote_ref));
        }

        eprintln!(
            "warning: base branch '{}' not found, merge analysis skipped",
            base_branch
        );
        Ok(None)
    }
}

fn parse_branch_line(line: &str) -> Option<Branch> {
    let mut fields = line.splitn(7, '\t');

    let name = fields.next()?.trim();
    if name.is_empty() {
        return None;
    }

    let commit_unix = fields.next()?.trim().parse::<i64>().unwrap_or(0);
    let relative_age = fields.next()?.trim().to_string();
    let upstream_field = fields.next()?.trim();
    let track_field = fields.next()?.trim();
    let head_marker = fields.next()?.trim();
    let last_subject = fields.next().unwrap_or("").trim().to_string();

    let upstream = if upstream_field.is_empty() {
        None
    } else {
        Some(upstream_field.to_string())
    };

    let last_commit_time =
        DateTime::<Utc>::from_timestamp(commit_unix, 0).unwrap_or(DateTime::<Utc>::MIN_UTC);

    Some(Branch {
        name: name.to_string(),
        last_commit_time,
        relative_age,
        last_subject,
        tracking: parse_tracking(upstream.as_deref(), track_field),
        upstream,
        is_current: head_marker == "*",
        merged_into_base: false,
    })
}

fn parse_tracking(upstream: Option<&str>, track: &str) -> TrackingState {
    if track == "[gone]" {
        return TrackingState::Gone;
    }

    if upstream.is_none() {
        return TrackingState::None;
    }

    if let Some(unpushed) = parse_ahead_count(track) {
        return TrackingState::Ahead { unpushed };
    }

    if track.contains("behind") {
        return TrackingState::Behind;
    }

    TrackingState::InSync
}

fn parse_ahead_count(track: &str) -> Option<u32> {
    let rest = track.split("ahead ").nth(1)?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
