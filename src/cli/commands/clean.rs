use super::common::{analyze_repository, is_non_interactive};
use crate::cli::parser::CleanArgs;
use crate::config::Config;
use crate::core::classify::{BulkSelection, Classification};
use crate::core::delete::{DeletionExecutor, DeletionOutcome};
use crate::core::git::GitRepository;
use crate::ui::Presenter;
use crate::utils::{Result, SweepError};
use dialoguer::{Confirm, MultiSelect, Select};

pub fn execute(config: Config, args: CleanArgs) -> Result<()> {
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

    if args.dry_run {
        println!("[dry run] no branches were deleted");
        return Ok(());
    }

    if analysis.classification.is_empty() {
        println!("Nothing to clean up.");
        return Ok(());
    }

    let Some(names) = select_branches(&analysis.classification, &args)? else {
        println!("Cancelled.");
        return Ok(());
    };

    if names.is_empty() {
        println!("No branches selected.");
        return Ok(());
    }

    if !confirm_deletion(&names, args.force)? {
        println!("Cancelled.");
        return Ok(());
    }

    let executor = DeletionExecutor::new(&repo, &analysis.protected);
    let outcome = executor.delete(&names, args.force, false);
    report_outcome(&outcome);

    Ok(())
}

/// Resolves the deletion set. `Ok(None)` means the user cancelled.
fn select_branches(
    classification: &Classification,
    args: &CleanArgs,
) -> Result<Option<Vec<String>>> {
    if let Some(category) = args.select {
        return Ok(Some(classification.bulk_safe(category.into())));
    }

    if is_non_interactive() {
        return Err(SweepError::invalid_args(
            "cannot prompt for a category in non-interactive mode; use --select, --dry-run, or the preview command",
        ));
    }

    let items = [
        "Merged only (safest)",
        "Merged + remote-deleted",
        "Pick branches individually",
        "Cancel",
    ];

    let choice = Select::new()
        .with_prompt("Which branches should be deleted?")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| SweepError::invalid_args(format!("selection prompt failed: {}", e)))?;

    match choice {
        0 => Ok(Some(classification.bulk_safe(BulkSelection::Merged))),
        1 => Ok(Some(classification.bulk_safe(BulkSelection::MergedAndGone))),
        2 => pick_individual(classification).map(Some),
        _ => Ok(None),
    }
}

fn pick_individual(classification: &Classification) -> Result<Vec<String>> {
    let candidates = classification.selectable();
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let labels: Vec<String> = candidates
        .iter()
        .map(|b| format!("{} ({}) - {}", b.name, b.relative_age, b.last_subject))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt("Select branches to delete (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()
        .map_err(|e| SweepError::invalid_args(format!("selection prompt failed: {}", e)))?;

    Ok(chosen
        .into_iter()
        .map(|index| candidates[index].name.clone())
        .collect())
}

fn confirm_deletion(names: &[String], force: bool) -> Result<bool> {
    println!("\nThe following branches will be deleted:");
    for name in names {
        println!("  - {}", name);
    }

    if force {
        return Ok(true);
    }

    if is_non_interactive() {
        return Err(SweepError::invalid_args(
            "cannot confirm deletion in non-interactive mode; use --force to skip confirmation",
        ));
    }

    Ok(Confirm::new()
        .with_prompt("Continue?")
        .default(false)
        .interact()
        .unwrap_or(false))
}

fn report_outcome(outcome: &DeletionOutcome) {
    println!();

    for name in &outcome.deleted {
        println!("  ✅ Deleted {}", name);
    }

    for name in &outcome.skipped {
        println!("  ⏭  Skipped {} (protected)", name);
    }

    for (name, reason) in &outcome.failed {
        println!("  ⚠️  {}: {}", name, reason);
    }

    println!(
        "\nDeleted {} branch(es), {} failed.",
        outcome.deleted.len(),
        outcome.failed.len()
    );
}
