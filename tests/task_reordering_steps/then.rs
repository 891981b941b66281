//! Then steps for task reordering BDD scenarios.

use super::world::{ReorderWorld, run_async, split_list};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskify::task::{domain::Task, services::ReorderError};

fn column_listing(world: &ReorderWorld, column: &str) -> Result<Vec<Task>, eyre::Report> {
    let owner = world.owner()?;
    run_async(world.reorder.list_by_column(&owner, world.board_id, column))
        .wrap_err_with(|| format!("list column {column}"))
}

fn title_of(world: &ReorderWorld, task: &Task) -> String {
    world
        .named_tasks
        .iter()
        .find(|(_, id)| **id == task.id())
        .map_or_else(|| task.details().title.clone(), |(name, _)| name.clone())
}

#[then(r#"column "{column}" reads "{titles}""#)]
fn column_reads(world: &ReorderWorld, column: String, titles: String) -> Result<(), eyre::Report> {
    let listing = column_listing(world, &column)?;
    let actual: Vec<(String, u32)> = listing
        .iter()
        .map(|task| (title_of(world, task), task.position().value()))
        .collect();
    let expected: Vec<(String, u32)> = split_list(&titles)
        .zip(0_u32..)
        .map(|(title, position)| (title.to_owned(), position))
        .collect();

    eyre::ensure!(
        actual == expected,
        "column {column}: expected {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"column "{column}" has "{task}" at position {position:u32}"#)]
fn column_has_task_at(
    world: &ReorderWorld,
    column: String,
    task: String,
    position: u32,
) -> Result<(), eyre::Report> {
    let listing = column_listing(world, &column)?;
    let found = listing
        .iter()
        .find(|candidate| title_of(world, candidate) == task)
        .ok_or_else(|| eyre::eyre!("{task} is not in column {column}"))?;

    eyre::ensure!(
        found.position().value() == position,
        "{task}: expected position {position}, found {}",
        found.position()
    );
    Ok(())
}

#[then("the move fails as not found")]
fn move_fails_as_not_found(world: &ReorderWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;

    if !matches!(result, Err(ReorderError::NotFound(_))) {
        return Err(eyre::eyre!("expected NotFound error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the batch result is "{entries}""#)]
fn batch_result_is(world: &ReorderWorld, entries: String) -> Result<(), eyre::Report> {
    let batch = world
        .last_batch
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing batch result"))?;
    let actual: Vec<String> = batch
        .iter()
        .map(|entry| {
            entry.as_ref().map_or_else(
                || "-".to_owned(),
                |task| format!("{}:{}", title_of(world, task), task.position()),
            )
        })
        .collect();
    let expected: Vec<String> = split_list(&entries).map(str::to_owned).collect();

    eyre::ensure!(
        actual == expected,
        "expected batch {expected:?}, found {actual:?}"
    );
    Ok(())
}
