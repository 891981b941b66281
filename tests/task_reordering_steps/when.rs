//! When steps for task reordering BDD scenarios.

use super::world::{ReorderWorld, run_async, split_list};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskify::task::services::{MoveTaskRequest, PositionUpdate};
use taskify::user::domain::UserId;

#[when(r#""{user}" moves "{task}" to column "{column}" at position {position:i64}"#)]
fn move_task(
    world: &mut ReorderWorld,
    user: String,
    task: String,
    column: String,
    position: i64,
) -> Result<(), eyre::Report> {
    let caller = UserId::new(user).wrap_err("scenario caller")?;
    let task_id = world.task_id(&task);
    let result = run_async(world.reorder.move_task(
        &caller,
        task_id,
        MoveTaskRequest::new(column, position),
    ));
    world.last_move = Some(result);
    Ok(())
}

#[when(r#""{user}" submits the batch "{entries}""#)]
fn submit_batch(
    world: &mut ReorderWorld,
    user: String,
    entries: String,
) -> Result<(), eyre::Report> {
    let caller = UserId::new(user).wrap_err("scenario caller")?;
    let updates = split_list(&entries)
        .map(|entry| {
            let (name, position) = entry
                .split_once(':')
                .ok_or_else(|| eyre::eyre!("batch entry {entry} is not name:position"))?;
            let rank: i64 = position.parse().wrap_err("batch position")?;
            Ok(PositionUpdate::new(world.task_id(name), rank))
        })
        .collect::<Result<Vec<_>, eyre::Report>>()?;

    let result = run_async(world.reorder.reorder_batch(&caller, &updates))
        .wrap_err("submit batch reorder")?;
    world.last_batch = Some(result);
    Ok(())
}
