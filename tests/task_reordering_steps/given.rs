//! Given steps for task reordering BDD scenarios.

use super::world::{ReorderWorld, run_async, split_list};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskify::task::services::CreateTaskRequest;
use taskify::user::domain::UserId;

#[given(r#"a board owned by "{owner}""#)]
fn board_owned_by(world: &mut ReorderWorld, owner: String) -> Result<(), eyre::Report> {
    world.owner = Some(UserId::new(owner).wrap_err("scenario owner")?);
    Ok(())
}

#[given(r#"column "{column}" holds "{titles}""#)]
fn column_holds(
    world: &mut ReorderWorld,
    column: String,
    titles: String,
) -> Result<(), eyre::Report> {
    let owner = world.owner()?;
    let names: Vec<&str> = split_list(&titles).collect();
    // Creation prepends, so create bottom-up to read top-down.
    for name in names.iter().rev() {
        let created = run_async(world.tasks.create(
            &owner,
            CreateTaskRequest::new(world.board_id, column.as_str(), *name),
        ))
        .wrap_err_with(|| format!("create task {name}"))?;
        world.named_tasks.insert((*name).to_owned(), created.id());
    }
    Ok(())
}
