//! Template instantiation, statistics and cascading deletes.

use super::helpers::{Workspace, alice, workspace};
use rstest::rstest;
use taskify::board::{domain::ColorTheme, services::BoardCatalogError};
use taskify::task::services::MoveTaskRequest;
use taskify::user::domain::UserId;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_into_the_completion_column_updates_stats(
    workspace: Workspace,
    alice: UserId,
) -> eyre::Result<()> {
    workspace.boards.seed_templates().await?;
    let listing = workspace.boards.list_all(&alice).await?;
    let template = listing
        .templates
        .iter()
        .find(|board| board.name() == "Work Projects")
        .ok_or_else(|| eyre::eyre!("work template seeded"))?;
    let board = workspace
        .boards
        .create_from_template(&alice, template.id())
        .await?;
    let completion = board
        .columns()
        .iter()
        .map(|column| column.id.clone())
        .find(|column| column.is_completion())
        .ok_or_else(|| eyre::eyre!("template has a completion column"))?;
    let first_column = board
        .columns()
        .first()
        .map(|column| column.id.as_str().to_owned())
        .ok_or_else(|| eyre::eyre!("template has columns"))?;
    let tasks = workspace
        .fill_column(&alice, board.id(), &first_column, &["a", "b", "c", "d"])
        .await?;
    let done = tasks.first().ok_or_else(|| eyre::eyre!("task created"))?;

    workspace
        .reorder
        .move_task(
            &alice,
            done.id(),
            MoveTaskRequest::new(completion.as_str(), 0),
        )
        .await?;
    let stats = workspace.boards.stats(&alice, board.id()).await?;

    assert_eq!(stats.total_tasks, 4);
    assert_eq!(stats.completed_tasks, 1);
    assert_eq!(stats.completion_rate, 25);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_board_removes_its_tasks_from_every_column(
    workspace: Workspace,
    alice: UserId,
) -> eyre::Result<()> {
    let board = workspace
        .boards
        .create(&alice, "Temporary", ColorTheme::default())
        .await?;
    workspace
        .fill_column(&alice, board.id(), "todo", &["a", "b"])
        .await?;
    workspace
        .fill_column(&alice, board.id(), "finished", &["c"])
        .await?;

    let deletion = workspace.boards.delete(&alice, board.id()).await?;
    let remaining = workspace.tasks.list_board(&alice, board.id()).await?;
    let lookup = workspace.boards.find_visible(&alice, board.id()).await;

    assert_eq!(deletion.deleted_boards, 1);
    assert_eq!(deletion.deleted_tasks, 3);
    assert!(remaining.is_empty());
    assert!(matches!(lookup, Err(BoardCatalogError::NotFound(_))));
    Ok(())
}
