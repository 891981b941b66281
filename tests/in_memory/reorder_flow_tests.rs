//! Moves and batch reorders against boards created through the catalog.

use super::helpers::{Workspace, alice, ranked, workspace};
use rstest::rstest;
use taskify::board::domain::ColorTheme;
use taskify::task::{
    domain::PositionPolicy,
    services::{MoveTaskRequest, PositionUpdate, ReorderError},
};
use taskify::user::domain::UserId;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_across_columns_shifts_destination_and_keeps_source_gap(
    workspace: Workspace,
    alice: UserId,
) -> eyre::Result<()> {
    let board = workspace
        .boards
        .create(&alice, "Sprint", ColorTheme::Purple)
        .await?;
    let todo = workspace
        .fill_column(&alice, board.id(), "todo", &["write", "review"])
        .await?;
    workspace
        .fill_column(&alice, board.id(), "finished", &["ship"])
        .await?;
    let write = todo.first().ok_or_else(|| eyre::eyre!("task created"))?;

    let moved = workspace
        .reorder
        .move_task(
            &alice,
            write.id(),
            MoveTaskRequest::new("finished", 0).on_board(board.id()),
        )
        .await?;

    assert_eq!(moved.position().value(), 0);
    assert_eq!(
        workspace.column(&alice, board.id(), "finished").await?,
        ranked(&[("write", 0), ("ship", 1)])
    );
    assert_eq!(
        workspace.column(&alice, board.id(), "todo").await?,
        ranked(&[("review", 1)])
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn compacting_policy_closes_the_source_gap(alice: UserId) -> eyre::Result<()> {
    let workspace = Workspace::with_policy(PositionPolicy {
        compact_vacated: true,
        validate_columns: true,
    });
    let board = workspace
        .boards
        .create(&alice, "Sprint", ColorTheme::Purple)
        .await?;
    let todo = workspace
        .fill_column(&alice, board.id(), "todo", &["write", "review", "merge"])
        .await?;
    let write = todo.first().ok_or_else(|| eyre::eyre!("task created"))?;

    workspace
        .reorder
        .move_task(&alice, write.id(), MoveTaskRequest::new("inprogress", 5))
        .await?;

    assert_eq!(
        workspace.column(&alice, board.id(), "todo").await?,
        ranked(&[("review", 0), ("merge", 1)])
    );
    assert_eq!(
        workspace.column(&alice, board.id(), "inprogress").await?,
        ranked(&[("write", 0)])
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn column_validation_uses_the_boards_catalog(alice: UserId) -> eyre::Result<()> {
    let workspace = Workspace::with_policy(PositionPolicy {
        validate_columns: true,
        ..PositionPolicy::default()
    });
    let board = workspace
        .boards
        .create(&alice, "Garden", ColorTheme::Green)
        .await?;
    let tasks = workspace
        .fill_column(&alice, board.id(), "backlog", &["plant"])
        .await?;
    let plant = tasks.first().ok_or_else(|| eyre::eyre!("task created"))?;

    let rejected = workspace
        .reorder
        .move_task(&alice, plant.id(), MoveTaskRequest::new("finished", 0))
        .await;
    let accepted = workspace
        .reorder
        .move_task(&alice, plant.id(), MoveTaskRequest::new("deployed", 0))
        .await?;

    assert!(matches!(rejected, Err(ReorderError::UnknownColumn { .. })));
    assert_eq!(accepted.column_id().as_str(), "deployed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn batch_reorder_rewrites_a_dragged_column(
    workspace: Workspace,
    alice: UserId,
) -> eyre::Result<()> {
    let board = workspace
        .boards
        .create(&alice, "Sprint", ColorTheme::Purple)
        .await?;
    let tasks = workspace
        .fill_column(&alice, board.id(), "todo", &["a", "b", "c"])
        .await?;
    let ids: Vec<_> = tasks.iter().map(|task| task.id()).collect();
    let [a, b, c] = ids.as_slice() else {
        eyre::bail!("expected three tasks");
    };

    let updated = workspace
        .reorder
        .reorder_batch(
            &alice,
            &[
                PositionUpdate::new(*c, 0),
                PositionUpdate::new(*a, 1),
                PositionUpdate::new(*b, 2),
            ],
        )
        .await?;

    assert!(updated.iter().all(Option::is_some));
    assert_eq!(
        workspace.column(&alice, board.id(), "todo").await?,
        ranked(&[("c", 0), ("a", 1), ("b", 2)])
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_moves_into_one_column_never_share_a_rank(
    workspace: Workspace,
    alice: UserId,
) -> eyre::Result<()> {
    let board = workspace
        .boards
        .create(&alice, "Rush", ColorTheme::Purple)
        .await?;
    let titles: Vec<String> = (0..12).map(|index| format!("task-{index}")).collect();
    let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    let tasks = workspace
        .fill_column(&alice, board.id(), "todo", &title_refs)
        .await?;

    let mut handles = Vec::new();
    for task in tasks {
        let reorder = workspace.reorder.clone();
        let owner = alice.clone();
        handles.push(tokio::spawn(async move {
            reorder
                .move_task(&owner, task.id(), MoveTaskRequest::new("finished", 0))
                .await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    let positions: Vec<u32> = workspace
        .column(&alice, board.id(), "finished")
        .await?
        .into_iter()
        .map(|(_, position)| position)
        .collect();
    assert_eq!(positions, (0..12).collect::<Vec<u32>>());
    Ok(())
}
