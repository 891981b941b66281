//! Lifecycle service tests for task creation, edits and removal.

use std::sync::Arc;

use crate::board::domain::BoardId;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PositionPolicy, TaskDomainError, TaskId, TaskPatch},
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService},
};
use crate::user::domain::UserId;
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskRepository>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        PositionPolicy::default(),
    )
}

fn owner() -> UserId {
    UserId::new("owner-1").expect("valid user id")
}

async fn titles_by_rank(service: &TestService, board_id: BoardId) -> Vec<(String, u32)> {
    service
        .list_board(&owner(), board_id)
        .await
        .expect("listing should succeed")
        .iter()
        .map(|task| (task.details().title.clone(), task.position().value()))
        .collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_prepends_and_shifts_existing_tasks(service: TestService) {
    let board_id = BoardId::new();
    for title in ["older", "newer"] {
        service
            .create(&owner(), CreateTaskRequest::new(board_id, "todo", title))
            .await
            .expect("creation should succeed");
    }

    assert_eq!(
        titles_by_rank(&service, board_id).await,
        vec![("newer".to_owned(), 0), ("older".to_owned(), 1)]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_carries_descriptive_fields(service: TestService) {
    let created = service
        .create(
            &owner(),
            CreateTaskRequest::new(BoardId::new(), "todo", "Plan sprint")
                .with_description("Pick stories")
                .with_priority("high")
                .with_kind("work"),
        )
        .await
        .expect("creation should succeed");

    assert_eq!(created.details().description, "Pick stories");
    assert_eq!(created.details().priority, "high");
    assert_eq!(created.details().kind, "work");
    assert_eq!(created.position().value(), 0);
}

#[rstest]
#[case("", "todo")]
#[case("Title", "  ")]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_title_or_column(
    service: TestService,
    #[case] title: &str,
    #[case] column: &str,
) {
    let result = service
        .create(&owner(), CreateTaskRequest::new(BoardId::new(), column, title))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(_) | TaskLifecycleError::Column(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_details_keeps_placement(service: TestService) {
    let board_id = BoardId::new();
    let first = service
        .create(&owner(), CreateTaskRequest::new(board_id, "todo", "first"))
        .await
        .expect("creation should succeed");
    service
        .create(&owner(), CreateTaskRequest::new(board_id, "todo", "second"))
        .await
        .expect("creation should succeed");
    let patch = TaskPatch {
        title: Some("renamed".to_owned()),
        ..TaskPatch::default()
    };

    let updated = service
        .update_details(&owner(), first.id(), &patch)
        .await
        .expect("update should succeed");

    assert_eq!(updated.details().title, "renamed");
    assert_eq!(updated.position().value(), 1);
    assert_eq!(
        titles_by_rank(&service, board_id).await,
        vec![("second".to_owned(), 0), ("renamed".to_owned(), 1)]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_details_of_foreign_task_is_not_found(service: TestService) {
    let created = service
        .create(&owner(), CreateTaskRequest::new(BoardId::new(), "todo", "mine"))
        .await
        .expect("creation should succeed");
    let intruder = UserId::new("intruder").expect("valid user id");

    let result = service
        .update_details(&intruder, created.id(), &TaskPatch::default())
        .await;

    assert!(matches!(result, Err(TaskLifecycleError::NotFound(id)) if id == created.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_details_rejects_whitespace_title(service: TestService) {
    let created = service
        .create(&owner(), CreateTaskRequest::new(BoardId::new(), "todo", "mine"))
        .await
        .expect("creation should succeed");
    let patch = TaskPatch {
        title: Some("   ".to_owned()),
        ..TaskPatch::default()
    };

    let result = service.update_details(&owner(), created.id(), &patch).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle))
    ));
}

#[rstest]
#[case(false, vec![("c".to_owned(), 0), ("a".to_owned(), 2)])]
#[case(true, vec![("c".to_owned(), 0), ("a".to_owned(), 1)])]
#[tokio::test(flavor = "multi_thread")]
async fn delete_closes_slot_only_when_compacting(
    #[case] compact_vacated: bool,
    #[case] expected: Vec<(String, u32)>,
) {
    let service = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        PositionPolicy {
            compact_vacated,
            ..PositionPolicy::default()
        },
    );
    let board_id = BoardId::new();
    let mut created = Vec::new();
    for title in ["a", "b", "c"] {
        created.push(
            service
                .create(&owner(), CreateTaskRequest::new(board_id, "todo", title))
                .await
                .expect("creation should succeed"),
        );
    }
    let middle = created.get(1).expect("task created").id();

    service
        .delete(&owner(), middle)
        .await
        .expect("delete should succeed");

    assert_eq!(titles_by_rank(&service, board_id).await, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_matches_title_prefix_ignoring_case(service: TestService) {
    let board_id = BoardId::new();
    for title in ["Groceries", "grout the tiles", "Buy groceries"] {
        service
            .create(&owner(), CreateTaskRequest::new(board_id, "todo", title))
            .await
            .expect("creation should succeed");
    }

    let found = service
        .search_titles(&owner(), board_id, "GRO")
        .await
        .expect("search should succeed");

    let mut titles: Vec<&str> = found
        .iter()
        .map(|task| task.details().title.as_str())
        .collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["Groceries", "grout the tiles"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_task_is_not_found(service: TestService) {
    let missing = TaskId::new();

    let result = service.delete(&owner(), missing).await;

    assert!(matches!(result, Err(TaskLifecycleError::NotFound(id)) if id == missing));
}
