//! Domain-focused tests for positions and the pure reindexing rules.

use crate::board::domain::{BoardId, ColumnId};
use crate::task::domain::{
    ColumnPartition, ColumnSlot, PersistedTaskData, Position, PositionPolicy, Task, TaskDetails,
    TaskDomainError, TaskId, TaskMove, TaskPatch,
};
use crate::user::domain::UserId;
use rstest::{fixture, rstest};

struct Board {
    owner: UserId,
    board_id: BoardId,
}

#[fixture]
fn board() -> Board {
    Board {
        owner: UserId::new("owner-1").expect("valid user id"),
        board_id: BoardId::new(),
    }
}

fn column(id: &str) -> ColumnId {
    ColumnId::new(id).expect("valid column id")
}

fn position(value: u32) -> Position {
    Position::new(value).expect("valid position")
}

fn task_at(board: &Board, column_id: &str, rank: u32, title: &str) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        board_id: board.board_id,
        column_id: column(column_id),
        position: position(rank),
        owner: board.owner.clone(),
        details: TaskDetails::new(title).expect("valid title"),
    })
}

fn slot(column_id: &str, rank: u32) -> ColumnSlot {
    ColumnSlot::new(column(column_id), position(rank))
}

fn ranks(tasks: &[Task], column_id: &str) -> Vec<(String, u32)> {
    let mut listed: Vec<(String, u32)> = tasks
        .iter()
        .filter(|task| task.column_id().as_str() == column_id)
        .map(|task| (task.details().title.clone(), task.position().value()))
        .collect();
    listed.sort_by_key(|(_, rank)| *rank);
    listed
}

#[rstest]
#[case(-1)]
#[case(-42)]
fn position_rejects_negative_ranks(#[case] requested: i64) {
    assert_eq!(
        Position::try_from(requested),
        Err(TaskDomainError::NegativePosition(requested))
    );
}

#[rstest]
fn position_rejects_ranks_beyond_persisted_range() {
    let requested = i64::from(i32::MAX) + 1;
    assert_eq!(
        Position::try_from(requested),
        Err(TaskDomainError::PositionOutOfRange(requested))
    );
}

#[rstest]
fn position_previous_saturates_at_first() {
    assert_eq!(Position::FIRST.previous(), Position::FIRST);
    assert_eq!(position(3).previous(), position(2));
}

#[rstest]
fn details_reject_blank_title() {
    assert_eq!(TaskDetails::new("   "), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn patch_ignores_empty_strings_and_keeps_placement(board: Board) {
    let mut task = task_at(&board, "todo", 2, "Write report");
    let patch = TaskPatch {
        title: Some(String::new()),
        description: Some("Quarterly numbers".to_owned()),
        priority: Some(String::new()),
        ..TaskPatch::default()
    };

    task.apply_patch(&patch).expect("patch should apply");

    assert_eq!(task.details().title, "Write report");
    assert_eq!(task.details().description, "Quarterly numbers");
    assert_eq!(task.slot(), slot("todo", 2));
}

#[rstest]
fn patch_rejects_whitespace_title(board: Board) {
    let mut task = task_at(&board, "todo", 0, "Write report");
    let patch = TaskPatch {
        title: Some("  ".to_owned()),
        ..TaskPatch::default()
    };

    assert_eq!(task.apply_patch(&patch), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn cross_column_move_shifts_destination_at_and_below_rank(board: Board) {
    let mut moved = task_at(&board, "todo", 0, "new");
    let mut others = vec![
        task_at(&board, "done", 0, "d0"),
        task_at(&board, "done", 1, "d1"),
        task_at(&board, "done", 2, "d2"),
    ];
    let task_move = TaskMove::new(
        moved.id(),
        board.owner.clone(),
        slot("done", 1),
        PositionPolicy::default(),
    );

    assert!(task_move.apply(&mut moved, others.iter_mut()));
    others.push(moved);

    assert_eq!(
        ranks(&others, "done"),
        vec![
            ("d0".to_owned(), 0),
            ("new".to_owned(), 1),
            ("d1".to_owned(), 2),
            ("d2".to_owned(), 3),
        ]
    );
}

#[rstest]
fn move_onto_current_slot_is_a_noop(board: Board) {
    let mut moved = task_at(&board, "todo", 1, "stay");
    let mut others = vec![task_at(&board, "todo", 0, "above")];
    let before = others.clone();
    let task_move = TaskMove::new(
        moved.id(),
        board.owner.clone(),
        slot("todo", 1),
        PositionPolicy::default(),
    );

    assert!(!task_move.apply(&mut moved, others.iter_mut()));
    assert_eq!(moved.slot(), slot("todo", 1));
    assert_eq!(others, before);
}

#[rstest]
fn move_without_compaction_leaves_source_gap(board: Board) {
    let mut moved = task_at(&board, "todo", 0, "first");
    let mut others = vec![task_at(&board, "todo", 1, "second")];
    let task_move = TaskMove::new(
        moved.id(),
        board.owner.clone(),
        slot("done", 0),
        PositionPolicy::default(),
    );

    assert!(task_move.apply(&mut moved, others.iter_mut()));

    assert_eq!(ranks(&others, "todo"), vec![("second".to_owned(), 1)]);
    assert_eq!(moved.slot(), slot("done", 0));
}

#[rstest]
fn move_with_compaction_closes_gap_and_clamps_rank(board: Board) {
    let policy = PositionPolicy {
        compact_vacated: true,
        ..PositionPolicy::default()
    };
    let mut moved = task_at(&board, "todo", 0, "first");
    let mut others = vec![
        task_at(&board, "todo", 1, "second"),
        task_at(&board, "done", 0, "shipped"),
    ];
    let task_move = TaskMove::new(moved.id(), board.owner.clone(), slot("done", 9), policy);

    assert!(task_move.apply(&mut moved, others.iter_mut()));
    others.push(moved);

    assert_eq!(ranks(&others, "todo"), vec![("second".to_owned(), 0)]);
    assert_eq!(
        ranks(&others, "done"),
        vec![("shipped".to_owned(), 0), ("first".to_owned(), 1)]
    );
    let done = ColumnPartition::new(board.owner.clone(), board.board_id, column("done"));
    assert!(done.is_dense(&others));
}

#[rstest]
fn same_column_move_with_compaction_keeps_column_dense(board: Board) {
    let policy = PositionPolicy {
        compact_vacated: true,
        ..PositionPolicy::default()
    };
    let mut moved = task_at(&board, "todo", 0, "a");
    let mut others = vec![
        task_at(&board, "todo", 1, "b"),
        task_at(&board, "todo", 2, "c"),
    ];
    let task_move = TaskMove::new(moved.id(), board.owner.clone(), slot("todo", 2), policy);

    assert!(task_move.apply(&mut moved, others.iter_mut()));
    others.push(moved);

    assert_eq!(
        ranks(&others, "todo"),
        vec![
            ("b".to_owned(), 0),
            ("c".to_owned(), 1),
            ("a".to_owned(), 2),
        ]
    );
}

#[rstest]
fn move_never_touches_other_owners_or_boards(board: Board) {
    let stranger = Board {
        owner: UserId::new("owner-2").expect("valid user id"),
        board_id: board.board_id,
    };
    let other_board = Board {
        owner: board.owner.clone(),
        board_id: BoardId::new(),
    };
    let mut moved = task_at(&board, "todo", 0, "mine");
    let mut others = vec![
        task_at(&stranger, "done", 0, "theirs"),
        task_at(&other_board, "done", 0, "elsewhere"),
    ];
    let task_move = TaskMove::new(
        moved.id(),
        board.owner.clone(),
        slot("done", 0),
        PositionPolicy::default(),
    );

    assert!(task_move.apply(&mut moved, others.iter_mut()));

    assert!(others.iter().all(|task| task.position() == Position::FIRST));
}

#[rstest]
fn dense_check_detects_gaps_and_duplicates(board: Board) {
    let partition = ColumnPartition::new(board.owner.clone(), board.board_id, column("todo"));
    let dense = vec![task_at(&board, "todo", 1, "b"), task_at(&board, "todo", 0, "a")];
    let gapped = vec![task_at(&board, "todo", 0, "a"), task_at(&board, "todo", 2, "c")];
    let duplicated = vec![task_at(&board, "todo", 0, "a"), task_at(&board, "todo", 0, "b")];

    assert!(partition.is_dense(&dense));
    assert!(!partition.is_dense(&gapped));
    assert!(!partition.is_dense(&duplicated));
    assert!(partition.is_dense(&[]));
}
