//! Route groups mounted under `/api/v1`.

pub(super) mod board;
pub(super) mod todo;
pub(super) mod user;
