//! Taskify: kanban board backend.
//!
//! Users own boards, boards own a fixed set of columns, and every task sits
//! at a zero-based position within one column. The heart of the crate is the
//! position reindexing engine in [`task::services::ReorderService`], which
//! keeps those positions unique across moves and batch reorders.
//!
//! # Architecture
//!
//! Taskify follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Tasks, positions and the reindexing engine
//! - [`board`]: Boards, column catalogs and templates
//! - [`user`]: User profiles keyed by identity subject
//! - [`identity`]: Bearer-token verification port
//! - [`http`]: JSON API served with axum
//! - [`config`]: Layered server configuration

pub mod board;
pub mod config;
pub mod http;
pub mod identity;
pub mod task;
pub mod user;
