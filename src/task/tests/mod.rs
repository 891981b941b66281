//! Unit tests for tasks and position reindexing.

mod domain_tests;
mod service_tests;
