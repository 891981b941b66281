//! Unit tests for the user profile module.

mod service_tests;
