//! Unit tests for boards, templates and statistics.
