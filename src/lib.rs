//! Workspace-level integration tests for DecBig live in `tests/`.
//! This crate intentionally exports nothing.
