//! Workspace-level integration tests for keycalc. See `tests/`.
