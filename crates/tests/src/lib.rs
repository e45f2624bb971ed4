//! Router-level integration tests live under `tests/`.
