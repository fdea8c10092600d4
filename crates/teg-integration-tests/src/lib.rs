//! Cross-crate integration tests for the TEG Stack.
//!
//! The library target is intentionally empty; the suite lives in
//! `tests/`.
