//! Common test utilities for University Manager tests
//!
//! Shared fixtures and custom assertions used by unit tests and the
//! integration test suite.

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;
