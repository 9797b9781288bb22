//! Core domain model
//!
//! Members, courses and the registries that hold them. Everything here is
//! pure in-memory state with no I/O, so it can be exercised directly from
//! tests without going through the shell.

pub mod course;
pub mod member;
pub mod registry;
pub mod validation;

#[cfg(test)]
mod registry_proptest;

#[cfg(test)]
mod validation_proptest;
