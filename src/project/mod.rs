//! Project aggregate with task tracking and an hour budget.
//!
//! A project owns its tasks, derives its status from their completion and
//! refuses any change that would take the total remaining hours over its
//! limit. Task changes are routed synchronously to the owning project,
//! which may veto a re-estimate before it becomes permanent. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
