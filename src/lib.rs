//! Planwright: project aggregates with task tracking and hour budgets.
//!
//! This crate models a project that owns a set of tasks, derives its status
//! from their completion and keeps the total remaining hours within a fixed
//! budget. Task changes are delivered synchronously to the owning project,
//! which can veto a re-estimate before it becomes permanent.
//!
//! # Architecture
//!
//! Planwright follows hexagonal architecture principles:
//!
//! - **Domain**: Pure aggregate logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, logging)
//!
//! # Modules
//!
//! - [`project`]: Project aggregate, tasks and published events

pub mod project;
