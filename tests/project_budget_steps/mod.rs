//! Step definitions for project budget behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
