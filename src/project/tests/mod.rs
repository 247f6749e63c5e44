//! Unit tests for the project aggregate.
