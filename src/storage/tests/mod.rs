//! Unit tests for the storage context.
