//! Unit tests for the celebration context.
