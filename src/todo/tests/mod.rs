//! Unit tests for the todo module.

mod ordering_tests;
mod support;
