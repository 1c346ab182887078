//! Shared library surface for searoute server utilities and tests.

pub mod api;
pub mod config;
pub mod planner;
pub mod state;
