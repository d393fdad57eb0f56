//! Common test utilities for menu-mirror integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment for running the CLI
//! - Fixtures: menu documents and in-memory source trees

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
