//! Smally - batch picture utility
//!
//! This library crate exposes the core functionality for integration testing.

pub mod actions;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod scanner;
pub mod summary;
