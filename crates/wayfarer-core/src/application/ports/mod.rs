//! Driven (output) ports — implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `wayfarer-adapters` crate provides implementations.

pub mod output;

pub use output::{EntityStore, Filesystem, Prompter};
