//! Core types and utilities for the name styler bot
//!
//! This crate provides the configuration, logging, session, and
//! style-engine building blocks used by the other crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod styles;

pub use error::{Error, Result};
