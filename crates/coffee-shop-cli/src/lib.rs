//! # Coffee Shop CLI
//!
//! Command-line interface for inspecting, validating and emitting the
//! Coffee Shop environment configuration.
//!
//! ## Architecture
//!
//! - Clap-based argument parsing with derive macros
//! - Handler-based command processing
//! - Configuration loading and validation from `coffee-shop-config`

pub mod cli;
pub mod error;
pub mod output;

pub use cli::*;
pub use error::*;
