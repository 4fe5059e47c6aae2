//! Command handlers for the Coffee Shop CLI

pub mod auth;
pub mod bundle;
pub mod config;
pub mod endpoints;
pub mod init;
