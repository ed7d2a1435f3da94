//! Command-line entry point for Readme Builder.
//!
//! # Modules
//!
//! - [`app`]: [`ReadmeCli`], logging setup and command dispatch
//! - [`cli`]: clap argument definitions
//! - [`config`]: [`ReadmeConfig`] loading via confyg

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;

pub use app::ReadmeCli;
pub use cli::CliArgs;
pub use config::ReadmeConfig;
