//! CLI module - Command-line interface for coursehub
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// coursehub - course catalog and account service
#[derive(Parser)]
#[command(name = "coursehub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    #[command(alias = "web")]
    Serve,

    /// Load courses from a JSON array file into the catalog
    ImportCourses {
        /// Path to the JSON file
        path: PathBuf,
    },
}

pub use commands::*;
