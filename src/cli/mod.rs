//! CLI module for prepforge
//!
//! Subcommands:
//! - `generate`: look up or generate Q&A content for a role and level
//! - `history`: show the append-only log of generated content
//! - `forget`: remove a cached document

pub mod forget;
pub mod generate;
pub mod history;

use clap::{Parser, Subcommand};

/// Interview Q&A generator with a semantic similarity cache
#[derive(Parser)]
#[command(name = "prepforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate or retrieve interview Q&A for a job role
    Generate(generate::GenerateArgs),

    /// Show previously generated content
    History(history::HistoryArgs),

    /// Remove a cached document for a role and level
    Forget(forget::ForgetArgs),
}
