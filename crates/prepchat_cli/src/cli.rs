//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// Terminal study companion for AWS and Scrum certification exams
#[derive(Parser)]
#[command(name = "prepchat", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive study chat session
    Chat {
        /// Model id to use. Uses PREPCHAT_MODEL_ID env if not set.
        #[arg(long)]
        model: Option<String>,
        /// Enable the content-safety guardrail call path
        #[arg(long)]
        guardrail: bool,
        /// Attach a study file (pdf, docx, txt, or image) before the first turn
        #[arg(long)]
        file: Option<String>,
    },
    /// Ask a single question and print the answer
    Ask {
        /// The question to ask
        question: String,
        /// Attach a study file (pdf, docx, txt, or image)
        #[arg(long)]
        file: Option<String>,
        /// Model id to use. Uses PREPCHAT_MODEL_ID env if not set.
        #[arg(long)]
        model: Option<String>,
        /// Enable the content-safety guardrail call path
        #[arg(long)]
        guardrail: bool,
    },
    /// List the quick study topics
    Topics,
}
