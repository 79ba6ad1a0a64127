//! Command-line interface orchestration for arbor.
//!
//! The CLI loads or generates a graph, runs one spanning-tree algorithm or
//! the full tournament against it, and renders the outcome to stdout.

mod commands;

pub use commands::{
    AlgorithmArg, Cli, CliError, Command, ExecutionSummary, FileArgs, GenerateArgs,
    GenerateCommand, GeneratedSummary, GeneratorKind, GraphSource, RunCommand, RunSummary,
    TournamentCommand, TournamentSummary, render_summary, run_cli,
};
