//! Command implementations and argument parsing for the arbor CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use arbor_core::{
    Algorithm, AlgorithmError, FormatError, GenerateError, Graph, GraphSpec, SpanningTree,
    Tournament, generate, load_graph, run_tournament, save_graph,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_VERTICES: usize = 16;
const DEFAULT_MAX_WEIGHT: i64 = 100;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_SPARSE_DENSITY: f64 = 0.1;
const DEFAULT_DENSE_DENSITY: f64 = 0.9;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "arbor", about = "Run spanning-tree algorithms over weighted graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run one algorithm and print the resulting spanning tree.
    Run(RunCommand),
    /// Run every algorithm on the same graph and print the ranking table.
    Tournament(TournamentCommand),
    /// Generate a graph and write it to a file in the text format.
    Generate(GenerateCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Algorithm to run.
    #[arg(long, value_enum)]
    pub algorithm: AlgorithmArg,

    /// Graph source.
    #[command(subcommand)]
    pub source: GraphSource,
}

/// Options accepted by the `tournament` command.
#[derive(Debug, Args, Clone)]
pub struct TournamentCommand {
    /// Name printed above the ranking table.
    #[arg(long, default_value = "tournament")]
    pub name: String,

    /// Graph source.
    #[command(subcommand)]
    pub source: GraphSource,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Generator configuration.
    #[command(flatten)]
    pub generator: GenerateArgs,

    /// Path the generated graph is written to.
    #[arg(long)]
    pub output: PathBuf,
}

/// Graph sources shared by `run` and `tournament`.
#[derive(Debug, Subcommand, Clone)]
pub enum GraphSource {
    /// Load a graph from its text format.
    File(FileArgs),
    /// Generate a graph from a seeded generator.
    Generate(GenerateArgs),
}

/// File loading arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to a graph in the text format.
    pub path: PathBuf,
}

/// Generator arguments shared by every command that builds a graph.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Generator family.
    #[arg(long, value_enum)]
    pub kind: GeneratorKind,

    /// Number of vertices (ignored by `grid`).
    #[arg(long, default_value_t = DEFAULT_VERTICES)]
    pub vertices: usize,

    /// Edge budget for `random`; defaults to twice the vertex count.
    #[arg(long)]
    pub edges: Option<usize>,

    /// Edge probability for `sparse` and `dense`.
    #[arg(long)]
    pub density: Option<f64>,

    /// Grid rows.
    #[arg(long, default_value_t = 4)]
    pub rows: usize,

    /// Grid columns.
    #[arg(long, default_value_t = 4)]
    pub cols: usize,

    /// Inclusive upper bound for edge weights.
    #[arg(long = "max-weight", default_value_t = DEFAULT_MAX_WEIGHT)]
    pub max_weight: i64,

    /// Seed for deterministic generation.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl GenerateArgs {
    /// Resolves the arguments into a core [`GraphSpec`].
    #[must_use]
    pub fn spec(&self) -> GraphSpec {
        match self.kind {
            GeneratorKind::Random => GraphSpec::Random {
                vertices: self.vertices,
                edges: self.edges.unwrap_or(self.vertices * 2),
                max_weight: self.max_weight,
            },
            GeneratorKind::Complete => GraphSpec::Complete {
                vertices: self.vertices,
                max_weight: self.max_weight,
            },
            GeneratorKind::Sparse => GraphSpec::Sparse {
                vertices: self.vertices,
                density: self.density.unwrap_or(DEFAULT_SPARSE_DENSITY),
                max_weight: self.max_weight,
            },
            GeneratorKind::Dense => GraphSpec::Dense {
                vertices: self.vertices,
                density: self.density.unwrap_or(DEFAULT_DENSE_DENSITY),
                max_weight: self.max_weight,
            },
            GeneratorKind::Tree => GraphSpec::Tree {
                vertices: self.vertices,
                max_weight: self.max_weight,
            },
            GeneratorKind::Grid => GraphSpec::Grid {
                rows: self.rows,
                cols: self.cols,
                max_weight: self.max_weight,
            },
        }
    }
}

/// Generator families exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GeneratorKind {
    /// Connected graph with a requested edge budget.
    Random,
    /// Complete graph.
    Complete,
    /// Spanning tree plus a small fraction of extra edges.
    Sparse,
    /// Spanning tree plus most remaining pairs.
    Dense,
    /// Random spanning tree.
    Tree,
    /// Grid with 4-neighbour connectivity.
    Grid,
}

impl GeneratorKind {
    fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Complete => "complete",
            Self::Sparse => "sparse",
            Self::Dense => "dense",
            Self::Tree => "tree",
            Self::Grid => "grid",
        }
    }
}

/// Algorithm selection exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AlgorithmArg {
    /// Borůvka's iterative contraction.
    Boruvka,
    /// Kruskal's sort-and-union.
    Kruskal,
    /// Prim's frontier growth.
    Prim,
    /// Reverse-Delete deletion testing.
    ReverseDelete,
    /// Second-best MST via single-edge swap.
    SecondBest,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Boruvka => Self::Boruvka,
            AlgorithmArg::Kruskal => Self::Kruskal,
            AlgorithmArg::Prim => Self::Prim,
            AlgorithmArg::ReverseDelete => Self::ReverseDelete,
            AlgorithmArg::SecondBest => Self::SecondBest,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading a graph file failed.
    #[error("failed to load `{path}`: {source}")]
    Load {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying format or I/O error.
        #[source]
        source: FormatError,
    },
    /// Writing a generated graph failed.
    #[error("failed to write `{path}`: {source}")]
    Save {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Graph generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
    /// The strict validation tier rejected the graph.
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// A single algorithm run.
    Run(RunSummary),
    /// A full tournament.
    Tournament(TournamentSummary),
    /// A generated graph written to disk.
    Generated(GeneratedSummary),
}

/// Outcome of a single strict-tier run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Label of the graph source.
    pub graph_label: String,
    /// Vertex count of the input graph.
    pub vertices: usize,
    /// Edge count of the input graph.
    pub edges: usize,
    /// The computed tree.
    pub tree: SpanningTree,
    /// Whether the tree spans the input graph.
    pub spanning: bool,
}

/// Outcome of a tournament run.
#[derive(Debug, Clone)]
pub struct TournamentSummary {
    /// Label of the graph source.
    pub graph_label: String,
    /// Vertex count of the input graph.
    pub vertices: usize,
    /// Edge count of the input graph.
    pub edges: usize,
    /// The recorded tournament.
    pub tournament: Tournament,
}

/// Outcome of the `generate` command.
#[derive(Debug, Clone)]
pub struct GeneratedSummary {
    /// Path the graph was written to.
    pub path: PathBuf,
    /// Vertex count of the generated graph.
    pub vertices: usize,
    /// Edge count of the generated graph.
    pub edges: usize,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, generation, or execution fails.
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(run).map(ExecutionSummary::Run)
        }
        Command::Tournament(tournament) => {
            span.record("command", field::display("tournament"));
            tournament_command(tournament).map(ExecutionSummary::Tournament)
        }
        Command::Generate(generate) => {
            span.record("command", field::display("generate"));
            generate_command(generate).map(ExecutionSummary::Generated)
        }
    }
}

#[instrument(
    name = "cli.execute_run",
    err,
    skip(command),
    fields(algorithm = field::Empty, graph = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<RunSummary, CliError> {
    let algorithm = Algorithm::from(command.algorithm);
    let (graph, graph_label) = load_source(command.source)?;

    let span = Span::current();
    span.record("algorithm", field::display(algorithm.name()));
    span.record("graph", field::display(&graph_label));

    let tree = algorithm.find_spanning_tree(&graph)?;
    let spanning = tree.is_valid(&graph);
    info!(
        graph = graph_label.as_str(),
        total_weight = tree.total_weight(),
        spanning,
        "run completed"
    );
    Ok(RunSummary {
        graph_label,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        tree,
        spanning,
    })
}

#[instrument(
    name = "cli.execute_tournament",
    err,
    skip(command),
    fields(name = field::Empty, graph = field::Empty),
)]
pub(super) fn tournament_command(
    command: TournamentCommand,
) -> Result<TournamentSummary, CliError> {
    let (graph, graph_label) = load_source(command.source)?;

    let span = Span::current();
    span.record("name", field::display(&command.name));
    span.record("graph", field::display(&graph_label));

    let tournament = run_tournament(&command.name, &graph)?;
    info!(
        graph = graph_label.as_str(),
        entries = tournament.entries().len(),
        "tournament completed"
    );
    Ok(TournamentSummary {
        graph_label,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        tournament,
    })
}

#[instrument(
    name = "cli.execute_generate",
    err,
    skip(command),
    fields(kind = command.generator.kind.label(), output = %command.output.display()),
)]
pub(super) fn generate_command(command: GenerateCommand) -> Result<GeneratedSummary, CliError> {
    let graph = generate(&command.generator.spec(), command.generator.seed)?;
    save_graph(&graph, &command.output).map_err(|source| CliError::Save {
        path: command.output.clone(),
        source,
    })?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph written"
    );
    Ok(GeneratedSummary {
        path: command.output,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
    })
}

fn load_source(source: GraphSource) -> Result<(Graph, String), CliError> {
    match source {
        GraphSource::File(args) => {
            let graph = load_graph(&args.path).map_err(|source| CliError::Load {
                path: args.path.clone(),
                source,
            })?;
            Ok((graph, derive_graph_label(&args.path)))
        }
        GraphSource::Generate(args) => {
            let graph = generate(&args.spec(), args.seed)?;
            Ok((graph, args.kind.label().to_owned()))
        }
    }
}

pub(super) fn derive_graph_label(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "graph".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Run(run) => render_run(run, &mut writer),
        ExecutionSummary::Tournament(tournament) => render_tournament(tournament, &mut writer),
        ExecutionSummary::Generated(generated) => render_generated(generated, &mut writer),
    }
}

fn render_run(summary: &RunSummary, writer: &mut impl Write) -> io::Result<()> {
    let tree = &summary.tree;
    writeln!(writer, "=== {} ===", tree.algorithm().name())?;
    writeln!(
        writer,
        "graph: {} ({} vertices, {} edges)",
        summary.graph_label, summary.vertices, summary.edges
    )?;
    writeln!(writer, "edges in spanning tree ({}):", tree.edges().len())?;
    for edge in tree.edges() {
        writeln!(writer, "  {} -- {} [weight={}]", edge.u(), edge.v(), edge.weight())?;
    }
    writeln!(writer, "total weight: {}", tree.total_weight())?;
    writeln!(writer, "elapsed: {} ms", format_millis(tree.elapsed()))?;
    writeln!(
        writer,
        "status: {}",
        if summary.spanning { "spanning" } else { "not spanning" }
    )?;
    Ok(())
}

fn render_tournament(summary: &TournamentSummary, writer: &mut impl Write) -> io::Result<()> {
    let tournament = &summary.tournament;
    writeln!(
        writer,
        "TOURNAMENT - {} on {} ({} vertices, {} edges)",
        tournament.name(),
        summary.graph_label,
        summary.vertices,
        summary.edges
    )?;
    writeln!(
        writer,
        "{:<6} {:<28} {:>10} {:>8}  {}",
        "place", "algorithm", "time (ms)", "weight", "status"
    )?;
    for (index, entry) in tournament.ranking().iter().enumerate() {
        writeln!(
            writer,
            "{:<6} {:<28} {:>10} {:>8}  {}",
            place(index),
            entry.algorithm().name(),
            format_millis(entry.elapsed()),
            entry.total_weight(),
            if entry.spanning() { "spanning" } else { "not spanning" },
        )?;
    }
    if let Some(fastest) = tournament.fastest() {
        writeln!(
            writer,
            "fastest: {} ({} ms)",
            fastest.algorithm().name(),
            format_millis(fastest.elapsed()),
        )?;
    }
    if let Some(best) = tournament.best_weight() {
        writeln!(
            writer,
            "best weight: {} ({})",
            best.algorithm().name(),
            best.total_weight(),
        )?;
    }
    Ok(())
}

fn render_generated(summary: &GeneratedSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "wrote {} ({} vertices, {} edges)",
        summary.path.display(),
        summary.vertices,
        summary.edges
    )
}

fn format_millis(elapsed: std::time::Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64() * 1_000.0)
}

fn place(index: usize) -> String {
    match index {
        0 => "1st".to_owned(),
        1 => "2nd".to_owned(),
        2 => "3rd".to_owned(),
        later => format!("{}th", later + 1),
    }
}
