//! Plain-text graph serialisation.
//!
//! The format is a header line `"<vertex_count> <edge_count>"` followed by one
//! line per edge, `"<u> <v> <weight>"`, whitespace separated. Blank lines are
//! skipped. Loading funnels every edge through [`Graph::add_edge`], so a file
//! that violates the graph invariants is rejected with the underlying
//! [`GraphError`].

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::{Graph, GraphError};

/// Errors raised while reading a graph from its text format.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    /// The underlying reader failed.
    #[error("failed to read graph data: {0}")]
    Io(#[from] io::Error),
    /// The input ended before the header line.
    #[error("graph data is empty; expected a `<vertices> <edges>` header")]
    MissingHeader,
    /// A line did not parse as the expected record.
    #[error("line {line_number}: cannot parse `{content}` as {expected}")]
    Parse {
        /// 1-based line number of the offending line.
        line_number: usize,
        /// The offending line, trimmed.
        content: String,
        /// Description of the expected record shape.
        expected: &'static str,
    },
    /// The input ended before the announced number of edges.
    #[error("edge list is truncated: header announced {expected} edges, found {found}")]
    Truncated {
        /// Edge count announced by the header.
        expected: usize,
        /// Edges actually present.
        found: usize,
    },
    /// An edge violated the graph invariants.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl FormatError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> FormatErrorCode {
        match self {
            Self::Io(_) => FormatErrorCode::Io,
            Self::MissingHeader => FormatErrorCode::MissingHeader,
            Self::Parse { .. } => FormatErrorCode::Parse,
            Self::Truncated { .. } => FormatErrorCode::Truncated,
            Self::Graph(_) => FormatErrorCode::Graph,
        }
    }
}

/// Machine-readable error codes for [`FormatError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FormatErrorCode {
    /// The underlying reader failed.
    Io,
    /// The input ended before the header line.
    MissingHeader,
    /// A line did not parse as the expected record.
    Parse,
    /// The input ended before the announced number of edges.
    Truncated,
    /// An edge violated the graph invariants.
    Graph,
}

impl FormatErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "FORMAT_IO",
            Self::MissingHeader => "FORMAT_MISSING_HEADER",
            Self::Parse => "FORMAT_PARSE",
            Self::Truncated => "FORMAT_TRUNCATED",
            Self::Graph => "FORMAT_GRAPH",
        }
    }
}

/// Reads a graph from its text format.
///
/// # Errors
/// Returns [`FormatError`] when the reader fails, the header or an edge line
/// does not parse, the edge list is shorter than announced, or an edge
/// violates the graph invariants.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use arbor_core::read_graph;
///
/// let graph = read_graph(Cursor::new("3 2\n0 1 4\n1 2 5\n"))?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), arbor_core::FormatError>(())
/// ```
pub fn read_graph(reader: impl BufRead) -> Result<Graph, FormatError> {
    let mut lines = NumberedLines::new(reader);

    let Some((line_number, header)) = lines.next_content()? else {
        return Err(FormatError::MissingHeader);
    };
    let (vertex_count, edge_count) = parse_header(line_number, &header)?;

    let mut graph = Graph::new(vertex_count);
    for found in 0..edge_count {
        let Some((edge_line_number, record)) = lines.next_content()? else {
            return Err(FormatError::Truncated {
                expected: edge_count,
                found,
            });
        };
        let (u, v, weight) = parse_edge(edge_line_number, &record)?;
        graph.add_edge(u, v, weight)?;
    }

    Ok(graph)
}

/// Writes a graph in its text format.
///
/// # Errors
/// Returns [`io::Error`] when the writer fails.
pub fn write_graph(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;
    for edge in graph.edges() {
        writeln!(writer, "{} {} {}", edge.u(), edge.v(), edge.weight())?;
    }
    Ok(())
}

/// Loads a graph from the file at `path`.
///
/// # Errors
/// Returns [`FormatError`] when the file cannot be opened or its content is
/// not a valid graph.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph, FormatError> {
    let file = File::open(path)?;
    read_graph(BufReader::new(file))
}

/// Saves a graph to the file at `path`, replacing any existing content.
///
/// # Errors
/// Returns [`io::Error`] when the file cannot be created or written.
pub fn save_graph(graph: &Graph, path: impl AsRef<Path>) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_graph(graph, &mut writer)?;
    writer.flush()
}

/// Line iterator that skips blank lines and tracks 1-based line numbers.
struct NumberedLines<R> {
    lines: io::Lines<R>,
    line_number: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    fn next_content(&mut self) -> Result<Option<(usize, String)>, FormatError> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_number += 1;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some((self.line_number, trimmed.to_owned())));
            }
        }
        Ok(None)
    }
}

fn parse_header(line_number: usize, content: &str) -> Result<(usize, usize), FormatError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    if let [vertices, edges] = fields.as_slice() {
        if let (Ok(vertices), Ok(edges)) = (vertices.parse(), edges.parse()) {
            return Ok((vertices, edges));
        }
    }
    Err(FormatError::Parse {
        line_number,
        content: content.to_owned(),
        expected: "`<vertices> <edges>` header",
    })
}

fn parse_edge(line_number: usize, content: &str) -> Result<(usize, usize, i64), FormatError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    if let [u, v, weight] = fields.as_slice() {
        if let (Ok(u), Ok(v), Ok(weight)) = (u.parse(), v.parse(), weight.parse()) {
            return Ok((u, v, weight));
        }
    }
    Err(FormatError::Parse {
        line_number,
        content: content.to_owned(),
        expected: "`<u> <v> <weight>` edge record",
    })
}
