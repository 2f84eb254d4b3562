//! Graphviz DOT emission for dependency graphs.

use std::io::{self, Write};

use crate::graph::DependencyGraph;

/// Emits a [`DependencyGraph`] as Graphviz DOT source.
///
/// Every package becomes a node labeled with its name; every graph edge is
/// written as a dashed bidirectional edge statement.
///
/// # Example
///
/// ```
/// use npmgraph::graph::DependencyGraph;
/// use npmgraph::render::DotRenderer;
///
/// let mut graph = DependencyGraph::new();
/// graph.add_dependency("react", "^18.2.0");
/// graph.add_dependency("lodash", "^4.17.21");
/// graph.add_edge("react", "lodash");
///
/// let dot = DotRenderer::new().render_to_string(&graph).unwrap();
/// assert!(dot.contains("digraph"));
/// assert!(dot.contains("\"react\""));
/// assert!(dot.contains("dir=both"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    /// Optional comment label written into the digraph header.
    comment: Option<String>,
}

impl DotRenderer {
    /// Creates a renderer with the default comment.
    pub fn new() -> Self {
        Self {
            comment: Some("Npm Dependency Graph".to_string()),
        }
    }

    /// Creates a renderer with a custom comment, or none.
    pub fn with_comment(comment: Option<String>) -> Self {
        Self { comment }
    }

    /// Writes the graph as DOT to the given writer.
    pub fn render<W: Write>(&self, graph: &DependencyGraph, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "digraph dependencies {{")?;
        if let Some(ref comment) = self.comment {
            writeln!(writer, "    label={};", quote(comment))?;
        }
        writeln!(writer, "    node [shape=box];")?;

        for node in graph.nodes() {
            writeln!(writer, "    {} [label={}];", quote(&node.name), quote(&node.name))?;
        }

        for (from, to) in graph.edges() {
            writeln!(
                writer,
                "    {} -> {} [dir=both, style=dashed];",
                quote(&from.name),
                quote(&to.name)
            )?;
        }

        writeln!(writer, "}}")?;
        Ok(())
    }

    /// Renders the graph as a DOT string.
    pub fn render_to_string(&self, graph: &DependencyGraph) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.render(graph, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Quotes a DOT identifier, escaping embedded quotes and backslashes.
///
/// npm package names routinely contain characters DOT does not allow in bare
/// identifiers (`@`, `/`, `-`, `.`), so every identifier is quoted.
fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
