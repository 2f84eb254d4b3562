//! Dependency graph implementation using petgraph.
//!
//! Provides a directed graph over a project's direct dependencies, built from
//! the merged dependency set and consumed by the DOT renderer.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use crate::parser::DependencySet;

/// How edges are laid out between the packages of a dependency set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphStyle {
    /// Every distinct ordered pair of packages is connected. Mirrors the
    /// historical behavior of this tool; the connections do not encode real
    /// package-to-package dependencies.
    #[default]
    Complete,

    /// One root node for the project with an edge to each direct dependency.
    Star,
}

impl std::fmt::Display for GraphStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::Star => write!(f, "star"),
        }
    }
}

impl std::str::FromStr for GraphStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "complete" => Ok(Self::Complete),
            "star" => Ok(Self::Star),
            _ => Err(format!(
                "Unknown graph style: '{}'. Valid styles: complete, star",
                s
            )),
        }
    }
}

/// Represents a node in the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    /// Package name (e.g., "react", "@types/node")
    pub name: String,
    /// Version specification (e.g., "^18.2.0", "~1.2.3")
    pub version: String,
}

impl DependencyNode {
    /// Creates a new dependency node.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A directed graph over a project's direct dependencies.
///
/// The graph uses petgraph's `DiGraph` internally, with nodes representing
/// packages. Exists only transiently for rendering; it is discarded after
/// the image is written.
///
/// # Example
///
/// ```rust
/// use npmgraph::graph::DependencyGraph;
///
/// let mut graph = DependencyGraph::new();
/// graph.add_dependency("react", "^18.2.0");
/// graph.add_dependency("lodash", "^4.17.21");
/// graph.add_edge("react", "lodash");
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// The underlying directed graph
    graph: DiGraph<DependencyNode, ()>,
    /// Maps package names to their node indices for O(1) lookup
    node_indices: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Creates a new empty dependency graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_indices: HashMap::with_capacity(nodes),
        }
    }

    /// Builds the all-pairs graph over a merged dependency set.
    ///
    /// Adds one node per package and one directed edge per ordered pair of
    /// distinct packages, so a set of size N yields N nodes and N·(N−1)
    /// edges. Rendered with bidirectional edge arrows, each undirected
    /// connection therefore appears twice.
    ///
    /// # Example
    ///
    /// ```rust
    /// use npmgraph::graph::DependencyGraph;
    /// use npmgraph::parser::DependencySet;
    ///
    /// let deps: DependencySet = [
    ///     ("a".to_string(), "^1.0.0".to_string()),
    ///     ("b".to_string(), "^2.0.0".to_string()),
    ///     ("c".to_string(), "^3.0.0".to_string()),
    /// ].into_iter().collect();
    ///
    /// let graph = DependencyGraph::complete(&deps);
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 6);
    /// ```
    pub fn complete(deps: &DependencySet) -> Self {
        let n = deps.len();
        let mut graph = Self::with_capacity(n, n.saturating_sub(1) * n);

        for (name, version) in deps {
            graph.add_dependency(name, version);
        }

        for from in deps.keys() {
            for to in deps.keys() {
                if from != to {
                    graph.add_edge(from, to);
                }
            }
        }

        graph
    }

    /// Builds a star graph from a project root to each of its dependencies.
    ///
    /// Adds one node for the project itself plus one node per package, and
    /// one edge from the root to each package. This reflects the actual
    /// direct-dependency relation declared in the manifest.
    pub fn star(project: &str, project_version: &str, deps: &DependencySet) -> Self {
        let mut graph = Self::with_capacity(deps.len() + 1, deps.len());

        graph.add_dependency(project, project_version);
        for (name, version) in deps {
            graph.add_dependency(name, version);
            graph.add_edge(project, name);
        }

        graph
    }

    /// Adds a package to the graph.
    ///
    /// If a package with the same name already exists, returns its existing
    /// node index without modification.
    pub fn add_dependency(&mut self, name: &str, version: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(name) {
            return idx;
        }

        let idx = self.graph.add_node(DependencyNode::new(name, version));
        self.node_indices.insert(name.to_string(), idx);
        idx
    }

    /// Adds an edge between two packages.
    ///
    /// Both nodes must already exist in the graph.
    ///
    /// # Returns
    ///
    /// `true` if the edge was added, `false` if either node doesn't exist.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let Some(&from_idx) = self.node_indices.get(from) else {
            return false;
        };
        let Some(&to_idx) = self.node_indices.get(to) else {
            return false;
        };

        self.graph.add_edge(from_idx, to_idx, ());
        true
    }

    /// Gets a reference to a package node by name.
    pub fn get_node(&self, name: &str) -> Option<&DependencyNode> {
        self.node_indices
            .get(name)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    /// Checks if a package exists in the graph.
    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Gets all nodes in the graph, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &DependencyNode> {
        self.graph.node_weights()
    }

    /// Iterates the edges of the graph as (from, to) node pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&DependencyNode, &DependencyNode)> {
        self.graph.edge_references().filter_map(|edge| {
            let from = self.graph.node_weight(edge.source())?;
            let to = self.graph.node_weight(edge.target())?;
            Some((from, to))
        })
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
