use std::collections::HashSet;

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use super::node_table::CanonicalNodeTable;
use super::types::{DependencyEdge, Graph, GraphNode};
use crate::artifact::{ArtifactCoordinates, IdentityMode};
use crate::core::{EdgeKind, NodeResolution, RawEdge};

/// Capability to receive raw edges
///
/// An endpoint of `None` stands for an artifact that was filtered out
/// upstream; such calls are silently ignored.
pub trait EdgeSink {
    /// Insert a dependency edge, canonicalizing both endpoints
    fn add_edge(
        &mut self,
        from: Option<&ArtifactCoordinates>,
        to: Option<&ArtifactCoordinates>,
        resolution: NodeResolution,
        scope: &str,
    );

    /// Insert a parent project to sub-module containment edge
    fn add_module_edge(
        &mut self,
        parent: Option<&ArtifactCoordinates>,
        child: Option<&ArtifactCoordinates>,
    );

    fn add_raw_edge(&mut self, edge: &RawEdge) {
        self.add_edge(
            Some(&edge.from),
            Some(&edge.to),
            edge.resolution,
            &edge.scope,
        );
    }
}

/// Accumulates raw edges into one canonical, deduplicated graph
///
/// Nodes collapse by identity key (first occurrence wins), edges collapse by
/// `(from, to, kind)` and keep their first insertion order. One accumulator
/// serves exactly one graph; call [`GraphAccumulator::finish`] to obtain it.
#[derive(Debug, Clone)]
pub struct GraphAccumulator {
    name: Option<String>,
    table: CanonicalNodeTable,
    edges: Vec<(usize, usize, DependencyEdge)>,
    edge_keys: HashSet<(usize, usize, EdgeKind)>,
    omit_self_references: bool,
}

impl GraphAccumulator {
    pub fn new(mode: IdentityMode) -> Self {
        Self {
            name: None,
            table: CanonicalNodeTable::new(mode),
            edges: Vec::new(),
            edge_keys: HashSet::new(),
            omit_self_references: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Drop edges whose endpoints canonicalize to the same node
    pub fn with_omit_self_references(mut self, omit_self_references: bool) -> Self {
        self.omit_self_references = omit_self_references;
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn node_table(&self) -> &CanonicalNodeTable {
        &self.table
    }

    /// Canonical node carrying the same identity as `artifact`, if registered
    pub fn effective_node(&self, artifact: &ArtifactCoordinates) -> Option<&GraphNode> {
        self.table.effective_node(artifact)
    }

    pub fn node_count(&self) -> usize {
        self.table.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn insert_edge(&mut self, from: usize, to: usize, edge: DependencyEdge) {
        if self.omit_self_references && from == to {
            return;
        }

        if self.edge_keys.insert((from, to, edge.kind())) {
            self.edges.push((from, to, edge));
        }
    }

    /// End the session and hand out the finished graph
    pub fn finish(self) -> Graph {
        let nodes = self.table.into_nodes();
        let mut inner = DiGraph::with_capacity(nodes.len(), self.edges.len());

        for node in nodes {
            // Node indices line up with ids because both are dense and ordered
            inner.add_node(node);
        }

        for (from, to, edge) in self.edges {
            inner.add_edge(NodeIndex::new(from), NodeIndex::new(to), edge);
        }

        debug!(
            nodes = inner.node_count(),
            edges = inner.edge_count(),
            "finished graph accumulation"
        );

        Graph::new(self.name, inner)
    }
}

impl EdgeSink for GraphAccumulator {
    fn add_edge(
        &mut self,
        from: Option<&ArtifactCoordinates>,
        to: Option<&ArtifactCoordinates>,
        resolution: NodeResolution,
        scope: &str,
    ) {
        let (Some(from), Some(to)) = (from, to) else {
            return;
        };

        let from_id = self.table.get_or_create(from, NodeResolution::Included);
        let to_id = self.table.get_or_create(to, resolution);

        if self.omit_self_references && from_id == to_id {
            return;
        }

        if let Some(target) = self.table.get_mut(to_id) {
            target.merge_scope(scope);
        }

        let edge = DependencyEdge::dependency(resolution, to.version.clone());
        self.insert_edge(from_id, to_id, edge);
    }

    fn add_module_edge(
        &mut self,
        parent: Option<&ArtifactCoordinates>,
        child: Option<&ArtifactCoordinates>,
    ) {
        let (Some(parent), Some(child)) = (parent, child) else {
            return;
        };

        let parent_id = self.table.get_or_create(parent, NodeResolution::Included);
        let child_id = self.table.get_or_create(child, NodeResolution::Included);

        self.insert_edge(parent_id, child_id, DependencyEdge::module());
    }
}
