//! Core graph types
//!
//! This module contains the fundamental data structures of the canonical
//! dependency graph.

use std::collections::BTreeSet;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::artifact::ArtifactCoordinates;
use crate::core::{EdgeKind, NodeResolution};

/// The canonical vertex for one artifact identity
///
/// Everything except `scopes` is fixed when the node is created.
#[derive(Debug, Clone)]
pub struct GraphNode {
    id: usize,
    key: String,
    artifact: ArtifactCoordinates,
    resolution: NodeResolution,
    scopes: BTreeSet<String>,
}

impl GraphNode {
    pub(crate) fn new(
        id: usize,
        key: String,
        artifact: ArtifactCoordinates,
        resolution: NodeResolution,
    ) -> Self {
        Self {
            id,
            key,
            artifact,
            resolution,
            scopes: BTreeSet::new(),
        }
    }

    /// Dense, zero-based id assigned in first-seen order
    pub fn id(&self) -> usize {
        self.id
    }

    /// Identity key this node was registered under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Coordinates of the first occurrence of this identity
    pub fn artifact(&self) -> &ArtifactCoordinates {
        &self.artifact
    }

    pub fn resolution(&self) -> NodeResolution {
        self.resolution
    }

    /// Scopes of all edges pointing to this node, sorted
    pub fn scopes(&self) -> &BTreeSet<String> {
        &self.scopes
    }

    pub(crate) fn merge_scope(&mut self, scope: &str) {
        if !scope.is_empty() && !self.scopes.contains(scope) {
            self.scopes.insert(scope.to_string());
        }
    }
}

/// A deduplicated edge between two canonical nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    kind: EdgeKind,
    resolution: NodeResolution,
    requested_version: Option<String>,
}

impl DependencyEdge {
    pub(crate) fn dependency(resolution: NodeResolution, requested_version: Option<String>) -> Self {
        Self {
            kind: EdgeKind::Dependency,
            resolution,
            requested_version,
        }
    }

    pub(crate) fn module() -> Self {
        Self {
            kind: EdgeKind::Module,
            resolution: NodeResolution::Included,
            requested_version: None,
        }
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Resolution declared by the raw edge that created this edge
    pub fn resolution(&self) -> NodeResolution {
        self.resolution
    }

    /// Version the creating raw edge asked for, which may differ from the
    /// target node's displayed version
    pub fn requested_version(&self) -> Option<&str> {
        self.requested_version.as_deref()
    }
}

/// Finished, read-only result of an accumulation session
#[derive(Debug, Clone, Default)]
pub struct Graph {
    name: Option<String>,
    inner: DiGraph<GraphNode, DependencyEdge>,
}

/// Borrowed view of one edge with its resolved endpoints
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    pub from: &'a GraphNode,
    pub to: &'a GraphNode,
    pub edge: &'a DependencyEdge,
}

impl Graph {
    pub(crate) fn new(name: Option<String>, inner: DiGraph<GraphNode, DependencyEdge>) -> Self {
        Self { name, inner }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.inner.node_weights()
    }

    pub fn node(&self, id: usize) -> Option<&GraphNode> {
        self.inner.node_weight(NodeIndex::new(id))
    }

    /// Edges in first-insertion order
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> {
        self.inner.edge_references().map(|edge| EdgeView {
            from: &self.inner[edge.source()],
            to: &self.inner[edge.target()],
            edge: edge.weight(),
        })
    }
}
