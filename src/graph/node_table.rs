//! Canonical node table
//!
//! Maps identity keys to the single node registered for them. The first
//! occurrence of an identity wins: it fixes the node's id, its displayed
//! coordinates and its resolution.

use std::collections::HashMap;

use tracing::trace;

use super::types::GraphNode;
use crate::artifact::{ArtifactCoordinates, IdentityMode};
use crate::core::NodeResolution;

#[derive(Debug, Clone)]
pub struct CanonicalNodeTable {
    mode: IdentityMode,
    nodes: Vec<GraphNode>,
    index: HashMap<String, usize>,
}

impl CanonicalNodeTable {
    pub fn new(mode: IdentityMode) -> Self {
        Self {
            mode,
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn mode(&self) -> IdentityMode {
        self.mode
    }

    /// Return the id of the canonical node for `artifact`, registering a new
    /// node with the next sequential id if the identity is unseen
    ///
    /// For an already registered identity, `resolution` is discarded.
    pub fn get_or_create(&mut self, artifact: &ArtifactCoordinates, resolution: NodeResolution) -> usize {
        let key = artifact.identity_key(self.mode);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }

        let id = self.nodes.len();
        trace!(id, key = %key, %resolution, "registering canonical node");
        self.index.insert(key.clone(), id);
        self.nodes
            .push(GraphNode::new(id, key, artifact.clone(), resolution));
        id
    }

    /// Canonical node for any value carrying the same identity as `artifact`,
    /// or `None` if that identity has not been registered yet
    pub fn effective_node(&self, artifact: &ArtifactCoordinates) -> Option<&GraphNode> {
        self.index
            .get(&artifact.identity_key(self.mode))
            .map(|&id| &self.nodes[id])
    }

    pub fn get(&self, id: usize) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: usize) -> Option<&mut GraphNode> {
        self.nodes.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in id order
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub(crate) fn into_nodes(self) -> Vec<GraphNode> {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(name: &str, version: &str) -> ArtifactCoordinates {
        ArtifactCoordinates::new("com.example", name)
            .with_type("jar")
            .with_version(version)
            .with_scope("compile")
    }

    #[test]
    fn test_ids_are_dense_and_first_seen_ordered() {
        let mut table = CanonicalNodeTable::new(IdentityMode::Versionless);

        let c = table.get_or_create(&artifact("c", "1"), NodeResolution::Included);
        let a = table.get_or_create(&artifact("a", "1"), NodeResolution::Included);
        let c_again = table.get_or_create(&artifact("c", "2"), NodeResolution::Included);
        let b = table.get_or_create(&artifact("b", "1"), NodeResolution::Included);

        assert_eq!((c, a, c_again, b), (0, 1, 0, 2));
        assert_eq!(table.len(), 3);

        let ids: Vec<usize> = table.nodes().iter().map(GraphNode::id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_first_resolution_and_version_win() {
        let mut table = CanonicalNodeTable::new(IdentityMode::Versionless);

        table.get_or_create(&artifact("core", "1.0"), NodeResolution::OmittedForConflict);
        let id = table.get_or_create(&artifact("core", "2.0"), NodeResolution::Included);

        let node = table.get(id).unwrap();
        assert_eq!(node.resolution(), NodeResolution::OmittedForConflict);
        assert_eq!(node.artifact().version(), Some("1.0"));
    }

    #[test]
    fn test_effective_node_for_transient_duplicate() {
        let mut table = CanonicalNodeTable::new(IdentityMode::Versionless);
        let unseen = artifact("core", "1.0");

        assert!(table.effective_node(&unseen).is_none());

        table.get_or_create(&unseen, NodeResolution::Included);
        let transient = artifact("core", "3.0");
        let canonical = table.effective_node(&transient).unwrap();

        assert_eq!(canonical.id(), 0);
        assert_eq!(canonical.artifact().version(), Some("1.0"));
    }

    #[test]
    fn test_scoped_mode_keeps_scopes_apart() {
        let mut table = CanonicalNodeTable::new(IdentityMode::VersionlessWithScope);

        let compile = table.get_or_create(&artifact("core", "1"), NodeResolution::Included);
        let test = table.get_or_create(
            &artifact("core", "1").with_scope("test"),
            NodeResolution::Included,
        );

        assert_ne!(compile, test);
        assert_eq!(table.len(), 2);
    }
}
