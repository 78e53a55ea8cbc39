//! Core type definitions
//!
//! This module contains the basic data structures shared by the graph
//! accumulator, the renderers and the resolver, with minimal logic.

use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactCoordinates;

/// Why a dependency's target was or was not kept in the resolved set
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeResolution {
    #[default]
    #[serde(alias = "included")]
    Included,
    #[serde(alias = "omitted_for_duplicate", alias = "omitted-for-duplicate")]
    OmittedForDuplicate,
    #[serde(alias = "omitted_for_conflict", alias = "omitted-for-conflict")]
    OmittedForConflict,
    #[serde(alias = "omitted_for_cycle", alias = "omitted-for-cycle")]
    OmittedForCycle,
}

impl NodeResolution {
    pub const ALL: [NodeResolution; 4] = [
        NodeResolution::Included,
        NodeResolution::OmittedForDuplicate,
        NodeResolution::OmittedForConflict,
        NodeResolution::OmittedForCycle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeResolution::Included => "INCLUDED",
            NodeResolution::OmittedForDuplicate => "OMITTED_FOR_DUPLICATE",
            NodeResolution::OmittedForConflict => "OMITTED_FOR_CONFLICT",
            NodeResolution::OmittedForCycle => "OMITTED_FOR_CYCLE",
        }
    }

    pub fn is_omitted(&self) -> bool {
        !matches!(self, NodeResolution::Included)
    }
}

impl std::fmt::Display for NodeResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of edge in the canonical graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeKind {
    /// A resolved (or omitted) dependency relationship
    Dependency,
    /// Parent project to sub-module containment
    Module,
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Dependency => write!(f, "dependency"),
            EdgeKind::Module => write!(f, "module"),
        }
    }
}

/// One un-deduplicated parent/child relationship as produced by a resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEdge {
    pub from: ArtifactCoordinates,
    pub to: ArtifactCoordinates,
    pub resolution: NodeResolution,
    pub scope: String,
}

impl RawEdge {
    pub fn new(
        from: ArtifactCoordinates,
        to: ArtifactCoordinates,
        resolution: NodeResolution,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            from,
            to,
            resolution,
            scope: scope.into(),
        }
    }
}
