//! # Canonical Dependency Graph
//!
//! This module turns a stream of raw, possibly repetitive dependency edges
//! into one deduplicated graph.
//!
//! ## Components
//!
//! - **CanonicalNodeTable**: Maps identity keys to dense, first-seen node ids
//! - **GraphAccumulator**: Consumes raw edges and module-containment edges,
//!   merges target scopes and drops duplicate `(from, to, kind)` triples
//! - **Graph**: The finished, read-only graph handed to renderers
//!
//! ## Example
//!
//! ```
//! use depgraph::artifact::{ArtifactCoordinates, IdentityMode};
//! use depgraph::core::NodeResolution;
//! use depgraph::graph::{EdgeSink, GraphAccumulator};
//!
//! let app = ArtifactCoordinates::new("com.example", "app").with_version("1.0");
//! let guava = ArtifactCoordinates::new("com.google.guava", "guava").with_version("31.1");
//! let guava_old = ArtifactCoordinates::new("com.google.guava", "guava").with_version("19.0");
//!
//! let mut accumulator = GraphAccumulator::new(IdentityMode::Versionless).with_name("app");
//! accumulator.add_edge(Some(&app), Some(&guava), NodeResolution::Included, "compile");
//! accumulator.add_edge(Some(&app), Some(&guava_old), NodeResolution::OmittedForConflict, "test");
//!
//! let graph = accumulator.finish();
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! assert_eq!(graph.node(1).unwrap().scopes().len(), 2);
//! ```

mod builder;
mod node_table;
mod types;

pub use builder::{EdgeSink, GraphAccumulator};
pub use node_table::CanonicalNodeTable;
pub use types::{DependencyEdge, EdgeView, Graph, GraphNode};
