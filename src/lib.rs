//! # depgraph - Deduplicated Dependency Graphs for Multi-Module Projects
//!
//! depgraph reads the resolved dependency edges of a project from its
//! `depgraph.toml` descriptors and folds them into a graph in which every
//! artifact appears exactly once, however often and in whatever version it
//! was reached. The graph renders as Graphviz DOT or as JSON for an
//! interactive viewer.
//!
//! ## Main Components
//!
//! - **Artifact**: Coordinates, identity keys and include/exclude filters
//! - **Graph**: The canonical node table and the edge accumulator
//! - **Render**: DOT and JSON renderers over a finished graph
//! - **Resolver**: Descriptor parsing and module discovery
//! - **Factory**: Single-module and aggregated graph builds
//!
//! ## Usage
//!
//! ### Example: Rendering Edges as DOT
//!
//! ```
//! use depgraph::artifact::{ArtifactCoordinates, IdentityMode};
//! use depgraph::core::NodeResolution;
//! use depgraph::graph::{EdgeSink, GraphAccumulator};
//! use depgraph::render::{DotRenderer, GraphRenderer};
//! use depgraph::style::StyleConfiguration;
//!
//! # fn main() -> Result<(), depgraph::error::DepgraphError> {
//! let app = ArtifactCoordinates::new("com.example", "app").with_version("1.0.0");
//! let core = ArtifactCoordinates::new("com.example", "core").with_version("1.0.0");
//!
//! let mut accumulator = GraphAccumulator::new(IdentityMode::Versionless).with_name("app");
//! accumulator.add_edge(Some(&app), Some(&core), NodeResolution::Included, "compile");
//! let graph = accumulator.finish();
//!
//! let dot = DotRenderer::new(StyleConfiguration::default()).render_to_string(&graph)?;
//! assert!(dot.starts_with("digraph \"app\" {"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Aggregating a Project on Disk
//!
//! ```no_run
//! use std::path::Path;
//!
//! use depgraph::artifact::AcceptAll;
//! use depgraph::factory::{AggregatingGraphFactory, GraphFactory, GraphSettings};
//! use depgraph::render::{GraphRenderer, JsonRenderer};
//! use depgraph::resolver::{DescriptorResolver, ProjectDiscovery};
//!
//! # fn main() -> miette::Result<()> {
//! let tree = ProjectDiscovery::new().discover(Path::new("/path/to/project"), None)?;
//!
//! let factory = AggregatingGraphFactory::new(
//!     Box::new(DescriptorResolver::new()),
//!     Box::new(AcceptAll),
//!     GraphSettings::default(),
//!     false, // leave out parent projects
//! );
//! let graph = factory.create_graph(&tree, None)?;
//!
//! let json = JsonRenderer::new().with_pretty(true).render_to_string(&graph)?;
//! println!("{json}");
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod toml_parser;
mod utils;

// Public modules
pub mod artifact;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod factory;
pub mod graph;
pub mod render;
pub mod resolver;
pub mod style;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    init_tracing();

    let cli = Cli::parse();
    execute_command(cli.command)
}

/// Diagnostics go to stderr and only when `RUST_LOG` asks for them
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
