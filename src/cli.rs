use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs, ResolutionArgs, StyleArgs};

#[derive(Parser)]
#[command(
    name = "depgraph",
    about = "Render deduplicated dependency graphs of multi-module projects",
    long_about = "depgraph reads the resolved dependency edges of a project from its \
                  depgraph.toml descriptors, collapses every artifact onto one canonical node \
                  and renders the result as a Graphviz DOT document or as JSON for an \
                  interactive viewer.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dependency graph of a single module
    ///
    /// Only the dependencies declared in the module's own descriptor are
    /// included; sub-modules are ignored.
    Graph {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        resolutions: ResolutionArgs,
    },

    /// Render one graph spanning every module of a project
    ///
    /// Discovers all modules declared below the root descriptor, resolves
    /// them in parallel and merges their dependencies into a single graph.
    #[command(
        long_about = "Aggregate the dependency graphs of all modules of a multi-module project \
                      into one graph. Every artifact appears exactly once no matter how many \
                      modules depend on it. Modules that only aggregate other modules are left \
                      out unless --include-parent-projects is given, in which case parent to \
                      module containment edges are drawn as well."
    )]
    Aggregate {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        resolutions: ResolutionArgs,

        /// Include parent projects and draw module containment edges
        #[arg(long, env = "DEPGRAPH_INCLUDE_PARENT_PROJECTS")]
        include_parent_projects: bool,
    },

    /// Write the graph as a script for the interactive viewer
    ///
    /// Emits `var graph = {...};` with every edge, including omitted
    /// duplicates, conflicts and cycles, so the viewer can filter client-side.
    Interactive {
        #[command(flatten)]
        common: CommonArgs,

        /// Aggregate all modules instead of the root module only
        #[arg(long, env = "DEPGRAPH_AGGREGATE")]
        aggregate: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum GraphFormat {
    Dot,
    Json,
    /// JSON wrapped as a script assignment
    Jsonp,
}
