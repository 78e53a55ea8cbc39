//! Command implementations for the depgraph CLI
//!
//! This module contains the implementations for each CLI command:
//! - graph: Render the dependency graph of a single module
//! - aggregate: Render one graph over all modules of a project
//! - interactive: Write the graph as a script for the interactive viewer

pub mod aggregate;
pub mod graph;
pub mod interactive;

use miette::Result;

use crate::cli::{Commands, GraphFormat};
use crate::common::{CommonArgs, ConfigBuilder, ResolutionArgs, StyleArgs};
use crate::config::{CommonGraphConfig, StyleOptions};
use crate::error::DepgraphError;
use crate::factory::ResolutionFilter;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Graph { .. } => graph::execute_graph_command(command),
        Commands::Aggregate { .. } => aggregate::execute_aggregate_command(command),
        Commands::Interactive { .. } => interactive::execute_interactive_command(command),
    }
}

fn common_config(
    common: CommonArgs,
    format: GraphFormat,
    style: StyleArgs,
    resolutions: ResolutionArgs,
) -> Result<CommonGraphConfig, DepgraphError> {
    CommonGraphConfig::builder()
        .path(common.get_path())
        .format(format)
        .output(common.output)
        .includes(common.includes)
        .excludes(common.excludes)
        .merge_scopes(common.merge_scopes)
        .omit_self_references(common.omit_self_references)
        .resolutions(ResolutionFilter::new(
            resolutions.show_duplicates,
            resolutions.show_conflicts,
            resolutions.show_cycles,
        ))
        .style(StyleOptions {
            show_group_ids: style.show_group_ids,
            show_versions: style.show_versions,
            show_versions_on_edges: style.show_versions_on_edges,
            style_file: style.style_file,
            suppress_versions_on_edges: false,
        })
        .build()
}

/// Interactive output: script-wrapped JSON carrying every resolution
fn interactive_config(common: CommonArgs) -> Result<CommonGraphConfig, DepgraphError> {
    let config = common_config(
        common,
        GraphFormat::Jsonp,
        StyleArgs::default(),
        ResolutionArgs::default(),
    )?;

    Ok(CommonGraphConfig {
        resolutions: ResolutionFilter::all(),
        ..config
    })
}
