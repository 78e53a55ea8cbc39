//! Graph command executor

use console::style;
use miette::{Result, WrapErr};

use super::{announce, discover_project, write_graph};
use crate::config::GraphConfig;
use crate::executors::CommandExecutor;
use crate::factory::{GraphFactory, SimpleGraphFactory};
use crate::progress::ProgressReporter;
use crate::resolver::DescriptorResolver;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let config = config.common;
        announce("module", &config);

        let mut progress = ProgressReporter::new();
        let tree = discover_project(&config, &mut progress)?;
        if tree.len() > 1 {
            eprintln!(
                "{} Only '{}' is graphed; use the aggregate command to include its modules",
                style("ℹ").blue(),
                tree.root().name()
            );
        }

        let factory = SimpleGraphFactory::new(
            Box::new(DescriptorResolver::new()),
            Box::new(config.artifact_filter().wrap_err("Invalid artifact filter")?),
            config.graph_settings(),
        );

        progress.start_resolution(1);
        let graph = factory.create_graph(&tree, Some(&progress));
        progress.finish_resolution();
        let graph = graph.wrap_err("Failed to build the dependency graph")?;

        write_graph(&graph, &config, &progress)
    }
}
