//! Aggregate command executor

use console::style;
use miette::{Result, WrapErr};

use super::{announce, discover_project, write_graph};
use crate::config::AggregateConfig;
use crate::executors::CommandExecutor;
use crate::factory::{AggregatingGraphFactory, GraphFactory};
use crate::progress::ProgressReporter;
use crate::resolver::DescriptorResolver;

pub struct AggregateExecutor;

impl CommandExecutor for AggregateExecutor {
    type Config = AggregateConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let AggregateConfig {
            common: config,
            include_parent_projects,
        } = config;
        announce("aggregated", &config);

        let mut progress = ProgressReporter::new();
        let tree = discover_project(&config, &mut progress)?;

        let factory = AggregatingGraphFactory::new(
            Box::new(DescriptorResolver::new()),
            Box::new(config.artifact_filter().wrap_err("Invalid artifact filter")?),
            config.graph_settings(),
            include_parent_projects,
        );

        let module_count = factory.modules_in_graph(&tree).len();
        if module_count == 0 {
            eprintln!(
                "{} No modules of '{}' pass the filters; the graph will be empty",
                style("ℹ").blue(),
                tree.root().name()
            );
        }

        progress.start_resolution(module_count);
        let graph = factory.create_graph(&tree, Some(&progress));
        progress.finish_resolution();
        let graph = graph.wrap_err("Failed to aggregate the dependency graph")?;

        write_graph(&graph, &config, &progress)
    }
}
