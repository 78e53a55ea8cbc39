//! Command executors that handle the actual logic for each command

pub mod aggregate;
pub mod graph;

use std::fs;
use std::io::{self, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

use crate::cli::GraphFormat;
use crate::config::CommonGraphConfig;
use crate::graph::Graph;
use crate::progress::ProgressReporter;
use crate::render::{DotRenderer, GraphRenderer, JsonRenderer};
use crate::resolver::{ProjectDiscovery, ProjectTree};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

fn discover_project(config: &CommonGraphConfig, progress: &mut ProgressReporter) -> Result<ProjectTree> {
    progress.start_discovery();
    let tree = ProjectDiscovery::new().discover(&config.path, Some(&*progress));
    progress.finish_discovery(tree.as_ref().map_or(0, ProjectTree::len));

    tree.wrap_err_with(|| format!("Failed to discover modules in '{}'", config.path.display()))
}

fn renderer_for(config: &CommonGraphConfig) -> Result<Box<dyn GraphRenderer>> {
    Ok(match config.format {
        GraphFormat::Dot => {
            let style = config
                .style
                .style_configuration()
                .wrap_err("Failed to load the style configuration")?;
            Box::new(DotRenderer::new(style))
        }
        GraphFormat::Json => Box::new(JsonRenderer::new().with_pretty(true)),
        GraphFormat::Jsonp => Box::new(
            JsonRenderer::new()
                .with_pretty(true)
                .with_script_wrapper(true),
        ),
    })
}

/// Render the graph fully, then write it to the configured destination
fn write_graph(graph: &Graph, config: &CommonGraphConfig, progress: &ProgressReporter) -> Result<()> {
    let rendered = renderer_for(config)?
        .render_to_string(graph)
        .wrap_err("Failed to render the dependency graph")?;
    debug!(bytes = rendered.len(), format = ?config.format, "graph rendered");

    let destination = match &config.output {
        Some(path) => {
            fs::write(path, &rendered)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write output file '{}'", path.display()))?;
            path.display().to_string()
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .into_diagnostic()
                .wrap_err("Failed to write the graph to stdout")?;
            "stdout".to_string()
        }
    };

    progress.graph_written(graph.node_count(), graph.edge_count(), &destination);
    Ok(())
}

fn announce(kind: &str, config: &CommonGraphConfig) {
    eprintln!(
        "{} Generating {} {} dependency graph...",
        style("📊").cyan(),
        kind,
        format!("{:?}", config.format).to_lowercase()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{ArtifactCoordinates, IdentityMode};
    use crate::common::ConfigBuilder;
    use crate::core::NodeResolution;
    use crate::graph::{EdgeSink, GraphAccumulator};

    fn config(format: GraphFormat) -> CommonGraphConfig {
        CommonGraphConfig::builder()
            .path(".".into())
            .format(format)
            .build()
            .unwrap()
    }

    fn graph() -> Graph {
        let mut accumulator = GraphAccumulator::new(IdentityMode::Versionless);
        accumulator.add_edge(
            Some(&ArtifactCoordinates::new("com.example", "app")),
            Some(&ArtifactCoordinates::new("com.example", "core")),
            NodeResolution::Included,
            "compile",
        );
        accumulator.finish()
    }

    #[test]
    fn test_jsonp_is_indented() {
        let script = renderer_for(&config(GraphFormat::Jsonp))
            .unwrap()
            .render_to_string(&graph())
            .unwrap();

        assert!(script.starts_with("var graph = {\n  \"artifacts\": ["));
        assert!(script.ends_with("};\n"));
    }

    #[test]
    fn test_dot_renderer_for_dot_format() {
        let dot = renderer_for(&config(GraphFormat::Dot))
            .unwrap()
            .render_to_string(&graph())
            .unwrap();

        assert!(dot.starts_with("digraph \"G\" {"));
    }
}
