//! Graph command implementation

use miette::{Result, WrapErr};

use super::{common_config, interactive_config};
use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphConfig;
use crate::error::DepgraphError;

impl FromCommand for GraphConfig {
    fn from_command(command: Commands) -> Result<Self, DepgraphError> {
        match command {
            Commands::Graph {
                common,
                format,
                style,
                resolutions,
            } => GraphConfig::builder()
                .with_common(common_config(common, format.format, style, resolutions)?)
                .build(),
            Commands::Interactive {
                common,
                aggregate: false,
            } => GraphConfig::builder()
                .with_common(interactive_config(common)?)
                .build(),
            _ => Err(DepgraphError::ConfigurationError {
                message: "Invalid command type for GraphConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GraphConfig);

/// Execute the graph command for a single module
pub fn execute_graph_command(command: Commands) -> Result<()> {
    let config =
        GraphConfig::from_command(command).wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}
