//! Interactive command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::FromCommand;
use crate::config::{AggregateConfig, GraphConfig};
use crate::executors::CommandExecutor;
use crate::executors::aggregate::AggregateExecutor;
use crate::executors::graph::GraphExecutor;

/// Execute the interactive command, aggregating when asked to
pub fn execute_interactive_command(command: Commands) -> Result<()> {
    let aggregate = matches!(command, Commands::Interactive { aggregate: true, .. });

    if aggregate {
        let config = AggregateConfig::from_command(command)
            .wrap_err("Failed to parse interactive command configuration")?;
        AggregateExecutor::execute(config)
    } else {
        let config = GraphConfig::from_command(command)
            .wrap_err("Failed to parse interactive command configuration")?;
        GraphExecutor::execute(config)
    }
}
