//! Aggregate command implementation

use miette::{Result, WrapErr};

use super::{common_config, interactive_config};
use crate::cli::{Commands, GraphFormat};
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::AggregateConfig;
use crate::error::DepgraphError;
use crate::factory::ResolutionFilter;

impl FromCommand for AggregateConfig {
    fn from_command(command: Commands) -> Result<Self, DepgraphError> {
        match command {
            Commands::Aggregate {
                common,
                format,
                style,
                resolutions,
                include_parent_projects,
            } => {
                let mut config = common_config(common, format.format, style, resolutions)?;
                // JSON consumers style omitted edges themselves
                if matches!(format.format, GraphFormat::Json | GraphFormat::Jsonp) {
                    config.resolutions = ResolutionFilter::all();
                }
                // Conflicts are not labelled across modules
                config.style.suppress_versions_on_edges = true;

                AggregateConfig::builder()
                    .with_common(config)
                    .with_include_parent_projects(include_parent_projects)
                    .build()
            }
            Commands::Interactive {
                common,
                aggregate: true,
            } => AggregateConfig::builder()
                .with_common(interactive_config(common)?)
                .with_include_parent_projects(false)
                .build(),
            _ => Err(DepgraphError::ConfigurationError {
                message: "Invalid command type for AggregateConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(AggregateConfig);

/// Execute the aggregate command over a whole project tree
pub fn execute_aggregate_command(command: Commands) -> Result<()> {
    let config = AggregateConfig::from_command(command)
        .wrap_err("Failed to parse aggregate command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::aggregate::AggregateExecutor;
    AggregateExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{CommonArgs, FormatArgs, ResolutionArgs, StyleArgs};
    use crate::core::NodeResolution;

    fn aggregate_command(format: GraphFormat, style: StyleArgs) -> Commands {
        Commands::Aggregate {
            common: CommonArgs::default(),
            format: FormatArgs { format },
            style,
            resolutions: ResolutionArgs::default(),
            include_parent_projects: false,
        }
    }

    #[test]
    fn test_aggregate_command_to_config() {
        let command = Commands::Aggregate {
            common: CommonArgs {
                excludes: vec!["org.slf4j".to_string()],
                ..CommonArgs::default()
            },
            format: FormatArgs {
                format: GraphFormat::Dot,
            },
            style: StyleArgs {
                show_versions: true,
                ..StyleArgs::default()
            },
            resolutions: ResolutionArgs::default(),
            include_parent_projects: true,
        };

        let config = AggregateConfig::try_from(command).unwrap();
        assert!(config.include_parent_projects);
        assert_eq!(config.common.excludes, vec!["org.slf4j"]);
        assert!(config.common.style.show_versions);
    }

    #[test]
    fn test_json_formats_keep_every_resolution() {
        for format in [GraphFormat::Json, GraphFormat::Jsonp] {
            let config =
                AggregateConfig::try_from(aggregate_command(format, StyleArgs::default())).unwrap();
            let allowed: Vec<NodeResolution> = NodeResolution::ALL
                .into_iter()
                .filter(|r| config.common.resolutions.allows(*r))
                .collect();
            assert_eq!(allowed.len(), 4, "{format:?}");
        }

        let dot =
            AggregateConfig::try_from(aggregate_command(GraphFormat::Dot, StyleArgs::default())).unwrap();
        assert_eq!(dot.common.resolutions, ResolutionFilter::included_only());
    }

    #[test]
    fn test_edge_versions_are_never_shown() {
        let style = StyleArgs {
            show_versions_on_edges: true,
            ..StyleArgs::default()
        };
        let config = AggregateConfig::try_from(aggregate_command(GraphFormat::Dot, style)).unwrap();

        let style = config.common.style.style_configuration().unwrap();
        assert!(!style.show_versions_on_edges());
    }

    #[test]
    fn test_graph_command_is_rejected() {
        let command = Commands::Graph {
            common: CommonArgs::default(),
            format: FormatArgs {
                format: GraphFormat::Dot,
            },
            style: StyleArgs::default(),
            resolutions: ResolutionArgs::default(),
        };

        assert!(matches!(
            AggregateConfig::try_from(command),
            Err(DepgraphError::ConfigurationError { .. })
        ));
    }
}
