//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Common arguments shared by all commands
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Project directory holding the root depgraph.toml (defaults to current
    /// directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, env = "DEPGRAPH_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Only include artifacts matching these patterns
    /// (group[:artifact[:type[:version]]], globs allowed)
    #[arg(long, value_delimiter = ',', env = "DEPGRAPH_INCLUDES")]
    pub includes: Vec<String>,

    /// Exclude artifacts matching these patterns
    #[arg(long, value_delimiter = ',', env = "DEPGRAPH_EXCLUDES")]
    pub excludes: Vec<String>,

    /// Merge an artifact reached in different scopes into one node
    #[arg(long, env = "DEPGRAPH_MERGE_SCOPES")]
    pub merge_scopes: bool,

    /// Drop edges from an artifact to itself
    #[arg(long, env = "DEPGRAPH_OMIT_SELF_REFERENCES")]
    pub omit_self_references: bool,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "DEPGRAPH_FORMAT")]
    pub format: crate::cli::GraphFormat,
}

/// Node and edge label arguments for DOT output
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Show group ids on nodes
    #[arg(long, env = "DEPGRAPH_SHOW_GROUP_IDS")]
    pub show_group_ids: bool,

    /// Show versions on nodes
    #[arg(long, env = "DEPGRAPH_SHOW_VERSIONS")]
    pub show_versions: bool,

    /// Label conflict edges with the version that lost
    #[arg(long, env = "DEPGRAPH_SHOW_VERSIONS_ON_EDGES")]
    pub show_versions_on_edges: bool,

    /// TOML file with style overrides
    #[arg(long, value_name = "FILE", env = "DEPGRAPH_STYLE_FILE")]
    pub style_file: Option<PathBuf>,
}

/// Which omitted dependencies to keep in the graph
#[derive(Args, Debug, Clone, Default)]
pub struct ResolutionArgs {
    /// Show dependencies omitted as duplicates
    #[arg(long, env = "DEPGRAPH_SHOW_DUPLICATES")]
    pub show_duplicates: bool,

    /// Show dependencies omitted because of a version conflict
    #[arg(long, env = "DEPGRAPH_SHOW_CONFLICTS")]
    pub show_conflicts: bool,

    /// Show dependencies omitted because they form a cycle
    #[arg(long, env = "DEPGRAPH_SHOW_CYCLES")]
    pub show_cycles: bool,
}

impl CommonArgs {
    /// Get the project path, using current directory if none provided
    pub fn get_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DepgraphError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::DepgraphError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DepgraphError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_args_get_path_empty() {
        let args = CommonArgs::default();

        let path = args.get_path();
        // Should default to current directory
        assert!(path.is_absolute() || path == std::path::Path::new("."));
    }

    #[test]
    fn test_common_args_get_path_with_value() {
        let args = CommonArgs {
            path: Some(PathBuf::from("/tmp/project")),
            ..CommonArgs::default()
        };

        assert_eq!(args.get_path(), PathBuf::from("/tmp/project"));
    }
}
