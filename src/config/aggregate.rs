//! Aggregate command configuration

use super::CommonGraphConfig;
use crate::error::DepgraphError;

/// Configuration for one graph over all modules of a project
#[derive(Debug, Clone)]
pub struct AggregateConfig {
    pub common: CommonGraphConfig,
    /// Resolve aggregator modules too and draw containment edges
    pub include_parent_projects: bool,
}

impl AggregateConfig {
    pub fn builder() -> AggregateConfigBuilder {
        AggregateConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct AggregateConfigBuilder {
    common: Option<CommonGraphConfig>,
    include_parent_projects: Option<bool>,
}

impl AggregateConfigBuilder {
    pub fn new() -> Self {
        Self {
            common: None,
            include_parent_projects: None,
        }
    }

    pub fn with_common(mut self, common: CommonGraphConfig) -> Self {
        self.common = Some(common);
        self
    }

    pub fn with_include_parent_projects(mut self, include_parent_projects: bool) -> Self {
        self.include_parent_projects = Some(include_parent_projects);
        self
    }
}

impl crate::common::ConfigBuilder for AggregateConfigBuilder {
    type Config = AggregateConfig;

    fn build(self) -> Result<Self::Config, DepgraphError> {
        Ok(AggregateConfig {
            common: self
                .common
                .ok_or_else(|| DepgraphError::ConfigurationError {
                    message: "Missing required field: common".to_string(),
                })?,
            include_parent_projects: self.include_parent_projects.ok_or_else(|| {
                DepgraphError::ConfigurationError {
                    message: "Missing required field: include_parent_projects".to_string(),
                }
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GraphFormat;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_include_parent_projects_is_required() {
        let common = CommonGraphConfig::builder()
            .path(".".into())
            .format(GraphFormat::Dot)
            .build()
            .unwrap();

        let result = AggregateConfig::builder().with_common(common).build();
        assert!(matches!(
            result,
            Err(DepgraphError::ConfigurationError { message }) if message.contains("include_parent_projects")
        ));
    }
}
