//! Graph command configuration

use super::CommonGraphConfig;
use crate::error::DepgraphError;

/// Configuration for rendering the graph of the root module alone
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub common: CommonGraphConfig,
}

impl GraphConfig {
    pub fn builder() -> GraphConfigBuilder {
        GraphConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphConfigBuilder {
    common: Option<CommonGraphConfig>,
}

impl GraphConfigBuilder {
    pub fn new() -> Self {
        Self { common: None }
    }

    pub fn with_common(mut self, common: CommonGraphConfig) -> Self {
        self.common = Some(common);
        self
    }
}

impl crate::common::ConfigBuilder for GraphConfigBuilder {
    type Config = GraphConfig;

    fn build(self) -> Result<Self::Config, DepgraphError> {
        Ok(GraphConfig {
            common: self
                .common
                .ok_or_else(|| DepgraphError::ConfigurationError {
                    message: "Missing required field: common".to_string(),
                })?,
        })
    }
}
