//! Common configuration structures shared across commands

use std::path::PathBuf;

use crate::artifact::{IdentityMode, PatternFilter};
use crate::cli::GraphFormat;
use crate::error::DepgraphError;
use crate::factory::{GraphSettings, ResolutionFilter};
use crate::style::StyleConfiguration;

/// Label and style settings for DOT output
#[derive(Debug, Clone, Default)]
pub struct StyleOptions {
    pub show_group_ids: bool,
    pub show_versions: bool,
    pub show_versions_on_edges: bool,
    pub style_file: Option<PathBuf>,
    /// Keep conflict edges unlabelled even if the style file asks for labels
    pub suppress_versions_on_edges: bool,
}

impl StyleOptions {
    /// Defaults, then the style file, then label flags given on the command
    /// line
    pub fn style_configuration(&self) -> Result<StyleConfiguration, DepgraphError> {
        let mut builder = StyleConfiguration::builder();
        if let Some(style_file) = &self.style_file {
            builder = builder.with_style_file(style_file)?;
        }

        let current = builder.clone().build();
        Ok(builder
            .with_show_group_ids(current.show_group_ids() || self.show_group_ids)
            .with_show_versions_on_nodes(current.show_versions_on_nodes() || self.show_versions)
            .with_show_versions_on_edges(
                !self.suppress_versions_on_edges
                    && (current.show_versions_on_edges() || self.show_versions_on_edges),
            )
            .build())
    }
}

/// Configuration shared by every graph-producing command
#[derive(Debug, Clone)]
pub struct CommonGraphConfig {
    /// Project directory
    pub path: PathBuf,
    pub format: GraphFormat,
    /// Output file, stdout when absent
    pub output: Option<PathBuf>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub identity_mode: IdentityMode,
    pub omit_self_references: bool,
    pub resolutions: ResolutionFilter,
    pub style: StyleOptions,
}

impl CommonGraphConfig {
    pub fn builder() -> CommonGraphConfigBuilder {
        CommonGraphConfigBuilder::default()
    }

    pub fn artifact_filter(&self) -> Result<PatternFilter, DepgraphError> {
        PatternFilter::new(&self.includes, &self.excludes)
    }

    pub fn graph_settings(&self) -> GraphSettings {
        GraphSettings {
            identity_mode: self.identity_mode,
            omit_self_references: self.omit_self_references,
            resolutions: self.resolutions,
        }
    }
}

/// Builder for CommonGraphConfig
#[derive(Default)]
pub struct CommonGraphConfigBuilder {
    path: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<PathBuf>,
    includes: Vec<String>,
    excludes: Vec<String>,
    identity_mode: IdentityMode,
    omit_self_references: bool,
    resolutions: ResolutionFilter,
    style: StyleOptions,
}

impl CommonGraphConfigBuilder {
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn includes(mut self, includes: Vec<String>) -> Self {
        self.includes = includes;
        self
    }

    pub fn excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }

    /// Merged scopes collapse every scope of an artifact onto one node
    pub fn merge_scopes(mut self, merge_scopes: bool) -> Self {
        self.identity_mode = if merge_scopes {
            IdentityMode::Versionless
        } else {
            IdentityMode::VersionlessWithScope
        };
        self
    }

    pub fn omit_self_references(mut self, omit_self_references: bool) -> Self {
        self.omit_self_references = omit_self_references;
        self
    }

    pub fn resolutions(mut self, resolutions: ResolutionFilter) -> Self {
        self.resolutions = resolutions;
        self
    }

    pub fn style(mut self, style: StyleOptions) -> Self {
        self.style = style;
        self
    }
}

impl crate::common::ConfigBuilder for CommonGraphConfigBuilder {
    type Config = CommonGraphConfig;

    fn build(self) -> Result<Self::Config, DepgraphError> {
        Ok(CommonGraphConfig {
            path: self.path.ok_or_else(|| DepgraphError::ConfigurationError {
                message: "Missing required field: path".to_string(),
            })?,
            format: self.format.ok_or_else(|| DepgraphError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            output: self.output,
            includes: self.includes,
            excludes: self.excludes,
            identity_mode: self.identity_mode,
            omit_self_references: self.omit_self_references,
            resolutions: self.resolutions,
            style: self.style,
        })
    }
}
