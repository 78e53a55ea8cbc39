use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::artifact::ArtifactCoordinates;
use crate::core::NodeResolution;
use crate::error::DepgraphError;

/// Read and deserialize a TOML file, keeping the source around for
/// diagnostics when the syntax is off
pub fn parse_toml_file<T: DeserializeOwned>(path: &Path) -> Result<T, DepgraphError> {
    let content = std::fs::read_to_string(path).map_err(|e| DepgraphError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| {
        let span = e
            .span()
            .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

        DepgraphError::TomlParseError(Box::new(crate::error::TomlParseError {
            file: path.display().to_string(),
            source_code: NamedSource::new(path.display().to_string(), content.clone()),
            span,
            source: e,
        }))
    })
}

/// Contents of a `depgraph.toml` module descriptor
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDescriptor {
    pub project: ProjectSection,
    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    #[serde(rename = "type")]
    pub artifact_type: Option<String>,
    #[serde(default)]
    pub modules: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencyEntry {
    pub from: Option<Coordinates>,
    pub to: Coordinates,
    #[serde(default)]
    pub resolution: NodeResolution,
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    Simple(String),
    Detailed(DetailedCoordinates),
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailedCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(rename = "type")]
    pub artifact_type: Option<String>,
    pub classifier: Option<String>,
    pub version: Option<String>,
}

impl ProjectDescriptor {
    pub fn parse_file(path: &Path) -> Result<Self, DepgraphError> {
        parse_toml_file(path)
    }

    /// Coordinates of the project itself
    pub fn coordinates(&self) -> ArtifactCoordinates {
        let project = &self.project;
        ArtifactCoordinates {
            group_id: project.group_id.clone(),
            artifact_id: project.artifact_id.clone(),
            artifact_type: project.artifact_type.clone(),
            classifier: None,
            version: project.version.clone(),
            scope: None,
        }
    }
}

impl Coordinates {
    pub fn to_coordinates(&self) -> Result<ArtifactCoordinates, DepgraphError> {
        match self {
            Coordinates::Simple(s) => s.parse(),
            Coordinates::Detailed(detailed) => {
                if detailed.group_id.is_empty() || detailed.artifact_id.is_empty() {
                    return Err(DepgraphError::InvalidCoordinates {
                        coordinates: format!("{}:{}", detailed.group_id, detailed.artifact_id),
                        reason: "group_id and artifact_id must not be empty".to_string(),
                    });
                }

                Ok(ArtifactCoordinates {
                    group_id: detailed.group_id.clone(),
                    artifact_id: detailed.artifact_id.clone(),
                    artifact_type: detailed.artifact_type.clone(),
                    classifier: detailed.classifier.clone(),
                    version: detailed.version.clone(),
                    scope: None,
                })
            }
        }
    }
}
