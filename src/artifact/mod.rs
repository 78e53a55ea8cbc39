//! # Artifact Coordinates and Identity
//!
//! An artifact is identified by its coordinates (group, artifact, type,
//! classifier, version, scope). The graph never compares coordinates
//! directly: it compares the *identity key* computed from them under a
//! configured [`IdentityMode`]. Versions never participate in identity, so
//! every version of an artifact collapses onto one node.
//!
//! ```
//! use depgraph::artifact::{ArtifactCoordinates, IdentityMode};
//!
//! let slf4j = ArtifactCoordinates::new("org.slf4j", "slf4j-api")
//!     .with_version("1.7.36")
//!     .with_scope("test");
//!
//! assert_eq!(slf4j.identity_key(IdentityMode::Versionless), "org.slf4j:slf4j-api::");
//! assert_eq!(
//!     slf4j.identity_key(IdentityMode::VersionlessWithScope),
//!     "org.slf4j:slf4j-api:::test"
//! );
//! ```

mod filter;

use std::str::FromStr;

pub use filter::{AcceptAll, ArtifactFilter, PatternFilter};

use crate::error::DepgraphError;

const KEY_SEPARATOR: &str = ":";

/// Which coordinate fields make up a node's identity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IdentityMode {
    /// `group:artifact:type:classifier`
    Versionless,
    /// `group:artifact:type:classifier:scope`
    #[default]
    VersionlessWithScope,
}

/// Coordinates of a single artifact occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub artifact_type: Option<String>,
    pub classifier: Option<String>,
    pub version: Option<String>,
    pub scope: Option<String>,
}

impl ArtifactCoordinates {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = Some(artifact_type.into());
        self
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn artifact_type(&self) -> Option<&str> {
        self.artifact_type.as_deref()
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Compute the identity key of these coordinates under `mode`
    ///
    /// Absent fields are rendered as empty segments so keys stay positionally
    /// comparable. This never fails.
    pub fn identity_key(&self, mode: IdentityMode) -> String {
        let mut segments = vec![
            self.group_id.as_str(),
            self.artifact_id.as_str(),
            self.artifact_type().unwrap_or_default(),
            self.classifier().unwrap_or_default(),
        ];

        if mode == IdentityMode::VersionlessWithScope {
            segments.push(self.scope().unwrap_or_default());
        }

        segments.join(KEY_SEPARATOR)
    }
}

impl std::fmt::Display for ArtifactCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(artifact_type) = self.artifact_type() {
            write!(f, ":{artifact_type}")?;
        }
        if let Some(classifier) = self.classifier() {
            write!(f, ":{classifier}")?;
        }
        if let Some(version) = self.version() {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}

/// Parses `group:artifact:version`, `group:artifact:type:version` and
/// `group:artifact:type:classifier:version`
impl FromStr for ArtifactCoordinates {
    type Err = DepgraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DepgraphError::InvalidCoordinates {
            coordinates: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(invalid("empty segment"));
        }

        let coords = match parts.as_slice() {
            [group, artifact, version] => Self::new(*group, *artifact).with_version(*version),
            [group, artifact, artifact_type, version] => Self::new(*group, *artifact)
                .with_type(*artifact_type)
                .with_version(*version),
            [group, artifact, artifact_type, classifier, version] => Self::new(*group, *artifact)
                .with_type(*artifact_type)
                .with_classifier(*classifier)
                .with_version(*version),
            _ => return Err(invalid("expected 3 to 5 ':'-separated segments")),
        };

        Ok(coords)
    }
}
