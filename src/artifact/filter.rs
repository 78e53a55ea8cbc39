//! Artifact filtering

use glob::Pattern;

use super::ArtifactCoordinates;
use crate::error::DepgraphError;

/// Decides whether an artifact takes part in the graph
pub trait ArtifactFilter: Send + Sync {
    fn include(&self, artifact: &ArtifactCoordinates) -> bool;
}

impl<F> ArtifactFilter for F
where
    F: Fn(&ArtifactCoordinates) -> bool + Send + Sync,
{
    fn include(&self, artifact: &ArtifactCoordinates) -> bool {
        self(artifact)
    }
}

/// Filter that lets every artifact through
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ArtifactFilter for AcceptAll {
    fn include(&self, _artifact: &ArtifactCoordinates) -> bool {
        true
    }
}

/// One `group[:artifact[:type[:version]]]` or
/// `group:artifact:type:classifier:version` pattern
#[derive(Debug, Clone)]
struct ArtifactPattern {
    segments: Vec<Pattern>,
}

impl ArtifactPattern {
    fn parse(pattern: &str) -> Result<Self, DepgraphError> {
        if pattern.split(':').count() > 5 {
            return Err(DepgraphError::ConfigurationError {
                message: format!("Artifact pattern '{pattern}' has more than 5 segments"),
            });
        }

        let segments = pattern
            .split(':')
            .map(|segment| {
                let segment = if segment.is_empty() { "*" } else { segment };
                Pattern::new(segment).map_err(|source| DepgraphError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }

    fn matches(&self, artifact: &ArtifactCoordinates) -> bool {
        let fields: Vec<&str> = if self.segments.len() == 5 {
            vec![
                artifact.group_id(),
                artifact.artifact_id(),
                artifact.artifact_type().unwrap_or_default(),
                artifact.classifier().unwrap_or_default(),
                artifact.version().unwrap_or_default(),
            ]
        } else {
            vec![
                artifact.group_id(),
                artifact.artifact_id(),
                artifact.artifact_type().unwrap_or_default(),
                artifact.version().unwrap_or_default(),
            ]
        };

        // Missing trailing segments match anything
        self.segments
            .iter()
            .zip(fields)
            .all(|(pattern, field)| pattern.matches(field))
    }
}

/// Include/exclude filter over glob patterns
///
/// Excludes always win. Without includes every non-excluded artifact passes.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    includes: Vec<ArtifactPattern>,
    excludes: Vec<ArtifactPattern>,
}

impl PatternFilter {
    pub fn new<I, E>(includes: I, excludes: E) -> Result<Self, DepgraphError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let includes = includes
            .into_iter()
            .map(|p| ArtifactPattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let excludes = excludes
            .into_iter()
            .map(|p| ArtifactPattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { includes, excludes })
    }

    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }
}

impl ArtifactFilter for PatternFilter {
    fn include(&self, artifact: &ArtifactCoordinates) -> bool {
        if self.excludes.iter().any(|p| p.matches(artifact)) {
            return false;
        }

        self.includes.is_empty() || self.includes.iter().any(|p| p.matches(artifact))
    }
}
