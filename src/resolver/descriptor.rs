use std::collections::HashMap;

use tracing::debug;

use super::{DependencyResolver, ProjectModule};
use crate::artifact::{ArtifactCoordinates, IdentityMode};
use crate::core::RawEdge;
use crate::error::DepgraphError;

const DEFAULT_SCOPE: &str = "compile";

/// Resolves a module from the `[[dependencies]]` entries of its descriptor
///
/// Entries without `from` hang off the module itself. An entry whose `from`
/// names an artifact reached earlier in the same module inherits that
/// artifact's scope, so scoped identities line up with the node the
/// earlier edge created.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorResolver;

impl DescriptorResolver {
    pub fn new() -> Self {
        Self
    }

    fn resolve_entries(&self, module: &ProjectModule) -> Result<Vec<RawEdge>, DepgraphError> {
        let mut seen_scopes: HashMap<String, String> = HashMap::new();
        let mut edges = Vec::with_capacity(module.dependencies().len());

        for entry in module.dependencies() {
            let scope = entry.scope.as_deref().unwrap_or(DEFAULT_SCOPE);

            let from = match &entry.from {
                Some(from) => {
                    let mut from = from.to_coordinates()?;
                    if let Some(inherited) =
                        seen_scopes.get(&from.identity_key(IdentityMode::Versionless))
                    {
                        from.scope = Some(inherited.clone());
                    }
                    from
                }
                None => module.coordinates().clone(),
            };

            let to: ArtifactCoordinates = entry.to.to_coordinates()?.with_scope(scope);
            seen_scopes
                .entry(to.identity_key(IdentityMode::Versionless))
                .or_insert_with(|| scope.to_string());

            edges.push(RawEdge::new(from, to, entry.resolution, scope));
        }

        Ok(edges)
    }
}

impl DependencyResolver for DescriptorResolver {
    fn resolve(&self, module: &ProjectModule) -> Result<Vec<RawEdge>, DepgraphError> {
        let edges = self
            .resolve_entries(module)
            .map_err(|e| DepgraphError::resolution_failed(module.coordinates().to_string(), e))?;

        debug!(module = module.name(), edges = edges.len(), "resolved module");
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::core::NodeResolution;

    fn load(content: &str) -> (TempDir, ProjectModule) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("depgraph.toml"), content).unwrap();
        let module = ProjectModule::load(temp.path()).unwrap();
        (temp, module)
    }

    #[test]
    fn test_resolve_descriptor_edges() {
        let (_temp, module) = load(
            r#"
[project]
group_id = "com.example"
artifact_id = "app"
version = "1.0.0"

[[dependencies]]
to = "com.example:core:1.0.0"

[[dependencies]]
from = "com.example:core:1.0.0"
to = "org.slf4j:slf4j-api:2.0.9"
resolution = "OMITTED_FOR_CONFLICT"

[[dependencies]]
to = "junit:junit:4.13.2"
scope = "test"
"#,
        );

        let edges = DescriptorResolver::new().resolve(&module).unwrap();
        assert_eq!(edges.len(), 3);

        assert_eq!(edges[0].from.artifact_id(), "app");
        assert_eq!(edges[0].to.scope(), Some("compile"));
        assert_eq!(edges[0].resolution, NodeResolution::Included);

        // The intermediate node keeps the scope it was reached with
        assert_eq!(edges[1].from.scope(), Some("compile"));
        assert_eq!(edges[1].resolution, NodeResolution::OmittedForConflict);

        assert_eq!(edges[2].scope, "test");
        assert_eq!(edges[2].to.scope(), Some("test"));
    }

    #[test]
    fn test_malformed_coordinates_fail_the_module() {
        let (_temp, module) = load(
            r#"
[project]
group_id = "com.example"
artifact_id = "broken"

[[dependencies]]
to = "only-one-segment"
"#,
        );

        let err = DescriptorResolver::new().resolve(&module).unwrap_err();
        match err {
            DepgraphError::ResolutionFailed { module, source } => {
                assert_eq!(module, "com.example:broken");
                assert!(matches!(*source, DepgraphError::InvalidCoordinates { .. }));
            }
            other => panic!("expected ResolutionFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_module_without_dependencies() {
        let module = ProjectModule::new(".", ArtifactCoordinates::new("g", "empty"));
        assert!(DescriptorResolver::new().resolve(&module).unwrap().is_empty());
    }
}
