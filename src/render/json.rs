use std::io::Write;

use serde::Serialize;

use super::GraphRenderer;
use crate::constants::output::SCRIPT_VARIABLE;
use crate::core::{EdgeKind, NodeResolution};
use crate::error::DepgraphError;
use crate::graph::Graph;

/// Renders a graph as flat, indexed JSON arrays
///
/// Edge `from`/`to` values index into `artifacts`. Module-containment edges
/// are left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
    script: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonGraph<'a> {
    artifacts: Vec<JsonArtifact<'a>>,
    dependencies: Vec<JsonDependency<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonArtifact<'a> {
    id: usize,
    artifact_id: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDependency<'a> {
    from: usize,
    to: usize,
    resolution: NodeResolution,
    scopes: Vec<&'a str>,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Wrap the document as `var graph = <json>;`
    pub fn with_script_wrapper(mut self, script: bool) -> Self {
        self.script = script;
        self
    }
}

impl GraphRenderer for JsonRenderer {
    fn render(&self, graph: &Graph, output: &mut dyn Write) -> Result<(), DepgraphError> {
        let document = JsonGraph {
            artifacts: graph
                .nodes()
                .map(|node| JsonArtifact {
                    id: node.id(),
                    artifact_id: node.artifact().artifact_id(),
                    version: node.artifact().version().unwrap_or_default(),
                })
                .collect(),
            dependencies: graph
                .edges()
                .filter(|edge| edge.edge.kind() == EdgeKind::Dependency)
                .map(|edge| JsonDependency {
                    from: edge.from.id(),
                    to: edge.to.id(),
                    resolution: edge.to.resolution(),
                    scopes: edge.to.scopes().iter().map(String::as_str).collect(),
                })
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };

        if self.script {
            writeln_out!(output, "var {} = {};", SCRIPT_VARIABLE, json)
        } else {
            writeln_out!(output, "{}", json)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::artifact::{ArtifactCoordinates, IdentityMode};
    use crate::graph::{EdgeSink, GraphAccumulator};

    fn artifact(name: &str) -> ArtifactCoordinates {
        ArtifactCoordinates::new("com.example", name).with_version("1.0.0")
    }

    fn abc_graph() -> Graph {
        let (a, b, c) = (artifact("a"), artifact("b"), artifact("c"));
        let mut acc = GraphAccumulator::new(IdentityMode::Versionless);

        acc.add_edge(Some(&a), Some(&b), NodeResolution::Included, "compile");
        acc.add_edge(Some(&a), Some(&c), NodeResolution::Included, "test");
        acc.add_edge(Some(&b), Some(&c), NodeResolution::OmittedForConflict, "compile");
        acc.finish()
    }

    #[test]
    fn test_render_compact_json() {
        let json = JsonRenderer::new().render_to_string(&abc_graph()).unwrap();

        let expected = concat!(
            r#"{"artifacts":[{"id":0,"artifactId":"a","version":"1.0.0"},"#,
            r#"{"id":1,"artifactId":"b","version":"1.0.0"},"#,
            r#"{"id":2,"artifactId":"c","version":"1.0.0"}],"#,
            r#""dependencies":[{"from":0,"to":1,"resolution":"INCLUDED","scopes":["compile"]},"#,
            r#"{"from":0,"to":2,"resolution":"INCLUDED","scopes":["compile","test"]},"#,
            r#"{"from":1,"to":2,"resolution":"INCLUDED","scopes":["compile","test"]}]}"#,
            "\n"
        );
        assert_eq!(json, expected);
    }

    #[test]
    fn test_indices_point_into_artifacts() {
        let json = JsonRenderer::new()
            .with_pretty(true)
            .render_to_string(&abc_graph())
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let artifacts = value["artifacts"].as_array().unwrap().len() as u64;
        for dependency in value["dependencies"].as_array().unwrap() {
            assert!(dependency["from"].as_u64().unwrap() < artifacts);
            assert!(dependency["to"].as_u64().unwrap() < artifacts);
        }
    }

    #[test]
    fn test_empty_fields_are_present() {
        let mut acc = GraphAccumulator::new(IdentityMode::Versionless);
        acc.add_edge(
            Some(&ArtifactCoordinates::new("g", "root")),
            Some(&ArtifactCoordinates::new("g", "leaf")),
            NodeResolution::OmittedForDuplicate,
            "compile",
        );
        acc.add_module_edge(
            Some(&ArtifactCoordinates::new("g", "leaf")),
            Some(&ArtifactCoordinates::new("g", "root")),
        );

        let json = JsonRenderer::new().render_to_string(&acc.finish()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["artifacts"][0]["version"], "");
        assert_eq!(value["dependencies"].as_array().unwrap().len(), 1);
        assert_eq!(value["dependencies"][0]["resolution"], "OMITTED_FOR_DUPLICATE");
    }

    #[test]
    fn test_scope_less_target_has_empty_array() {
        let mut acc = GraphAccumulator::new(IdentityMode::Versionless);
        acc.add_edge(Some(&artifact("a")), Some(&artifact("b")), NodeResolution::Included, "");
        let graph = acc.finish();

        let json = JsonRenderer::new().render_to_string(&graph).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let scopes = value["dependencies"][0]["scopes"].as_array().unwrap();
        assert!(scopes.is_empty());
    }

    #[test]
    fn test_script_wrapper() {
        let json = JsonRenderer::new()
            .with_script_wrapper(true)
            .render_to_string(&abc_graph())
            .unwrap();

        assert!(json.starts_with("var graph = {\"artifacts\":"));
        assert!(json.trim_end().ends_with("};"));
    }
}
