use std::io::Write;

use super::{AttributeRenderer, GraphRenderer, escape_dot};
use crate::core::{EdgeKind, NodeResolution};
use crate::error::DepgraphError;
use crate::graph::{EdgeView, Graph, GraphNode};
use crate::style::{Attributes, StyleConfiguration};

const DEFAULT_GRAPH_NAME: &str = "G";
const LINE_BREAK: &str = "\\n";

/// Renders a graph as a Graphviz DOT document
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    style: StyleConfiguration,
}

impl DotRenderer {
    pub fn new(style: StyleConfiguration) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &StyleConfiguration {
        &self.style
    }
}

fn format_attributes(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", escape_dot(key), escape_dot(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

impl AttributeRenderer for DotRenderer {
    fn node_label(&self, node: &GraphNode) -> Option<String> {
        let artifact = node.artifact();
        let mut parts = Vec::new();

        if self.style.show_group_ids() {
            parts.push(artifact.group_id());
        }
        if self.style.show_artifact_ids() {
            parts.push(artifact.artifact_id());
        }
        if self.style.show_versions_on_nodes()
            && let Some(version) = artifact.version()
        {
            parts.push(version);
        }

        if parts.is_empty() {
            return None;
        }

        Some(
            parts
                .into_iter()
                .map(escape_dot)
                .collect::<Vec<_>>()
                .join(LINE_BREAK),
        )
    }

    fn node_attributes(&self, node: &GraphNode) -> Attributes {
        // Scoped identities carry their scope; otherwise fall back to the
        // first scope the node was reached in
        let scope = node
            .artifact()
            .scope()
            .or_else(|| node.scopes().iter().next().map(String::as_str));

        scope
            .and_then(|scope| self.style.scope_attributes(scope))
            .cloned()
            .unwrap_or_default()
    }

    fn edge_attributes(&self, edge: &EdgeView<'_>) -> Attributes {
        match edge.edge.kind() {
            EdgeKind::Module => self.style.module_edge_attributes().clone(),
            EdgeKind::Dependency => {
                let resolution = edge.edge.resolution();
                let mut attributes = self
                    .style
                    .edge_attributes_for(resolution)
                    .cloned()
                    .unwrap_or_default();

                if self.style.show_versions_on_edges()
                    && resolution == NodeResolution::OmittedForConflict
                    && let Some(version) = edge.edge.requested_version()
                {
                    attributes.set("label", version);
                }

                attributes
            }
        }
    }
}

impl GraphRenderer for DotRenderer {
    fn render(&self, graph: &Graph, output: &mut dyn Write) -> Result<(), DepgraphError> {
        let name = graph.name().unwrap_or(DEFAULT_GRAPH_NAME);
        writeln_out!(output, "digraph \"{}\" {{", escape_dot(name))?;

        let defaults = [
            ("graph", self.style.graph_attributes()),
            ("node", self.style.node_attributes()),
            ("edge", self.style.edge_attributes()),
        ];
        for (kind, attributes) in defaults {
            if !attributes.is_empty() {
                writeln_out!(output, "  {} [{}]", kind, format_attributes(attributes))?;
            }
        }

        writeln_out!(output)?;
        writeln_out!(output, "  // Node Definitions:")?;
        for node in graph.nodes() {
            let mut statement = String::new();
            if let Some(label) = self.node_label(node) {
                statement.push_str(&format!("label=\"{label}\""));
            }

            let attributes = self.node_attributes(node);
            if !attributes.is_empty() {
                if !statement.is_empty() {
                    statement.push_str(", ");
                }
                statement.push_str(&format_attributes(&attributes));
            }

            if statement.is_empty() {
                writeln_out!(output, "  \"{}\"", escape_dot(node.key()))?;
            } else {
                writeln_out!(output, "  \"{}\"[{}]", escape_dot(node.key()), statement)?;
            }
        }

        writeln_out!(output)?;
        writeln_out!(output, "  // Edge Definitions:")?;
        for edge in graph.edges() {
            let from = escape_dot(edge.from.key());
            let to = escape_dot(edge.to.key());
            let attributes = self.edge_attributes(&edge);

            if attributes.is_empty() {
                writeln_out!(output, "  \"{}\" -> \"{}\"", from, to)?;
            } else {
                writeln_out!(
                    output,
                    "  \"{}\" -> \"{}\"[{}]",
                    from,
                    to,
                    format_attributes(&attributes)
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::artifact::{ArtifactCoordinates, IdentityMode};
    use crate::graph::{EdgeSink, GraphAccumulator};

    fn artifact(name: &str) -> ArtifactCoordinates {
        ArtifactCoordinates::new("com.example", name)
            .with_type("jar")
            .with_version("1.0.0")
    }

    fn abc_graph() -> Graph {
        let (a, b, c) = (artifact("a"), artifact("b"), artifact("c"));
        let c_requested = artifact("c").with_version("2.0.0");
        let mut acc = GraphAccumulator::new(IdentityMode::Versionless).with_name("a");

        acc.add_edge(Some(&a), Some(&b), NodeResolution::Included, "compile");
        acc.add_edge(Some(&a), Some(&c), NodeResolution::Included, "test");
        acc.add_edge(
            Some(&b),
            Some(&c_requested),
            NodeResolution::OmittedForConflict,
            "compile",
        );
        acc.finish()
    }

    fn plain_style() -> StyleConfiguration {
        StyleConfiguration::builder()
            .with_node_attributes(Attributes::new())
            .with_edge_attributes(Attributes::new())
            .build()
    }

    #[test]
    fn test_render_reference_scenario() {
        let renderer = DotRenderer::new(plain_style());
        let dot = renderer.render_to_string(&abc_graph()).unwrap();

        let expected = r#"digraph "a" {

  // Node Definitions:
  "com.example:a:jar:"[label="a"]
  "com.example:b:jar:"[label="b"]
  "com.example:c:jar:"[label="c"]

  // Edge Definitions:
  "com.example:a:jar:" -> "com.example:b:jar:"
  "com.example:a:jar:" -> "com.example:c:jar:"
  "com.example:b:jar:" -> "com.example:c:jar:"[color="red", fontcolor="red", style="dashed"]
}
"#;
        assert_eq!(dot, expected);
    }

    #[test]
    fn test_default_blocks_only_when_non_empty() {
        let style = StyleConfiguration::builder()
            .with_graph_attributes(Attributes::new().with("rankdir", "LR"))
            .with_edge_attributes(Attributes::new())
            .build();
        let dot = DotRenderer::new(style).render_to_string(&abc_graph()).unwrap();

        assert!(dot.contains("  graph [rankdir=\"LR\"]\n"));
        assert!(dot.contains("  node [fontname=\"Helvetica\", fontsize=\"14\", shape=\"box\"]\n"));
        assert!(!dot.contains("  edge ["));
    }

    #[test]
    fn test_conflict_edge_shows_requested_version() {
        let style = StyleConfiguration::builder()
            .with_show_versions_on_edges(true)
            .build();
        let dot = DotRenderer::new(style).render_to_string(&abc_graph()).unwrap();

        assert!(dot.contains(
            r#""com.example:b:jar:" -> "com.example:c:jar:"[color="red", fontcolor="red", label="2.0.0", style="dashed"]"#
        ));
    }

    #[test]
    fn test_label_parts() {
        let style = StyleConfiguration::builder()
            .with_show_group_ids(true)
            .with_show_versions_on_nodes(true)
            .build();
        let renderer = DotRenderer::new(style);
        let graph = abc_graph();

        assert_eq!(
            renderer.node_label(graph.node(0).unwrap()).as_deref(),
            Some(r"com.example\na\n1.0.0")
        );

        let hidden = DotRenderer::new(StyleConfiguration::builder().with_show_artifact_ids(false).build());
        assert_eq!(hidden.node_label(graph.node(0).unwrap()), None);
    }

    #[test]
    fn test_module_edges_use_module_style() {
        let mut acc = GraphAccumulator::new(IdentityMode::Versionless);
        acc.add_module_edge(Some(&artifact("parent")), Some(&artifact("child")));
        let dot = DotRenderer::new(plain_style())
            .render_to_string(&acc.finish())
            .unwrap();

        assert!(dot.contains(r#""com.example:parent:jar:" -> "com.example:child:jar:"[style="dotted"]"#));
        assert!(dot.starts_with("digraph \"G\" {"));
    }

    #[test]
    fn test_hostile_identifiers_are_escaped() {
        let evil = ArtifactCoordinates::new("com.\"evil\"", "line\nbreak\\x");
        let mut acc = GraphAccumulator::new(IdentityMode::Versionless).with_name("quote\"name");
        acc.add_edge(Some(&artifact("a")), Some(&evil), NodeResolution::Included, "compile");

        let dot = DotRenderer::new(plain_style())
            .render_to_string(&acc.finish())
            .unwrap();

        assert!(dot.starts_with(r#"digraph "quote\"name" {"#));
        assert!(dot.contains(r#""com.\"evil\":line\nbreak\\x::"[label="line\nbreak\\x"]"#));
        // One line per statement: raw newlines never leak out of a string
        assert_eq!(dot.lines().filter(|l| l.contains("->")).count(), 1);
    }

    #[test]
    fn test_carriage_return_keeps_identifiers_distinct() {
        let root = ArtifactCoordinates::new("g", "root");
        let mut acc = GraphAccumulator::new(IdentityMode::Versionless);
        acc.add_edge(
            Some(&root),
            Some(&ArtifactCoordinates::new("g", "ab")),
            NodeResolution::Included,
            "compile",
        );
        acc.add_edge(
            Some(&root),
            Some(&ArtifactCoordinates::new("g", "a\rb")),
            NodeResolution::Included,
            "compile",
        );
        let graph = acc.finish();
        assert_eq!(graph.node_count(), 3);

        let dot = DotRenderer::new(plain_style()).render_to_string(&graph).unwrap();
        assert!(dot.contains(r#""g:ab::"[label="ab"]"#));
        assert!(dot.contains(r#""g:a\rb::"[label="a\rb"]"#));

        let edges: std::collections::HashSet<&str> =
            dot.lines().filter(|l| l.contains("->")).collect();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_scope_attributes_on_nodes() {
        let mut acc = GraphAccumulator::new(IdentityMode::VersionlessWithScope);
        let junit = artifact("junit").with_scope("test");
        acc.add_edge(Some(&artifact("a")), Some(&junit), NodeResolution::Included, "test");

        let dot = DotRenderer::new(plain_style())
            .render_to_string(&acc.finish())
            .unwrap();

        assert!(dot.contains(r#""com.example:junit:jar::test"[label="junit", color="grey", style="dashed"]"#));
    }
}
