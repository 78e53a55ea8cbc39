//! # Graph Styling
//!
//! [`StyleConfiguration`] decides what the DOT renderer prints for nodes and
//! edges: which coordinate parts make up a node label, default attribute
//! blocks, and the attributes attached per edge resolution, per node scope
//! and for module-containment edges.
//!
//! A configuration is assembled once through [`StyleConfigurationBuilder`]
//! and is read-only afterwards. Overrides can be loaded from a TOML style
//! file:
//!
//! ```toml
//! [labels]
//! show_group_ids = true
//!
//! [graph]
//! rankdir = "LR"
//!
//! [conflict_edge]
//! color = "purple"
//!
//! [scope_nodes.test]
//! color = "grey"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::core::NodeResolution;
use crate::error::DepgraphError;
use crate::toml_parser::parse_toml_file;

/// An ordered set of Graphviz attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of these attributes
    pub fn merge(&mut self, other: &Attributes) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone)]
pub struct StyleConfiguration {
    show_group_ids: bool,
    show_artifact_ids: bool,
    show_versions_on_nodes: bool,
    show_versions_on_edges: bool,
    graph_attributes: Attributes,
    node_attributes: Attributes,
    edge_attributes: Attributes,
    resolution_edges: BTreeMap<NodeResolution, Attributes>,
    scope_nodes: BTreeMap<String, Attributes>,
    module_edge: Attributes,
}

impl StyleConfiguration {
    pub fn builder() -> StyleConfigurationBuilder {
        StyleConfigurationBuilder::new()
    }

    pub fn show_group_ids(&self) -> bool {
        self.show_group_ids
    }

    pub fn show_artifact_ids(&self) -> bool {
        self.show_artifact_ids
    }

    pub fn show_versions_on_nodes(&self) -> bool {
        self.show_versions_on_nodes
    }

    pub fn show_versions_on_edges(&self) -> bool {
        self.show_versions_on_edges
    }

    pub fn graph_attributes(&self) -> &Attributes {
        &self.graph_attributes
    }

    pub fn node_attributes(&self) -> &Attributes {
        &self.node_attributes
    }

    pub fn edge_attributes(&self) -> &Attributes {
        &self.edge_attributes
    }

    /// Attributes for a dependency edge declared with `resolution`
    pub fn edge_attributes_for(&self, resolution: NodeResolution) -> Option<&Attributes> {
        self.resolution_edges.get(&resolution)
    }

    /// Attributes for a node reached in `scope`
    pub fn scope_attributes(&self, scope: &str) -> Option<&Attributes> {
        self.scope_nodes.get(scope)
    }

    pub fn module_edge_attributes(&self) -> &Attributes {
        &self.module_edge
    }
}

impl Default for StyleConfiguration {
    fn default() -> Self {
        StyleConfigurationBuilder::new().build()
    }
}

/// Builder seeded with the default look
#[derive(Debug, Clone)]
pub struct StyleConfigurationBuilder {
    inner: StyleConfiguration,
}

impl StyleConfigurationBuilder {
    pub fn new() -> Self {
        let mut resolution_edges = BTreeMap::new();
        resolution_edges.insert(NodeResolution::Included, Attributes::new());
        resolution_edges.insert(
            NodeResolution::OmittedForDuplicate,
            Attributes::new().with("style", "dashed"),
        );
        resolution_edges.insert(
            NodeResolution::OmittedForConflict,
            Attributes::new()
                .with("style", "dashed")
                .with("color", "red")
                .with("fontcolor", "red"),
        );
        resolution_edges.insert(
            NodeResolution::OmittedForCycle,
            Attributes::new().with("style", "dotted").with("color", "orange"),
        );

        let mut scope_nodes = BTreeMap::new();
        scope_nodes.insert("provided".to_string(), Attributes::new().with("color", "grey"));
        scope_nodes.insert("runtime".to_string(), Attributes::new().with("style", "dashed"));
        scope_nodes.insert(
            "test".to_string(),
            Attributes::new().with("style", "dashed").with("color", "grey"),
        );

        Self {
            inner: StyleConfiguration {
                show_group_ids: false,
                show_artifact_ids: true,
                show_versions_on_nodes: false,
                show_versions_on_edges: false,
                graph_attributes: Attributes::new(),
                node_attributes: Attributes::new()
                    .with("shape", "box")
                    .with("fontname", "Helvetica")
                    .with("fontsize", "14"),
                edge_attributes: Attributes::new()
                    .with("fontname", "Helvetica")
                    .with("fontsize", "10"),
                resolution_edges,
                scope_nodes,
                module_edge: Attributes::new().with("style", "dotted"),
            },
        }
    }

    pub fn with_show_group_ids(mut self, show: bool) -> Self {
        self.inner.show_group_ids = show;
        self
    }

    pub fn with_show_artifact_ids(mut self, show: bool) -> Self {
        self.inner.show_artifact_ids = show;
        self
    }

    pub fn with_show_versions_on_nodes(mut self, show: bool) -> Self {
        self.inner.show_versions_on_nodes = show;
        self
    }

    pub fn with_show_versions_on_edges(mut self, show: bool) -> Self {
        self.inner.show_versions_on_edges = show;
        self
    }

    pub fn with_graph_attributes(mut self, attributes: Attributes) -> Self {
        self.inner.graph_attributes = attributes;
        self
    }

    pub fn with_node_attributes(mut self, attributes: Attributes) -> Self {
        self.inner.node_attributes = attributes;
        self
    }

    pub fn with_edge_attributes(mut self, attributes: Attributes) -> Self {
        self.inner.edge_attributes = attributes;
        self
    }

    pub fn with_resolution_edge(mut self, resolution: NodeResolution, attributes: Attributes) -> Self {
        self.inner.resolution_edges.insert(resolution, attributes);
        self
    }

    pub fn with_scope_node(mut self, scope: impl Into<String>, attributes: Attributes) -> Self {
        self.inner.scope_nodes.insert(scope.into(), attributes);
        self
    }

    pub fn with_module_edge(mut self, attributes: Attributes) -> Self {
        self.inner.module_edge = attributes;
        self
    }

    /// Merge a style file over the current settings
    pub fn with_style_file(self, path: &Path) -> Result<Self, DepgraphError> {
        let file: StyleFile = parse_toml_file(path)?;
        self.apply(file)
    }

    fn apply(mut self, file: StyleFile) -> Result<Self, DepgraphError> {
        let style = &mut self.inner;

        if let Some(labels) = file.labels {
            style.show_group_ids = labels.show_group_ids.unwrap_or(style.show_group_ids);
            style.show_artifact_ids = labels.show_artifact_ids.unwrap_or(style.show_artifact_ids);
            style.show_versions_on_nodes = labels.show_versions.unwrap_or(style.show_versions_on_nodes);
            style.show_versions_on_edges = labels
                .show_versions_on_edges
                .unwrap_or(style.show_versions_on_edges);
        }

        style.graph_attributes.merge(&convert_table(file.graph)?);
        style.node_attributes.merge(&convert_table(file.node)?);
        style.edge_attributes.merge(&convert_table(file.edge)?);
        style.module_edge.merge(&convert_table(file.module_edge)?);

        let per_resolution = [
            (NodeResolution::Included, file.included_edge),
            (NodeResolution::OmittedForDuplicate, file.duplicate_edge),
            (NodeResolution::OmittedForConflict, file.conflict_edge),
            (NodeResolution::OmittedForCycle, file.cycle_edge),
        ];
        for (resolution, table) in per_resolution {
            let overrides = convert_table(table)?;
            style
                .resolution_edges
                .entry(resolution)
                .or_default()
                .merge(&overrides);
        }

        for (scope, table) in file.scope_nodes {
            let overrides = convert_table(table)?;
            style.scope_nodes.entry(scope).or_default().merge(&overrides);
        }

        Ok(self)
    }

    pub fn build(self) -> StyleConfiguration {
        self.inner
    }
}

impl Default for StyleConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

type AttributeTable = BTreeMap<String, toml::Value>;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleFile {
    labels: Option<LabelSettings>,
    graph: AttributeTable,
    node: AttributeTable,
    edge: AttributeTable,
    included_edge: AttributeTable,
    duplicate_edge: AttributeTable,
    conflict_edge: AttributeTable,
    cycle_edge: AttributeTable,
    module_edge: AttributeTable,
    scope_nodes: BTreeMap<String, AttributeTable>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LabelSettings {
    show_group_ids: Option<bool>,
    show_artifact_ids: Option<bool>,
    show_versions: Option<bool>,
    show_versions_on_edges: Option<bool>,
}

fn convert_table(table: AttributeTable) -> Result<Attributes, DepgraphError> {
    table
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    return Err(DepgraphError::ConfigurationError {
                        message: format!(
                            "Style attribute '{key}' must be a string, number or boolean, found {}",
                            other.type_str()
                        ),
                    });
                }
            };
            Ok((key, value))
        })
        .collect()
}
