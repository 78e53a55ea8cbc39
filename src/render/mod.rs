//! # Graph Rendering
//!
//! Renderers project a finished [`Graph`] into text. Both formats implement
//! the narrow [`GraphRenderer`] trait; only the DOT renderer carries styling
//! and therefore implements [`AttributeRenderer`] as well.
//!
//! - **DotRenderer**: Graphviz document, attributes driven by a
//!   [`StyleConfiguration`](crate::style::StyleConfiguration)
//! - **JsonRenderer**: flat `artifacts`/`dependencies` arrays for the
//!   interactive viewer, optionally wrapped as a script

use std::io::Write;

use crate::error::DepgraphError;
use crate::graph::{EdgeView, Graph, GraphNode};
use crate::style::Attributes;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err($crate::error::DepgraphError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err($crate::error::DepgraphError::from)
    };
}

mod dot;
mod json;

pub use dot::DotRenderer;
pub use json::JsonRenderer;

pub trait GraphRenderer {
    fn render(&self, graph: &Graph, output: &mut dyn Write) -> Result<(), DepgraphError>;

    /// Render the whole graph into memory
    fn render_to_string(&self, graph: &Graph) -> Result<String, DepgraphError> {
        let mut buffer = Vec::new();
        self.render(graph, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Per-node and per-edge presentation attributes
pub trait AttributeRenderer {
    /// Display label of a node, already escaped
    fn node_label(&self, node: &GraphNode) -> Option<String>;

    fn node_attributes(&self, node: &GraphNode) -> Attributes;

    fn edge_attributes(&self, edge: &EdgeView<'_>) -> Attributes;
}

/// Escape a string for use inside a double-quoted DOT identifier
pub fn escape_dot(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "\\r")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_dot() {
        assert_eq!(escape_dot("plain"), "plain");
        assert_eq!(escape_dot(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_dot(r"C:\repo"), r"C:\\repo");
        assert_eq!(escape_dot("a\r\nb\nc\rd"), r"a\r\nb\nc\rd");
    }

    #[test]
    fn test_escape_dot_keeps_non_ascii() {
        assert_eq!(escape_dot("jäger-ü"), "jäger-ü");
    }
}
