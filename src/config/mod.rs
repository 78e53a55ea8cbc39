//! # Configuration Module
//!
//! This module provides configuration structures for all depgraph commands.
//! Each command has its own config module with builder patterns for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **CommonGraphConfig**: Project path, output, filters, identity mode and
//!   styling shared by every command
//! - **GraphConfig**: Configuration for the `graph` command
//! - **AggregateConfig**: Configuration for the `aggregate` command
//!
//! ## Example
//!
//! ```
//! use depgraph::cli::GraphFormat;
//! use depgraph::common::ConfigBuilder;
//! use depgraph::config::{AggregateConfig, CommonGraphConfig};
//!
//! let common = CommonGraphConfig::builder()
//!     .path(".".into())
//!     .format(GraphFormat::Dot)
//!     .merge_scopes(true)
//!     .build()
//!     .unwrap();
//!
//! let config = AggregateConfig::builder()
//!     .with_common(common)
//!     .with_include_parent_projects(true)
//!     .build()
//!     .unwrap();
//! assert!(config.include_parent_projects);
//! ```

pub mod aggregate;
pub mod common;
pub mod graph;

pub use aggregate::AggregateConfig;
pub use common::{CommonGraphConfig, StyleOptions};
pub use graph::GraphConfig;
