//! # Dependency Resolution
//!
//! The graph core only consumes raw edges; where they come from is up to a
//! [`DependencyResolver`]. This module ships one file-based implementation:
//! every module directory holds a `depgraph.toml` descriptor listing the
//! module's coordinates, its sub-modules and its resolved dependency edges.
//!
//! - **ProjectDiscovery**: Finds descriptors below a root and assembles the
//!   module tree
//! - **DescriptorResolver**: Turns a module's descriptor into raw edges

use std::path::{Path, PathBuf};

use crate::artifact::ArtifactCoordinates;
use crate::core::RawEdge;
use crate::error::DepgraphError;
use crate::toml_parser::{DependencyEntry, ProjectDescriptor};

mod descriptor;
mod discovery;

pub use descriptor::DescriptorResolver;
pub use discovery::{ProjectDiscovery, ProjectTree};

/// Produces the raw dependency edges of one module
pub trait DependencyResolver: Send + Sync {
    fn resolve(&self, module: &ProjectModule) -> Result<Vec<RawEdge>, DepgraphError>;
}

/// One module of a project tree
#[derive(Debug, Clone)]
pub struct ProjectModule {
    path: PathBuf,
    coordinates: ArtifactCoordinates,
    module_patterns: Vec<String>,
    dependencies: Vec<DependencyEntry>,
}

impl ProjectModule {
    pub fn new(path: impl Into<PathBuf>, coordinates: ArtifactCoordinates) -> Self {
        Self {
            path: path.into(),
            coordinates,
            module_patterns: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub(crate) fn from_descriptor(path: PathBuf, descriptor: ProjectDescriptor) -> Self {
        let coordinates = descriptor.coordinates();
        Self {
            path,
            coordinates,
            module_patterns: descriptor.project.modules,
            dependencies: descriptor.dependencies,
        }
    }

    pub fn load(dir: &Path) -> Result<Self, DepgraphError> {
        let descriptor =
            ProjectDescriptor::parse_file(&dir.join(crate::constants::DESCRIPTOR_FILE_NAME))?;
        Ok(Self::from_descriptor(dir.to_path_buf(), descriptor))
    }

    /// Directory holding the module's descriptor
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn coordinates(&self) -> &ArtifactCoordinates {
        &self.coordinates
    }

    pub fn name(&self) -> &str {
        self.coordinates.artifact_id()
    }

    /// Declared sub-module paths, relative to [`ProjectModule::path`]
    pub fn module_patterns(&self) -> &[String] {
        &self.module_patterns
    }

    pub(crate) fn dependencies(&self) -> &[DependencyEntry] {
        &self.dependencies
    }
}
