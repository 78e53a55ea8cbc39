//! # Graph Factories
//!
//! Factories drive one complete graph build: resolve modules, filter the
//! raw edges, feed them into a single [`GraphAccumulator`] and hand back the
//! finished [`Graph`].
//!
//! - **SimpleGraphFactory**: the dependency graph of the root module alone
//! - **AggregatingGraphFactory**: one graph over every module of a project
//!   tree, optionally with parent-to-module containment edges
//!
//! Modules are resolved in parallel. Their edges are still fed in module
//! order by a single writer, so the result does not depend on scheduling.

use rayon::prelude::*;
use tracing::debug;

use crate::artifact::{ArtifactCoordinates, ArtifactFilter, IdentityMode};
use crate::core::{NodeResolution, RawEdge};
use crate::error::DepgraphError;
use crate::graph::{EdgeSink, Graph, GraphAccumulator};
use crate::progress::ProgressReporter;
use crate::resolver::{DependencyResolver, ProjectModule, ProjectTree};

/// Which raw-edge resolutions reach the accumulator
///
/// Included edges always pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionFilter {
    duplicates: bool,
    conflicts: bool,
    cycles: bool,
}

impl ResolutionFilter {
    pub fn new(duplicates: bool, conflicts: bool, cycles: bool) -> Self {
        Self {
            duplicates,
            conflicts,
            cycles,
        }
    }

    pub fn included_only() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self::new(true, true, true)
    }

    pub fn allows(&self, resolution: NodeResolution) -> bool {
        match resolution {
            NodeResolution::Included => true,
            NodeResolution::OmittedForDuplicate => self.duplicates,
            NodeResolution::OmittedForConflict => self.conflicts,
            NodeResolution::OmittedForCycle => self.cycles,
        }
    }
}

/// Options shared by every factory
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphSettings {
    pub identity_mode: IdentityMode,
    pub omit_self_references: bool,
    pub resolutions: ResolutionFilter,
}

impl GraphSettings {
    fn accumulator(&self, name: &str) -> GraphAccumulator {
        GraphAccumulator::new(self.identity_mode)
            .with_name(name)
            .with_omit_self_references(self.omit_self_references)
    }
}

pub trait GraphFactory {
    fn create_graph(
        &self,
        tree: &ProjectTree,
        progress: Option<&ProgressReporter>,
    ) -> Result<Graph, DepgraphError>;
}

fn feed_edges(
    sink: &mut dyn EdgeSink,
    edges: &[RawEdge],
    filter: &dyn ArtifactFilter,
    resolutions: ResolutionFilter,
) {
    for edge in edges {
        if !resolutions.allows(edge.resolution) {
            continue;
        }

        let from = filter.include(&edge.from).then_some(&edge.from);
        let to = filter.include(&edge.to).then_some(&edge.to);
        sink.add_edge(from, to, edge.resolution, &edge.scope);
    }
}

/// Graph of a single module
pub struct SimpleGraphFactory {
    resolver: Box<dyn DependencyResolver>,
    filter: Box<dyn ArtifactFilter>,
    settings: GraphSettings,
}

impl SimpleGraphFactory {
    pub fn new(
        resolver: Box<dyn DependencyResolver>,
        filter: Box<dyn ArtifactFilter>,
        settings: GraphSettings,
    ) -> Self {
        Self {
            resolver,
            filter,
            settings,
        }
    }
}

impl GraphFactory for SimpleGraphFactory {
    fn create_graph(
        &self,
        tree: &ProjectTree,
        progress: Option<&ProgressReporter>,
    ) -> Result<Graph, DepgraphError> {
        let root = tree.root();
        let edges = self.resolver.resolve(root)?;
        if let Some(p) = progress {
            p.module_resolved(root.name());
        }

        let mut accumulator = self.settings.accumulator(root.name());
        feed_edges(
            &mut accumulator,
            &edges,
            self.filter.as_ref(),
            self.settings.resolutions,
        );

        Ok(accumulator.finish())
    }
}

/// One graph over all modules of a project tree
pub struct AggregatingGraphFactory {
    resolver: Box<dyn DependencyResolver>,
    filter: Box<dyn ArtifactFilter>,
    settings: GraphSettings,
    include_parent_projects: bool,
}

impl AggregatingGraphFactory {
    pub fn new(
        resolver: Box<dyn DependencyResolver>,
        filter: Box<dyn ArtifactFilter>,
        settings: GraphSettings,
        include_parent_projects: bool,
    ) -> Self {
        Self {
            resolver,
            filter,
            settings,
            include_parent_projects,
        }
    }

    /// Modules this factory will resolve, in tree order
    pub fn modules_in_graph<'a>(&self, tree: &'a ProjectTree) -> Vec<&'a ProjectModule> {
        tree.collected_modules()
            .filter(|(index, module)| self.is_part_of_graph(tree, *index, module))
            .map(|(_, module)| module)
            .collect()
    }

    fn is_part_of_graph(&self, tree: &ProjectTree, index: usize, module: &ProjectModule) -> bool {
        self.filter.include(module.coordinates())
            && (self.include_parent_projects || !tree.has_children(index))
    }

    fn filtered<'a>(&self, module: Option<&'a ProjectModule>) -> Option<&'a ArtifactCoordinates> {
        module
            .map(ProjectModule::coordinates)
            .filter(|coordinates| self.filter.include(coordinates))
    }

    /// Walk from every collected module up to the aggregation root,
    /// linking each parent to its child
    fn add_module_edges(&self, tree: &ProjectTree, sink: &mut dyn EdgeSink) {
        for (index, _) in tree.collected_modules() {
            let mut child = index;
            while let Some(parent) = tree.parent_of(child) {
                sink.add_module_edge(
                    self.filtered(tree.module(parent)),
                    self.filtered(tree.module(child)),
                );

                if parent == ProjectTree::ROOT {
                    break;
                }
                child = parent;
            }
        }
    }
}

impl GraphFactory for AggregatingGraphFactory {
    fn create_graph(
        &self,
        tree: &ProjectTree,
        progress: Option<&ProgressReporter>,
    ) -> Result<Graph, DepgraphError> {
        let mut accumulator = self.settings.accumulator(tree.root().name());

        if self.include_parent_projects {
            self.add_module_edges(tree, &mut accumulator);
        }

        let modules = self.modules_in_graph(tree);
        debug!(modules = modules.len(), "resolving modules for aggregation");

        // Any failing module aborts the whole graph
        let resolved: Vec<Vec<RawEdge>> = modules
            .par_iter()
            .map(|module| {
                let edges = self.resolver.resolve(module);
                if let Some(p) = progress {
                    p.module_resolved(module.name());
                }
                edges
            })
            .collect::<Result<Vec<_>, _>>()?;

        for edges in &resolved {
            feed_edges(
                &mut accumulator,
                edges,
                self.filter.as_ref(),
                self.settings.resolutions,
            );
        }

        Ok(accumulator.finish())
    }
}
