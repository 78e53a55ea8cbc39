use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;
use walkdir::WalkDir;

use super::ProjectModule;
use crate::constants::DESCRIPTOR_FILE_NAME;
use crate::error::DepgraphError;
use crate::progress::ProgressReporter;
use crate::toml_parser::ProjectDescriptor;

/// A root module and all modules it aggregates
///
/// Index 0 is the root. Containment pairs are `(parent, child)` indices.
#[derive(Debug, Clone)]
pub struct ProjectTree {
    modules: Vec<ProjectModule>,
    containment: Vec<(usize, usize)>,
}

impl ProjectTree {
    pub const ROOT: usize = 0;

    pub fn new(root: ProjectModule) -> Self {
        Self {
            modules: vec![root],
            containment: Vec::new(),
        }
    }

    /// Register `child` below the module at index `parent`, returning the
    /// child's index
    pub fn add_module(&mut self, parent: usize, child: ProjectModule) -> usize {
        let index = self.modules.len();
        self.modules.push(child);
        self.containment.push((parent, index));
        index
    }

    pub fn root(&self) -> &ProjectModule {
        &self.modules[Self::ROOT]
    }

    pub fn module(&self, index: usize) -> Option<&ProjectModule> {
        self.modules.get(index)
    }

    /// Every module below the root, in discovery order
    pub fn collected_modules(&self) -> impl Iterator<Item = (usize, &ProjectModule)> {
        self.modules.iter().enumerate().skip(1)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn containment(&self) -> &[(usize, usize)] {
        &self.containment
    }

    pub fn parent_of(&self, child: usize) -> Option<usize> {
        self.containment
            .iter()
            .find(|(_, c)| *c == child)
            .map(|(parent, _)| *parent)
    }

    pub fn has_children(&self, index: usize) -> bool {
        self.containment.iter().any(|(parent, _)| *parent == index)
    }
}

#[derive(Default)]
pub struct ProjectDiscovery;

impl ProjectDiscovery {
    pub fn new() -> Self {
        Self
    }

    /// Build the module tree rooted at `root`
    pub fn discover(
        &self,
        root: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<ProjectTree, DepgraphError> {
        if !root.join(DESCRIPTOR_FILE_NAME).is_file() {
            return Err(DepgraphError::ProjectError {
                message: format!("No {DESCRIPTOR_FILE_NAME} found in '{}'", root.display()),
            });
        }

        let root = normalize(root);
        let mut descriptors = self.parse_all(&root, progress);

        let root_descriptor = descriptors
            .remove(&root)
            .ok_or_else(|| DepgraphError::ProjectError {
                message: format!("Could not read the descriptor in '{}'", root.display()),
            })??;

        let mut tree = ProjectTree::new(ProjectModule::from_descriptor(root.clone(), root_descriptor));
        let mut visited = HashSet::from([root]);
        let mut queue = VecDeque::from([ProjectTree::ROOT]);

        while let Some(parent) = queue.pop_front() {
            let Some(parent_module) = tree.module(parent) else {
                continue;
            };
            let parent_dir = parent_module.path().to_path_buf();
            let patterns = parent_module.module_patterns().to_vec();

            for child_dir in expand_module_patterns(&parent_dir, &patterns)? {
                if !visited.insert(child_dir.clone()) {
                    continue;
                }

                let descriptor = descriptors.remove(&child_dir).ok_or_else(|| {
                    DepgraphError::ProjectError {
                        message: format!(
                            "Module '{}' declared in '{}' has no {DESCRIPTOR_FILE_NAME}",
                            child_dir.display(),
                            parent_dir.display()
                        ),
                    }
                })??;

                let index = tree.add_module(parent, ProjectModule::from_descriptor(child_dir, descriptor));
                queue.push_back(index);
            }
        }

        let mut unreachable: Vec<_> = descriptors.into_iter().collect();
        unreachable.sort_by(|a, b| a.0.cmp(&b.0));
        for (dir, result) in unreachable {
            match result {
                Ok(_) => eprintln!(
                    "{} Ignoring {}: not listed as a module of {}",
                    console::style("⚠").yellow(),
                    dir.join(DESCRIPTOR_FILE_NAME).display(),
                    tree.root().name()
                ),
                Err(e) => eprintln!(
                    "{} Failed to parse {}: {}",
                    console::style("⚠").yellow(),
                    dir.join(DESCRIPTOR_FILE_NAME).display(),
                    e
                ),
            }
        }

        debug!(modules = tree.len(), "discovered project tree");
        Ok(tree)
    }

    fn parse_all(
        &self,
        root: &Path,
        progress: Option<&ProgressReporter>,
    ) -> HashMap<PathBuf, Result<ProjectDescriptor, DepgraphError>> {
        let descriptor_paths: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name();
                // Skip build output and VCS metadata
                name != "target" && name != ".git" && name != "node_modules"
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && e.file_name() == DESCRIPTOR_FILE_NAME)
            .map(|e| e.into_path())
            .collect();

        descriptor_paths
            .into_par_iter()
            .filter_map(|path| {
                if let Some(p) = progress {
                    p.checking_descriptor(&path);
                }

                let dir = normalize(path.parent()?);
                Some((dir, ProjectDescriptor::parse_file(&path)))
            })
            .collect()
    }
}

fn normalize(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn expand_module_patterns(parent: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, DepgraphError> {
    let mut dirs = Vec::new();

    for pattern in patterns {
        if pattern.contains(['*', '?', '[']) {
            let glob_pattern = parent.join(pattern);
            let glob_str = glob_pattern.to_string_lossy();

            let paths = glob::glob(&glob_str).map_err(|source| DepgraphError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;

            let mut matched: Vec<PathBuf> = paths
                .flatten()
                .filter(|path| path.join(DESCRIPTOR_FILE_NAME).is_file())
                .map(|path| normalize(&path))
                .collect();
            matched.sort();
            dirs.extend(matched);
        } else {
            dirs.push(normalize(&parent.join(pattern)));
        }
    }

    Ok(dirs)
}
