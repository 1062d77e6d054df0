// crates/infra/src/filesystem.rs
use std::collections::HashSet;

use ignore::WalkBuilder;
use log::debug;
use treesnap_ports::filesystem::{TreeWalker, WalkPlan, WalkedFileDto};
use treesnap_shared_kernel::{InfrastructureError, RecordPath, Result};

/// Filesystem adapter implementing the `TreeWalker` port with a sorted,
/// sequential walk.
///
/// Hidden files are yielded like any other file, no ignore files are
/// consulted, and symbolic links are never followed. Entries come out in
/// depth-first order with siblings sorted by name, so two walks of the same
/// tree produce the same sequence.
#[derive(Debug, Default)]
pub struct SequentialTreeWalker;

impl SequentialTreeWalker {
    pub fn new() -> Self {
        Self
    }
}

impl TreeWalker for SequentialTreeWalker {
    fn collect(&self, plan: &WalkPlan) -> Result<Vec<WalkedFileDto>> {
        walk_tree(plan)
    }
}

fn walk_tree(plan: &WalkPlan) -> Result<Vec<WalkedFileDto>> {
    let root = plan.root.as_path();
    if !root.is_dir() {
        return Err(InfrastructureError::NotADirectory {
            path: root.to_path_buf(),
        }
        .into());
    }
    debug!("walking '{}'", root.display());

    let mut builder = WalkBuilder::new(root);
    builder.follow_links(false);
    // Dotfiles are ordinary entries here; the exclusion rules decide what
    // stays out of the snapshot.
    builder.hidden(false);
    builder.git_ignore(false);
    builder.git_global(false);
    builder.git_exclude(false);
    builder.ignore(false);
    builder.parents(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    let prune: HashSet<String> = plan.prune_dirs.iter().cloned().collect();
    builder.filter_entry(move |entry| {
        // Depth 0 is the walk root itself; it is never pruned, even when its
        // own name matches a pruned directory.
        if entry.depth() == 0 {
            return true;
        }
        if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        let Some(name) = entry.file_name().to_str() else {
            return true;
        };
        !prune.contains(name)
    });

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = result?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let relative = RecordPath::from_relative(relative);
        files.push(WalkedFileDto {
            absolute: path,
            relative,
        });
    }

    Ok(files)
}
