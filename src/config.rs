// src/config.rs
use std::path::{Path, PathBuf};

use treesnap_domain::{ExclusionRules, SnapshotConfig};
use treesnap_shared_kernel::{ErrorContext, InfrastructureError, PresentationError, Result};

use crate::args::Args;

/// Resolves parsed arguments into a validated run configuration.
///
/// The root is canonicalised so the walk target is concrete even when the
/// argument was `.` or a symlink to the real directory. A relative output
/// path lands under the resolved root.
pub fn resolve(args: &Args) -> Result<SnapshotConfig> {
    let root = canonical_root(&args.root)?;
    let output = resolve_output(&root, &args.output);
    let rules = build_rules(args)?;
    Ok(SnapshotConfig::new(root, output, rules)?)
}

fn canonical_root(root: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(root).map_err(|source| {
        InfrastructureError::PathResolution {
            path: root.to_path_buf(),
            source,
        }
        .into()
    })
}

fn resolve_output(root: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        root.join(output)
    }
}

fn build_rules(args: &Args) -> Result<ExclusionRules> {
    let mut rules = if args.no_default_exclude {
        ExclusionRules::default()
    } else {
        ExclusionRules::with_defaults()
    };
    for name in &args.exclude_dir {
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(PresentationError::InvalidValue {
                flag: "--exclude-dir".to_string(),
                value: name.clone(),
                reason: "expected a plain directory name".to_string(),
            }
            .into());
        }
        rules.add_dir_name(name.clone());
    }
    for pattern in &args.exclude_path {
        rules
            .add_path_pattern(pattern)
            .with_context(|| format!("invalid --exclude-path '{pattern}'"))?;
    }
    Ok(rules)
}
