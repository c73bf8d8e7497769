/// Scanner module: turns a path on disk into a [`Node`] tree.
///
/// The walk is synchronous and depth-first (see [`walk`]). [`scan`] is the
/// top-level entry: it walks the root, then renames the root node to the
/// path exactly as the caller spelled it, so `./data/` stays `./data/`
/// rather than becoming `data`.
pub mod walk;

pub use walk::explore;

use crate::analysis;
use crate::error::Result;
use crate::model::{format_count, ByteSize, Node};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// How symbolic links to directories are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkPolicy {
    /// Never recurse through a symlink; it becomes a leaf sized by `lstat`.
    /// Link cycles cannot occur.
    #[default]
    Leaf,
    /// Recurse when the link target is a directory. Cycles are not detected:
    /// expansion stops at the OS symlink limit, where the innermost link
    /// fails to resolve and becomes a leaf.
    Follow,
}

/// Scan configuration.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub link_policy: LinkPolicy,
}

/// Walk `root` and return the finished tree.
///
/// The root node's name is the lossy string form of `root` itself, not its
/// base name. Any filesystem error aborts the scan and nothing is returned.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<Node> {
    let start = Instant::now();
    info!("Starting scan of {}", root.display());

    let mut tree = explore(root, options)?;
    tree.set_name(&*root.to_string_lossy());

    let summary = analysis::summarize(&tree);
    info!(
        "Scan complete: {} files, {} dirs, {} deep, {} in {:?}",
        format_count(summary.files),
        format_count(summary.dirs),
        summary.depth,
        ByteSize(summary.total_bytes),
        start.elapsed()
    );

    Ok(tree)
}
