/// Post-scan summary: entry counts, total bytes, and nesting depth.
///
/// Computed after the walk for the log line the CLI prints. None of these
/// figures are written into the JSON document; directories there carry no
/// aggregate size and treemap tools sum leaves themselves.
use crate::model::Node;

/// Totals over a whole tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    /// Leaf entries (files, symlinks, devices, ...).
    pub files: u64,
    /// Directory entries, the root included.
    pub dirs: u64,
    /// Sum of every leaf `value`.
    pub total_bytes: u64,
    /// Nesting depth of `children` arrays.
    pub depth: usize,
}

/// Summarise `root` in one pass with an explicit stack rather than
/// recursion. `depth` agrees with [`Node::depth`].
pub fn summarize(root: &Node) -> TreeSummary {
    let mut summary = TreeSummary::default();

    // (node, number of `children` arrays enclosing it)
    let mut stack = vec![(root, 0usize)];
    while let Some((node, level)) = stack.pop() {
        match node {
            Node::File { value, .. } => {
                summary.files += 1;
                summary.total_bytes = summary.total_bytes.saturating_add(*value);
                summary.depth = summary.depth.max(level);
            }
            Node::Directory { children, .. } => {
                summary.dirs += 1;
                summary.depth = summary.depth.max(level + 1);
                stack.extend(children.iter().map(|c| (c, level + 1)));
            }
        }
    }

    summary
}
