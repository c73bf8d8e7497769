/// A single node in the scanned tree.
///
/// Unlike an arena, each directory owns its children by value: the tree is
/// built bottom-up once, serialised once, and dropped. No parent links are
/// needed because nothing walks upward.
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A directory with its direct entries, or a leaf with its own size.
///
/// Serialises untagged, so the JSON shape is decided by which fields are
/// present: `{"name", "children"}` for directories and `{"name", "value"}`
/// for everything else. Field order follows declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A directory. Children keep the order `read_dir` yielded them in.
    Directory {
        name: CompactString,
        children: Vec<Node>,
    },
    /// Any non-directory entry: regular file, symlink, device, socket.
    /// `value` is the entry's own metadata length (never the link target's).
    File { name: CompactString, value: u64 },
}

impl Node {
    /// Create a directory node from its already-built children.
    pub fn directory(name: impl Into<CompactString>, children: Vec<Node>) -> Self {
        Self::Directory {
            name: name.into(),
            children,
        }
    }

    /// Create a leaf node.
    pub fn file(name: impl Into<CompactString>, value: u64) -> Self {
        Self::File {
            name: name.into(),
            value,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::File { name, .. } => name.as_str(),
        }
    }

    /// Replace the node's name. Only the scan root is ever renamed.
    pub fn set_name(&mut self, new_name: impl Into<CompactString>) {
        match self {
            Self::Directory { name, .. } | Self::File { name, .. } => *name = new_name.into(),
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Direct children. Empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Directory { children, .. } => children,
            Self::File { .. } => &[],
        }
    }

    /// Leaf size in bytes. `None` for directories, which carry no aggregate.
    pub fn value(&self) -> Option<u64> {
        match self {
            Self::File { value, .. } => Some(*value),
            Self::Directory { .. } => None,
        }
    }

    /// Number of nested `children` levels below and including this node.
    ///
    /// A leaf has depth 0; a directory is one deeper than its deepest child,
    /// so an empty directory has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::File { .. } => 0,
            Self::Directory { children, .. } => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let leaf = Node::file("a.txt", 5);
        assert_eq!(leaf.name(), "a.txt");
        assert_eq!(leaf.value(), Some(5));
        assert!(!leaf.is_dir());
        assert!(leaf.children().is_empty());

        let dir = Node::directory("sub", vec![leaf.clone()]);
        assert!(dir.is_dir());
        assert_eq!(dir.value(), None);
        assert_eq!(dir.children(), &[leaf]);
        assert_eq!(dir.child("a.txt").and_then(Node::value), Some(5));
        assert!(dir.child("missing").is_none());
    }

    #[test]
    fn test_set_name_on_both_variants() {
        let mut dir = Node::directory("data", Vec::new());
        dir.set_name("./data/");
        assert_eq!(dir.name(), "./data/");

        let mut leaf = Node::file("x", 1);
        leaf.set_name("/tmp/x");
        assert_eq!(leaf.name(), "/tmp/x");
    }

    #[test]
    fn test_depth() {
        assert_eq!(Node::file("f", 0).depth(), 0);
        assert_eq!(Node::directory("empty", Vec::new()).depth(), 1);

        // root -> a -> b -> f
        let tree = Node::directory(
            "root",
            vec![
                Node::file("top", 1),
                Node::directory(
                    "a",
                    vec![Node::directory("b", vec![Node::file("f", 2)])],
                ),
            ],
        );
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_serialised_shape() {
        let tree = Node::directory("root/", vec![Node::file("a.txt", 5)]);
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(
            json,
            r#"{"name":"root/","children":[{"name":"a.txt","value":5}]}"#
        );
    }

    #[test]
    fn test_deserialise_document() {
        let json = r#"{"name":"r","children":[{"name":"s","children":[]},{"name":"f","value":7}]}"#;
        let tree: Node = serde_json::from_str(json).unwrap();
        assert_eq!(
            tree,
            Node::directory(
                "r",
                vec![Node::directory("s", Vec::new()), Node::file("f", 7)]
            )
        );
    }
}
