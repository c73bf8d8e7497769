/// Depth-first recursive walker.
///
/// Single-threaded and fully blocking: each `lstat` and each `read_dir`
/// returns before the walk moves on. Children are built completely before
/// their parent node is assembled (post-order), and ownership of each child
/// moves into the parent's `Vec` exactly once.
///
/// The first failure of any kind aborts the walk. There is no skip-and-log
/// path: a tree with holes in it would misreport usage without saying so.
use crate::error::{Error, Result};
use crate::model::Node;
use crate::scanner::{LinkPolicy, ScanOptions};
use compact_str::CompactString;
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use tracing::{debug, trace};

/// Build the tree rooted at `path`.
///
/// Directories become [`Node::Directory`] with one child per entry in the
/// order `read_dir` yields them (no sorting). Everything else becomes a
/// [`Node::File`] whose `value` is the entry's own `lstat` length, so a
/// symlink reports the size of the link, not of its target.
///
/// `path` is not validated up front; a missing root surfaces as
/// [`Error::NotFound`] from the first metadata query.
pub fn explore(path: &Path, options: &ScanOptions) -> Result<Node> {
    let meta = fs::symlink_metadata(path).map_err(|e| Error::from_io(path, e))?;
    let name = base_name(path);

    if !should_descend(path, &meta, options.link_policy)? {
        trace!(path = %path.display(), size = meta.len(), "leaf");
        return Ok(Node::file(name, meta.len()));
    }

    let entries = fs::read_dir(path).map_err(|e| Error::from_io(path, e))?;
    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::from_io(path, e))?;
        children.push(explore(&entry.path(), options)?);
    }

    debug!(
        path = %path.display(),
        entries = children.len(),
        "directory read"
    );
    Ok(Node::directory(name, children))
}

/// Decide whether `path` is recursed into.
///
/// Real directories always are. A symlink is only followed under
/// [`LinkPolicy::Follow`], and only when its target resolves to a directory.
/// A link whose target cannot be resolved (dangling, routed through a file,
/// or past the OS symlink limit) stays a leaf under either policy.
fn should_descend(path: &Path, meta: &Metadata, policy: LinkPolicy) -> Result<bool> {
    let file_type = meta.file_type();
    if file_type.is_dir() {
        return Ok(true);
    }
    if !file_type.is_symlink() || policy == LinkPolicy::Leaf {
        return Ok(false);
    }

    match fs::metadata(path) {
        Ok(target) => Ok(target.is_dir()),
        Err(e) if is_unresolvable(&e) => Ok(false),
        Err(e) => Err(Error::from_io(path, e)),
    }
}

/// Errors that mean "the link does not lead to a directory" rather than
/// "the walk cannot continue".
fn is_unresolvable(e: &io::Error) -> bool {
    if e.kind() == io::ErrorKind::NotFound {
        return true;
    }
    #[cfg(unix)]
    {
        matches!(
            e.raw_os_error(),
            Some(libc::ENOTDIR) | Some(libc::ELOOP) | Some(libc::EBADF)
        )
    }
    #[cfg(not(unix))]
    {
        false
    }
}

/// Last path component, falling back to the whole path for roots such as
/// `/` or `.` that have none. The scan root is renamed afterwards anyway.
fn base_name(path: &Path) -> CompactString {
    match path.file_name() {
        Some(name) => CompactString::new(name.to_string_lossy()),
        None => CompactString::new(path.to_string_lossy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("a/b/c.txt")), "c.txt");
        assert_eq!(base_name(Path::new("data/")), "data");
        assert_eq!(base_name(Path::new("/")), "/");
        assert_eq!(base_name(&PathBuf::from("..")), "..");
    }

    #[test]
    fn test_is_unresolvable() {
        assert!(is_unresolvable(&io::Error::from(io::ErrorKind::NotFound)));
        assert!(!is_unresolvable(&io::Error::from(
            io::ErrorKind::PermissionDenied
        )));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_unresolvable_os_codes() {
        for code in [libc::ENOTDIR, libc::ELOOP, libc::EBADF] {
            assert!(is_unresolvable(&io::Error::from_raw_os_error(code)));
        }
        assert!(!is_unresolvable(&io::Error::from_raw_os_error(libc::EACCES)));
        assert!(!is_unresolvable(&io::Error::from_raw_os_error(libc::EIO)));
    }

    #[test]
    fn test_explore_single_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("five.txt");
        fs::write(&path, b"12345").unwrap();

        let node = explore(&path, &ScanOptions::default()).unwrap();
        assert_eq!(node, Node::file("five.txt", 5));
    }

    #[test]
    fn test_explore_missing_is_not_found() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("nope");

        let err = explore(&missing, &ScanOptions::default()).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
        assert_eq!(err.path(), Some(missing.as_path()));
    }
}
