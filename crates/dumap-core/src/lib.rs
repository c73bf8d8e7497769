/// dumap core: scanning, export, and data model.
///
/// This crate contains all business logic with zero CLI dependencies.
/// The `dumap` binary is a thin shell over [`scanner::scan`] and
/// [`export::write_json`].
///
/// # Modules
///
/// - [`model`]: Owned recursive `Node` tree and size formatting helpers.
/// - [`scanner`]: Synchronous depth-first filesystem walk.
/// - [`export`]: JSON document writer (1-space indentation).
/// - [`analysis`]: Post-scan summary used for logging.
/// - [`error`]: Crate error type.
pub mod analysis;
pub mod error;
pub mod export;
pub mod model;
pub mod scanner;

pub use error::{Error, Result};
pub use model::Node;
pub use scanner::{explore, scan, LinkPolicy, ScanOptions};
