/// Analysis modules: post-scan figures for logging.

pub mod summary;

pub use summary::{summarize, TreeSummary};
