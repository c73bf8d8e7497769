/// Data model for the dumap tree.
///
/// Re-exports the owned recursive node type and formatting helpers.
pub mod node;
pub mod size;

pub use node::Node;
pub use size::{format_count, ByteSize};
