/// JSON document writer.
///
/// Output layout: one space of indentation per nesting level, `"key": value`
/// separators, `[]` for empty child lists, `name` first in every object, and
/// a single trailing newline after the closing brace.
use crate::error::{Error, Result};
use crate::model::Node;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// Indentation unit: one space per level.
pub const INDENT: &[u8] = b" ";

/// Serialise `tree` into `writer`, followed by a newline.
///
/// The writer receives bytes as they are produced. Callers that must not
/// emit partial output on failure should render with [`to_json_string`]
/// first.
pub fn write_json<W: Write>(tree: &Node, mut writer: W) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    tree.serialize(&mut ser)?;
    writer.write_all(b"\n").map_err(Error::Write)?;
    Ok(())
}

/// Render `tree` as a complete document in memory.
pub fn to_json_string(tree: &Node) -> Result<String> {
    let mut buf = Vec::with_capacity(4096);
    write_json(tree, &mut buf)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
