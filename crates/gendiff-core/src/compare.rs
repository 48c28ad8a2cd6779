//! Façade — Parse → Build → Diff → Render in one call.

use crate::diff::diff;
use crate::error::{ParseCause, Result};
use crate::format::{render, Format};
use crate::parser::{parse_file, parse_str, SourceFormat};
use crate::tree::build_tree;
use crate::types::Mapping;
use std::path::Path;
use tracing::{debug, info};

/// Compare two already-parsed documents and render the result.
pub fn compare_documents(old: &Mapping, new: &Mapping, format: Format) -> String {
    let nodes = diff(&build_tree(old), &build_tree(new));
    debug!(entries = nodes.len(), %format, "computed diff");
    render(&nodes, format)
}

/// Compare two in-memory documents of the same syntax.
pub fn compare_str(
    old: &str,
    new: &str,
    source: SourceFormat,
    format: Format,
) -> std::result::Result<String, ParseCause> {
    let old = parse_str(old, source)?;
    let new = parse_str(new, source)?;
    Ok(compare_documents(&old, &new, format))
}

/// Compare two files. The first file that fails to parse aborts the
/// comparison; no partial output is produced.
pub fn gen_diff(old: impl AsRef<Path>, new: impl AsRef<Path>, format: Format) -> Result<String> {
    let (old, new) = (old.as_ref(), new.as_ref());
    info!(old = %old.display(), new = %new.display(), %format, "comparing files");
    let old = parse_file(old)?;
    let new = parse_file(new)?;
    Ok(compare_documents(&old, &new, format))
}
