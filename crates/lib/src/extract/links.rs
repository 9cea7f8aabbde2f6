//! Link/source pair collection.
//!
//! Several parts of the document (image galleries, reservation providers,
//! ordering platforms) share one shape: a list of items, each carrying a link
//! and a source/label at item-relative offsets that differ per part. This
//! collector is parameterized over those two offsets and reused everywhere.

use super::path;
use crate::types::LinkSource;
use serde_json::Value;

/// Collects one pair per item, keeping only pairs where both the link and the
/// source resolved non-empty. Items that are not sequences contribute
/// nothing.
pub(super) fn link_sources(
    items: &[Value],
    link_path: &[usize],
    source_path: &[usize],
) -> Vec<LinkSource> {
    items
        .iter()
        .filter_map(|item| {
            let item = item.as_array()?;
            let link = path::field::<String>(item, link_path);
            let source = path::field::<String>(item, source_path);

            (!link.is_empty() && !source.is_empty()).then_some(LinkSource { link, source })
        })
        .collect()
}
