//! # Path-Addressed Accessors
//!
//! The single safety boundary between "the schema might have shifted" and
//! "the rest of the engine can assume clean data". A path is an ordered list
//! of integer indices into the nested-array document; every accessor here is
//! total: for any path and any malformed document it terminates with a value
//! (the target type's zero value on mismatch) and never panics.
//!
//! Centralizing all bounds/null/type checks here lets the orchestrator issue
//! its ~60 lookups as flat declarations, one line per field.

use serde_json::Value;

/// The zero value for a borrowed sequence lookup.
pub const EMPTY: &[Value] = &[];

/// Conversion of one document node into a concrete field type.
///
/// Implementations return `None` on any runtime type mismatch; [`field`]
/// turns that into the type's zero value.
pub trait FromNode: Sized {
    fn from_node(node: &Value) -> Option<Self>;
}

impl FromNode for String {
    fn from_node(node: &Value) -> Option<Self> {
        node.as_str().map(str::to_string)
    }
}

impl FromNode for f64 {
    fn from_node(node: &Value) -> Option<Self> {
        node.as_f64()
    }
}

impl FromNode for i64 {
    /// The source renders counts sometimes as integers and sometimes as
    /// floats; accept both, truncating.
    fn from_node(node: &Value) -> Option<Self> {
        node.as_i64().or_else(|| node.as_f64().map(|f| f as i64))
    }
}

impl FromNode for bool {
    fn from_node(node: &Value) -> Option<Self> {
        node.as_bool()
    }
}

impl FromNode for Vec<String> {
    /// Non-string elements become empty strings rather than being dropped,
    /// so positions within the list are preserved.
    fn from_node(node: &Value) -> Option<Self> {
        node.as_array().map(|items| {
            items
                .iter()
                .map(|item| item.as_str().unwrap_or_default().to_string())
                .collect()
        })
    }
}

/// Walks `seq` along `path` and returns the addressed node, if the document
/// actually has that shape.
///
/// Every intermediate step requires the element at the index to exist, be
/// non-null, and itself be an array; the final index is a bounds-checked
/// lookup. Any failed step yields `None` — an expected, routine outcome given
/// an undocumented schema, not an error.
pub fn element<'a>(mut seq: &'a [Value], path: &[usize]) -> Option<&'a Value> {
    let (&last, intermediate) = path.split_last()?;

    for &idx in intermediate {
        seq = seq.get(idx)?.as_array()?.as_slice();
    }

    seq.get(last)
}

/// Reads the node at `path` as `T`, or `T`'s zero value if any step of the
/// walk fails or the node's runtime type does not match.
pub fn field<T: FromNode + Default>(seq: &[Value], path: &[usize]) -> T {
    element(seq, path)
        .and_then(T::from_node)
        .unwrap_or_default()
}

/// Borrows the sequence at `path`, or [`EMPTY`] on any mismatch. Preferred
/// over `field::<Vec<_>>` when the caller only needs to iterate.
pub fn sequence<'a>(seq: &'a [Value], path: &[usize]) -> &'a [Value] {
    element(seq, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(EMPTY)
}

/// Borrows `node` as a sequence, or [`EMPTY`] when it is anything else.
/// Collectors use this on items of an already-located list.
pub fn as_sequence(node: &Value) -> &[Value] {
    node.as_array().map(Vec::as_slice).unwrap_or(EMPTY)
}
