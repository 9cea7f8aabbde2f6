use thiserror::Error;

/// Custom error types for whole-document extraction failures.
///
/// Per-field problems never surface here: they are absorbed as zero values by
/// the path accessor. These variants cover the two situations where no usable
/// record can be produced at all.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The raw input could not be decoded, or it lacks the minimum top-level
    /// structure needed to even locate the working data array. The caller
    /// should discard or re-fetch the document.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
    /// A structural fault deeper than the path accessor's guards escaped
    /// during orchestration and was caught at the extraction boundary. This
    /// usually means the offset map needs updating for a new document
    /// variant, so treat it as a data-quality bug report rather than a
    /// transient failure.
    #[error("unexpected fault during extraction: {0}")]
    UnexpectedFault(String),
}

/// Produced by [`crate::Listing::validate`], never during extraction.
///
/// A structurally successful parse can still yield a listing that is unusable
/// downstream; callers must validate before persisting or forwarding.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listing name is empty")]
    MissingName,
    #[error("listing category is empty")]
    MissingCategory,
}
