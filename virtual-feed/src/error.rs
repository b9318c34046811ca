//! Errors surfaced by feed transitions.

use thiserror::Error;

/// The errors a transition can report to its caller.
///
/// A failed transition never mutates the window, the pool, or the spacer; the sentinels keep
/// observing, so the next visibility event retries naturally.
#[derive(Debug, Error)]
pub enum FeedError<E> {
    /// The data source rejected the fetch.
    #[error("data source failed to load offset {offset} (count {count})")]
    Source {
        offset: usize,
        count: usize,
        #[source]
        source: E,
    },
}

impl<E> FeedError<E> {
    /// Unwraps the underlying data source error.
    pub fn into_source(self) -> E {
        match self {
            Self::Source { source, .. } => source,
        }
    }
}

/// A type alias for results of feed transitions.
pub type FeedResult<T, E> = core::result::Result<T, FeedError<E>>;
