use alloc::vec::Vec;
use core::convert::Infallible;
use core::future::{Future, ready};

/// Serves chunks of an ordered dataset by logical offset.
///
/// Implementations must accept any `offset`, including ones at or past the end of the data,
/// and answer with at most `count` items. A short (or empty) answer means the dataset ends
/// there; it is not an error.
pub trait DataSource<T> {
    type Error;

    fn load(&self, offset: usize, count: usize)
    -> impl Future<Output = Result<Vec<T>, Self::Error>>;
}

/// Any `Fn(offset, count) -> impl Future<Output = Result<Vec<T>, E>>` is a data source.
impl<T, E, F, Fut> DataSource<T> for F
where
    F: Fn(usize, usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    type Error = E;

    fn load(
        &self,
        offset: usize,
        count: usize,
    ) -> impl Future<Output = Result<Vec<T>, Self::Error>> {
        self(offset, count)
    }
}

/// An in-memory data source over an owned `Vec`.
#[derive(Clone, Debug, Default)]
pub struct VecSource<T> {
    items: Vec<T>,
}

impl<T> VecSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> DataSource<T> for VecSource<T> {
    type Error = Infallible;

    fn load(
        &self,
        offset: usize,
        count: usize,
    ) -> impl Future<Output = Result<Vec<T>, Self::Error>> {
        let start = offset.min(self.items.len());
        let end = offset.saturating_add(count).min(self.items.len());
        ready(Ok(self.items[start..end].to_vec()))
    }
}

/// A data source that generates items on demand from their index.
///
/// `len` bounds the dataset; `None` makes it unbounded.
pub struct FnSource<F> {
    generate: F,
    len: Option<usize>,
}

impl<F> FnSource<F> {
    pub fn new(generate: F) -> Self {
        Self {
            generate,
            len: None,
        }
    }

    pub fn with_len(mut self, len: usize) -> Self {
        self.len = Some(len);
        self
    }
}

impl<F> core::fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnSource")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl<T, F: Fn(usize) -> T> DataSource<T> for FnSource<F> {
    type Error = Infallible;

    fn load(
        &self,
        offset: usize,
        count: usize,
    ) -> impl Future<Output = Result<Vec<T>, Self::Error>> {
        let end = offset.saturating_add(count);
        let end = match self.len {
            Some(len) => end.min(len),
            None => end,
        };
        ready(Ok((offset..end).map(&self.generate).collect()))
    }
}
