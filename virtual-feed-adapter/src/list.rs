use alloc::vec::Vec;
use core::future::Future;

use virtual_feed::{DataSource, Edge, FeedOptions, FeedResult, Host, Outcome};

use crate::{FeedController, LazyList, SimpleList};

/// The capability every list variant offers its host.
///
/// A host mounts the list once with [`FeedList::render`], forwards sentinel visibility
/// reports to [`FeedList::on_visibility`], and calls [`FeedList::teardown`] when the list goes
/// away. Which variant sits behind it is decided at construction time (see [`ListKind`]).
pub trait FeedList {
    type Error;

    /// Mounts the list into its host.
    fn render(&mut self) -> impl Future<Output = FeedResult<Vec<Outcome>, Self::Error>>;

    /// Handles a sentinel visibility report and returns what the list did about it.
    fn on_visibility(
        &mut self,
        edge: Edge,
        ratio: f32,
    ) -> impl Future<Output = FeedResult<Vec<Outcome>, Self::Error>>;

    fn teardown(&mut self);

    /// Number of item nodes currently attached to the host.
    fn rendered_len(&self) -> usize;
}

/// Selects a list variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListKind {
    /// Render the first `limit` items once.
    Simple { limit: usize },
    /// Append a page whenever the bottom sentinel shows up; never recycle.
    Lazy,
    /// Window over the dataset with a bounded, recycled slot pool.
    Virtual,
}

/// A list whose variant was chosen at runtime.
pub enum AnyList<T, H: Host, S> {
    Simple(SimpleList<T, H, S>),
    Lazy(LazyList<T, H, S>),
    Virtual(FeedController<T, H, S>),
}

impl<T, H: Host, S> AnyList<T, H, S> {
    pub fn new(kind: ListKind, options: FeedOptions<T, H::Node>, host: H, source: S) -> Self {
        match kind {
            ListKind::Simple { limit } => {
                Self::Simple(SimpleList::new(options, host, source).with_limit(limit))
            }
            ListKind::Lazy => Self::Lazy(LazyList::new(options, host, source)),
            ListKind::Virtual => Self::Virtual(FeedController::new(options, host, source)),
        }
    }

    pub fn kind(&self) -> ListKind {
        match self {
            Self::Simple(list) => ListKind::Simple {
                limit: list.limit(),
            },
            Self::Lazy(_) => ListKind::Lazy,
            Self::Virtual(_) => ListKind::Virtual,
        }
    }

    pub fn host(&self) -> &H {
        match self {
            Self::Simple(list) => list.host(),
            Self::Lazy(list) => list.host(),
            Self::Virtual(controller) => controller.feed().host(),
        }
    }
}

impl<T, H: Host, S: DataSource<T>> FeedList for AnyList<T, H, S> {
    type Error = S::Error;

    async fn render(&mut self) -> FeedResult<Vec<Outcome>, S::Error> {
        match self {
            Self::Simple(list) => list.render().await,
            Self::Lazy(list) => list.render().await,
            Self::Virtual(controller) => controller.render().await,
        }
    }

    async fn on_visibility(&mut self, edge: Edge, ratio: f32) -> FeedResult<Vec<Outcome>, S::Error> {
        match self {
            Self::Simple(list) => list.on_visibility(edge, ratio).await,
            Self::Lazy(list) => list.on_visibility(edge, ratio).await,
            Self::Virtual(controller) => controller.on_visibility(edge, ratio).await,
        }
    }

    fn teardown(&mut self) {
        match self {
            Self::Simple(list) => list.teardown(),
            Self::Lazy(list) => list.teardown(),
            Self::Virtual(controller) => controller.teardown(),
        }
    }

    fn rendered_len(&self) -> usize {
        match self {
            Self::Simple(list) => list.rendered_len(),
            Self::Lazy(list) => list.rendered_len(),
            Self::Virtual(controller) => controller.rendered_len(),
        }
    }
}

impl<T, H: Host, S> core::fmt::Debug for AnyList<T, H, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Simple(list) => f.debug_tuple("Simple").field(list).finish(),
            Self::Lazy(list) => f.debug_tuple("Lazy").field(list).finish(),
            Self::Virtual(controller) => f.debug_tuple("Virtual").field(controller).finish(),
        }
    }
}
