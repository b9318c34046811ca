use alloc::vec::Vec;

use virtual_feed::{DataSource, Direction, Edge, FeedOptions, FeedResult, Host, Outcome, VirtualFeed};

use crate::FeedList;

/// A framework-neutral driver that owns a [`VirtualFeed`] together with its data source.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `render` once the scroll container exists
/// - `on_visibility` whenever a sentinel's intersection ratio changes
/// - `teardown` when the list is unmounted
///
/// Each call runs the requested transition and then any direction that was queued while it was
/// in flight, so the feed is idle again when the returned future resolves.
pub struct FeedController<T, H: Host, S> {
    feed: VirtualFeed<T, H>,
    source: S,
}

impl<T, H: Host, S> FeedController<T, H, S> {
    pub fn new(options: FeedOptions<T, H::Node>, host: H, source: S) -> Self {
        Self {
            feed: VirtualFeed::new(options, host),
            source,
        }
    }

    pub fn from_feed(feed: VirtualFeed<T, H>, source: S) -> Self {
        Self { feed, source }
    }

    pub fn feed(&self) -> &VirtualFeed<T, H> {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut VirtualFeed<T, H> {
        &mut self.feed
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_parts(self) -> (VirtualFeed<T, H>, S) {
        (self.feed, self.source)
    }
}

impl<T, H: Host, S: DataSource<T>> FeedController<T, H, S> {
    /// Runs a transition in `direction`, then drains the queue.
    ///
    /// Stops at the first error; directions still queued stay queued.
    pub async fn run(&mut self, direction: Direction) -> FeedResult<Vec<Outcome>, S::Error> {
        let mut outcomes = Vec::new();
        outcomes.push(self.feed.handle(direction, &self.source).await?);
        self.drain_into(&mut outcomes).await?;
        Ok(outcomes)
    }

    /// Runs every queued direction in FIFO order.
    pub async fn drain_pending(&mut self) -> FeedResult<Vec<Outcome>, S::Error> {
        let mut outcomes = Vec::new();
        self.drain_into(&mut outcomes).await?;
        Ok(outcomes)
    }

    async fn drain_into(&mut self, outcomes: &mut Vec<Outcome>) -> FeedResult<(), S::Error> {
        while let Some(direction) = self.feed.next_pending() {
            vtrace!(?direction, "FeedController: running queued transition");
            outcomes.push(self.feed.handle(direction, &self.source).await?);
        }
        Ok(())
    }
}

impl<T, H: Host, S: DataSource<T>> FeedList for FeedController<T, H, S> {
    type Error = S::Error;

    /// Mounts both sentinels. The first page arrives once the bottom one is reported visible.
    async fn render(&mut self) -> FeedResult<Vec<Outcome>, S::Error> {
        self.feed.init();
        Ok(Vec::new())
    }

    async fn on_visibility(&mut self, edge: Edge, ratio: f32) -> FeedResult<Vec<Outcome>, S::Error> {
        match self.feed.on_visibility(edge, ratio) {
            Some(direction) => self.run(direction).await,
            None => Ok(Vec::new()),
        }
    }

    fn teardown(&mut self) {
        self.feed.teardown();
    }

    fn rendered_len(&self) -> usize {
        self.feed.pool().len()
    }
}

impl<T, H: Host, S> core::fmt::Debug for FeedController<T, H, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FeedController")
            .field("feed", &self.feed)
            .finish_non_exhaustive()
    }
}
