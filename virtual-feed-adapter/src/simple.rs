use alloc::vec;
use alloc::vec::Vec;

use virtual_feed::{DataSource, Direction, Edge, FeedError, FeedOptions, FeedResult, Host, Outcome, Skip};

use crate::FeedList;
use crate::stack::Stack;

/// Renders one batch of items and nothing else.
///
/// There are no sentinels; visibility reports are ignored.
pub struct SimpleList<T, H: Host, S> {
    options: FeedOptions<T, H::Node>,
    host: H,
    source: S,
    limit: usize,
    stack: Stack<H::Node>,
    loaded: bool,
    torn_down: bool,
}

impl<T, H: Host, S> SimpleList<T, H, S> {
    /// Creates a list that renders the first `options.page_size` items.
    pub fn new(options: FeedOptions<T, H::Node>, host: H, source: S) -> Self {
        Self {
            limit: options.page_size,
            options,
            host,
            source,
            stack: Stack::new(),
            loaded: false,
            torn_down: false,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<T, H: Host, S: DataSource<T>> FeedList for SimpleList<T, H, S> {
    type Error = S::Error;

    async fn render(&mut self) -> FeedResult<Vec<Outcome>, S::Error> {
        if self.torn_down {
            return Ok(vec![Outcome::Skipped(Skip::TornDown)]);
        }
        if self.loaded {
            return Ok(vec![Outcome::Skipped(Skip::Coalesced)]);
        }
        let data = self
            .source
            .load(0, self.limit)
            .await
            .map_err(|source| {
                vwarn!(limit = self.limit, "SimpleList: data source failed");
                FeedError::Source {
                    offset: 0,
                    count: self.limit,
                    source,
                }
            })?;
        self.loaded = true;
        if data.is_empty() {
            return Ok(vec![Outcome::Exhausted(Direction::Down)]);
        }
        let appended = self.stack.append(&mut self.host, &self.options, &data);
        vdebug!(appended, "SimpleList::render");
        Ok(vec![Outcome::Grew { appended }])
    }

    async fn on_visibility(&mut self, _edge: Edge, _ratio: f32) -> FeedResult<Vec<Outcome>, S::Error> {
        Ok(Vec::new())
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.stack.clear(&mut self.host);
    }

    fn rendered_len(&self) -> usize {
        self.stack.len()
    }
}

impl<T, H: Host, S> core::fmt::Debug for SimpleList<T, H, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimpleList")
            .field("limit", &self.limit)
            .field("rendered", &self.stack.len())
            .field("loaded", &self.loaded)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}
