use alloc::vec;
use alloc::vec::Vec;

use virtual_feed::{
    DataSource, Direction, Edge, FeedError, FeedOptions, FeedResult, Host, Outcome, Skip,
};

use crate::FeedList;
use crate::stack::Stack;

/// Appends a page every time the bottom sentinel becomes visible.
///
/// Nodes are never recycled, so memory grows with how far the user scrolled. Once a page
/// comes back short the list stops asking for more.
pub struct LazyList<T, H: Host, S> {
    options: FeedOptions<T, H::Node>,
    host: H,
    source: S,
    stack: Stack<H::Node>,
    sentinel: Option<H::Sentinel>,
    end: usize,
    exhausted: bool,
    torn_down: bool,
}

impl<T, H: Host, S> LazyList<T, H, S> {
    pub fn new(options: FeedOptions<T, H::Node>, host: H, source: S) -> Self {
        Self {
            options,
            host,
            source,
            stack: Stack::new(),
            sentinel: None,
            end: 0,
            exhausted: false,
            torn_down: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Logical index one past the last loaded item.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<T, H: Host, S: DataSource<T>> LazyList<T, H, S> {
    async fn load_next(&mut self) -> FeedResult<Outcome, S::Error> {
        if self.exhausted {
            return Ok(Outcome::Skipped(Skip::Exhausted));
        }
        let offset = self.end;
        let count = self.options.page_size;
        let data = self
            .source
            .load(offset, count)
            .await
            .map_err(|source| FeedError::Source {
                offset,
                count,
                source,
            })?;

        if data.len() < count {
            vdebug!(end = offset + data.len(), "LazyList: data source exhausted");
            self.exhausted = true;
        }
        if data.is_empty() {
            return Ok(Outcome::Exhausted(Direction::Down));
        }
        let appended = self.stack.append(&mut self.host, &self.options, &data);
        self.end = self.end.saturating_add(appended);
        if let Some(sentinel) = &self.sentinel {
            self.host.move_sentinel(sentinel, self.stack.next_y());
        }
        Ok(Outcome::Grew { appended })
    }
}

impl<T, H: Host, S: DataSource<T>> FeedList for LazyList<T, H, S> {
    type Error = S::Error;

    /// Mounts the bottom sentinel. Content arrives once the host reports it visible.
    async fn render(&mut self) -> FeedResult<Vec<Outcome>, S::Error> {
        if self.torn_down {
            return Ok(vec![Outcome::Skipped(Skip::TornDown)]);
        }
        if self.sentinel.is_none() {
            let sentinel = self
                .host
                .observe(Edge::Bottom, &self.options.bottom_sentinel);
            self.host.move_sentinel(&sentinel, self.stack.next_y());
            self.sentinel = Some(sentinel);
        }
        Ok(Vec::new())
    }

    async fn on_visibility(&mut self, edge: Edge, ratio: f32) -> FeedResult<Vec<Outcome>, S::Error> {
        if self.torn_down || edge != Edge::Bottom || ratio <= self.options.trigger_ratio {
            return Ok(Vec::new());
        }
        Ok(vec![self.load_next().await?])
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.stack.clear(&mut self.host);
        if let Some(sentinel) = self.sentinel.take() {
            self.host.unobserve(sentinel);
        }
    }

    fn rendered_len(&self) -> usize {
        self.stack.len()
    }
}

impl<T, H: Host, S> core::fmt::Debug for LazyList<T, H, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LazyList")
            .field("end", &self.end)
            .field("rendered", &self.stack.len())
            .field("exhausted", &self.exhausted)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}
