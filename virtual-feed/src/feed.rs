use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::error::{FeedError, FeedResult};
use crate::pool::Rebind;
use crate::{
    DataSource, Direction, Edge, FeedOptions, FeedState, Host, Phase, Slot, SlotPool, Spacer,
    SpacerState, Window,
};

/// A fetch the feed is waiting on.
///
/// Obtained from [`VirtualFeed::begin`] and handed back, together with the data source's
/// answer, to [`VirtualFeed::complete`]. A request that is no longer the one in flight (the
/// feed was torn down, or the request was already completed) is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub direction: Direction,
    pub offset: usize,
    pub count: usize,
    generation: u64,
}

/// Why a transition did not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    /// An upward transition with the window already at index 0.
    AtStart,
    /// The data source has no more items in this direction.
    Exhausted,
    /// The same direction is already in flight or queued.
    Coalesced,
    TornDown,
}

/// The result of [`VirtualFeed::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Begin {
    /// Load `request.count` items at `request.offset`, then call [`VirtualFeed::complete`].
    Fetch(FetchRequest),
    /// Another transition is in flight; this direction runs once it completes
    /// (see [`VirtualFeed::next_pending`]).
    Queued(Direction),
    Skipped(Skip),
}

/// What a transition did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// New slots were created below the existing ones.
    Grew { appended: usize },
    /// `shifted` slots were rebound and moved to the other end of the window.
    Recycled { direction: Direction, shifted: usize },
    /// The data source came back short; nothing moved in this direction.
    Exhausted(Direction),
    Queued(Direction),
    Skipped(Skip),
    /// The completion belonged to a request that is no longer in flight. Nothing changed.
    Stale,
}

/// A windowed list engine over an unbounded, lazily fetched dataset.
///
/// The feed renders at most `2 * page_size` slots. While the pool is filling up, bottom
/// transitions append new slots. Once full, every transition rebinds `page_size` slots from
/// one end of the window to the other and moves the window by the same amount, keeping the
/// host's padding and both edge sentinels in step.
///
/// Transitions are serialized: only one fetch is in flight at a time, and directions
/// requested meanwhile are queued.
pub struct VirtualFeed<T, H: Host> {
    options: FeedOptions<T, H::Node>,
    host: H,
    pool: SlotPool<H::Node>,
    window: Window,
    phase: Phase,
    spacer: Spacer,
    top_sentinel: Option<H::Sentinel>,
    bottom_sentinel: Option<H::Sentinel>,

    in_flight: Option<FetchRequest>,
    pending: VecDeque<Direction>,
    next_generation: u64,

    // Dataset length as observed from a short downward page.
    data_end: Option<usize>,
    top_frozen: bool,
    torn_down: bool,
}

impl<T, H: Host> VirtualFeed<T, H> {
    pub fn new(options: FeedOptions<T, H::Node>, host: H) -> Self {
        vdebug!(
            page_size = options.page_size,
            item_margin = options.item_margin,
            "VirtualFeed::new"
        );
        Self {
            pool: SlotPool::new(options.capacity()),
            options,
            host,
            window: Window::default(),
            phase: Phase::Growing,
            spacer: Spacer::new(),
            top_sentinel: None,
            bottom_sentinel: None,
            in_flight: None,
            pending: VecDeque::new(),
            next_generation: 0,
            data_end: None,
            top_frozen: false,
            torn_down: false,
        }
    }

    /// Creates and starts observing both edge sentinels.
    ///
    /// Transitions work before this is called; they just have no sentinels to move.
    pub fn init(&mut self) {
        if self.torn_down {
            return;
        }
        if self.top_sentinel.is_none() {
            self.top_sentinel = Some(self.host.observe(Edge::Top, &self.options.top_sentinel));
        }
        if self.bottom_sentinel.is_none() {
            self.bottom_sentinel = Some(
                self.host
                    .observe(Edge::Bottom, &self.options.bottom_sentinel),
            );
        }
        self.place_sentinels();
    }

    pub fn options(&self) -> &FeedOptions<T, H::Node> {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn pool(&self) -> &SlotPool<H::Node> {
        &self.pool
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn spacer(&self) -> SpacerState {
        self.spacer.state()
    }

    pub fn page_size(&self) -> usize {
        self.options.page_size
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<FetchRequest> {
        self.in_flight
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// The dataset length, once a short downward page revealed it.
    pub fn data_end(&self) -> Option<usize> {
        self.data_end
    }

    /// Returns a lightweight snapshot of the current state.
    pub fn state(&self) -> FeedState {
        FeedState {
            window: self.window,
            phase: self.phase,
            spacer: self.spacer.state(),
            pool_len: self.pool.len(),
            busy: self.is_busy(),
        }
    }

    /// Maps a sentinel visibility report to the transition it asks for.
    ///
    /// Only ratios strictly above `options.trigger_ratio` count.
    pub fn on_visibility(&self, edge: Edge, ratio: f32) -> Option<Direction> {
        if self.torn_down || ratio <= self.options.trigger_ratio {
            return None;
        }
        vtrace!(?edge, ratio, "VirtualFeed::on_visibility");
        Some(edge.direction())
    }

    /// Starts a transition.
    ///
    /// Nothing is mutated until the matching [`VirtualFeed::complete`] call.
    pub fn begin(&mut self, direction: Direction) -> Begin {
        if self.torn_down {
            return Begin::Skipped(Skip::TornDown);
        }
        if let Some(in_flight) = self.in_flight {
            if in_flight.direction == direction || self.pending.contains(&direction) {
                return Begin::Skipped(Skip::Coalesced);
            }
            vtrace!(?direction, "VirtualFeed::begin queued");
            self.pending.push_back(direction);
            return Begin::Queued(direction);
        }

        let page_size = self.options.page_size;
        let (offset, count) = match direction {
            Direction::Down => {
                let offset = self.window.end;
                let count = match self.data_end {
                    Some(end) if offset >= end => return Begin::Skipped(Skip::Exhausted),
                    Some(end) => page_size.min(end - offset),
                    None => page_size,
                };
                (offset, count)
            }
            Direction::Up => {
                if self.window.start == 0 {
                    return Begin::Skipped(Skip::AtStart);
                }
                if self.top_frozen {
                    return Begin::Skipped(Skip::Exhausted);
                }
                let count = page_size.min(self.window.start);
                (self.window.start - count, count)
            }
        };

        let request = FetchRequest {
            direction,
            offset,
            count,
            generation: self.next_generation,
        };
        self.next_generation = self.next_generation.wrapping_add(1);
        self.in_flight = Some(request);
        vtrace!(?direction, offset, count, "VirtualFeed::begin");
        Begin::Fetch(request)
    }

    /// Finishes a transition with the data source's answer.
    ///
    /// On error nothing changes and the error is handed back; the next visibility event can
    /// retry.
    pub fn complete<E>(
        &mut self,
        request: FetchRequest,
        result: Result<Vec<T>, E>,
    ) -> FeedResult<Outcome, E> {
        if self.torn_down || self.in_flight != Some(request) {
            vdebug!(
                direction = ?request.direction,
                offset = request.offset,
                "VirtualFeed::complete: stale request"
            );
            return Ok(Outcome::Stale);
        }
        self.in_flight = None;

        let mut data = match result {
            Ok(data) => data,
            Err(source) => {
                vwarn!(
                    direction = ?request.direction,
                    offset = request.offset,
                    count = request.count,
                    "VirtualFeed::complete: data source failed"
                );
                return Err(FeedError::Source {
                    offset: request.offset,
                    count: request.count,
                    source,
                });
            }
        };
        if data.len() > request.count {
            vwarn!(
                received = data.len(),
                requested = request.count,
                "VirtualFeed::complete: data source returned too many items"
            );
            data.truncate(request.count);
        }

        let outcome = match request.direction {
            Direction::Down => self.apply_down(request, data),
            Direction::Up => self.apply_up(request, data),
        };
        self.check_invariants();
        Ok(outcome)
    }

    /// Pops the next queued direction, if no transition is in flight.
    pub fn next_pending(&mut self) -> Option<Direction> {
        if self.in_flight.is_some() {
            return None;
        }
        self.pending.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Runs one transition end to end: begin, load, complete.
    pub async fn handle<S: DataSource<T>>(
        &mut self,
        direction: Direction,
        source: &S,
    ) -> FeedResult<Outcome, S::Error> {
        let request = match self.begin(direction) {
            Begin::Fetch(request) => request,
            Begin::Queued(direction) => return Ok(Outcome::Queued(direction)),
            Begin::Skipped(skip) => return Ok(Outcome::Skipped(skip)),
        };
        let result = source.load(request.offset, request.count).await;
        self.complete(request, result)
    }

    pub async fn handle_bottom_intersection<S: DataSource<T>>(
        &mut self,
        source: &S,
    ) -> FeedResult<Outcome, S::Error> {
        self.handle(Direction::Down, source).await
    }

    pub async fn handle_top_intersection<S: DataSource<T>>(
        &mut self,
        source: &S,
    ) -> FeedResult<Outcome, S::Error> {
        self.handle(Direction::Up, source).await
    }

    /// Removes every node and sentinel from the host.
    ///
    /// Afterwards every transition is skipped and any completion is stale.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        vdebug!(
            start = self.window.start,
            end = self.window.end,
            "VirtualFeed::teardown"
        );
        self.torn_down = true;
        self.in_flight = None;
        self.pending.clear();
        for node in self.pool.drain() {
            self.host.remove_node(node);
        }
        if let Some(sentinel) = self.top_sentinel.take() {
            self.host.unobserve(sentinel);
        }
        if let Some(sentinel) = self.bottom_sentinel.take() {
            self.host.unobserve(sentinel);
        }
    }

    fn apply_down(&mut self, request: FetchRequest, data: Vec<T>) -> Outcome {
        debug_assert_eq!(request.offset, self.window.end, "downward fetch off the window end");
        let received = data.len();
        if received < request.count {
            let end = request.offset.saturating_add(received);
            vdebug!(end, "VirtualFeed: data source exhausted");
            self.data_end = Some(end);
        }
        if received == 0 {
            return Outcome::Exhausted(Direction::Down);
        }

        match self.phase {
            Phase::Growing => {
                let appended = self.grow(&data);
                self.window.end = self.window.end.saturating_add(appended);
                if self.pool.is_full() {
                    vdebug!(capacity = self.pool.capacity(), "VirtualFeed: pool full");
                    self.phase = Phase::Full;
                }
                self.place_sentinels();
                Outcome::Grew { appended }
            }
            Phase::Full => {
                self.window.shift_down(received);
                self.recycle(Direction::Down, &data);
                Outcome::Recycled {
                    direction: Direction::Down,
                    shifted: received,
                }
            }
        }
    }

    fn apply_up(&mut self, request: FetchRequest, data: Vec<T>) -> Outcome {
        debug_assert_eq!(
            request.offset.saturating_add(request.count),
            self.window.start,
            "upward fetch off the window start"
        );
        let received = data.len();
        if received < request.count {
            // A short page above the window cannot be placed contiguously.
            vwarn!(
                received,
                requested = request.count,
                "VirtualFeed: short upward page, freezing upward transitions"
            );
            self.top_frozen = true;
            return Outcome::Exhausted(Direction::Up);
        }
        debug_assert_eq!(self.phase, Phase::Full, "upward transition while growing");

        self.window.shift_up(received);
        self.recycle(Direction::Up, &data);
        Outcome::Recycled {
            direction: Direction::Up,
            shifted: received,
        }
    }

    fn grow(&mut self, data: &[T]) -> usize {
        let margin = self.options.item_margin;
        let room = self.pool.capacity().saturating_sub(self.pool.len());
        debug_assert!(data.len() <= room, "growth page larger than the remaining pool");

        let mut appended = 0;
        for item in data.iter().take(room) {
            let markup = (self.options.render)(item);
            let node = self.host.create_node(&markup);
            self.host.append_node(&node);
            let height = self.host.measure(&node);
            let order_index = self.window.start.saturating_add(self.pool.len());
            let slot = self.pool.push(node, order_index, height, margin);
            self.host.set_translate_y(slot.node(), slot.translate_y());
            appended += 1;
        }
        vtrace!(appended, pool_len = self.pool.len(), "VirtualFeed::grow");
        appended
    }

    fn recycle(&mut self, direction: Direction, data: &[T]) {
        let count = data.len();
        let margin = self.options.item_margin;
        let mut binder = Binder {
            host: &mut self.host,
            options: &self.options,
            data,
        };
        let start = self.window.start;
        match direction {
            Direction::Down => self.pool.recycle_down(count, start, margin, &mut binder),
            Direction::Up => self.pool.recycle_up(count, start, margin, &mut binder),
        }

        let first_translate_y = self.pool.first().map_or(0, Slot::translate_y);
        let spacer = self.spacer.compensate(first_translate_y);
        self.host.set_padding(spacer);
        self.place_sentinels();
        vtrace!(
            ?direction,
            count,
            start = self.window.start,
            end = self.window.end,
            "VirtualFeed::recycle"
        );
    }

    fn place_sentinels(&mut self) {
        let (Some(first), Some(last)) = (self.pool.first(), self.pool.last()) else {
            return;
        };
        let (top, bottom) = (first.translate_y(), last.translate_y());
        if let Some(sentinel) = &self.top_sentinel {
            self.host.move_sentinel(sentinel, top);
        }
        if let Some(sentinel) = &self.bottom_sentinel {
            self.host.move_sentinel(sentinel, bottom);
        }
    }

    fn check_invariants(&self) {
        let expected = (!self.window.is_empty()).then_some((self.window.start, self.window.end));
        debug_assert_eq!(
            self.pool.len(),
            self.window.len(),
            "pool size must match the window"
        );
        debug_assert_eq!(
            self.pool.order_range(),
            expected,
            "pool order indexes must cover the window"
        );
        debug_assert!(
            self.phase == Phase::Growing || self.pool.is_full(),
            "a full feed must keep a full pool"
        );
    }
}

impl<T, H: Host> core::fmt::Debug for VirtualFeed<T, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualFeed")
            .field("options", &self.options)
            .field("window", &self.window)
            .field("phase", &self.phase)
            .field("spacer", &self.spacer)
            .field("pool_len", &self.pool.len())
            .field("in_flight", &self.in_flight)
            .field("pending", &self.pending)
            .field("data_end", &self.data_end)
            .field("top_frozen", &self.top_frozen)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

struct Binder<'a, T, H: Host> {
    host: &'a mut H,
    options: &'a FeedOptions<T, H::Node>,
    data: &'a [T],
}

impl<T, H: Host> Rebind<H::Node> for Binder<'_, T, H> {
    fn bind(&mut self, node: &mut H::Node, data_index: usize) -> u32 {
        let item = &self.data[data_index];
        match &self.options.update {
            Some(update) => update(node, item),
            None => {
                let markup = (self.options.render)(item);
                self.host.replace_content(node, &markup);
            }
        }
        self.host.measure(node)
    }

    fn place(&mut self, node: &H::Node, translate_y: i64) {
        self.host.set_translate_y(node, translate_y);
    }
}
