use crate::sim::{SimHost, SimNode};
use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::future::{Future, ready};
use core::pin::pin;
use core::task::{Context, Poll};
use std::sync::Mutex;

const MARGIN: u32 = 10;
const HEIGHT: u32 = 100;
const STRIDE: i64 = (HEIGHT + MARGIN) as i64;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() >> 33) & 1 == 1
    }
}

fn block_on<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(futures_task::noop_waker_ref());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

fn render(i: &usize) -> String {
    format!("<section data-i=\"{i}\">item {i}</section>")
}

fn index_of(markup: &str) -> usize {
    let rest = &markup[markup.find("data-i=\"").unwrap() + 8..];
    rest[..rest.find('"').unwrap()].parse().unwrap()
}

// Heights vary per item, derived from the markup like a real layout would.
fn varied_height(markup: &str) -> u32 {
    40 + (index_of(markup) % 7) as u32 * 15
}

fn new_feed(page_size: usize, host: SimHost) -> VirtualFeed<usize, SimHost> {
    let mut feed = VirtualFeed::new(
        FeedOptions::new(page_size, render).with_item_margin(MARGIN),
        host,
    );
    feed.init();
    feed
}

fn unbounded() -> FnSource<fn(usize) -> usize> {
    FnSource::new(core::convert::identity as fn(usize) -> usize)
}

fn bound_index(feed: &VirtualFeed<usize, SimHost>, slot: &Slot<SimNode>) -> usize {
    index_of(&feed.host().node(*slot.node()).markup)
}

fn down<S: DataSource<usize>>(feed: &mut VirtualFeed<usize, SimHost>, source: &S) -> Outcome
where
    S::Error: core::fmt::Debug,
{
    block_on(feed.handle_bottom_intersection(source)).unwrap()
}

fn up<S: DataSource<usize>>(feed: &mut VirtualFeed<usize, SimHost>, source: &S) -> Outcome
where
    S::Error: core::fmt::Debug,
{
    block_on(feed.handle_top_intersection(source)).unwrap()
}

fn assert_invariants(feed: &VirtualFeed<usize, SimHost>) {
    let window = feed.window();
    let slots: Vec<_> = feed.pool().iter().collect();

    assert_eq!(slots.len(), window.len().min(feed.capacity()));
    assert_eq!(slots.len(), window.len());
    assert!(feed.pool().is_contiguous());
    if !window.is_empty() {
        assert_eq!(feed.pool().order_range(), Some((window.start, window.end)));
    }
    if feed.phase() == Phase::Full {
        assert_eq!(slots.len(), feed.capacity());
    }

    for slot in &slots {
        assert_eq!(bound_index(feed, slot), slot.order_index());
        assert_eq!(
            feed.host().node(*slot.node()).translate_y,
            slot.translate_y()
        );
    }
    for pair in slots.windows(2) {
        assert_eq!(
            pair[1].translate_y(),
            pair[0].bottom_edge() + i64::from(MARGIN),
            "slots must be stacked without gaps or overlap"
        );
    }

    if let (Some(first), Some(last)) = (slots.first(), slots.last()) {
        let spacer = feed.spacer();
        if feed.phase() == Phase::Full {
            assert_eq!(spacer.padding_top, first.translate_y().max(0) as u64);
        }
        assert_eq!(feed.host().spacer(), spacer);
        assert_eq!(
            feed.host().sentinel(Edge::Top).unwrap().translate_y,
            first.translate_y()
        );
        assert_eq!(
            feed.host().sentinel(Edge::Bottom).unwrap().translate_y,
            last.translate_y()
        );
    }
}

#[test]
fn scenario_a_growth_then_recycling() {
    let source = unbounded();
    let mut feed = new_feed(10, SimHost::fixed(HEIGHT));
    assert_eq!(feed.capacity(), 20);

    assert_eq!(down(&mut feed, &source), Outcome::Grew { appended: 10 });
    assert_eq!(feed.window(), Window::new(0, 10));
    assert_eq!(feed.phase(), Phase::Growing);
    assert_invariants(&feed);

    assert_eq!(down(&mut feed, &source), Outcome::Grew { appended: 10 });
    assert_eq!(feed.window(), Window::new(0, 20));
    assert_eq!(feed.phase(), Phase::Full);
    assert_eq!(feed.pool().len(), 20);
    assert_eq!(feed.spacer(), SpacerState::default());

    let recycled = Outcome::Recycled {
        direction: Direction::Down,
        shifted: 10,
    };
    assert_eq!(down(&mut feed, &source), recycled);
    assert_eq!(feed.window(), Window::new(10, 30));
    assert_eq!(feed.pool().len(), 20);
    assert_invariants(&feed);

    assert_eq!(down(&mut feed, &source), recycled);
    assert_eq!(feed.window(), Window::new(20, 40));
    assert_eq!(feed.pool().len(), 20);
    assert_eq!(feed.host().nodes_created(), 20);
    assert_eq!(feed.host().attached_nodes(), 20);
    assert_invariants(&feed);

    // Fixed heights: every index sits at its natural offset.
    for slot in feed.pool().iter() {
        assert_eq!(slot.translate_y(), slot.order_index() as i64 * STRIDE);
    }
    assert_eq!(
        feed.spacer(),
        SpacerState {
            padding_top: 20 * STRIDE as u64,
            padding_bottom: 0,
        }
    );
}

#[test]
fn scenario_b_top_trigger_recycles_upward() {
    let source = unbounded();
    let mut feed = new_feed(10, SimHost::fixed(HEIGHT));
    for _ in 0..4 {
        down(&mut feed, &source);
    }
    assert_eq!(feed.window(), Window::new(20, 40));

    assert_eq!(
        up(&mut feed, &source),
        Outcome::Recycled {
            direction: Direction::Up,
            shifted: 10,
        }
    );
    assert_eq!(feed.window(), Window::new(10, 30));

    let first = feed.pool().first().unwrap();
    assert_eq!(first.order_index(), 10);
    assert_eq!(bound_index(&feed, first), 10);
    assert_eq!(feed.spacer().padding_top, first.translate_y() as u64);
    assert_eq!(feed.spacer().padding_top, 10 * STRIDE as u64);
    // The top lost 10 rows of padding, the bottom gained them.
    assert_eq!(feed.spacer().padding_bottom, 10 * STRIDE as u64);
    assert_eq!(
        feed.host().sentinel(Edge::Bottom).unwrap().translate_y,
        29 * STRIDE
    );
    assert_invariants(&feed);
}

#[test]
fn top_trigger_at_start_changes_nothing() {
    let source = unbounded();
    let mut feed = new_feed(10, SimHost::fixed(HEIGHT));
    down(&mut feed, &source);
    down(&mut feed, &source);

    let before = feed.state();
    let writes = feed.host().padding_writes();
    let layout: Vec<_> = feed
        .pool()
        .iter()
        .map(|s| (s.order_index(), s.translate_y()))
        .collect();

    assert_eq!(up(&mut feed, &source), Outcome::Skipped(Skip::AtStart));
    assert_eq!(feed.state(), before);
    assert_eq!(feed.host().padding_writes(), writes);
    let after: Vec<_> = feed
        .pool()
        .iter()
        .map(|s| (s.order_index(), s.translate_y()))
        .collect();
    assert_eq!(after, layout);
}

#[test]
fn scenario_c_empty_page_at_the_end_freezes_downward() {
    let source = VecSource::new((0..20).collect());
    let mut feed = new_feed(10, SimHost::fixed(HEIGHT));
    down(&mut feed, &source);
    down(&mut feed, &source);
    let before = feed.state();

    assert_eq!(
        down(&mut feed, &source),
        Outcome::Exhausted(Direction::Down)
    );
    assert_eq!(feed.state(), before);
    assert_eq!(feed.data_end(), Some(20));
    assert!(
        feed.pool()
            .iter()
            .all(|s| feed.host().node(*s.node()).rebinds == 0)
    );

    assert_eq!(down(&mut feed, &source), Outcome::Skipped(Skip::Exhausted));
    assert_eq!(feed.state(), before);
    assert_invariants(&feed);
}

#[test]
fn short_page_shifts_partially_and_resumes_after_scrolling_up() {
    let source = VecSource::new((0..25).collect());
    let mut feed = new_feed(10, SimHost::fixed(HEIGHT));
    down(&mut feed, &source);
    down(&mut feed, &source);

    assert_eq!(
        down(&mut feed, &source),
        Outcome::Recycled {
            direction: Direction::Down,
            shifted: 5,
        }
    );
    assert_eq!(feed.window(), Window::new(5, 25));
    assert_eq!(feed.data_end(), Some(25));
    assert_invariants(&feed);
    assert_eq!(down(&mut feed, &source), Outcome::Skipped(Skip::Exhausted));

    // Only five rows exist above the window.
    assert_eq!(
        up(&mut feed, &source),
        Outcome::Recycled {
            direction: Direction::Up,
            shifted: 5,
        }
    );
    assert_eq!(feed.window(), Window::new(0, 20));
    assert_eq!(feed.spacer().padding_top, 0);
    assert_invariants(&feed);

    // The tail is reachable again, clamped to the known end.
    assert_eq!(
        down(&mut feed, &source),
        Outcome::Recycled {
            direction: Direction::Down,
            shifted: 5,
        }
    );
    assert_eq!(feed.window(), Window::new(5, 25));
    assert_invariants(&feed);
}

#[test]
fn short_first_page_stops_growth() {
    let source = VecSource::new((0..4).collect());
    let mut feed = new_feed(10, SimHost::fixed(HEIGHT));

    assert_eq!(down(&mut feed, &source), Outcome::Grew { appended: 4 });
    assert_eq!(feed.window(), Window::new(0, 4));
    assert_eq!(feed.phase(), Phase::Growing);
    assert_eq!(down(&mut feed, &source), Outcome::Skipped(Skip::Exhausted));
    assert_invariants(&feed);
}

#[test]
fn scenario_d_overlapping_triggers_are_serialized() {
    let source = unbounded();
    let mut feed = new_feed(10, SimHost::fixed(HEIGHT));
    for _ in 0..4 {
        down(&mut feed, &source);
    }
    assert_eq!(feed.window(), Window::new(20, 40));

    let Begin::Fetch(bottom) = feed.begin(Direction::Down) else {
        panic!("expected a fetch");
    };
    assert_eq!((bottom.offset, bottom.count), (40, 10));
    assert!(feed.is_busy());

    // The top sentinel fires before the bottom fetch resolves.
    assert_eq!(feed.begin(Direction::Up), Begin::Queued(Direction::Up));
    assert_eq!(feed.begin(Direction::Up), Begin::Skipped(Skip::Coalesced));
    assert_eq!(feed.begin(Direction::Down), Begin::Skipped(Skip::Coalesced));
    assert_eq!(feed.window(), Window::new(20, 40));
    assert_eq!(feed.next_pending(), None);

    let data: Vec<usize> = (40..50).collect();
    assert_eq!(
        feed.complete(bottom, Ok::<_, ()>(data)).unwrap(),
        Outcome::Recycled {
            direction: Direction::Down,
            shifted: 10,
        }
    );
    assert_eq!(feed.window(), Window::new(30, 50));
    assert_invariants(&feed);

    assert_eq!(feed.next_pending(), Some(Direction::Up));
    assert_eq!(feed.next_pending(), None);
    let Begin::Fetch(top) = feed.begin(Direction::Up) else {
        panic!("expected a fetch");
    };
    assert_eq!((top.offset, top.count), (20, 10));
    let data: Vec<usize> = (20..30).collect();
    feed.complete(top, Ok::<_, ()>(data)).unwrap();
    assert_eq!(feed.window(), Window::new(20, 40));
    assert_invariants(&feed);

    // Same state as running the two transitions back to back.
    let mut serial = new_feed(10, SimHost::fixed(HEIGHT));
    for _ in 0..5 {
        down(&mut serial, &source);
    }
    up(&mut serial, &source);
    assert_eq!(serial.state(), feed.state());
}

#[test]
fn source_failure_leaves_state_untouched() {
    let source = unbounded();
    let mut feed = new_feed(10, SimHost::fixed(HEIGHT));
    for _ in 0..3 {
        down(&mut feed, &source);
    }
    let before = feed.state();

    let failing = |_offset: usize, _count: usize| ready(Err::<Vec<usize>, &str>("offline"));
    let err = block_on(feed.handle_bottom_intersection(&failing)).unwrap_err();
    assert!(matches!(
        err,
        FeedError::Source {
            offset: 30,
            count: 10,
            source: "offline"
        }
    ));
    assert_eq!(feed.state(), before);
    assert!(!feed.is_busy());

    // A later event retries.
    assert_eq!(
        down(&mut feed, &source),
        Outcome::Recycled {
            direction: Direction::Down,
            shifted: 10,
        }
    );
    assert_eq!(feed.window(), Window::new(20, 40));
}

#[test]
fn upward_source_failure_leaves_state_untouched() {
    let source = unbounded();
    let mut feed = new_feed(10, SimHost::fixed(HEIGHT));
    for _ in 0..4 {
        down(&mut feed, &source);
    }
    assert_eq!(feed.window(), Window::new(20, 40));
    let before = feed.state();
    let writes = feed.host().padding_writes();

    let failing = |_offset: usize, _count: usize| ready(Err::<Vec<usize>, &str>("offline"));
    let err = block_on(feed.handle_top_intersection(&failing)).unwrap_err();
    assert!(matches!(
        err,
        FeedError::Source {
            offset: 10,
            count: 10,
            source: "offline"
        }
    ));
    assert_eq!(feed.state(), before);
    assert_eq!(feed.host().padding_writes(), writes);
    assert!(!feed.is_busy());
    assert_invariants(&feed);

    // Failures do not freeze the direction.
    assert_eq!(
        up(&mut feed, &source),
        Outcome::Recycled {
            direction: Direction::Up,
            shifted: 10,
        }
    );
    assert_eq!(feed.window(), Window::new(10, 30));
}

#[test]
fn short_upward_page_freezes_upward_transitions() {
    let source = unbounded();
    let mut feed = new_feed(10, SimHost::fixed(HEIGHT));
    for _ in 0..4 {
        down(&mut feed, &source);
    }
    let before = feed.state();
    let writes = feed.host().padding_writes();
    let layout: Vec<_> = feed
        .pool()
        .iter()
        .map(|s| (s.order_index(), s.translate_y()))
        .collect();

    let short = |offset: usize, _count: usize| {
        let page: Vec<usize> = (offset..offset + 3).collect();
        ready(Ok::<_, ()>(page))
    };
    assert_eq!(
        block_on(feed.handle_top_intersection(&short)).unwrap(),
        Outcome::Exhausted(Direction::Up)
    );
    assert_eq!(feed.state(), before);
    assert_eq!(feed.host().padding_writes(), writes);
    let after: Vec<_> = feed
        .pool()
        .iter()
        .map(|s| (s.order_index(), s.translate_y()))
        .collect();
    assert_eq!(after, layout);
    assert_invariants(&feed);

    // Even a well-behaved source is not asked again upward.
    assert_eq!(up(&mut feed, &source), Outcome::Skipped(Skip::Exhausted));
    assert_eq!(feed.state(), before);

    // Downward keeps working.
    assert_eq!(
        down(&mut feed, &source),
        Outcome::Recycled {
            direction: Direction::Down,
            shifted: 10,
        }
    );
    assert_eq!(feed.window(), Window::new(30, 50));
    assert_invariants(&feed);
}

#[test]
fn completion_after_teardown_is_stale() {
    let source = unbounded();
    let mut feed = new_feed(10, SimHost::fixed(HEIGHT));
    down(&mut feed, &source);
    down(&mut feed, &source);

    let Begin::Fetch(request) = feed.begin(Direction::Down) else {
        panic!("expected a fetch");
    };
    feed.teardown();
    assert!(feed.is_torn_down());
    assert_eq!(feed.host().attached_nodes(), 0);
    assert!(feed.host().sentinel(Edge::Top).is_none());
    assert!(feed.host().sentinel(Edge::Bottom).is_none());

    let data: Vec<usize> = (20..30).collect();
    assert_eq!(
        feed.complete(request, Ok::<_, ()>(data)).unwrap(),
        Outcome::Stale
    );
    assert_eq!(feed.pool().len(), 0);
    assert_eq!(
        feed.begin(Direction::Down),
        Begin::Skipped(Skip::TornDown)
    );
    assert_eq!(feed.on_visibility(Edge::Bottom, 1.0), None);
}

#[test]
fn completing_twice_is_stale() {
    let mut feed = new_feed(4, SimHost::fixed(HEIGHT));
    let Begin::Fetch(request) = feed.begin(Direction::Down) else {
        panic!("expected a fetch");
    };
    let page: Vec<usize> = (0..4).collect();
    assert_eq!(
        feed.complete(request, Ok::<_, ()>(page.clone())).unwrap(),
        Outcome::Grew { appended: 4 }
    );
    assert_eq!(
        feed.complete(request, Ok::<_, ()>(page)).unwrap(),
        Outcome::Stale
    );
    assert_eq!(feed.window(), Window::new(0, 4));
}

#[test]
fn oversized_page_is_truncated() {
    let mut feed = new_feed(4, SimHost::fixed(HEIGHT));
    let Begin::Fetch(request) = feed.begin(Direction::Down) else {
        panic!("expected a fetch");
    };
    let page: Vec<usize> = (0..9).collect();
    assert_eq!(
        feed.complete(request, Ok::<_, ()>(page)).unwrap(),
        Outcome::Grew { appended: 4 }
    );
    assert_invariants(&feed);
}

#[test]
fn down_then_up_restores_layout() {
    let source = unbounded();
    let mut feed = new_feed(10, SimHost::new(varied_height));
    down(&mut feed, &source);
    down(&mut feed, &source);
    let layout: Vec<_> = feed
        .pool()
        .iter()
        .map(|s| (s.order_index(), s.translate_y()))
        .collect();

    for _ in 0..5 {
        down(&mut feed, &source);
        assert_invariants(&feed);
    }
    assert_eq!(feed.window(), Window::new(50, 70));
    let pushed_down = feed.spacer().padding_top;
    assert!(pushed_down > 0);

    for _ in 0..5 {
        up(&mut feed, &source);
        assert_invariants(&feed);
    }
    assert_eq!(feed.window(), Window::new(0, 20));
    let restored: Vec<_> = feed
        .pool()
        .iter()
        .map(|s| (s.order_index(), s.translate_y()))
        .collect();
    assert_eq!(restored, layout);
    assert_eq!(feed.spacer().padding_top, 0);
    assert_eq!(feed.spacer().padding_bottom, pushed_down);
}

#[test]
fn random_walk_keeps_invariants() {
    let source = unbounded();
    for seed in [1u64, 7, 42, 1337] {
        let mut rng = Lcg::new(seed);
        let mut feed = new_feed(6, SimHost::new(varied_height));

        // Natural offsets of each index, as if everything were rendered.
        let mut offsets = Vec::with_capacity(1300);
        let mut acc = 0i64;
        for i in 0..1300usize {
            offsets.push(acc);
            acc += i64::from(varied_height(&render(&i)) + MARGIN);
        }

        for _ in 0..200 {
            let outcome = if rng.gen_bool() {
                down(&mut feed, &source)
            } else {
                up(&mut feed, &source)
            };
            assert!(!matches!(outcome, Outcome::Stale | Outcome::Queued(_)));
            assert_invariants(&feed);
            for slot in feed.pool().iter() {
                assert_eq!(slot.translate_y(), offsets[slot.order_index()]);
            }
            if feed.phase() == Phase::Full {
                assert_eq!(feed.host().nodes_created(), feed.capacity());
            }
        }
    }
}

#[test]
fn update_fn_rebinds_in_place() {
    let calls: Arc<Mutex<Vec<(usize, usize)>>> = Arc::new(Mutex::new(Vec::new()));
    let options = FeedOptions::new(5, render)
        .with_item_margin(MARGIN)
        .with_update(Some({
            let calls = Arc::clone(&calls);
            move |node: &mut SimNode, item: &usize| {
                calls.lock().unwrap().push((node.id(), *item));
            }
        }));
    let mut feed = VirtualFeed::new(options, SimHost::fixed(HEIGHT));
    let source = unbounded();

    down(&mut feed, &source);
    down(&mut feed, &source);
    assert!(calls.lock().unwrap().is_empty());

    down(&mut feed, &source);
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 5);
    // The first five nodes now carry items 10..15; their markup was left alone.
    let items: Vec<usize> = calls.iter().map(|&(_, item)| item).collect();
    assert_eq!(items, (10..15).collect::<Vec<_>>());
    assert!(
        feed.pool()
            .iter()
            .all(|s| feed.host().node(*s.node()).rebinds == 0)
    );
}

#[test]
fn transitions_before_init_do_not_need_sentinels() {
    let source = unbounded();
    let mut feed = VirtualFeed::new(
        FeedOptions::new(3, render).with_item_margin(MARGIN),
        SimHost::fixed(HEIGHT),
    );
    down(&mut feed, &source);
    down(&mut feed, &source);
    down(&mut feed, &source);
    assert_eq!(feed.window(), Window::new(3, 9));
    assert_eq!(feed.host().sentinels_created(), 0);

    feed.init();
    assert_eq!(feed.host().sentinels_created(), 2);
    assert_invariants(&feed);

    let top = feed.host().sentinel(Edge::Top).unwrap();
    assert_eq!(top.options.class_name, "top-observer");
    assert_eq!(top.options.insert_position, InsertPosition::AfterBegin);
    let bottom = feed.host().sentinel(Edge::Bottom).unwrap();
    assert_eq!(bottom.options.class_name, "bottom-observer");
    assert_eq!(bottom.options.insert_position, InsertPosition::BeforeEnd);

    // A second init does not recreate them.
    feed.init();
    assert_eq!(feed.host().sentinels_created(), 2);
}

#[test]
fn visibility_threshold_is_strict() {
    let feed = new_feed(3, SimHost::fixed(HEIGHT));
    assert_eq!(feed.on_visibility(Edge::Top, 0.0), None);
    assert_eq!(feed.on_visibility(Edge::Top, 0.1), None);
    assert_eq!(feed.on_visibility(Edge::Top, 0.11), Some(Direction::Up));
    assert_eq!(feed.on_visibility(Edge::Bottom, 1.0), Some(Direction::Down));
}

#[test]
fn spacer_bottom_padding_saturates() {
    let mut spacer = Spacer::new();
    assert_eq!(
        spacer.compensate(500),
        SpacerState {
            padding_top: 500,
            padding_bottom: 0,
        }
    );
    assert_eq!(
        spacer.compensate(200),
        SpacerState {
            padding_top: 200,
            padding_bottom: 300,
        }
    );
    assert_eq!(
        spacer.compensate(900),
        SpacerState {
            padding_top: 900,
            padding_bottom: 0,
        }
    );
    // Slots above the container origin clamp the top padding at zero.
    assert_eq!(
        spacer.compensate(-40),
        SpacerState {
            padding_top: 0,
            padding_bottom: 900,
        }
    );
    // The next difference is taken from the clamped zero, not from -40.
    assert_eq!(
        spacer.compensate(100),
        SpacerState {
            padding_top: 100,
            padding_bottom: 800,
        }
    );
    assert_eq!(spacer.state().padding_top, 100);

    spacer.reset();
    assert_eq!(spacer.state(), SpacerState::default());
    assert_eq!(spacer, Spacer::new());
}

#[test]
fn slot_lookup_by_order_index() {
    let source = unbounded();
    let mut feed = new_feed(4, SimHost::fixed(HEIGHT));
    for _ in 0..5 {
        down(&mut feed, &source);
    }
    assert_eq!(feed.window(), Window::new(12, 20));
    assert!(feed.pool().slot_for(11).is_none());
    assert!(feed.pool().slot_for(20).is_none());
    let slot = feed.pool().slot_for(15).unwrap();
    assert_eq!(slot.order_index(), 15);
    assert_eq!(bound_index(&feed, slot), 15);

    // Pool positions follow order indexes once sorted.
    assert_eq!(feed.pool().get(3).unwrap().order_index(), 15);
    assert!(feed.pool().get(8).is_none());

    let window = feed.window();
    assert!(!window.contains(11));
    assert!(window.contains(12));
    assert!(window.contains(19));
    assert!(!window.contains(20));
    assert!(
        feed.pool()
            .iter()
            .all(|slot| window.contains(slot.order_index()))
    );
}

#[test]
fn zero_page_size_is_bumped() {
    let options = FeedOptions::<usize, SimNode>::new(1, render).with_page_size(0);
    assert_eq!(options.page_size, 1);
    assert_eq!(options.capacity(), 2);

    let options = FeedOptions::<usize, SimNode>::new(0, render);
    assert_eq!(options.page_size, 1);

    let source = unbounded();
    let mut feed = VirtualFeed::new(options, SimHost::fixed(HEIGHT));
    feed.init();
    assert_eq!(down(&mut feed, &source), Outcome::Grew { appended: 1 });
    assert_eq!(down(&mut feed, &source), Outcome::Grew { appended: 1 });
    assert_eq!(feed.phase(), Phase::Full);
    assert_invariants(&feed);
}
