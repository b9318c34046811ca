// Example: scroll a simulated viewport through each list kind and compare how many nodes they keep.
use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll};

use virtual_feed::sim::SimHost;
use virtual_feed::{Edge, FeedOptions, FnSource, Outcome};
use virtual_feed_adapter::{AnyList, FeedList, ListKind};

const VIEWPORT: u32 = 600;

fn block_on<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(futures_task::noop_waker_ref());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

fn main() {
    for kind in [ListKind::Simple { limit: 50 }, ListKind::Lazy, ListKind::Virtual] {
        let options = FeedOptions::new(10, |i: &usize| format!("<li>{i}</li>")).with_item_margin(10);
        let source = FnSource::new(|i: usize| i);
        let mut list = AnyList::new(kind, options, SimHost::fixed(100), source);
        block_on(list.render()).unwrap();

        let mut transitions = 0;
        for scroll_top in (0..=10_000i64).step_by(50) {
            // Keep reporting until the sentinels are out of view.
            loop {
                let mut moved = 0;
                for edge in [Edge::Bottom, Edge::Top] {
                    let ratio = list.host().sentinel_ratio(edge, scroll_top, VIEWPORT);
                    moved += block_on(list.on_visibility(edge, ratio))
                        .unwrap()
                        .iter()
                        .filter(|o| matches!(o, Outcome::Grew { .. } | Outcome::Recycled { .. }))
                        .count();
                }
                if moved == 0 {
                    break;
                }
                transitions += moved;
            }
        }
        println!(
            "{kind:?}: rendered={} nodes_created={} transitions={transitions}",
            list.rendered_len(),
            list.host().nodes_created()
        );
        list.teardown();
    }
}
