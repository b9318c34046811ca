// Example: grow the pool, recycle it downward and back, and print the window and padding.
use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll};

use virtual_feed::sim::SimHost;
use virtual_feed::{FeedOptions, FnSource, VirtualFeed};

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
    let source = FnSource::new(|i: usize| format!("post #{i}"));
    let options = FeedOptions::new(10, |post: &String| format!("<article>{post}</article>"))
        .with_item_margin(8);
    let mut feed = VirtualFeed::new(options, SimHost::fixed(120));
    feed.init();

    for _ in 0..5 {
        let outcome = block_on(feed.handle_bottom_intersection(&source)).unwrap();
        println!(
            "down: {outcome:?} window={:?} spacer={:?}",
            feed.window(),
            feed.spacer()
        );
    }
    let outcome = block_on(feed.handle_top_intersection(&source)).unwrap();
    println!(
        "up: {outcome:?} window={:?} spacer={:?}",
        feed.window(),
        feed.spacer()
    );
    println!(
        "nodes_created={} state={:?}",
        feed.host().nodes_created(),
        feed.state()
    );
}
