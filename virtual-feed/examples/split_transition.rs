// Example: drive a transition by hand, the way an event loop with its own fetch queue would.
use virtual_feed::sim::SimHost;
use virtual_feed::{Begin, Direction, FeedOptions, VirtualFeed};

fn main() {
    let options = FeedOptions::new(4, |i: &u32| format!("<p>{i}</p>"));
    let mut feed = VirtualFeed::new(options, SimHost::fixed(50));
    feed.init();

    let Begin::Fetch(request) = feed.begin(Direction::Down) else {
        return;
    };
    // A second trigger while the first fetch is outstanding is queued, not started.
    println!("meanwhile: {:?}", feed.begin(Direction::Up));

    let page: Vec<u32> = (request.offset as u32..(request.offset + request.count) as u32).collect();
    let outcome = feed.complete(request, Ok::<_, std::convert::Infallible>(page));
    println!("completed: {outcome:?} window={:?}", feed.window());

    // A late answer for the same request is ignored.
    let late = feed.complete(request, Ok::<_, std::convert::Infallible>(Vec::new()));
    println!("late: {late:?}");

    while let Some(direction) = feed.next_pending() {
        println!("queued: {direction:?} -> {:?}", feed.begin(direction));
    }
}
