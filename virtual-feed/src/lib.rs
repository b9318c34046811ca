//! A headless windowed-list engine for feeds of unbounded length.
//!
//! For list variants and a sentinel-driven controller, see the `virtual-feed-adapter` crate.
//!
//! The engine keeps a bounded pool of rendered slots (twice the page size) that represents a
//! sliding window `[start, end)` over a lazily fetched dataset:
//!
//! - while the pool is filling up, reaching the bottom edge appends a new page of slots;
//! - once full, reaching either edge fetches the adjacent page and *recycles* the slots at the
//!   far end of the window, rebinding their content and moving them to the near end;
//! - after every recycle the container's top/bottom padding is recomputed so the scroll extent
//!   stays stable and the scrollbar does not jump.
//!
//! It is UI-agnostic. A UI layer is expected to provide a [`Host`] that:
//! - turns markup into nodes, measures and positions them
//! - applies padding to the scroll container
//! - creates edge sentinels and reports their visibility back via [`VirtualFeed::on_visibility`]
//!
//! Data arrives through a [`DataSource`], which may suspend.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod feed;
mod host;
mod options;
mod pool;
mod source;
mod spacer;
mod state;
mod types;

pub mod sim;

#[cfg(test)]
mod tests;

pub use error::{FeedError, FeedResult};
pub use feed::{Begin, FetchRequest, Outcome, Skip, VirtualFeed};
pub use host::Host;
pub use options::{FeedOptions, RenderFn, SentinelOptions, UpdateFn};
pub use pool::{Slot, SlotPool};
pub use source::{DataSource, FnSource, VecSource};
pub use spacer::Spacer;
pub use state::{FeedState, SpacerState};
pub use types::{Direction, Edge, InsertPosition, Phase, Window};
