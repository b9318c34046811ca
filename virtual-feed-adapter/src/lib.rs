//! List variants and a sentinel-driven controller for the `virtual-feed` crate.
//!
//! The `virtual-feed` crate is UI-agnostic and focuses on the window/pool state machine. This
//! crate provides the framework-neutral pieces adapters usually need on top of it:
//!
//! - [`FeedController`]: owns a feed and its data source, turns visibility reports into
//!   transitions and drains queued directions
//! - [`SimpleList`] and [`LazyList`]: the non-virtualized variants, for short lists or for
//!   comparing against the virtual one
//! - [`AnyList`]: picks one of the three at runtime from a [`ListKind`]
//!
//! No UI bindings live here; everything talks to the UI through `virtual_feed::Host`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod lazy;
mod list;
mod simple;
mod stack;


pub use controller::FeedController;
pub use lazy::LazyList;
pub use list::{AnyList, FeedList, ListKind};
pub use simple::SimpleList;
