use crate::{Phase, Window};

/// Padding applied to the host container to stand in for unrendered content.
///
/// Both sides are magnitudes, so they can never go negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpacerState {
    pub padding_top: u64,
    pub padding_bottom: u64,
}

/// A lightweight, serializable snapshot of a feed.
///
/// This is useful for debugging overlays and for asserting engine state in tests without
/// reaching into the slot pool.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedState {
    pub window: Window,
    pub phase: Phase,
    pub spacer: SpacerState,
    pub pool_len: usize,
    /// `true` while a fetch is in flight.
    pub busy: bool,
}
