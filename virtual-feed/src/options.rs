use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;

use crate::InsertPosition;

/// Turns one item into the markup of exactly one top-level node.
pub type RenderFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Rebinds an existing node to a new item in place.
///
/// The node keeps any positioning the engine attached to it; only content changes.
pub type UpdateFn<T, N> = Arc<dyn Fn(&mut N, &T) + Send + Sync>;

/// Configuration for one edge sentinel, handed to [`crate::Host::observe`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentinelOptions {
    /// Visible fraction at which the host's observer should report the marker.
    pub threshold: f32,
    pub insert_position: InsertPosition,
    pub class_name: Cow<'static, str>,
}

impl SentinelOptions {
    pub fn new(class_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            threshold: 0.25,
            insert_position: InsertPosition::BeforeEnd,
            class_name: class_name.into(),
        }
    }

    pub fn top() -> Self {
        Self::new("top-observer").with_insert_position(InsertPosition::AfterBegin)
    }

    pub fn bottom() -> Self {
        Self::new("bottom-observer")
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_insert_position(mut self, insert_position: InsertPosition) -> Self {
        self.insert_position = insert_position;
        self
    }
}

/// Configuration for [`crate::VirtualFeed`].
///
/// Like the rest of the engine this is UI-agnostic: `N` is whatever node handle the
/// [`crate::Host`] hands out. Closures live in `Arc`s so options are cheap to clone.
pub struct FeedOptions<T, N> {
    /// Items fetched and recycled per transition. The pool holds twice this many slots.
    pub page_size: usize,
    /// Vertical space between consecutive slots, in pixels.
    pub item_margin: u32,
    /// A sentinel only counts as visible when its reported ratio is strictly above this.
    pub trigger_ratio: f32,
    pub render: RenderFn<T>,
    /// Optional in-place rebinding. Without it, recycled nodes get their content replaced with
    /// freshly rendered markup through [`crate::Host::replace_content`].
    pub update: Option<UpdateFn<T, N>>,
    pub top_sentinel: SentinelOptions,
    pub bottom_sentinel: SentinelOptions,
}

impl<T, N> Clone for FeedOptions<T, N> {
    fn clone(&self) -> Self {
        Self {
            page_size: self.page_size,
            item_margin: self.item_margin,
            trigger_ratio: self.trigger_ratio,
            render: Arc::clone(&self.render),
            update: self.update.clone(),
            top_sentinel: self.top_sentinel.clone(),
            bottom_sentinel: self.bottom_sentinel.clone(),
        }
    }
}

impl<T, N> FeedOptions<T, N> {
    /// Creates options with the given page size and renderer.
    ///
    /// A zero page size is bumped to 1.
    pub fn new(page_size: usize, render: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self {
            page_size: page_size.max(1),
            item_margin: 0,
            trigger_ratio: 0.1,
            render: Arc::new(render),
            update: None,
            top_sentinel: SentinelOptions::top(),
            bottom_sentinel: SentinelOptions::bottom(),
        }
    }

    /// Number of slots the pool holds once full.
    pub fn capacity(&self) -> usize {
        self.page_size.saturating_mul(2)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_item_margin(mut self, item_margin: u32) -> Self {
        self.item_margin = item_margin;
        self
    }

    pub fn with_trigger_ratio(mut self, trigger_ratio: f32) -> Self {
        self.trigger_ratio = trigger_ratio;
        self
    }

    pub fn with_update(mut self, update: Option<impl Fn(&mut N, &T) + Send + Sync + 'static>) -> Self {
        self.update = update.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_top_sentinel(mut self, options: SentinelOptions) -> Self {
        self.top_sentinel = options;
        self
    }

    pub fn with_bottom_sentinel(mut self, options: SentinelOptions) -> Self {
        self.bottom_sentinel = options;
        self
    }
}

impl<T, N> core::fmt::Debug for FeedOptions<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FeedOptions")
            .field("page_size", &self.page_size)
            .field("item_margin", &self.item_margin)
            .field("trigger_ratio", &self.trigger_ratio)
            .field("has_update", &self.update.is_some())
            .field("top_sentinel", &self.top_sentinel)
            .field("bottom_sentinel", &self.bottom_sentinel)
            .finish_non_exhaustive()
    }
}
