//! A headless [`Host`] that records everything the engine does.
//!
//! `SimHost` stands in for a real UI layer in tests, benchmarks, and examples: nodes live in an
//! arena, heights come from a caller-supplied function of the markup, and sentinel visibility
//! can be computed against a simulated viewport.

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{Edge, Host, SentinelOptions, SpacerState};

/// A handle to a node in a [`SimHost`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SimNode(usize);

impl SimNode {
    pub fn id(self) -> usize {
        self.0
    }
}

/// A handle to a sentinel created by a [`SimHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SimSentinel(usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimNodeState {
    pub markup: String,
    pub translate_y: i64,
    pub attached: bool,
    /// How many times the content was replaced after creation.
    pub rebinds: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimSentinelState {
    pub edge: Edge,
    pub options: SentinelOptions,
    pub translate_y: i64,
    pub observing: bool,
}

pub struct SimHost {
    nodes: Vec<SimNodeState>,
    sentinels: Vec<SimSentinelState>,
    height_of: Arc<dyn Fn(&str) -> u32 + Send + Sync>,
    spacer: SpacerState,
    padding_writes: usize,
}

impl SimHost {
    /// Creates a host whose node heights are computed from their markup.
    pub fn new(height_of: impl Fn(&str) -> u32 + Send + Sync + 'static) -> Self {
        Self {
            nodes: Vec::new(),
            sentinels: Vec::new(),
            height_of: Arc::new(height_of),
            spacer: SpacerState::default(),
            padding_writes: 0,
        }
    }

    /// Creates a host where every node is `height` pixels tall.
    pub fn fixed(height: u32) -> Self {
        Self::new(move |_| height)
    }

    pub fn node(&self, node: SimNode) -> &SimNodeState {
        &self.nodes[node.0]
    }

    /// Every node ever created, in creation order.
    pub fn nodes(&self) -> &[SimNodeState] {
        &self.nodes
    }

    /// Total number of nodes ever created.
    pub fn nodes_created(&self) -> usize {
        self.nodes.len()
    }

    pub fn attached_nodes(&self) -> usize {
        self.nodes.iter().filter(|n| n.attached).count()
    }

    pub fn spacer(&self) -> SpacerState {
        self.spacer
    }

    pub fn padding_writes(&self) -> usize {
        self.padding_writes
    }

    /// The live sentinel on `edge`, if one is being observed.
    pub fn sentinel(&self, edge: Edge) -> Option<&SimSentinelState> {
        self.sentinels
            .iter()
            .rev()
            .find(|s| s.edge == edge && s.observing)
    }

    pub fn sentinels_created(&self) -> usize {
        self.sentinels.len()
    }

    /// Fraction of a sentinel's marker visible in the viewport `[scroll_top, scroll_top + height)`.
    ///
    /// Markers are treated as 1px tall, so the answer is either `0.0` or `1.0`.
    pub fn sentinel_ratio(&self, edge: Edge, scroll_top: i64, viewport_height: u32) -> f32 {
        let Some(sentinel) = self.sentinel(edge) else {
            return 0.0;
        };
        let bottom = scroll_top.saturating_add(i64::from(viewport_height));
        if sentinel.translate_y >= scroll_top && sentinel.translate_y < bottom {
            1.0
        } else {
            0.0
        }
    }
}

impl core::fmt::Debug for SimHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimHost")
            .field("nodes", &self.nodes.len())
            .field("sentinels", &self.sentinels)
            .field("spacer", &self.spacer)
            .field("padding_writes", &self.padding_writes)
            .finish_non_exhaustive()
    }
}

impl Host for SimHost {
    type Node = SimNode;
    type Sentinel = SimSentinel;

    fn create_node(&mut self, markup: &str) -> SimNode {
        self.nodes.push(SimNodeState {
            markup: markup.to_string(),
            translate_y: 0,
            attached: false,
            rebinds: 0,
        });
        SimNode(self.nodes.len() - 1)
    }

    fn append_node(&mut self, node: &SimNode) {
        self.nodes[node.0].attached = true;
    }

    fn replace_content(&mut self, node: &mut SimNode, markup: &str) {
        let state = &mut self.nodes[node.0];
        state.markup.clear();
        state.markup.push_str(markup);
        state.rebinds += 1;
    }

    fn measure(&self, node: &SimNode) -> u32 {
        (self.height_of)(&self.nodes[node.0].markup)
    }

    fn set_translate_y(&mut self, node: &SimNode, translate_y: i64) {
        self.nodes[node.0].translate_y = translate_y;
    }

    fn set_padding(&mut self, spacer: SpacerState) {
        self.spacer = spacer;
        self.padding_writes += 1;
    }

    fn observe(&mut self, edge: Edge, options: &SentinelOptions) -> SimSentinel {
        self.sentinels.push(SimSentinelState {
            edge,
            options: options.clone(),
            translate_y: 0,
            observing: true,
        });
        SimSentinel(self.sentinels.len() - 1)
    }

    fn move_sentinel(&mut self, sentinel: &SimSentinel, translate_y: i64) {
        self.sentinels[sentinel.0].translate_y = translate_y;
    }

    fn unobserve(&mut self, sentinel: SimSentinel) {
        self.sentinels[sentinel.0].observing = false;
    }

    fn remove_node(&mut self, node: SimNode) {
        self.nodes[node.0].attached = false;
    }
}
