use crate::{Edge, SentinelOptions, SpacerState};

/// The UI layer a feed renders into.
///
/// The engine never touches UI objects directly. A host owns the scroll container and hands
/// out cheap node handles (`Node`), e.g. a cloned DOM element reference or an arena index.
/// Slots keep these handles; the host keeps the nodes.
///
/// Visibility is reported the other way round: the host watches the sentinels it created in
/// [`Host::observe`] and calls [`crate::VirtualFeed::on_visibility`] when one crosses its
/// threshold.
pub trait Host {
    type Node;
    type Sentinel;

    /// Builds a detached node from markup describing exactly one top-level element.
    fn create_node(&mut self, markup: &str) -> Self::Node;

    /// Attaches a node after the last rendered slot (before the bottom sentinel).
    fn append_node(&mut self, node: &Self::Node);

    /// Replaces a node's content with new markup, keeping the node and its position.
    fn replace_content(&mut self, node: &mut Self::Node, markup: &str);

    /// Current rendered height of a node in pixels.
    fn measure(&self, node: &Self::Node) -> u32;

    fn set_translate_y(&mut self, node: &Self::Node, translate_y: i64);

    fn set_padding(&mut self, spacer: SpacerState);

    /// Creates a sentinel marker for `edge` and starts observing it.
    fn observe(&mut self, edge: Edge, options: &SentinelOptions) -> Self::Sentinel;

    fn move_sentinel(&mut self, sentinel: &Self::Sentinel, translate_y: i64);

    /// Stops observing a sentinel and removes its marker.
    fn unobserve(&mut self, sentinel: Self::Sentinel);

    /// Detaches and drops a node. Only called on teardown.
    fn remove_node(&mut self, node: Self::Node);
}
