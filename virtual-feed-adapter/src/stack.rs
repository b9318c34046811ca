use alloc::vec::Vec;

use virtual_feed::{FeedOptions, Host};

/// Nodes stacked top to bottom in append order, for the variants that never recycle.
#[derive(Debug)]
pub(crate) struct Stack<N> {
    nodes: Vec<N>,
    next_y: i64,
}

impl<N> Stack<N> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            next_y: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Offset at which the next node would be placed.
    pub(crate) fn next_y(&self) -> i64 {
        self.next_y
    }

    pub(crate) fn append<T, H: Host<Node = N>>(
        &mut self,
        host: &mut H,
        options: &FeedOptions<T, N>,
        items: &[T],
    ) -> usize {
        let margin = i64::from(options.item_margin);
        for item in items {
            let markup = (options.render)(item);
            let node = host.create_node(&markup);
            host.append_node(&node);
            let height = host.measure(&node);
            host.set_translate_y(&node, self.next_y);
            self.next_y = self
                .next_y
                .saturating_add(i64::from(height))
                .saturating_add(margin);
            self.nodes.push(node);
        }
        items.len()
    }

    pub(crate) fn clear<H: Host<Node = N>>(&mut self, host: &mut H) {
        for node in self.nodes.drain(..) {
            host.remove_node(node);
        }
        self.next_y = 0;
    }
}
