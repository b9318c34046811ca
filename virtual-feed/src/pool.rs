use alloc::vec::Vec;

/// One rendered node bound to one logical index.
///
/// The node itself is a host handle; the slot records where it sits, logically and on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot<N> {
    node: N,
    order_index: usize,
    /// Vertical offset inside the host container.
    translate_y: i64,
    /// Measured height (excludes the item margin).
    height: u32,
}

impl<N> Slot<N> {
    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn order_index(&self) -> usize {
        self.order_index
    }

    pub fn translate_y(&self) -> i64 {
        self.translate_y
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bottom_edge(&self) -> i64 {
        self.translate_y.saturating_add(i64::from(self.height))
    }
}

/// Rebinds recycled slots to freshly fetched items.
///
/// `data_index` addresses the fetched page, not the dataset.
pub(crate) trait Rebind<N> {
    /// Binds `node` to the item at `data_index` and returns the node's new height.
    fn bind(&mut self, node: &mut N, data_index: usize) -> u32;

    fn place(&mut self, node: &N, translate_y: i64);
}

/// A bounded, ordered collection of slots.
///
/// The pool only grows until it reaches `capacity`; after that, window movement rebinds
/// existing slots. Slots are kept sorted by `order_index`, so `first()`/`last()` are the top
/// and bottom of the rendered window.
#[derive(Clone, Debug)]
pub struct SlotPool<N> {
    slots: Vec<Slot<N>>,
    capacity: usize,
}

impl<N> SlotPool<N> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn first(&self) -> Option<&Slot<N>> {
        self.slots.first()
    }

    pub fn last(&self) -> Option<&Slot<N>> {
        self.slots.last()
    }

    pub fn get(&self, position: usize) -> Option<&Slot<N>> {
        self.slots.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot<N>> {
        self.slots.iter()
    }

    /// Returns the slot bound to a logical index, if it is currently rendered.
    pub fn slot_for(&self, order_index: usize) -> Option<&Slot<N>> {
        let first = self.slots.first()?.order_index;
        let slot = self.slots.get(order_index.checked_sub(first)?)?;
        debug_assert_eq!(slot.order_index, order_index, "SlotPool: order gap");
        Some(slot)
    }

    /// The half-open range of order indexes covered by the pool.
    pub fn order_range(&self) -> Option<(usize, usize)> {
        let first = self.slots.first()?;
        let last = self.slots.last()?;
        Some((first.order_index, last.order_index.saturating_add(1)))
    }

    /// `true` when order indexes ascend by exactly one from slot to slot.
    pub fn is_contiguous(&self) -> bool {
        self.slots
            .windows(2)
            .all(|w| w[0].order_index.checked_add(1) == Some(w[1].order_index))
    }

    /// Appends a new slot directly below the current last one and returns it.
    pub(crate) fn push(&mut self, node: N, order_index: usize, height: u32, margin: u32) -> &Slot<N> {
        debug_assert!(
            !self.is_full(),
            "SlotPool: push past capacity ({})",
            self.capacity
        );
        let translate_y = match self.slots.last() {
            Some(last) => last.bottom_edge().saturating_add(i64::from(margin)),
            None => 0,
        };
        let index = self.slots.len();
        self.slots.push(Slot {
            node,
            order_index,
            translate_y,
            height,
        });
        &self.slots[index]
    }

    /// Moves the first `count` slots below the last one.
    ///
    /// `new_start` is the window start after the shift. Slot `i` becomes order index
    /// `new_start + len - count + i` and is bound to `data[i]`.
    pub(crate) fn recycle_down(
        &mut self,
        count: usize,
        new_start: usize,
        margin: u32,
        rebind: &mut impl Rebind<N>,
    ) {
        let len = self.slots.len();
        debug_assert!(count <= len, "SlotPool: recycling {count} of {len} slots");
        let Some(last) = self.slots.last() else {
            return;
        };
        let count = count.min(len);
        let margin = i64::from(margin);
        let base = new_start.saturating_add(len - count);
        let mut bottom = last.bottom_edge();

        for i in 0..count {
            let slot = &mut self.slots[i];
            slot.order_index = base + i;
            slot.height = rebind.bind(&mut slot.node, i);
            slot.translate_y = bottom.saturating_add(margin);
            rebind.place(&slot.node, slot.translate_y);
            bottom = slot.bottom_edge();
        }

        self.sort_by_order();
    }

    /// Moves the last `count` slots above the first one.
    ///
    /// Walks from the bottom up so each slot lands directly above the previously placed one.
    /// Slot `i` becomes order index `new_start + (i - (len - count))`.
    pub(crate) fn recycle_up(
        &mut self,
        count: usize,
        new_start: usize,
        margin: u32,
        rebind: &mut impl Rebind<N>,
    ) {
        let len = self.slots.len();
        debug_assert!(count <= len, "SlotPool: recycling {count} of {len} slots");
        let Some(first) = self.slots.first() else {
            return;
        };
        let split = len - count.min(len);
        let margin = i64::from(margin);
        let mut top = first.translate_y;

        for i in (split..len).rev() {
            let slot = &mut self.slots[i];
            slot.order_index = new_start + (i - split);
            slot.height = rebind.bind(&mut slot.node, i - split);
            slot.translate_y = top
                .saturating_sub(margin)
                .saturating_sub(i64::from(slot.height));
            rebind.place(&slot.node, slot.translate_y);
            top = slot.translate_y;
        }

        self.sort_by_order();
    }

    fn sort_by_order(&mut self) {
        self.slots.sort_unstable_by_key(|slot| slot.order_index);
        if !self.is_contiguous() {
            vwarn!(len = self.slots.len(), "SlotPool: order indexes are not contiguous");
        }
        debug_assert!(
            self.is_contiguous(),
            "SlotPool: order indexes must be contiguous after recycling"
        );
    }

    /// Empties the pool, handing back the nodes. Only used on teardown.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = N> + '_ {
        self.slots.drain(..).map(|slot| slot.node)
    }
}
