/// The direction a transition moves the window in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards the logical beginning of the dataset.
    Up,
    /// Towards the logical end of the dataset.
    Down,
}

/// One of the two edges of the rendered window, each watched by a sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    /// The transition a visible sentinel on this edge asks for.
    pub fn direction(self) -> Direction {
        match self {
            Self::Top => Direction::Up,
            Self::Bottom => Direction::Down,
        }
    }
}

/// Whether the slot pool is still being filled or already recycles.
///
/// `Growing` turns into `Full` exactly once, when the pool first reaches its capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Growing,
    Full,
}

/// The half-open range of logical indexes currently bound to rendered slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start: usize,
    pub end: usize, // exclusive
}

impl Window {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Window: start > end ({start} > {end})");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub(crate) fn shift_down(&mut self, by: usize) {
        self.start = self.start.saturating_add(by);
        self.end = self.end.saturating_add(by);
    }

    pub(crate) fn shift_up(&mut self, by: usize) {
        debug_assert!(by <= self.start, "Window: shifted above index 0");
        self.start = self.start.saturating_sub(by);
        self.end = self.end.saturating_sub(by);
    }
}

/// Where a sentinel marker is inserted relative to the host container.
///
/// Mirrors the four positions of the DOM `insertAdjacentElement` API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsertPosition {
    BeforeBegin,
    AfterBegin,
    #[default]
    BeforeEnd,
    AfterEnd,
}
