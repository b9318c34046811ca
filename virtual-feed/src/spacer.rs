use crate::SpacerState;

/// Keeps the host's padding in step with the rendered window.
///
/// The top padding always equals the first slot's offset. Whatever the top gains the bottom
/// loses (and vice versa), so the container's scroll extent stays roughly constant while the
/// window slides. The bottom padding saturates at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spacer {
    state: SpacerState,
}

impl Spacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SpacerState {
        self.state
    }

    /// Recomputes the padding after the window moved so that its first slot now sits at
    /// `first_translate_y`.
    ///
    /// A negative offset (re-measured rows above came out shorter) clamps the top padding at
    /// zero, and the next call measures its difference from that zero rather than from the real
    /// offset. The bottom padding is therefore off by the clamped amount until the window returns
    /// to non-negative offsets; it never goes below zero.
    pub fn compensate(&mut self, first_translate_y: i64) -> SpacerState {
        let old = self.state;
        let padding_top = first_translate_y.max(0) as u64;
        let padding_bottom = if padding_top >= old.padding_top {
            old.padding_bottom
                .saturating_sub(padding_top - old.padding_top)
        } else {
            old.padding_bottom
                .saturating_add(old.padding_top - padding_top)
        };
        self.state = SpacerState {
            padding_top,
            padding_bottom,
        };
        vtrace!(
            padding_top,
            padding_bottom,
            first_translate_y,
            "Spacer::compensate"
        );
        self.state
    }

    pub fn reset(&mut self) {
        self.state = SpacerState::default();
    }
}
