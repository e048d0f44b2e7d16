use crate::common::enums::Markers;

/// Which indices hold each role for a single animation step.
///
/// A highlight state is written on every step and never merged with the
/// previous one: a role left unset means no index carries it this step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightState {
    /// Count of leading indices considered finalized.
    pub sorted_prefix: Option<usize>,
    pub current: Option<usize>,
    pub min: Option<usize>,
    pub comparing: Vec<usize>,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorted(mut self, count: usize) -> Self {
        self.sorted_prefix = Some(count);
        self
    }

    pub fn current(mut self, index: usize) -> Self {
        self.current = Some(index);
        self
    }

    pub fn min(mut self, index: usize) -> Self {
        self.min = Some(index);
        self
    }

    pub fn comparing(mut self, indices: &[usize]) -> Self {
        self.comparing = indices.to_vec();
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Resolves the markers a single bar carries under this state.
    pub fn markers_for(&self, index: usize) -> Markers {
        Markers {
            sorted: self.sorted_prefix.is_some_and(|count| index < count),
            current: self.current == Some(index),
            min: self.min == Some(index),
            comparing: self.comparing.contains(&index),
        }
    }
}
