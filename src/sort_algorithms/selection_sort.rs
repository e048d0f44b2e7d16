use crate::common::base_visualizer::Visualizer;
use crate::common::error::Result;
use crate::common::highlight::HighlightState;
use crate::common::surface::{Pacer, Surface};

/// Selection sort: scan the unsorted suffix for its minimum and swap it into place.
///
/// Ties keep the earlier minimum, so the leftmost of equal values is chosen.
pub fn selection_sort<S: Surface, P: Pacer>(viz: &mut Visualizer<S, P>) -> Result<()> {
    let n = viz.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;

        for j in (i + 1)..n {
            viz.highlight(HighlightState::new().current(j).min(min_index).sorted(i))?;
            viz.pause();

            if viz.value(j) < viz.value(min_index) {
                min_index = j;
            }
        }

        if min_index != i {
            viz.swap(i, min_index)?;
        }
    }

    viz.finish()
}
