use crate::common::base_visualizer::Visualizer;
use crate::common::error::Result;
use crate::common::highlight::HighlightState;
use crate::common::surface::{Pacer, Surface};

/// Bubble sort without the early-exit flag: every pass inspects every
/// adjacent pair up to its boundary, so the step count depends only on `n`.
pub fn bubble_sort<S: Surface, P: Pacer>(viz: &mut Visualizer<S, P>) -> Result<()> {
    let n = viz.len();

    for i in (1..n).rev() {
        for j in 0..i {
            viz.highlight(HighlightState::new().comparing(&[j, j + 1]).sorted(n - i))?;
            viz.pause();

            // Equal neighbours stay put.
            if viz.value(j) > viz.value(j + 1) {
                viz.swap(j, j + 1)?;
            }
        }
    }

    viz.finish()
}
