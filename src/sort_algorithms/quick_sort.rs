use crate::common::base_visualizer::Visualizer;
use crate::common::error::Result;
use crate::common::highlight::HighlightState;
use crate::common::surface::{Pacer, Surface};

/// Quicksort with the Lomuto partition scheme, last element as pivot.
///
/// Recursion is depth-first and every partition step is paced, so sorted or
/// reversed input takes the full O(n²) comparisons.
pub fn quick_sort<S: Surface, P: Pacer>(viz: &mut Visualizer<S, P>) -> Result<()> {
    let n = viz.len();
    if n > 1 {
        sort_range(viz, 0, n - 1)?;
    }
    viz.finish()
}

fn sort_range<S: Surface, P: Pacer>(
    viz: &mut Visualizer<S, P>,
    low: usize,
    high: usize,
) -> Result<()> {
    if low < high {
        let pivot_index = partition(viz, low, high)?;
        if pivot_index > low {
            sort_range(viz, low, pivot_index - 1)?;
        }
        sort_range(viz, pivot_index + 1, high)?;
    }
    Ok(())
}

/// Partitions `low..=high` around `a[high]` and returns the pivot's final index.
///
/// Values equal to the pivot go to the left side.
fn partition<S: Surface, P: Pacer>(
    viz: &mut Visualizer<S, P>,
    low: usize,
    high: usize,
) -> Result<usize> {
    let pivot = viz.value(high);

    viz.highlight(HighlightState::new().current(high).comparing(&[high]))?;
    viz.pause();

    // First index not yet known to be <= pivot.
    let mut boundary = low;
    for j in low..high {
        viz.highlight(HighlightState::new().current(high).comparing(&[j, boundary]))?;
        viz.pause();

        if viz.value(j) <= pivot {
            if boundary != j {
                viz.swap(boundary, j)?;
            }
            boundary += 1;
        }
    }

    if boundary != high {
        viz.swap(boundary, high)?;
    }
    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::base_visualizer::Step;
    use crate::common::enums::Algorithm;
    use crate::common::surface::{BlankSurface, InstantPacer};

    fn viz_with(values: &[u32]) -> Visualizer<BlankSurface, InstantPacer> {
        let mut viz = Visualizer::new(Algorithm::Quick, BlankSurface, InstantPacer::new());
        viz.load(values.to_vec()).unwrap();
        viz
    }

    #[test]
    fn test_partition_returns_pivot_position() {
        let mut viz = viz_with(&[3, 1, 2]);
        let pivot_index = partition(&mut viz, 0, 2).unwrap();
        assert_eq!(pivot_index, 1);
        assert_eq!(viz.values(), &[1, 2, 3]);
    }

    #[test]
    fn test_partition_trace() {
        let mut viz = viz_with(&[3, 1, 2]);
        partition(&mut viz, 0, 2).unwrap();
        let expected = vec![
            Step::Highlight(HighlightState::new().current(2).comparing(&[2])),
            Step::Pause,
            Step::Highlight(HighlightState::new().current(2).comparing(&[0, 0])),
            Step::Pause,
            Step::Highlight(HighlightState::new().current(2).comparing(&[1, 0])),
            Step::Pause,
            Step::Swap(0, 1),
            Step::Swap(1, 2),
        ];
        assert_eq!(viz.steps(), expected.as_slice());
    }

    #[test]
    fn test_equal_to_pivot_goes_left() {
        let mut viz = viz_with(&[2, 5, 2]);
        let pivot_index = partition(&mut viz, 0, 2).unwrap();
        assert_eq!(pivot_index, 1);
        assert_eq!(viz.values(), &[2, 2, 5]);
    }

    #[test]
    fn test_sorted_input_is_quadratic() {
        let mut viz = viz_with(&[1, 2, 3, 4, 5]);
        viz.start().unwrap();
        // Each partition of size k costs 1 pivot highlight + (k - 1) comparisons.
        assert_eq!(viz.stats().highlights, 5 + 4 + 3 + 2);
        assert_eq!(viz.stats().swaps, 0);
    }
}
