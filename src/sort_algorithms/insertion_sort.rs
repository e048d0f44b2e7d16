use crate::common::base_visualizer::Visualizer;
use crate::common::error::Result;
use crate::common::highlight::HighlightState;
use crate::common::surface::{Pacer, Surface};

/// Insertion sort by shifting: larger elements of the sorted prefix move one
/// slot right until the held value fits, then the value is written once.
///
/// Shifts are plain writes; the bars of the prefix are redrawn together after
/// each insertion.
pub fn insertion_sort<S: Surface, P: Pacer>(viz: &mut Visualizer<S, P>) -> Result<()> {
    let n = viz.len();

    // The first element on its own is already sorted.
    viz.highlight(HighlightState::new().sorted(1))?;
    viz.pause();

    for i in 0..n {
        let base = viz.value(i);
        // `slot` is where `base` would land if the walk stopped now.
        let mut slot = i;

        while slot > 0 && viz.value(slot - 1) > base {
            viz.highlight(
                HighlightState::new()
                    .current(i)
                    .comparing(&[slot - 1, slot])
                    .sorted(i),
            )?;
            viz.pause();

            let shifted = viz.value(slot - 1);
            viz.assign(slot, shifted);
            slot -= 1;
        }
        viz.assign(slot, base);

        viz.refresh(i)?;
        viz.highlight(HighlightState::new().sorted(i + 1))?;
        viz.pause();
    }

    viz.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::base_visualizer::Step;
    use crate::common::enums::Algorithm;
    use crate::common::surface::{BlankSurface, InstantPacer};

    fn run(values: &[u32]) -> Visualizer<BlankSurface, InstantPacer> {
        let mut viz = Visualizer::new(Algorithm::Insertion, BlankSurface, InstantPacer::new());
        viz.load(values.to_vec()).unwrap();
        viz.start().unwrap();
        viz
    }

    #[test]
    fn test_two_elements_trace() {
        let viz = run(&[3, 1]);
        let expected = vec![
            Step::Highlight(HighlightState::new().sorted(1)),
            Step::Pause,
            Step::Assign { index: 0, value: 3 },
            Step::Refresh { upto: 0 },
            Step::Highlight(HighlightState::new().sorted(1)),
            Step::Pause,
            Step::Highlight(HighlightState::new().current(1).comparing(&[0, 1]).sorted(1)),
            Step::Pause,
            Step::Assign { index: 1, value: 3 },
            Step::Assign { index: 0, value: 1 },
            Step::Refresh { upto: 1 },
            Step::Highlight(HighlightState::new().sorted(2)),
            Step::Pause,
            Step::Finish,
        ];
        assert_eq!(viz.steps(), expected.as_slice());
        assert_eq!(viz.values(), &[1, 3]);
    }

    #[test]
    fn test_equal_values_are_not_shifted() {
        let viz = run(&[2, 2, 2]);
        let shifts = viz
            .steps()
            .iter()
            .filter(|s| matches!(s, Step::Highlight(state) if !state.comparing.is_empty()))
            .count();
        assert_eq!(shifts, 0);
        assert_eq!(viz.stats().swaps, 0);
    }

    #[test]
    fn test_reverse_input_shift_count() {
        // Every pair is inverted: n(n-1)/2 shifts.
        let viz = run(&[5, 4, 3, 2, 1]);
        assert_eq!(viz.values(), &[1, 2, 3, 4, 5]);
        let shifts = viz
            .steps()
            .iter()
            .filter(|s| matches!(s, Step::Highlight(state) if !state.comparing.is_empty()))
            .count();
        assert_eq!(shifts, 10);
    }
}
