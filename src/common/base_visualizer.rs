use std::fmt;
use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, info_span, trace, warn};

use crate::common::enums::{Algorithm, Markers};
use crate::common::error::{Result, VisualizerError};
use crate::common::highlight::HighlightState;
use crate::common::session::Session;
use crate::common::surface::{Pacer, Surface, ThreadPacer};

pub const DEFAULT_LEN: usize = 10;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_RANGE: RangeInclusive<u32> = 1..=100;

/// One driver primitive, as recorded in the step log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Highlight(HighlightState),
    Pause,
    Swap(usize, usize),
    Assign { index: usize, value: u32 },
    /// Bars `0..=upto` were redrawn from the array.
    Refresh { upto: usize },
    Finish,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Highlight(state) => {
                let mut parts = Vec::new();
                if let Some(current) = state.current {
                    parts.push(format!("current {}", current));
                }
                if let Some(min) = state.min {
                    parts.push(format!("min {}", min));
                }
                if !state.comparing.is_empty() {
                    parts.push(format!("comparing {:?}", state.comparing));
                }
                if let Some(count) = state.sorted_prefix {
                    parts.push(format!("sorted {}", count));
                }
                write!(f, "Highlight: {}", parts.join(", "))
            }
            Step::Pause => f.write_str("Pause"),
            Step::Swap(i, j) => write!(f, "Swap indices {} and {}", i, j),
            Step::Assign { index, value } => write!(f, "Set index {} to {}", index, value),
            Step::Refresh { upto } => write!(f, "Redraw bars 0..={}", upto),
            Step::Finish => f.write_str("Sorted!"),
        }
    }
}

/// Counters for the sort in progress (or the last one completed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub highlights: u32,
    pub pauses: u32,
    pub swaps: u32,
    pub writes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The sort ran to completion; carries its counters.
    Completed(Stats),
    /// Another sort held the session, so nothing happened.
    AlreadyRunning,
}

/// The visualization driver: owns the working array and exposes the
/// primitives the sorting strategies are written against.
pub struct Visualizer<S, P = ThreadPacer> {
    algorithm: Algorithm,
    array: Vec<u32>,
    len: usize,
    range: RangeInclusive<u32>,
    delay: Duration,
    highlight: HighlightState,
    session: Session,
    surface: S,
    pacer: P,
    steps: Vec<Step>,
    stats: Stats,
}

impl<S: Surface, P: Pacer> Visualizer<S, P> {
    pub fn new(algorithm: Algorithm, surface: S, pacer: P) -> Self {
        Self {
            algorithm,
            array: Vec::new(),
            len: DEFAULT_LEN,
            range: DEFAULT_RANGE,
            delay: DEFAULT_DELAY,
            highlight: HighlightState::new(),
            session: Session::new(),
            surface,
            pacer,
            steps: Vec::new(),
            stats: Stats::default(),
        }
    }

    /// Sets the length and value range used by [`Visualizer::generate`].
    pub fn with_shape(mut self, len: usize, range: RangeInclusive<u32>) -> Self {
        self.len = len;
        self.range = range;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Shares an existing session flag instead of the visualizer's own.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn values(&self) -> &[u32] {
        &self.array
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn value(&self, index: usize) -> u32 {
        self.array[index]
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn highlight_state(&self) -> &HighlightState {
        &self.highlight
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_sorting(&self) -> bool {
        self.session.is_running()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Replaces the working array with fresh random values.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let values = (0..self.len)
            .map(|_| rng.random_range(self.range.clone()))
            .collect();
        self.load(values)
    }

    /// Replaces the working array with the given values.
    pub fn load(&mut self, values: Vec<u32>) -> Result<()> {
        if self.session.is_running() {
            warn!(algorithm = %self.algorithm, "Array replacement rejected while sorting");
            return Err(VisualizerError::SortInProgress);
        }
        if values.contains(&0) {
            return Err(VisualizerError::invalid_setting(
                "values",
                "every value must be a positive integer",
            ));
        }

        self.array = values;
        self.highlight = HighlightState::new();
        self.steps.clear();
        self.stats = Stats::default();

        self.surface.render(&self.array)?;
        for index in 0..self.array.len() {
            self.surface.set_markers(index, Markers::NONE)?;
        }
        self.surface.present()?;
        info!(algorithm = %self.algorithm, values = ?self.array, "Generated array");
        Ok(())
    }

    /// Runs this visualizer's algorithm to completion.
    ///
    /// A start while another sort holds the session is a silent no-op.
    pub fn start(&mut self) -> Result<StartOutcome> {
        if !self.session.try_begin() {
            debug!(algorithm = %self.algorithm, "Sort already running, start ignored");
            return Ok(StartOutcome::AlreadyRunning);
        }

        let span = info_span!("sort", algorithm = %self.algorithm, len = self.array.len());
        let _enter = span.enter();

        self.steps.clear();
        self.stats = Stats::default();
        info!("Sort started");

        let algorithm = self.algorithm;
        let result = self
            .surface
            .set_controls_enabled(false)
            .and_then(|_| algorithm.run(self));

        if let Err(error) = result {
            warn!(%error, "Sort aborted");
            if self.session.is_running() {
                self.session.end();
                if let Err(error) = self.surface.set_controls_enabled(true) {
                    warn!(%error, "Failed to re-enable controls after abort");
                }
            }
            return Err(error);
        }

        debug_assert!(!self.session.is_running(), "strategy returned without finishing");
        info!(stats = ?self.stats, values = ?self.array, "Sort finished");
        Ok(StartOutcome::Completed(self.stats))
    }

    /// Marks exactly the indices named by `state` with their roles.
    pub fn highlight(&mut self, state: HighlightState) -> Result<()> {
        trace!(?state, "highlight");
        self.apply_markers(&state)?;
        self.highlight = state.clone();
        self.record(Step::Highlight(state))?;
        self.surface.present()?;
        self.stats.highlights += 1;
        Ok(())
    }

    /// Waits one pacing interval without touching the array.
    pub fn pause(&mut self) {
        self.pacer.pause(self.delay);
        self.steps.push(Step::Pause);
        self.stats.pauses += 1;
    }

    /// Exchanges two elements, redraws both bars, then waits one pacing interval.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.array.swap(i, j);
        let max = self.max_value();
        self.surface.update_bar(i, self.array[i], max)?;
        self.surface.update_bar(j, self.array[j], max)?;
        self.record(Step::Swap(i, j))?;
        self.surface.present()?;
        self.stats.swaps += 1;
        debug!(i, j, "swap");
        self.pacer.pause(self.delay);
        Ok(())
    }

    /// Writes a value without redrawing; pair with [`Visualizer::refresh`].
    pub fn assign(&mut self, index: usize, value: u32) {
        self.array[index] = value;
        self.steps.push(Step::Assign { index, value });
        self.stats.writes += 1;
    }

    /// Redraws bars `0..=upto` from the current array.
    pub fn refresh(&mut self, upto: usize) -> Result<()> {
        let max = self.max_value();
        let end = (upto + 1).min(self.array.len());
        for index in 0..end {
            self.surface.update_bar(index, self.array[index], max)?;
        }
        self.steps.push(Step::Refresh { upto });
        self.surface.present()
    }

    /// Marks every bar sorted, releases the session and re-enables controls.
    pub fn finish(&mut self) -> Result<()> {
        let state = HighlightState::new().sorted(self.array.len());
        self.apply_markers(&state)?;
        self.highlight = state;
        self.record(Step::Finish)?;
        self.surface.present()?;
        self.session.end();
        self.surface.set_controls_enabled(true)
    }

    fn apply_markers(&mut self, state: &HighlightState) -> Result<()> {
        for index in 0..self.array.len() {
            self.surface.set_markers(index, state.markers_for(index))?;
        }
        Ok(())
    }

    fn record(&mut self, step: Step) -> Result<()> {
        self.surface.describe(&step.to_string())?;
        self.steps.push(step);
        Ok(())
    }

    fn max_value(&self) -> u32 {
        self.array.iter().copied().max().unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::surface::InstantPacer;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct NullSurface {
        controls: Vec<bool>,
        markers: Vec<Markers>,
    }

    impl Surface for NullSurface {
        fn render(&mut self, values: &[u32]) -> Result<()> {
            self.markers = vec![Markers::NONE; values.len()];
            Ok(())
        }

        fn set_markers(&mut self, index: usize, markers: Markers) -> Result<()> {
            self.markers[index] = markers;
            Ok(())
        }

        fn update_bar(&mut self, _index: usize, _value: u32, _max: u32) -> Result<()> {
            Ok(())
        }

        fn set_controls_enabled(&mut self, enabled: bool) -> Result<()> {
            self.controls.push(enabled);
            Ok(())
        }
    }

    fn visualizer(algorithm: Algorithm) -> Visualizer<NullSurface, InstantPacer> {
        Visualizer::new(algorithm, NullSurface::default(), InstantPacer::new())
    }

    #[test]
    fn test_generate_uses_default_shape() {
        let mut viz = visualizer(Algorithm::Bubble);
        let mut rng = StdRng::seed_from_u64(7);
        viz.generate(&mut rng).unwrap();
        assert_eq!(viz.len(), DEFAULT_LEN);
        assert!(viz.values().iter().all(|v| DEFAULT_RANGE.contains(v)));
    }

    #[test]
    fn test_generate_clears_highlight() {
        let mut viz = visualizer(Algorithm::Bubble);
        viz.load(vec![3, 1, 2]).unwrap();
        viz.highlight(HighlightState::new().current(1)).unwrap();
        assert!(!viz.highlight_state().is_empty());

        let mut rng = StdRng::seed_from_u64(1);
        viz.generate(&mut rng).unwrap();
        assert!(viz.highlight_state().is_empty());
        assert!(viz.surface().markers.iter().all(Markers::is_none));
    }

    #[test]
    fn test_load_rejects_zero() {
        let mut viz = visualizer(Algorithm::Bubble);
        assert!(matches!(
            viz.load(vec![1, 0, 2]),
            Err(VisualizerError::InvalidSetting { field: "values", .. })
        ));
    }

    #[test]
    fn test_load_rejected_while_running() {
        let mut viz = visualizer(Algorithm::Bubble);
        viz.load(vec![2, 1]).unwrap();
        assert!(viz.session().try_begin());
        assert!(matches!(
            viz.load(vec![9, 9]),
            Err(VisualizerError::SortInProgress)
        ));
        assert_eq!(viz.values(), &[2, 1]);
    }

    #[test]
    fn test_swap_pauses_once() {
        let mut viz = visualizer(Algorithm::Bubble);
        viz.load(vec![4, 2]).unwrap();
        viz.swap(0, 1).unwrap();
        assert_eq!(viz.values(), &[2, 4]);
        assert_eq!(viz.pacer().pauses(), &[DEFAULT_DELAY]);
        assert_eq!(viz.stats().swaps, 1);
    }

    #[test]
    fn test_swap_same_index_keeps_values() {
        let mut viz = visualizer(Algorithm::Bubble);
        viz.load(vec![4, 2]).unwrap();
        viz.swap(1, 1).unwrap();
        assert_eq!(viz.values(), &[4, 2]);
    }

    #[test]
    fn test_assign_does_not_pause() {
        let mut viz = visualizer(Algorithm::Insertion);
        viz.load(vec![4, 2]).unwrap();
        viz.assign(1, 4);
        assert_eq!(viz.values(), &[4, 4]);
        assert!(viz.pacer().pauses().is_empty());
        assert_eq!(viz.stats().writes, 1);
    }

    #[test]
    fn test_start_toggles_controls() {
        let mut viz = visualizer(Algorithm::Selection);
        viz.load(vec![3, 2, 1]).unwrap();
        let outcome = viz.start().unwrap();
        assert!(matches!(outcome, StartOutcome::Completed(_)));
        assert_eq!(viz.surface().controls, vec![false, true]);
        assert!(!viz.is_sorting());
        assert!(viz.surface().markers.iter().all(|m| m.sorted));
    }

    #[test]
    fn test_start_ignored_when_session_busy() {
        let mut viz = visualizer(Algorithm::Selection);
        viz.load(vec![3, 2, 1]).unwrap();
        assert!(viz.session().try_begin());
        assert_eq!(viz.start().unwrap(), StartOutcome::AlreadyRunning);
        assert_eq!(viz.values(), &[3, 2, 1]);
        assert!(viz.steps().is_empty());
        assert!(viz.surface().controls.is_empty());
    }

    #[test]
    fn test_step_display() {
        let step = Step::Highlight(HighlightState::new().current(2).min(1).sorted(1));
        assert_eq!(step.to_string(), "Highlight: current 2, min 1, sorted 1");
        assert_eq!(Step::Swap(0, 3).to_string(), "Swap indices 0 and 3");
    }
}
