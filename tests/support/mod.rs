//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::io;

use sorting_visualizer::common::{
    Algorithm, InstantPacer, Markers, Pacer, Result, Step, Surface, Visualizer,
};

/// Keeps the last state of every bar and the history of control toggles.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub values: Vec<u32>,
    pub markers: Vec<Markers>,
    pub controls: Vec<bool>,
    pub bar_updates: Vec<(usize, u32)>,
    pub messages: Vec<String>,
    pub presents: usize,
    pub sizes: Vec<(u16, u16)>,
    /// Bar updates fail with an IO error while set.
    pub fail_bar_updates: bool,
    /// Re-enabling controls fails with an IO error while set.
    pub fail_enable: bool,
    /// Bar updates panic while set.
    pub panic_on_bar_update: bool,
}

impl Surface for RecordingSurface {
    fn render(&mut self, values: &[u32]) -> Result<()> {
        self.values = values.to_vec();
        self.markers = vec![Markers::NONE; values.len()];
        Ok(())
    }

    fn set_markers(&mut self, index: usize, markers: Markers) -> Result<()> {
        self.markers[index] = markers;
        Ok(())
    }

    fn update_bar(&mut self, index: usize, value: u32, _max: u32) -> Result<()> {
        if self.panic_on_bar_update {
            panic!("bar {index} cannot be drawn");
        }
        if self.fail_bar_updates {
            return Err(io::Error::other("bar update failed").into());
        }
        self.values[index] = value;
        self.bar_updates.push((index, value));
        Ok(())
    }

    fn set_controls_enabled(&mut self, enabled: bool) -> Result<()> {
        self.controls.push(enabled);
        if enabled && self.fail_enable {
            return Err(io::Error::other("controls unavailable").into());
        }
        Ok(())
    }

    fn describe(&mut self, message: &str) -> Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.presents += 1;
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.sizes.push((width, height));
    }
}

pub type TestVisualizer = Visualizer<RecordingSurface, InstantPacer>;

pub fn visualizer(algorithm: Algorithm, values: &[u32]) -> TestVisualizer {
    let mut viz = Visualizer::new(algorithm, RecordingSurface::default(), InstantPacer::new());
    viz.load(values.to_vec()).expect("load values");
    viz
}

pub fn sorted(algorithm: Algorithm, values: &[u32]) -> TestVisualizer {
    let mut viz = visualizer(algorithm, values);
    viz.start().expect("sort runs");
    viz
}

pub fn swaps(viz: &TestVisualizer) -> Vec<(usize, usize)> {
    viz.steps()
        .iter()
        .filter_map(|step| match step {
            Step::Swap(i, j) => Some((*i, *j)),
            _ => None,
        })
        .collect()
}

pub fn highlight_count<P: Pacer>(viz: &Visualizer<RecordingSurface, P>) -> usize {
    viz.steps()
        .iter()
        .filter(|step| matches!(step, Step::Highlight(_)))
        .count()
}
