use std::time::Duration;

use crate::common::enums::Markers;
use crate::common::error::Result;

/// Where a visualizer draws its bars and control hints.
///
/// The driver only ever writes to a surface; nothing is read back from it.
pub trait Surface {
    /// Draws one bar per element, scaled against the largest value.
    fn render(&mut self, values: &[u32]) -> Result<()>;

    /// Replaces every role marker on the bar at `index`.
    fn set_markers(&mut self, index: usize, markers: Markers) -> Result<()>;

    /// Updates the height and label of the bar at `index` after a value change.
    fn update_bar(&mut self, index: usize, value: u32, max: u32) -> Result<()>;

    /// Enables or disables the generate/start controls.
    fn set_controls_enabled(&mut self, enabled: bool) -> Result<()>;

    /// Describes the step that is about to become visible.
    fn describe(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }

    /// Makes queued changes visible.
    fn present(&mut self) -> Result<()> {
        Ok(())
    }

    /// Adapts the layout to a new terminal size; takes effect on the next present.
    fn resize(&mut self, _width: u16, _height: u16) {}
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn render(&mut self, values: &[u32]) -> Result<()> {
        (**self).render(values)
    }

    fn set_markers(&mut self, index: usize, markers: Markers) -> Result<()> {
        (**self).set_markers(index, markers)
    }

    fn update_bar(&mut self, index: usize, value: u32, max: u32) -> Result<()> {
        (**self).update_bar(index, value, max)
    }

    fn set_controls_enabled(&mut self, enabled: bool) -> Result<()> {
        (**self).set_controls_enabled(enabled)
    }

    fn describe(&mut self, message: &str) -> Result<()> {
        (**self).describe(message)
    }

    fn present(&mut self) -> Result<()> {
        (**self).present()
    }

    fn resize(&mut self, width: u16, height: u16) {
        (**self).resize(width, height)
    }
}

/// The single timed suspension used for all pacing.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Blocks the calling thread for the full delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Returns immediately, remembering how much time it was asked to wait.
#[derive(Debug, Clone, Default)]
pub struct InstantPacer {
    pauses: Vec<Duration>,
}

impl InstantPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Pacer for InstantPacer {
    fn pause(&mut self, delay: Duration) {
        self.pauses.push(delay);
    }
}

/// Surface that draws nothing, for strategy tests that only read the step log.
#[cfg(test)]
pub(crate) struct BlankSurface;

#[cfg(test)]
impl Surface for BlankSurface {
    fn render(&mut self, _values: &[u32]) -> Result<()> {
        Ok(())
    }

    fn set_markers(&mut self, _index: usize, _markers: Markers) -> Result<()> {
        Ok(())
    }

    fn update_bar(&mut self, _index: usize, _value: u32, _max: u32) -> Result<()> {
        Ok(())
    }

    fn set_controls_enabled(&mut self, _enabled: bool) -> Result<()> {
        Ok(())
    }
}
