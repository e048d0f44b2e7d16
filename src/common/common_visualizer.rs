use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType, size},
};
use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use crate::common::enums::{Algorithm, Markers};
use crate::common::error::Result;
use crate::common::surface::Surface;

const ARRAY_START_Y: usize = 5;

/// Bar chart drawn with crossterm; every `present` repaints the whole screen.
pub struct TerminalSurface<W: Write = Stdout> {
    out: W,
    algorithm: Algorithm,
    delay: Duration,
    width: u16,
    height: u16,
    values: Vec<u32>,
    markers: Vec<Markers>,
    message: String,
    controls_enabled: bool,
    finished: bool,
    dirty: bool,
}

impl TerminalSurface<Stdout> {
    /// A surface on stdout, sized to the current terminal.
    pub fn stdout(algorithm: Algorithm, delay: Duration) -> Result<Self> {
        let (width, height) = size()?;
        Ok(Self::new(stdout(), algorithm, delay, width, height))
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, algorithm: Algorithm, delay: Duration, width: u16, height: u16) -> Self {
        Self {
            out,
            algorithm,
            delay,
            width,
            height,
            values: Vec::new(),
            markers: Vec::new(),
            message: String::new(),
            controls_enabled: true,
            finished: false,
            dirty: true,
        }
    }

    /// Repaints even if nothing changed, e.g. after switching panels.
    pub fn redraw(&mut self) -> Result<()> {
        self.dirty = true;
        self.present()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_screen(&mut self) -> Result<()> {
        self.out.queue(Clear(ClearType::All))?;
        self.draw_title()?;
        self.draw_tabs()?;
        let max_bar_height = self.max_bar_height();
        self.draw_array_bars(max_bar_height)?;
        self.draw_legend(max_bar_height)?;
        self.draw_statistics()?;
        self.draw_operation_info()?;
        self.draw_controls()?;
        self.out.flush()?;
        Ok(())
    }

    fn max_bar_height(&self) -> usize {
        (self.height as usize).saturating_sub(16).clamp(3, 20)
    }

    fn draw_title(&mut self) -> Result<()> {
        let title = self.algorithm.title();
        let title_x = (self.width.saturating_sub(title.len() as u16)) / 2;
        self.out.queue(MoveTo(title_x, 1))?;
        self.out.queue(SetAttribute(Attribute::Bold))?;
        self.out.queue(SetForegroundColor(Color::Yellow))?;
        self.out.queue(SetBackgroundColor(Color::DarkBlue))?;
        self.out.queue(Print(title))?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    // One tab per panel, the active one inverted
    fn draw_tabs(&mut self) -> Result<()> {
        let tabs: Vec<String> = Algorithm::ALL
            .iter()
            .map(|a| format!(" {}. {} ", a.index() + 1, a))
            .collect();
        let total: usize = tabs.iter().map(|t| t.len() + 1).sum();
        let mut x = (self.width as usize).saturating_sub(total) / 2;
        for (algorithm, tab) in Algorithm::ALL.iter().zip(&tabs) {
            self.out.queue(MoveTo(x as u16, 3))?;
            if *algorithm == self.algorithm {
                self.out.queue(SetForegroundColor(Color::Black))?;
                self.out.queue(SetBackgroundColor(Color::White))?;
            } else {
                self.out.queue(SetForegroundColor(Color::DarkGrey))?;
            }
            self.out.queue(Print(tab))?;
            self.out.queue(ResetColor)?;
            x += tab.len() + 1;
        }
        Ok(())
    }

    fn draw_array_bars(&mut self, max_bar_height: usize) -> Result<()> {
        let array_len = self.values.len();
        if array_len == 0 {
            return Ok(());
        }
        let max_value = self.values.iter().copied().max().unwrap_or(1).max(1) as f64;

        let available_width = (self.width as usize).saturating_sub(4);
        let bar_width = if available_width / array_len >= 3 {
            3
        } else if available_width / array_len >= 2 {
            2
        } else {
            1
        };
        let spacing = if bar_width >= 2 { 1 } else { 0 };
        let total_width_needed = array_len * bar_width + (array_len - 1) * spacing;
        let start_x = (self.width as usize).saturating_sub(total_width_needed) / 2;

        for i in 0..array_len {
            let value = self.values[i];
            let bar_height = (((value as f64 / max_value) * max_bar_height as f64) as usize).max(1);
            let x = start_x + i * (bar_width + spacing);
            let (fg_color, bg_color) = Self::get_state_colors(self.markers[i]);

            // Bottom to top
            for h in 0..bar_height {
                let y = ARRAY_START_Y + max_bar_height - h;
                self.out.queue(MoveTo(x as u16, y as u16))?;
                self.out.queue(SetForegroundColor(fg_color))?;
                self.out.queue(SetBackgroundColor(bg_color))?;
                self.out.queue(Print("█".repeat(bar_width)))?;
                self.out.queue(ResetColor)?;
            }

            let value_str = value.to_string();
            let value_x = x + (bar_width.saturating_sub(value_str.len())) / 2;
            self.out
                .queue(MoveTo(value_x as u16, (ARRAY_START_Y + max_bar_height + 1) as u16))?;
            self.out.queue(SetForegroundColor(Color::White))?;
            self.out.queue(Print(value_str))?;

            let index_str = i.to_string();
            let index_x = x + (bar_width.saturating_sub(index_str.len())) / 2;
            self.out
                .queue(MoveTo(index_x as u16, (ARRAY_START_Y + max_bar_height + 2) as u16))?;
            self.out.queue(SetForegroundColor(Color::DarkGrey))?;
            self.out.queue(Print(index_str))?;
            self.out.queue(ResetColor)?;
        }
        Ok(())
    }

    /// Colors for a bar; when roles overlap, current wins over comparing,
    /// comparing over min, and min over sorted.
    pub fn get_state_colors(markers: Markers) -> (Color, Color) {
        if markers.current {
            (Color::White, Color::DarkBlue)
        } else if markers.comparing {
            (Color::Magenta, Color::DarkMagenta)
        } else if markers.min {
            (Color::Yellow, Color::DarkYellow)
        } else if markers.sorted {
            (Color::Green, Color::DarkGreen)
        } else {
            (Color::Cyan, Color::Reset)
        }
    }

    fn draw_legend(&mut self, max_bar_height: usize) -> Result<()> {
        let items = [
            ("Normal", Color::Cyan),
            ("Current", Color::White),
            ("Comparing", Color::Magenta),
            ("Min", Color::Yellow),
            ("Sorted", Color::Green),
        ];
        let legend_y = ARRAY_START_Y + max_bar_height + 4;
        let legend_width = items.len() * 15;
        let legend_start_x = (self.width as usize).saturating_sub(legend_width) / 2;
        for (i, (label, color)) in items.iter().enumerate() {
            let x = legend_start_x + i * 15;
            self.out.queue(MoveTo(x as u16, legend_y as u16))?;
            self.out.queue(SetForegroundColor(*color))?;
            self.out.queue(Print("██"))?;
            self.out.queue(ResetColor)?;
            self.out.queue(Print(format!(" {}", label)))?;
        }
        Ok(())
    }

    fn draw_statistics(&mut self) -> Result<()> {
        let max_value = self.values.iter().copied().max().unwrap_or(0);
        let stats = [
            format!("Array Size: {}", self.values.len()),
            format!("Max Value: {}", max_value),
            format!("Delay: {}ms", self.delay.as_millis()),
        ];
        let stats_y = self.height.saturating_sub(8);
        for (i, stat) in stats.iter().enumerate() {
            let x = 5 + i * 25;
            self.out.queue(MoveTo(x as u16, stats_y))?;
            self.out.queue(SetForegroundColor(Color::Cyan))?;
            self.out.queue(Print(stat))?;
            self.out.queue(ResetColor)?;
        }
        Ok(())
    }

    fn draw_operation_info(&mut self) -> Result<()> {
        if self.message.is_empty() {
            return Ok(());
        }
        let color = if self.finished { Color::Green } else { Color::White };
        let op_x = (self.width.saturating_sub(self.message.len() as u16)) / 2;
        self.out.queue(MoveTo(op_x, self.height.saturating_sub(6)))?;
        self.out.queue(SetForegroundColor(color))?;
        if self.finished {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        self.out.queue(Print(&self.message))?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    fn status(&self) -> (&'static str, Color) {
        if !self.controls_enabled {
            ("RUNNING...", Color::Yellow)
        } else if self.finished {
            ("COMPLETED!", Color::Green)
        } else {
            ("READY", Color::White)
        }
    }

    fn draw_controls(&mut self) -> Result<()> {
        let controls_y = self.height.saturating_sub(4);
        let (status, status_color) = self.status();
        self.out.queue(MoveTo(5, controls_y))?;
        self.out.queue(SetAttribute(Attribute::Bold))?;
        self.out.queue(SetForegroundColor(status_color))?;
        self.out.queue(Print(format!("Status: {}", status)))?;
        self.out.queue(ResetColor)?;

        let (controls, color) = if self.controls_enabled {
            (
                "G: New Array | SPACE: Start | TAB/1-4: Switch | Q: Quit",
                Color::Grey,
            )
        } else {
            ("Sorting... (Q quits once the sort has finished)", Color::DarkGrey)
        };
        let controls_x = (self.width.saturating_sub(controls.len() as u16)) / 2;
        self.out.queue(MoveTo(controls_x, controls_y + 1))?;
        self.out.queue(SetForegroundColor(color))?;
        self.out.queue(Print(controls))?;
        self.out.queue(ResetColor)?;
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn render(&mut self, values: &[u32]) -> Result<()> {
        self.values = values.to_vec();
        self.markers = vec![Markers::NONE; values.len()];
        self.message.clear();
        self.finished = false;
        self.dirty = true;
        Ok(())
    }

    fn set_markers(&mut self, index: usize, markers: Markers) -> Result<()> {
        if let Some(slot) = self.markers.get_mut(index) {
            self.dirty |= *slot != markers;
            *slot = markers;
        }
        Ok(())
    }

    fn update_bar(&mut self, index: usize, value: u32, _max: u32) -> Result<()> {
        // Heights are rescaled against the array maximum on every repaint.
        if let Some(slot) = self.values.get_mut(index) {
            self.dirty |= *slot != value;
            *slot = value;
        }
        Ok(())
    }

    fn set_controls_enabled(&mut self, enabled: bool) -> Result<()> {
        // Controls come back on only when a sort has run to the end.
        self.finished = enabled && !self.controls_enabled;
        self.controls_enabled = enabled;
        self.dirty = true;
        self.present()
    }

    fn describe(&mut self, message: &str) -> Result<()> {
        self.message = message.to_string();
        self.dirty = true;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if self.dirty {
            self.draw_screen()?;
            self.dirty = false;
        }
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.dirty = true;
    }
}
