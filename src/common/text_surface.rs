use std::io::Write;

use crate::common::enums::Markers;
use crate::common::error::Result;
use crate::common::surface::Surface;

/// Line-oriented surface: every presented frame becomes one line of text.
///
/// Each value is followed by the glyphs of the roles it carries:
/// `*` current, `~` comparing, `!` min, `+` sorted.
pub struct TextSurface<W: Write> {
    out: W,
    values: Vec<u32>,
    markers: Vec<Markers>,
    message: Option<String>,
    dirty: bool,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            values: Vec::new(),
            markers: Vec::new(),
            message: None,
            dirty: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn frame(&self) -> String {
        let cells: Vec<String> = self
            .values
            .iter()
            .zip(&self.markers)
            .map(|(value, markers)| format!("{}{}", value, glyphs(*markers)))
            .collect();
        format!("[ {} ]", cells.join(" "))
    }
}

fn glyphs(markers: Markers) -> String {
    let mut tag = String::new();
    if markers.current {
        tag.push('*');
    }
    if markers.comparing {
        tag.push('~');
    }
    if markers.min {
        tag.push('!');
    }
    if markers.sorted {
        tag.push('+');
    }
    tag
}

impl<W: Write> Surface for TextSurface<W> {
    fn render(&mut self, values: &[u32]) -> Result<()> {
        self.values = values.to_vec();
        self.markers = vec![Markers::NONE; values.len()];
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
        if let Some(slot) = self.values.get_mut(index) {
            self.dirty |= *slot != value;
            *slot = value;
        }
        Ok(())
    }

    // A trace has no controls to toggle.
    fn set_controls_enabled(&mut self, _enabled: bool) -> Result<()> {
        Ok(())
    }

    fn describe(&mut self, message: &str) -> Result<()> {
        self.message = Some(message.to_string());
        self.dirty = true;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let frame = self.frame();
        match self.message.take() {
            Some(message) => writeln!(self.out, "{}  {}", frame, message)?,
            None => writeln!(self.out, "{}", frame)?,
        }
        self.out.flush()?;
        self.dirty = false;
        Ok(())
    }
}
