use crossterm::event::{Event, KeyCode, KeyEventKind, poll, read};
use rand::Rng;
use std::io::Write;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info};

use crate::common::base_visualizer::{StartOutcome, Visualizer};
use crate::common::common_visualizer::TerminalSurface;
use crate::common::enums::Algorithm;
use crate::common::error::{Result, VisualizerError};
use crate::common::helper::TerminalGuard;
use crate::common::session::Session;
use crate::common::settings::Settings;
use crate::common::surface::{Pacer, Surface, ThreadPacer};
use crate::common::text_surface::TextSurface;

type Finished<S, P> = (Visualizer<S, P>, Result<StartOutcome>);

/// One algorithm's visualizer together with the worker that may be running it.
pub struct Panel<S, P> {
    algorithm: Algorithm,
    session: Session,
    idle: Option<Visualizer<S, P>>,
    worker: Option<JoinHandle<Finished<S, P>>>,
    // Terminal size that arrived while the worker owned the surface.
    pending_size: Option<(u16, u16)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStart {
    Started,
    Ignored,
}

impl<S, P> Panel<S, P>
where
    S: Surface + Send + 'static,
    P: Pacer + Send + 'static,
{
    pub fn new(visualizer: Visualizer<S, P>) -> Self {
        Self {
            algorithm: visualizer.algorithm(),
            session: visualizer.session().clone(),
            idle: Some(visualizer),
            worker: None,
            pending_size: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn is_sorting(&self) -> bool {
        self.worker.is_some() || self.session.is_running()
    }

    /// The visualizer, unless a worker currently owns it.
    pub fn visualizer(&self) -> Option<&Visualizer<S, P>> {
        self.idle.as_ref()
    }

    pub fn visualizer_mut(&mut self) -> Option<&mut Visualizer<S, P>> {
        self.idle.as_mut()
    }

    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        match self.idle.as_mut() {
            Some(viz) if !self.session.is_running() => viz.generate(rng),
            _ => {
                debug!(algorithm = %self.algorithm, "Generate rejected while sorting");
                Err(VisualizerError::SortInProgress)
            }
        }
    }

    /// Resizes the surface now, or once the running sort hands it back.
    pub fn resize(&mut self, width: u16, height: u16) {
        match self.idle.as_mut() {
            Some(viz) => viz.surface_mut().resize(width, height),
            None => self.pending_size = Some((width, height)),
        }
    }

    /// Hands the visualizer to a worker thread and starts its sort.
    pub fn start(&mut self) -> PanelStart {
        if self.session.is_running() {
            debug!(algorithm = %self.algorithm, "Start ignored, sort already running");
            return PanelStart::Ignored;
        }
        let Some(mut viz) = self.idle.take() else {
            debug!(algorithm = %self.algorithm, "Start ignored, sort already running");
            return PanelStart::Ignored;
        };
        self.worker = Some(thread::spawn(move || {
            let result = viz.start();
            (viz, result)
        }));
        PanelStart::Started
    }

    /// Takes the visualizer back once its worker has finished.
    pub fn poll(&mut self) -> Result<Option<StartOutcome>> {
        match &self.worker {
            Some(handle) if handle.is_finished() => self.join(),
            _ => Ok(None),
        }
    }

    /// Blocks until the running sort (if any) has finished.
    pub fn wait(&mut self) -> Result<Option<StartOutcome>> {
        self.join()
    }

    fn join(&mut self) -> Result<Option<StartOutcome>> {
        let Some(handle) = self.worker.take() else {
            return Ok(None);
        };
        match handle.join() {
            Ok((mut viz, result)) => {
                if let Some((width, height)) = self.pending_size.take() {
                    viz.surface_mut().resize(width, height);
                }
                self.idle = Some(viz);
                result.map(Some)
            }
            Err(_) => {
                self.session.end();
                Err(VisualizerError::WorkerPanicked {
                    algorithm: self.algorithm,
                })
            }
        }
    }
}

/// Builds one visualizer per algorithm, each with its own freshly generated array.
pub fn setup_panels<S, P, R, F>(settings: &Settings, rng: &mut R, mut build: F) -> Result<Vec<Panel<S, P>>>
where
    S: Surface + Send + 'static,
    P: Pacer + Send + 'static,
    R: Rng + ?Sized,
    F: FnMut(Algorithm) -> Result<(S, P)>,
{
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let (surface, pacer) = build(algorithm)?;
            let mut viz = Visualizer::new(algorithm, surface, pacer)
                .with_shape(settings.array_len, settings.value_range())
                .with_delay(settings.delay());
            viz.generate(rng)?;
            Ok(Panel::new(viz))
        })
        .collect()
}

/// What a key press asks the runner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Generate,
    Start,
    Switch(Algorithm),
    Next,
    Quit,
}

pub fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('g') | KeyCode::Char('G') => Some(Command::Generate),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Start),
        KeyCode::Tab => Some(Command::Next),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Some(Command::Switch(Algorithm::ALL[index]))
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Interactive mode: one panel per algorithm on the alternate screen.
///
/// Returns the algorithm of the last completed sort, if any.
pub fn run_interactive<R: Rng + ?Sized>(
    settings: &Settings,
    initial: Algorithm,
    rng: &mut R,
) -> Result<Option<Algorithm>> {
    let guard = TerminalGuard::enter()?;
    let delay = settings.delay();
    let mut panels = setup_panels(settings, rng, |algorithm| {
        Ok((TerminalSurface::stdout(algorithm, delay)?, ThreadPacer))
    })?;

    let mut active = initial.index();
    let mut last_completed = None;
    let mut quit_requested = false;
    redraw(&mut panels[active])?;

    loop {
        for panel in panels.iter_mut() {
            if let Some(outcome) = panel.poll()? {
                info!(algorithm = %panel.algorithm(), ?outcome, "Panel idle again");
                last_completed = Some(panel.algorithm());
            }
        }

        let busy = panels.iter().any(Panel::is_sorting);
        if quit_requested && !busy {
            break;
        }

        if !poll(Duration::from_millis(50))? {
            continue;
        }
        match read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                let Some(command) = command_for(key_event.code) else {
                    continue;
                };
                match command {
                    Command::Generate => match panels[active].generate(rng) {
                        Err(VisualizerError::SortInProgress) => {}
                        other => other?,
                    },
                    Command::Start => {
                        panels[active].start();
                    }
                    Command::Switch(_) | Command::Next if busy => {
                        debug!("Panel switch ignored while sorting");
                    }
                    Command::Switch(algorithm) => {
                        active = algorithm.index();
                        redraw(&mut panels[active])?;
                    }
                    Command::Next => {
                        active = panels[active].algorithm().next().index();
                        redraw(&mut panels[active])?;
                    }
                    Command::Quit => {
                        quit_requested = true;
                        if busy {
                            info!("Quit requested, waiting for the running sort");
                        }
                    }
                }
            }
            Event::Resize(width, height) => {
                for panel in panels.iter_mut() {
                    panel.resize(width, height);
                }
                if !busy {
                    redraw(&mut panels[active])?;
                }
            }
            _ => {}
        }
    }

    guard.leave()?;
    Ok(last_completed)
}

fn redraw(panel: &mut Panel<TerminalSurface, ThreadPacer>) -> Result<()> {
    match panel.visualizer_mut() {
        Some(viz) => viz.surface_mut().redraw(),
        None => Ok(()),
    }
}

/// Plain mode: sorts once, writing one text frame per step to `out`.
pub fn run_plain<W, R>(
    settings: &Settings,
    algorithm: Algorithm,
    values: Option<Vec<u32>>,
    rng: &mut R,
    out: W,
) -> Result<(StartOutcome, W)>
where
    W: Write,
    R: Rng + ?Sized,
{
    let mut viz = Visualizer::new(algorithm, TextSurface::new(out), ThreadPacer)
        .with_shape(settings.array_len, settings.value_range())
        .with_delay(settings.delay());
    match values {
        Some(values) => viz.load(values)?,
        None => viz.generate(rng)?,
    }
    let outcome = viz.start()?;
    Ok((outcome, viz.into_surface().into_inner()))
}
