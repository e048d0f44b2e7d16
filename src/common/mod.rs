pub mod base_visualizer;
pub mod common_visualizer;
pub mod enums;
pub mod error;
pub mod helper;
pub mod highlight;
pub mod logging;
pub mod runner;
pub mod session;
pub mod settings;
pub mod surface;
pub mod text_surface;

pub use base_visualizer::{StartOutcome, Stats, Step, Visualizer};
pub use common_visualizer::TerminalSurface;
pub use enums::*;
pub use error::{Result, VisualizerError};
pub use highlight::HighlightState;
pub use session::Session;
pub use settings::*;
pub use surface::{InstantPacer, Pacer, Surface, ThreadPacer};
pub use text_surface::TextSurface;
