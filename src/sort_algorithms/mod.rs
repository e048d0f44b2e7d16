//! Sorting strategies, each written against the [`Visualizer`] primitives.
//!
//! Every strategy highlights and pauses before each comparison or positional
//! commitment, and ends by calling [`Visualizer::finish`].

pub mod bubble_sort;
pub mod insertion_sort;
pub mod quick_sort;
pub mod selection_sort;

pub use bubble_sort::bubble_sort;
pub use insertion_sort::insertion_sort;
pub use quick_sort::quick_sort;
pub use selection_sort::selection_sort;

use crate::common::base_visualizer::Visualizer;
use crate::common::enums::Algorithm;
use crate::common::error::Result;
use crate::common::surface::{Pacer, Surface};

impl Algorithm {
    /// Runs this algorithm's strategy over the visualizer's working array.
    pub fn run<S: Surface, P: Pacer>(self, viz: &mut Visualizer<S, P>) -> Result<()> {
        match self {
            Algorithm::Selection => selection_sort(viz),
            Algorithm::Bubble => bubble_sort(viz),
            Algorithm::Insertion => insertion_sort(viz),
            Algorithm::Quick => quick_sort(viz),
        }
    }
}
