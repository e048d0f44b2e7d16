use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The sorting algorithms that can be animated.
/// Each variant is dispatched to its strategy in `sort_algorithms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Repeatedly selects the minimum of the unsorted suffix.
    Selection,

    /// Bubbles the largest remaining element to the end of each pass.
    Bubble,

    /// Grows a sorted prefix by shifting larger elements right.
    Insertion,

    /// Lomuto-partition quicksort.
    Quick,
}

impl Algorithm {
    /// Panel order, matching the order the panels are laid out on screen.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Quick,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Selection => "SELECTION SORT VISUALIZER",
            Algorithm::Bubble => "BUBBLE SORT VISUALIZER",
            Algorithm::Insertion => "INSERTION SORT VISUALIZER",
            Algorithm::Quick => "QUICK SORT VISUALIZER",
        }
    }

    /// Position of this algorithm in [`Algorithm::ALL`].
    pub fn index(self) -> usize {
        match self {
            Algorithm::Selection => 0,
            Algorithm::Bubble => 1,
            Algorithm::Insertion => 2,
            Algorithm::Quick => 3,
        }
    }

    pub fn next(self) -> Algorithm {
        Algorithm::ALL[(self.index() + 1) % Algorithm::ALL.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
        };
        f.write_str(name)
    }
}

/// The role markers carried by a single bar.
/// Roles are independent: a bar may be `current` and `comparing` at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    /// Inside the finalized prefix.
    pub sorted: bool,

    /// Under active inspection.
    pub current: bool,

    /// Holding the best candidate found so far.
    pub min: bool,

    /// Part of the pair (or singleton) being compared.
    pub comparing: bool,
}

impl Markers {
    pub const NONE: Markers = Markers {
        sorted: false,
        current: false,
        min: false,
        comparing: false,
    };

    pub fn is_none(&self) -> bool {
        *self == Markers::NONE
    }
}
