//! Animated sorting algorithms for the terminal.
//!
//! A [`Visualizer`](common::Visualizer) owns a small working array and exposes
//! the primitives (highlight, pause, swap, finish) that each strategy in
//! [`sort_algorithms`] is written against. Surfaces decide how the steps are
//! shown: a crossterm bar chart or a plain text trace.

pub mod common;
pub mod sort_algorithms;
