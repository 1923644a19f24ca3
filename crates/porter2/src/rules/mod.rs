//! Suffix rules and the ordered steps built from them.
//!
//! Every step is a [`Step`]: a table of [`SuffixRule`] records consumed by
//! one longest-match driver. The exception tables that bypass or patch the
//! steps live in [`exceptions`].

pub mod exceptions;
mod steps;
mod table;

pub use steps::{PIPELINE, STEP_0, STEP_1A, STEP_1B, STEP_1C, STEP_2, STEP_3, STEP_4, STEP_5};
pub use table::{Action, Step, SuffixRule};
