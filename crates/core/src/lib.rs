//! # llmrandom
//!
//! Frequency analysis for "pick a random number between 0 and 99" trials
//! generated by LLMs at a range of sampling temperatures.
//!
//! The crate is the pure half of a little browser explorer: it decodes the
//! results payload, synthesizes the uniform baseline it is compared against,
//! and computes every aggregate the charts and tables bind to. Nothing here
//! touches the DOM, so all of it runs and tests natively.
//!
//! ## Quick Start
//!
//! ```
//! use llmrandom::prelude::*;
//!
//! // The synthetic baseline stands in for a downloaded payload here.
//! let observations = uniform_baseline();
//! let overall = value_counts(&observations);
//! assert_eq!(overall.total(), 6_600);
//!
//! // Recompute a per-model grid for any cutoff the slider can reach.
//! let grid = cutoff_grid(&observations, Model::O, 9);
//! assert_eq!(grid.value_totals().total(), 110);
//!
//! // A dataset measured against itself sits exactly at parity.
//! let rows = multiples_rows(&overall, &overall);
//! assert!(rows.iter().all(|row| row.ratio == 1.0));
//! ```
//!
//! ## Modules
//!
//! - [`dataset`]: payload decoding, the observation model, the baseline
//! - [`freq`]: dense frequency tables and the cutoff-bounded grid
//! - [`preference`]: digit-preference ratios for the summary tables
//! - [`scale`]: the heat ramp and low-count opacity fade
//! - [`fmt`]: wasm-safe fixed-point and percentage formatting
//! - [`playback`]: the trial-sweep state machine

pub mod dataset;
pub mod fmt;
pub mod freq;
pub mod playback;
pub mod preference;
pub mod scale;

/// Prelude module for convenient imports.
///
/// ```
/// use llmrandom::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dataset::{
        max_trial, parse_payload, uniform_baseline, Model, Observation, PayloadError, Temperature,
        MODEL_COUNT, TEMP_STEPS, TRIALS_PER_STREAM, VALUE_SPAN,
    };
    pub use crate::freq::{
        cutoff_grid, max_count_per_model, value_counts, CutoffGrid, GridCell, ValueCounts,
    };
    pub use crate::playback::{Playback, PlaybackState, PressAction, TickAction, TICK_MS};
    pub use crate::preference::{
        ends_with_rows, multiples_rows, preference_ratio, GroupRule, PreferenceRow,
    };
}
