//! Frequency aggregation over observation lists.
//!
//! Everything here is a pure function of its inputs; the cutoff-sensitive
//! paths are cheap enough to recompute on every slider move.

use crate::dataset::{Model, Observation, Temperature, MODEL_COUNT, TEMP_STEPS, VALUE_SPAN};

/// Dense per-value counts for outcomes 0..=99.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCounts {
    counts: [u32; VALUE_SPAN],
}

impl Default for ValueCounts {
    fn default() -> Self {
        Self {
            counts: [0; VALUE_SPAN],
        }
    }
}

impl ValueCounts {
    #[inline]
    pub fn record(&mut self, value: u8) {
        self.counts[value as usize] += 1;
    }

    #[inline]
    pub fn get(&self, value: u8) -> u32 {
        self.counts[value as usize]
    }

    /// Largest single-value count.
    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Observed values only, ascending.
    pub fn nonzero(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(value, &count)| (value as u8, count))
    }

    /// The `n` most frequent values, highest count first. The sort is
    /// stable, so ties resolve to the smaller value.
    pub fn top(&self, n: usize) -> Vec<(u8, u32)> {
        let mut entries: Vec<(u8, u32)> = self.nonzero().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

/// Counts every observation's value, regardless of model or temperature.
pub fn value_counts(observations: &[Observation]) -> ValueCounts {
    let mut counts = ValueCounts::default();
    for o in observations {
        counts.record(o.value);
    }
    counts
}

/// Per-model maximum single-value count over the full dataset, indexed by
/// [`Model::index`]. Fixes each model's bar-chart scale so bars grow toward
/// it during a sweep.
pub fn max_count_per_model(observations: &[Observation]) -> [u32; MODEL_COUNT] {
    let mut counts = [ValueCounts::default(); MODEL_COUNT];
    for o in observations {
        counts[o.model.index()].record(o.value);
    }
    let mut maxima = [0u32; MODEL_COUNT];
    for (slot, model_counts) in maxima.iter_mut().zip(counts.iter()) {
        *slot = model_counts.max();
    }
    maxima
}

/// One occupied heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub temperature: Temperature,
    pub value: u8,
    pub count: u32,
    /// Whether this value is the most recent one seen in its row.
    pub latest: bool,
}

impl GridCell {
    /// Stable composite key for keyed re-rendering.
    pub fn key(&self) -> u16 {
        self.temperature.row() as u16 * VALUE_SPAN as u16 + self.value as u16
    }
}

/// Cutoff-bounded frequency grid for one model: counts per
/// (temperature, value) cell, the most recent value in each temperature row,
/// and per-value totals across rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutoffGrid {
    cells: [[u32; VALUE_SPAN]; TEMP_STEPS],
    latest: [Option<u8>; TEMP_STEPS],
    totals: ValueCounts,
}

impl Default for CutoffGrid {
    fn default() -> Self {
        Self {
            cells: [[0; VALUE_SPAN]; TEMP_STEPS],
            latest: [None; TEMP_STEPS],
            totals: ValueCounts::default(),
        }
    }
}

impl CutoffGrid {
    pub fn count(&self, temperature: Temperature, value: u8) -> u32 {
        self.cells[temperature.row()][value as usize]
    }

    /// Most recent value at or before the cutoff for this row, if any.
    pub fn latest(&self, temperature: Temperature) -> Option<u8> {
        self.latest[temperature.row()]
    }

    /// Per-value totals across all temperature rows.
    pub fn value_totals(&self) -> &ValueCounts {
        &self.totals
    }

    /// Occupied cells in row-major order, keyed for renderer reconciliation.
    pub fn cells(&self) -> Vec<GridCell> {
        let mut out = Vec::new();
        for temperature in Temperature::all() {
            let row = &self.cells[temperature.row()];
            for (value, &count) in row.iter().enumerate() {
                if count > 0 {
                    let value = value as u8;
                    out.push(GridCell {
                        temperature,
                        value,
                        count,
                        latest: self.latest[temperature.row()] == Some(value),
                    });
                }
            }
        }
        out
    }
}

/// Builds the grid for one model from observations with `trial <= cutoff`.
///
/// The list must be ordered by ascending trial (as [`parse_payload`] returns
/// it); the scan stops at the first trial past the cutoff, since everything
/// after it is out of range too.
///
/// [`parse_payload`]: crate::dataset::parse_payload
pub fn cutoff_grid(observations: &[Observation], model: Model, cutoff: u32) -> CutoffGrid {
    let mut grid = CutoffGrid::default();
    for o in observations {
        if o.trial > cutoff {
            break;
        }
        if o.model == model {
            grid.cells[o.temperature.row()][o.value as usize] += 1;
            grid.latest[o.temperature.row()] = Some(o.value);
            grid.totals.record(o.value);
        }
    }
    grid
}
