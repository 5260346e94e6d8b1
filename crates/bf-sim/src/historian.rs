//! Per-signal time series recorded by a simulation run.

use std::collections::BTreeMap;

use bf_core::Real;
use serde::{Deserialize, Serialize};

/// Recorded simulation output: one ordered value sequence per signal, one
/// entry per simulated time sample.
///
/// Produced fresh by each `simulate` call and read-only to the caller
/// afterward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Historian {
    series: BTreeMap<String, Vec<Real>>,
}

impl Historian {
    /// Prepare empty series for the given signal names.
    pub(crate) fn with_signals<'a>(names: impl Iterator<Item = &'a String>) -> Self {
        Self {
            series: names.map(|n| (n.clone(), Vec::new())).collect(),
        }
    }

    /// Append one registry snapshot. The snapshot's key set must match the
    /// signals this historian was prepared with.
    pub(crate) fn record(&mut self, snapshot: &BTreeMap<String, Real>) {
        for (name, &value) in snapshot {
            self.series
                .get_mut(name)
                .expect("historian is prepared with the registry's key set")
                .push(value);
        }
    }

    /// The recorded values for a signal, in time order.
    pub fn get(&self, signal: &str) -> Option<&[Real]> {
        self.series.get(signal).map(Vec::as_slice)
    }

    /// All recorded signal names, sorted.
    pub fn signal_names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Number of recorded time samples.
    pub fn len(&self) -> usize {
        self.series.values().next().map_or(0, Vec::len)
    }

    /// True when no samples have been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
