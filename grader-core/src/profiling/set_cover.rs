#[cfg(test)]
#[path = "../../tests/unit/profiling/set_cover_test.rs"]
mod set_cover_test;

use crate::utils::{Float, GenericResult, InfoLogger, Timer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hint::black_box;
use std::io::{BufReader, Read};

/// A key of the dataset used by default.
pub const DEFAULT_DATASET_KEY: &str = "q1";

/// A collection of set cover instances grouped by problem size.
///
/// Instances are ordered by size: each consecutive `n_per_size` instances share the same size.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCoverDataset {
    /// Universes, one per instance.
    pub universes: Vec<Vec<usize>>,
    /// Families of subsets, one per instance.
    pub subsets: Vec<Vec<Vec<usize>>>,
    /// Expected answers (minimum cover sizes), one per instance. Optional.
    #[serde(default)]
    pub answers: Vec<usize>,
    /// Amount of instances per problem size.
    pub n_per_size: usize,
}

impl SetCoverDataset {
    /// Checks dataset consistency.
    pub fn validate(&self) -> GenericResult<()> {
        if self.n_per_size == 0 {
            return Err("instances per size must be positive".into());
        }

        if self.universes.len() != self.subsets.len() {
            return Err(format!(
                "amount of universes and subset families differ: {} vs {}",
                self.universes.len(),
                self.subsets.len()
            )
            .into());
        }

        if !self.answers.is_empty() && self.answers.len() != self.universes.len() {
            return Err(format!(
                "amount of answers and instances differ: {} vs {}",
                self.answers.len(),
                self.universes.len()
            )
            .into());
        }

        if self.universes.len() % self.n_per_size != 0 {
            return Err(format!(
                "amount of instances {} is not a multiple of instances per size {}",
                self.universes.len(),
                self.n_per_size
            )
            .into());
        }

        Ok(())
    }

    /// Returns amount of distinct problem sizes.
    pub fn sizes(&self) -> usize {
        self.universes.len().checked_div(self.n_per_size).unwrap_or_default()
    }

    /// Returns instances as pairs of universe and subsets.
    pub fn instances(&self) -> impl Iterator<Item = (&[usize], &[Vec<usize>])> + '_ {
        self.universes
            .iter()
            .zip(self.subsets.iter())
            .map(|(universe, subsets)| (universe.as_slice(), subsets.as_slice()))
    }
}

/// Reads the dataset stored under the key from a json document of named datasets.
pub fn read_set_cover_dataset<R: Read>(reader: BufReader<R>, key: &str) -> GenericResult<SetCoverDataset> {
    let mut datasets: HashMap<String, SetCoverDataset> = serde_json::from_reader(reader)?;
    let dataset = datasets.remove(key).ok_or_else(|| format!("cannot find dataset '{key}'"))?;

    dataset.validate().map_err(|err| err.context(&format!("invalid dataset '{key}'")))?;

    Ok(dataset)
}

/// Average runtimes (in seconds) of two implementations per problem size.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingReport {
    /// Runtimes of the reduction based implementation.
    pub reduction_times: Vec<Float>,
    /// Runtimes of the naive implementation.
    pub naive_times: Vec<Float>,
}

impl TimingReport {
    /// Returns how many times the reduction is faster than the naive implementation overall.
    /// Returns `None` when the reduction has no measured runtime, e.g. for an empty dataset.
    pub fn speedup(&self) -> Option<Float> {
        let reduction_total = self.reduction_times.iter().sum::<Float>();

        (reduction_total > 0.).then(|| self.naive_times.iter().sum::<Float>() / reduction_total)
    }
}

/// Times both set cover implementations on every instance of the dataset and averages their
/// runtimes per problem size.
pub fn run_timing<FR, FN, RR, RN>(
    dataset: &SetCoverDataset,
    mut reduction: FR,
    mut naive: FN,
    logger: &InfoLogger,
) -> GenericResult<TimingReport>
where
    FR: FnMut(&[usize], &[Vec<usize>]) -> RR,
    FN: FnMut(&[usize], &[Vec<usize>]) -> RN,
{
    dataset.validate()?;

    let n_per_size = dataset.n_per_size;
    let total = dataset.universes.len();
    let mut report =
        TimingReport { reduction_times: vec![0.; dataset.sizes()], naive_times: vec![0.; dataset.sizes()] };

    dataset.instances().enumerate().for_each(|(idx, (universe, subsets))| {
        let bucket = idx / n_per_size;

        let (_, duration) = Timer::measure_duration(|| black_box(reduction(universe, subsets)));
        report.reduction_times[bucket] += duration.as_secs_f64() / n_per_size as Float;

        let (_, duration) = Timer::measure_duration(|| black_box(naive(universe, subsets)));
        report.naive_times[bucket] += duration.as_secs_f64() / n_per_size as Float;

        if (idx + 1) % n_per_size == 0 {
            (logger)(&format!("processed {}/{total} instances", idx + 1));
        }
    });

    if let Some(speedup) = report.speedup() {
        (logger)(&format!("Approximate speedup: {speedup:.3}"));
    }

    Ok(report)
}
