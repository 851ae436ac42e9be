//! Contains logic to check homework answers under a timeout guard.

#[cfg(test)]
#[path = "../../tests/unit/extensions/check_test.rs"]
mod check_test;

use grader_core::checks::{is_independent_set, validate_tour};
use grader_core::guard::TimeoutGuard;
use grader_core::utils::{Float, GenericResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// An independent set answer.
#[derive(Clone, Debug, Deserialize)]
pub struct IndependentSetInput {
    /// An adjacency list of the graph.
    pub adjacency: Vec<Vec<usize>>,
    /// Vertices of the set.
    pub vertices: Vec<usize>,
}

/// A traveling salesman tour answer.
#[derive(Clone, Debug, Deserialize)]
pub struct TourInput {
    /// A distance matrix, `null` marks a missing edge.
    #[serde(deserialize_with = "deserialize_distances")]
    pub distances: Vec<Vec<Float>>,
    /// Vertices in visiting order.
    pub tour: Vec<usize>,
}

/// A result of the check.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Whether the answer is valid.
    pub valid: bool,
    /// A cost of the answer, if applicable.
    pub cost: Option<Float>,
    /// Whether the check was interrupted by timeout.
    pub timed_out: bool,
}

impl CheckResult {
    fn interrupted() -> Self {
        Self { valid: false, cost: None, timed_out: true }
    }
}

/// Checks an answer given in the format. The check runs on a worker thread bounded by the guard.
pub fn check_input<R: Read>(format: &str, reader: BufReader<R>, guard: &TimeoutGuard) -> GenericResult<CheckResult> {
    match format {
        "independent-set" => {
            let input: IndependentSetInput = serde_json::from_reader(reader)?;

            run_guarded(guard, move || {
                is_independent_set(&input.adjacency, &input.vertices)
                    .map(|valid| CheckResult { valid, cost: None, timed_out: false })
            })
        }
        "tour" => {
            let input: TourInput = serde_json::from_reader(reader)?;

            run_guarded(guard, move || {
                validate_tour(&input.tour, &input.distances)
                    .map(|cost| CheckResult { valid: cost.is_some(), cost, timed_out: false })
            })
        }
        _ => Err(format!("unknown format: '{format}'").into()),
    }
}

/// Writes check result as json.
pub fn write_check_result<W: Write>(mut writer: BufWriter<W>, result: &CheckResult) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

fn run_guarded<F>(guard: &TimeoutGuard, check: F) -> GenericResult<CheckResult>
where
    F: FnOnce() -> GenericResult<CheckResult> + Send + 'static,
{
    guard.run_detached(move |_| check()).unwrap_or_else(|| Ok(CheckResult::interrupted()))
}

fn deserialize_distances<'de, D>(deserializer: D) -> Result<Vec<Vec<Float>>, D::Error>
where
    D: Deserializer<'de>,
{
    let distances: Vec<Vec<Option<Float>>> = Deserialize::deserialize(deserializer)?;

    Ok(distances
        .into_iter()
        .map(|row| row.into_iter().map(|distance| distance.unwrap_or(Float::INFINITY)).collect())
        .collect())
}
