#[cfg(test)]
#[path = "../../tests/unit/checks/tour_test.rs"]
mod tour_test;

use crate::utils::{Float, GenericResult};

/// A dense distance matrix where `Float::INFINITY` marks a missing edge.
pub type DistanceMatrix = Vec<Vec<Float>>;

/// Validates a traveling salesman tour and returns its cost.
///
/// The tour is a closed cycle: the edge from the last vertex back to the first one is included.
/// Returns `Ok(None)` when the tour uses a missing (infinite) edge, `Ok(Some(cost))` otherwise.
/// An empty tour costs nothing. Returns an error when a vertex lies outside the matrix.
pub fn validate_tour(tour: &[usize], distances: &[Vec<Float>]) -> GenericResult<Option<Float>> {
    let Some(&last) = tour.last() else {
        return Ok(Some(0.));
    };

    let mut cost = 0.;
    let mut from = last;

    for &to in tour {
        let distance = get_distance(distances, from, to)?;

        if distance == Float::INFINITY {
            return Ok(None);
        }

        cost += distance;
        from = to;
    }

    Ok(Some(cost))
}

fn get_distance(distances: &[Vec<Float>], from: usize, to: usize) -> GenericResult<Float> {
    distances
        .get(from)
        .and_then(|row| row.get(to))
        .copied()
        .ok_or_else(|| format!("edge ({from}, {to}) is out of distance matrix bounds").into())
}
