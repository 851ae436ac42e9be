#[cfg(test)]
#[path = "../../tests/unit/checks/independent_set_test.rs"]
mod independent_set_test;

use crate::utils::GenericResult;
use rustc_hash::FxHashSet;

/// Returns true if `vertices` is an independent set in the graph given by its adjacency list,
/// i.e. no two distinct vertices of the set are adjacent.
///
/// Repeated vertices are allowed and are not treated as adjacent to themselves. Returns an error
/// when a vertex has no entry in the adjacency list, but only if the set has another distinct
/// vertex to test adjacency with.
pub fn is_independent_set(adjacency: &[Vec<usize>], vertices: &[usize]) -> GenericResult<bool> {
    let members = vertices.iter().copied().collect::<FxHashSet<_>>();

    if members.len() < 2 {
        return Ok(true);
    }

    for &u in vertices {
        let neighbours = adjacency
            .get(u)
            .ok_or_else(|| format!("vertex {u} is out of adjacency list bounds: {}", adjacency.len()))?;

        if neighbours.iter().any(|&v| v != u && members.contains(&v)) {
            return Ok(false);
        }
    }

    Ok(true)
}
