use crate::utils::InfoLogger;
use std::sync::{Arc, Mutex};

/// Creates a logger which stores messages in memory.
pub fn create_memory_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = Arc::new({
        let messages = messages.clone();
        move |msg: &str| messages.lock().unwrap().push(msg.to_string())
    });

    (logger, messages)
}

/// Creates a symmetric distance matrix for a cycle graph `0 -> 1 -> .. -> n-1 -> 0` where cycle
/// edges cost `1` and all other edges are missing.
pub fn create_cycle_distances(size: usize) -> Vec<Vec<f64>> {
    (0..size)
        .map(|from| {
            (0..size)
                .map(|to| {
                    let is_cycle_edge = (from + 1) % size == to || (to + 1) % size == from;
                    if from == to {
                        0.
                    } else if is_cycle_edge {
                        1.
                    } else {
                        f64::INFINITY
                    }
                })
                .collect()
        })
        .collect()
}
