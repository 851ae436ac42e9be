use super::*;
use crate::helpers::create_memory_logger;
use std::time::Duration;

fn create_dataset(instances: usize, n_per_size: usize) -> SetCoverDataset {
    SetCoverDataset {
        universes: (0..instances).map(|idx| (0..=idx).collect()).collect(),
        subsets: (0..instances).map(|idx| (0..=idx).map(|item| vec![item]).collect()).collect(),
        answers: (1..=instances).collect(),
        n_per_size,
    }
}

#[test]
fn can_read_dataset_by_key() {
    let json = r#"{
        "q1": {
            "universes": [[0, 1], [0, 1, 2]],
            "subsets": [[[0], [1]], [[0, 1], [2]]],
            "answers": [2, 2],
            "nPerSize": 1
        },
        "q2": { "universes": [], "subsets": [], "nPerSize": 3 }
    }"#;

    let dataset = read_set_cover_dataset(BufReader::new(json.as_bytes()), DEFAULT_DATASET_KEY).unwrap();
    assert_eq!(dataset.sizes(), 2);
    assert_eq!(dataset.subsets[1], vec![vec![0, 1], vec![2]]);

    let dataset = read_set_cover_dataset(BufReader::new(json.as_bytes()), "q2").unwrap();
    assert_eq!(dataset.sizes(), 0);
    assert!(dataset.answers.is_empty());
}

#[test]
fn can_return_error_for_missing_key() {
    let json = r#"{ "q1": { "universes": [], "subsets": [], "nPerSize": 1 } }"#;

    let result = read_set_cover_dataset(BufReader::new(json.as_bytes()), "q3");

    assert_eq!(result.unwrap_err().to_string(), "cannot find dataset 'q3'");
}

#[test]
fn can_name_dataset_failing_validation() {
    let json = r#"{ "q1": { "universes": [], "subsets": [], "nPerSize": 0 } }"#;

    let result = read_set_cover_dataset(BufReader::new(json.as_bytes()), DEFAULT_DATASET_KEY);

    assert_eq!(result.unwrap_err().to_string(), "invalid dataset 'q1': instances per size must be positive");
}

#[test]
fn can_validate_dataset() {
    for (dataset, is_valid) in [
        (create_dataset(6, 3), true),
        (create_dataset(6, 0), false),
        (create_dataset(7, 3), false),
        (SetCoverDataset { answers: vec![], ..create_dataset(4, 2) }, true),
        (SetCoverDataset { answers: vec![1], ..create_dataset(4, 2) }, false),
        (SetCoverDataset { subsets: vec![], ..create_dataset(4, 2) }, false),
    ] {
        assert_eq!(dataset.validate().is_ok(), is_valid);
    }
}

#[test]
fn can_average_runtimes_per_size() {
    let dataset = create_dataset(4, 2);
    let (logger, messages) = create_memory_logger();
    let mut visited = Vec::new();

    let report = run_timing(
        &dataset,
        |universe, _| {
            visited.push(universe.len());
            std::thread::sleep(Duration::from_millis(2 * universe.len() as u64));
        },
        |universe, subsets| universe.len() + subsets.len(),
        &logger,
    )
    .unwrap();

    assert_eq!(visited, vec![1, 2, 3, 4]);
    assert_eq!(report.reduction_times.len(), 2);
    assert_eq!(report.naive_times.len(), 2);
    // bucket 0 averages 2ms and 4ms sleeps, bucket 1 averages 6ms and 8ms
    assert!(report.reduction_times[0] >= 0.003);
    assert!(report.reduction_times[1] >= 0.007);
    assert!(report.reduction_times[1] > report.naive_times[1]);

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0], "processed 2/4 instances");
    assert_eq!(messages[1], "processed 4/4 instances");
    assert!(messages[2].starts_with("Approximate speedup: "));
}

#[test]
fn can_calculate_speedup() {
    let report = TimingReport { reduction_times: vec![0.5, 0.5], naive_times: vec![1., 2.] };

    assert_eq!(report.speedup(), Some(3.));
    assert_eq!(TimingReport::default().speedup(), None);
}

#[test]
fn can_skip_speedup_for_empty_dataset() {
    let (logger, messages) = create_memory_logger();

    let report = run_timing(&create_dataset(0, 2), |_, _| (), |_, _| (), &logger).unwrap();

    assert!(report.reduction_times.is_empty());
    assert!(messages.lock().unwrap().is_empty());
}

#[test]
fn can_reject_invalid_dataset_on_timing() {
    let (logger, _) = create_memory_logger();

    let result = run_timing(&create_dataset(3, 2), |_, _| (), |_, _| (), &logger);

    assert!(result.is_err());
}
